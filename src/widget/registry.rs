//! Registry of widget kinds a page accepts
//!
//! Each kind is resolved once to a [`WidgetSpec`] carrying its minimum size,
//! display metadata and instancing policy.

use std::collections::BTreeMap;

use crate::grid::{GridMath, Size};

use super::{Widget, WidgetKind};

/// Static description of one widget kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSpec {
    pub kind: WidgetKind,
    /// Display name shown in menus
    pub name: &'static str,
    pub icon: &'static str,
    /// Minimum (width, height) in grid units
    pub min_units: (i32, i32),
    /// Whether several instances may coexist on one page
    pub allows_multiple: bool,
}

impl WidgetSpec {
    pub const fn new(kind: WidgetKind, name: &'static str, icon: &'static str) -> Self {
        Self {
            kind,
            name,
            icon,
            min_units: DEFAULT_MIN_UNITS,
            allows_multiple: false,
        }
    }

    pub const fn with_min_units(self, w: i32, h: i32) -> Self {
        Self {
            min_units: (w, h),
            ..self
        }
    }

    pub const fn multiple(self) -> Self {
        Self {
            allows_multiple: true,
            ..self
        }
    }
}

const DEFAULT_MIN_UNITS: (i32, i32) = (2, 2);

const BUILTIN_SPECS: [WidgetSpec; 21] = [
    WidgetSpec::new(WidgetKind::Block, "Block", "▦")
        .with_min_units(4, 4)
        .multiple(),
    WidgetSpec::new(WidgetKind::Spotlight, "Spotlight", "★").with_min_units(6, 4),
    WidgetSpec::new(WidgetKind::Profile, "Profile", "👤"),
    WidgetSpec::new(WidgetKind::About, "About", "ℹ️"),
    WidgetSpec::new(WidgetKind::Skills, "Skills", "🧠"),
    WidgetSpec::new(WidgetKind::Contact, "Contact", "✉️"),
    WidgetSpec::new(WidgetKind::Games, "Games", "🎮"),
    WidgetSpec::new(WidgetKind::Visitors, "Visitors", "👀"),
    WidgetSpec::new(WidgetKind::Motd, "Message of the Day", "💬"),
    WidgetSpec::new(WidgetKind::Time, "Time", "⏰"),
    WidgetSpec::new(WidgetKind::Github, "GitHub Activity", "🐙"),
    WidgetSpec::new(WidgetKind::ApiKey, "API Key", "🔑"),
    WidgetSpec::new(WidgetKind::SingleGame, "Single Game", "🕹️").multiple(),
    WidgetSpec::new(WidgetKind::ProfilePicture, "Profile Picture", "🖼️"),
    WidgetSpec::new(WidgetKind::BackButton, "Back Button", "↩️").multiple(),
    WidgetSpec::new(WidgetKind::GameInfo, "Game Info", "📌"),
    WidgetSpec::new(WidgetKind::GameDescription, "Game Description", "📝"),
    WidgetSpec::new(WidgetKind::GameImage, "Game Image", "🖼️"),
    WidgetSpec::new(WidgetKind::GameDetails, "Game Details", "📋"),
    WidgetSpec::new(WidgetKind::GameDevelopmentInfo, "Development Info", "🧩"),
    WidgetSpec::new(WidgetKind::Heartbeat, "Heartbeat", "❤️"),
];

/// Lookup table from widget kind to its spec
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetRegistry {
    specs: BTreeMap<WidgetKind, WidgetSpec>,
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WidgetRegistry {
    /// A registry with no kinds
    pub fn empty() -> Self {
        Self {
            specs: BTreeMap::new(),
        }
    }

    /// Every known kind with its stock metadata
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for spec in BUILTIN_SPECS {
            registry.register(spec);
        }
        registry
    }

    /// Only the listed kinds, with their stock metadata
    pub fn with_kinds(kinds: &[WidgetKind]) -> Self {
        let builtin = Self::builtin();
        let mut registry = Self::empty();
        for kind in kinds {
            if let Some(spec) = builtin.get(*kind) {
                registry.register(*spec);
            }
        }
        registry
    }

    /// Add or replace the spec for a kind
    pub fn register(&mut self, spec: WidgetSpec) -> &mut Self {
        self.specs.insert(spec.kind, spec);
        self
    }

    pub fn get(&self, kind: WidgetKind) -> Option<&WidgetSpec> {
        self.specs.get(&kind)
    }

    pub fn contains(&self, kind: WidgetKind) -> bool {
        self.specs.contains_key(&kind)
    }

    pub fn allows_multiple(&self, kind: WidgetKind) -> bool {
        self.get(kind).is_some_and(|spec| spec.allows_multiple)
    }

    /// Minimum size in grid units (2x2 for unregistered kinds)
    pub fn min_units(&self, kind: WidgetKind) -> (i32, i32) {
        self.get(kind)
            .map(|spec| spec.min_units)
            .unwrap_or(DEFAULT_MIN_UNITS)
    }

    /// Minimum pixel size, gutters included
    pub fn min_size(&self, kind: WidgetKind, math: &GridMath) -> Size {
        let (w, h) = self.min_units(kind);
        Size::new(math.units_to_size(w), math.units_to_size(h))
    }

    /// Display name, falling back to the title-cased kind identifier
    pub fn display_name(&self, kind: WidgetKind) -> String {
        match self.get(kind) {
            Some(spec) if !spec.name.is_empty() => spec.name.to_string(),
            _ => title_case(kind.as_str()),
        }
    }

    pub fn icon(&self, kind: WidgetKind) -> &'static str {
        self.get(kind).map(|spec| spec.icon).unwrap_or("??")
    }

    /// Id for a new widget: the kind itself, or `<kind>-<n>` for
    /// multi-instance kinds with `n` one above the highest existing suffix
    pub fn next_widget_id(&self, kind: WidgetKind, widgets: &[Widget]) -> String {
        if !self.allows_multiple(kind) {
            return kind.as_str().to_string();
        }
        let prefix = format!("{}-", kind.as_str());
        let highest = widgets
            .iter()
            .filter(|w| w.kind == kind)
            .filter_map(|w| w.id.strip_prefix(&prefix))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("{}{}", prefix, highest + 1)
    }
}

/// `game-development_info` -> `Game Development Info`
fn title_case(value: &str) -> String {
    value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
