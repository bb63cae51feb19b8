//! Widgets as the engine sees them
//!
//! A widget is a rectangle with an identity, a kind and two flags. Content,
//! rendering and settings semantics belong to the host.

pub mod registry;

pub use registry::{WidgetRegistry, WidgetSpec};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::grid::{GridRect, PixelRect};

/// Opaque per-widget settings, never interpreted by the engine
pub type Settings = serde_json::Map<String, serde_json::Value>;

/// Closed set of widget kinds a dashboard can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    Block,
    Spotlight,
    Profile,
    About,
    Skills,
    Contact,
    Games,
    Visitors,
    Motd,
    Time,
    Github,
    #[serde(rename = "apikey")]
    ApiKey,
    SingleGame,
    ProfilePicture,
    BackButton,
    GameInfo,
    GameDescription,
    GameImage,
    GameDetails,
    GameDevelopmentInfo,
    Heartbeat,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 21] = [
        WidgetKind::Block,
        WidgetKind::Spotlight,
        WidgetKind::Profile,
        WidgetKind::About,
        WidgetKind::Skills,
        WidgetKind::Contact,
        WidgetKind::Games,
        WidgetKind::Visitors,
        WidgetKind::Motd,
        WidgetKind::Time,
        WidgetKind::Github,
        WidgetKind::ApiKey,
        WidgetKind::SingleGame,
        WidgetKind::ProfilePicture,
        WidgetKind::BackButton,
        WidgetKind::GameInfo,
        WidgetKind::GameDescription,
        WidgetKind::GameImage,
        WidgetKind::GameDetails,
        WidgetKind::GameDevelopmentInfo,
        WidgetKind::Heartbeat,
    ];

    /// Identifier used in layout files and as the default widget id
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Block => "block",
            WidgetKind::Spotlight => "spotlight",
            WidgetKind::Profile => "profile",
            WidgetKind::About => "about",
            WidgetKind::Skills => "skills",
            WidgetKind::Contact => "contact",
            WidgetKind::Games => "games",
            WidgetKind::Visitors => "visitors",
            WidgetKind::Motd => "motd",
            WidgetKind::Time => "time",
            WidgetKind::Github => "github",
            WidgetKind::ApiKey => "apikey",
            WidgetKind::SingleGame => "single-game",
            WidgetKind::ProfilePicture => "profile-picture",
            WidgetKind::BackButton => "back-button",
            WidgetKind::GameInfo => "game-info",
            WidgetKind::GameDescription => "game-description",
            WidgetKind::GameImage => "game-image",
            WidgetKind::GameDetails => "game-details",
            WidgetKind::GameDevelopmentInfo => "game-development-info",
            WidgetKind::Heartbeat => "heartbeat",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| LayoutError::unknown_kind(s))
    }
}

/// A placed widget
///
/// The pixel rectangle is canonical while a gesture is in progress; the grid
/// projection is canonical for persistence and is refreshed on every commit.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub id: String,
    pub kind: WidgetKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub col: i32,
    pub row: i32,
    pub w: i32,
    pub h: i32,
    pub locked: bool,
    pub pinned: bool,
    pub settings: Settings,
}

impl Widget {
    pub fn new(id: impl Into<String>, kind: WidgetKind, rect: PixelRect, grid: GridRect) -> Self {
        Self {
            id: id.into(),
            kind,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            col: grid.col,
            row: grid.row,
            w: grid.w,
            h: grid.h,
            locked: false,
            pinned: false,
            settings: Settings::new(),
        }
    }

    pub fn rect(&self) -> PixelRect {
        PixelRect::new(self.x, self.y, self.width, self.height)
    }

    pub fn grid(&self) -> GridRect {
        GridRect::new(self.col, self.row, self.w, self.h)
    }

    /// Move the pixel rectangle only (live gesture preview)
    pub fn set_rect(&mut self, rect: PixelRect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }

    /// Commit a new placement, keeping pixel and grid projections in step
    pub fn place(&mut self, rect: PixelRect, grid: GridRect) {
        self.set_rect(rect);
        self.col = grid.col;
        self.row = grid.row;
        self.w = grid.w;
        self.h = grid.h;
    }

    /// Neither locked nor pinned, so autosort may move it
    pub fn is_movable(&self) -> bool {
        !self.locked && !self.pinned
    }

    /// Lock or unlock; locking clears the pin
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        if locked {
            self.pinned = false;
        }
    }

    /// Pin or unpin; pinning clears the lock
    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
        if pinned {
            self.locked = false;
        }
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.set_locked(locked);
        self
    }

    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.set_pinned(pinned);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }
}
