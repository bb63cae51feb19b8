//! Saved layouts: records, loading and the exported snippet format
//!
//! A saved layout is a JSON array of [`LayoutEntry`] records in grid units,
//! independent of viewport and centering. The exported form wraps the array
//! in a module constant so it can be pasted into the dashboard's defaults:
//!
//! ```text
//! export const DEFAULT_HOMEPAGE_LAYOUT = [
//!   { "id": "spotlight", "type": "spotlight", "col": 0, ... }
//! ];
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::constraint::constrain_to_viewport;
use crate::grid::{GridRect, LayoutContext, PixelRect};
use crate::widget::{Settings, Widget, WidgetKind, WidgetRegistry};

/// Errors that can occur when reading or writing saved layouts
#[derive(Error, Debug)]
pub enum LayoutFileError {
    #[error("Failed to read layout file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse layout JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("malformed layout snippet: {0}")]
    MalformedSnippet(String),
}

/// One widget in a saved layout
///
/// `type` stays a plain string so a layout naming a kind this build does not
/// know still loads; such entries are skipped when widgets are built. Older
/// layouts stored pixel rectangles instead of grid units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub settings: Settings,
}

impl LayoutEntry {
    /// Grid-unit entry with both flags cleared and no settings
    pub fn new(id: impl Into<String>, kind: WidgetKind, grid: GridRect) -> Self {
        Self {
            id: id.into(),
            kind: kind.as_str().to_string(),
            col: Some(grid.col),
            row: Some(grid.row),
            w: Some(grid.w),
            h: Some(grid.h),
            x: None,
            y: None,
            width: None,
            height: None,
            locked: false,
            pinned: false,
            settings: Settings::new(),
        }
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self.locked = false;
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self.pinned = false;
        self
    }

    /// Record for a placed widget, using its grid projection
    pub fn from_widget(widget: &Widget) -> Self {
        Self {
            locked: widget.locked,
            pinned: widget.pinned,
            settings: widget.settings.clone(),
            ..Self::new(widget.id.clone(), widget.kind, widget.grid())
        }
    }

    /// Grid rectangle stored in pixel fields, if all four are present
    fn legacy_pixels(&self) -> Option<PixelRect> {
        Some(PixelRect::new(self.x?, self.y?, self.width?, self.height?))
    }
}

/// Turn saved entries into placed widgets
///
/// Entries with unknown or unregistered kinds, or reusing an earlier id, are
/// skipped with a warning. Missing or non-positive sizes fall back to the
/// kind's minimum. On mobile variants positions are clamped into the usable
/// area. An entry saved with both flags set comes back locked.
pub fn build_widgets_from_layout(
    entries: &[LayoutEntry],
    ctx: &LayoutContext,
    registry: &WidgetRegistry,
) -> Vec<Widget> {
    let mut seen = HashSet::new();
    let mut widgets = Vec::with_capacity(entries.len());

    for entry in entries {
        let kind = match entry.kind.parse::<WidgetKind>() {
            Ok(kind) if registry.contains(kind) => kind,
            _ => {
                warn!(id = %entry.id, kind = %entry.kind, "skipping widget of unknown type");
                continue;
            }
        };
        if !seen.insert(entry.id.as_str()) {
            warn!(id = %entry.id, "skipping widget with duplicate id");
            continue;
        }

        let legacy = entry.legacy_pixels().map(|rect| ctx.math.pixels_to_grid(rect));
        let (min_w, min_h) = registry.min_units(kind);
        let positive = |value: Option<i32>, fallback: i32| value.filter(|v| *v > 0).unwrap_or(fallback);
        let grid = GridRect {
            col: entry.col.or(legacy.map(|g| g.col)).unwrap_or(0),
            row: entry.row.or(legacy.map(|g| g.row)).unwrap_or(0),
            w: positive(entry.w.or(legacy.map(|g| g.w)), min_w),
            h: positive(entry.h.or(legacy.map(|g| g.h)), min_h),
        };

        let mut rect = ctx.to_pixels(grid);
        let mut grid = grid;
        if ctx.variant.is_mobile() {
            rect = constrain_to_viewport(
                rect,
                &ctx.bounds(),
                false,
                registry.min_size(kind, &ctx.math),
            );
            grid = ctx.to_grid(rect);
        }

        let widget = Widget::new(entry.id.clone(), kind, rect, grid)
            .with_pinned(entry.pinned)
            .with_locked(entry.locked)
            .with_settings(entry.settings.clone());
        widgets.push(widget);
    }
    widgets
}

/// Saved form of a widget list
pub fn export_layout(widgets: &[Widget]) -> Vec<LayoutEntry> {
    widgets.iter().map(LayoutEntry::from_widget).collect()
}

/// `export const NAME = [...];` with two-space JSON indentation
pub fn format_layout_snippet(entries: &[LayoutEntry], name: &str) -> Result<String, LayoutFileError> {
    let json = serde_json::to_string_pretty(entries)?;
    Ok(format!("export const {} = {};", name, json))
}

/// Parse a bare JSON array or an exported snippet
pub fn parse_layout(text: &str) -> Result<Vec<LayoutEntry>, LayoutFileError> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let declaration = trimmed
        .strip_prefix("export ")
        .unwrap_or(trimmed)
        .trim_start();
    let Some(rest) = declaration
        .strip_prefix("const ")
        .or_else(|| declaration.strip_prefix("let "))
    else {
        return Err(LayoutFileError::MalformedSnippet(
            "expected a JSON array or `export const NAME = [...];`".to_string(),
        ));
    };
    let Some((name, value)) = rest.split_once('=') else {
        return Err(LayoutFileError::MalformedSnippet(format!(
            "missing '=' after '{}'",
            rest.split_whitespace().next().unwrap_or_default()
        )));
    };
    if name.trim().is_empty() {
        return Err(LayoutFileError::MalformedSnippet("missing constant name".to_string()));
    }
    let value = value.trim().trim_end_matches(';').trim_end();
    Ok(serde_json::from_str(value)?)
}

/// Read and parse a layout file
pub fn load_layout_file(path: &Path) -> Result<Vec<LayoutEntry>, LayoutFileError> {
    let content = std::fs::read_to_string(path)?;
    parse_layout(&content)
}
