//! Configuration for the grid engine
//!
//! All values default to the dashboard's pixel-parity constants. A config can
//! be loaded from a TOML file where every key is optional:
//!
//! ```toml
//! cell_size = 45.0
//! padding = 12.0
//!
//! [desktop]
//! cols = 34
//! rows = 19
//!
//! [interaction]
//! drag_threshold = 3.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{LayoutVariant, Point};

/// Errors that can occur when loading a grid configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read grid config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse grid config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid grid config: {0}")]
    Invalid(String),
}

/// Number of grid cells in each direction for one layout variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub cols: i32,
    pub rows: i32,
}

impl GridDimensions {
    pub const fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }
}

/// Tuning for drag and resize gestures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Pointer travel (pixels) after which a press counts as a drag rather than a click
    pub drag_threshold: f64,

    /// Fraction of the target's area the dragged widget must cover to offer a swap
    pub swap_overlap_ratio: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 3.0,
            swap_overlap_ratio: 0.5,
        }
    }
}

/// Configuration options for grid geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Edge length of one grid cell in pixels
    pub cell_size: f64,

    /// Horizontal fine-alignment offset, as a fraction of the cell size
    pub offset_x_ratio: f64,

    /// Vertical fine-alignment offset, as a fraction of the cell size
    pub offset_y_ratio: f64,

    /// Gutter kept free on each side of a widget inside its cells
    pub padding: f64,

    /// Usable grid for desktop main and game detail views
    pub desktop: GridDimensions,

    /// Usable grid for mobile views (taller than the screen, scrolls)
    pub mobile: GridDimensions,

    /// Usable grid for CV pages (A4 aspect ratio)
    pub cv: GridDimensions,

    /// Viewports narrower than this are treated as mobile
    pub mobile_breakpoint: f64,

    /// Fallback position for widgets added outside the viewport with no neighbours
    pub default_origin: Point,

    pub interaction: InteractionConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 45.0,
            offset_x_ratio: 0.36,
            offset_y_ratio: 0.32,
            padding: 12.0,
            desktop: GridDimensions::new(34, 19),
            mobile: GridDimensions::new(8, 41),
            cv: GridDimensions::new(13, 19),
            mobile_breakpoint: 768.0,
            default_origin: Point::new(100.0, 100.0),
            interaction: InteractionConfig::default(),
        }
    }
}

impl GridConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: GridConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the geometry code cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.padding < 0.0 || self.padding * 2.0 >= self.cell_size {
            return Err(ConfigError::Invalid(format!(
                "padding must be in [0, cell_size / 2), got {}",
                self.padding
            )));
        }
        for (name, dims) in [
            ("desktop", self.desktop),
            ("mobile", self.mobile),
            ("cv", self.cv),
        ] {
            if dims.cols <= 0 || dims.rows <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{} grid must have at least one cell, got {}x{}",
                    name, dims.cols, dims.rows
                )));
            }
        }
        Ok(())
    }

    /// Horizontal fine-alignment offset in pixels
    pub fn offset_x(&self) -> f64 {
        self.cell_size * self.offset_x_ratio
    }

    /// Vertical fine-alignment offset in pixels
    pub fn offset_y(&self) -> f64 {
        self.cell_size * self.offset_y_ratio
    }

    /// Grid dimensions used by a layout variant
    pub fn dimensions(&self, variant: LayoutVariant) -> GridDimensions {
        match variant {
            LayoutVariant::Main | LayoutVariant::GameDetail => self.desktop,
            LayoutVariant::Mobile
            | LayoutVariant::GameDetailMobile
            | LayoutVariant::CvDetailMobile => self.mobile,
            LayoutVariant::Cv | LayoutVariant::CvDetail => self.cv,
        }
    }

    /// Set the cell size
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the widget padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the desktop grid dimensions
    pub fn with_desktop(mut self, cols: i32, rows: i32) -> Self {
        self.desktop = GridDimensions::new(cols, rows);
        self
    }

    /// Set the mobile grid dimensions
    pub fn with_mobile(mut self, cols: i32, rows: i32) -> Self {
        self.mobile = GridDimensions::new(cols, rows);
        self
    }

    /// Set the drag threshold
    pub fn with_drag_threshold(mut self, threshold: f64) -> Self {
        self.interaction.drag_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.cell_size, 45.0);
        assert_eq!(config.padding, 12.0);
        assert_eq!(config.desktop, GridDimensions::new(34, 19));
        assert_eq!(config.mobile, GridDimensions::new(8, 41));
        assert_eq!(config.cv, GridDimensions::new(13, 19));
        assert!((config.offset_x() - 16.2).abs() < 1e-9);
        assert!((config.offset_y() - 14.4).abs() < 1e-9);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GridConfig::new()
            .with_cell_size(50.0)
            .with_padding(5.0)
            .with_desktop(10, 10)
            .with_mobile(4, 20)
            .with_drag_threshold(6.0);

        assert_eq!(config.cell_size, 50.0);
        assert_eq!(config.padding, 5.0);
        assert_eq!(config.desktop, GridDimensions::new(10, 10));
        assert_eq!(config.dimensions(LayoutVariant::Mobile), GridDimensions::new(4, 20));
        assert_eq!(config.interaction.drag_threshold, 6.0);
    }

    #[test]
    fn test_variant_dimensions() {
        let config = GridConfig::default();
        assert_eq!(config.dimensions(LayoutVariant::Main), config.desktop);
        assert_eq!(config.dimensions(LayoutVariant::GameDetail), config.desktop);
        assert_eq!(config.dimensions(LayoutVariant::GameDetailMobile), config.mobile);
        assert_eq!(config.dimensions(LayoutVariant::CvDetail), config.cv);
        assert_eq!(config.dimensions(LayoutVariant::CvDetailMobile), config.mobile);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
cell_size = 40.0

[mobile]
cols = 6
rows = 30

[interaction]
drag_threshold = 8.0
"#;
        let config = GridConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.cell_size, 40.0);
        assert_eq!(config.padding, 12.0);
        assert_eq!(config.mobile, GridDimensions::new(6, 30));
        assert_eq!(config.interaction.drag_threshold, 8.0);
        assert_eq!(config.interaction.swap_overlap_ratio, 0.5);
    }

    #[test]
    fn test_invalid_cell_size_rejected() {
        let result = GridConfig::from_str("cell_size = 0.0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = GridConfig::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
