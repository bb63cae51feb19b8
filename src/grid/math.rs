//! Conversions between pixel space and grid space
//!
//! Pixel rectangles at rest sit on grid lines: a widget occupying cells
//! `col..col + w` starts at `col * cell + offset_x` and is `w * cell - 2 * padding`
//! wide, which leaves a visible gutter between neighbours. Every function here
//! works in layout space, where column 0 starts at `offset_x`; the centered
//! variants take a [`CenterOffset`] and translate.

use crate::config::{GridConfig, GridDimensions};

use super::types::{CenterOffset, GridRect, LayoutVariant, PixelRect, UsableAreaBounds, Viewport};

/// Grid geometry for one viewport
#[derive(Debug, Clone, PartialEq)]
pub struct GridMath {
    config: GridConfig,
    viewport: Viewport,
}

impl GridMath {
    pub fn new(config: GridConfig, viewport: Viewport) -> Self {
        Self { config, viewport }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Same config, different viewport (window resize)
    pub fn with_viewport(&self, viewport: Viewport) -> Self {
        Self {
            config: self.config.clone(),
            viewport,
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.config.cell_size
    }

    pub fn dimensions(&self, variant: LayoutVariant) -> GridDimensions {
        self.config.dimensions(variant)
    }

    /// Round `value` to the nearest grid line, then add `offset`
    pub fn snap_to_grid(&self, value: f64, offset: f64) -> f64 {
        let cell = self.config.cell_size;
        (value / cell).round() * cell + offset
    }

    /// Number of whole cells a pixel size occupies, never less than one
    pub fn size_to_units(&self, size: f64) -> i32 {
        let footprint = size + self.config.padding * 2.0;
        ((footprint / self.config.cell_size).round() as i32).max(1)
    }

    /// Pixel size of a widget spanning `units` cells
    pub fn units_to_size(&self, units: i32) -> f64 {
        f64::from(units) * self.config.cell_size - self.config.padding * 2.0
    }

    /// Round a size to the nearest whole number of cells (no positional offset)
    pub fn snap_size_to_grid(&self, size: f64) -> f64 {
        self.units_to_size(self.size_to_units(size))
    }

    /// Project a pixel rectangle onto integer grid units
    pub fn pixels_to_grid(&self, rect: PixelRect) -> GridRect {
        let cell = self.config.cell_size;
        GridRect {
            col: ((rect.x - self.config.offset_x()) / cell).round() as i32,
            row: ((rect.y - self.config.offset_y()) / cell).round() as i32,
            w: self.size_to_units(rect.width),
            h: self.size_to_units(rect.height),
        }
    }

    /// Pixel rectangle of a grid rectangle
    pub fn grid_to_pixels(&self, grid: GridRect) -> PixelRect {
        let cell = self.config.cell_size;
        PixelRect {
            x: f64::from(grid.col) * cell + self.config.offset_x(),
            y: f64::from(grid.row) * cell + self.config.offset_y(),
            width: self.units_to_size(grid.w),
            height: self.units_to_size(grid.h),
        }
    }

    /// Offset that centers the variant's usable grid in the viewport
    ///
    /// Grids larger than the viewport (the scrolling mobile grid, for one)
    /// are anchored at the top/left edge rather than pushed off-screen.
    pub fn calculate_center_offset(&self, variant: LayoutVariant) -> CenterOffset {
        if self.viewport.is_degenerate() {
            return CenterOffset::ZERO;
        }
        let dims = self.dimensions(variant);
        let cell = self.config.cell_size;
        let grid_width = f64::from(dims.cols) * cell;
        let grid_height = f64::from(dims.rows) * cell;
        CenterOffset {
            x: ((self.viewport.width - grid_width) / 2.0).max(0.0).floor(),
            y: ((self.viewport.height - grid_height) / 2.0).max(0.0).floor(),
        }
    }

    /// Bounds widgets must stay inside for `variant`, translated by `center`
    ///
    /// The last cell's trailing gutter is excluded so a widget pushed against
    /// the right or bottom edge still starts on a grid line.
    pub fn raw_usable_area_bounds(
        &self,
        center: CenterOffset,
        variant: LayoutVariant,
    ) -> UsableAreaBounds {
        let min_x = center.x + self.config.offset_x();
        let min_y = center.y + self.config.offset_y();
        if self.viewport.is_degenerate() {
            return UsableAreaBounds::new(min_x, min_y, min_x, min_y);
        }
        let dims = self.dimensions(variant);
        UsableAreaBounds {
            min_x,
            min_y,
            max_x: min_x + self.units_to_size(dims.cols).max(0.0),
            max_y: min_y + self.units_to_size(dims.rows).max(0.0),
        }
    }

    /// Whether the viewport is below the configured mobile breakpoint
    pub fn is_mobile_viewport(&self) -> bool {
        self.viewport.width < self.config.mobile_breakpoint
    }
}
