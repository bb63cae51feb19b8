//! Grid geometry: pixel/grid conversion, snapping and usable-area bounds
//!
//! [`GridMath`] holds the pure conversions for one viewport. [`LayoutContext`]
//! binds it to an active layout variant and center offset, which is what the
//! constraint, collision, autosort and interaction code work against.

pub mod math;
pub mod types;

pub use math::GridMath;
pub use types::*;

use crate::config::{GridConfig, GridDimensions};

/// Grid geometry bound to a layout variant and a center offset
///
/// Widget pixel rectangles handed to the engine live in the same coordinate
/// space as `center`: pass [`CenterOffset::ZERO`] (see [`LayoutContext::layout_space`])
/// when widgets are stored relative to the grid origin, or the real offset when
/// they are stored in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContext {
    pub math: GridMath,
    pub variant: LayoutVariant,
    pub center: CenterOffset,
}

impl LayoutContext {
    /// Context centered in the viewport
    pub fn new(math: GridMath, variant: LayoutVariant) -> Self {
        let center = math.calculate_center_offset(variant);
        Self {
            math,
            variant,
            center,
        }
    }

    /// Context whose coordinates are relative to the grid origin
    pub fn layout_space(math: GridMath, variant: LayoutVariant) -> Self {
        Self {
            math,
            variant,
            center: CenterOffset::ZERO,
        }
    }

    pub fn with_center(mut self, center: CenterOffset) -> Self {
        self.center = center;
        self
    }

    pub fn config(&self) -> &GridConfig {
        self.math.config()
    }

    pub fn cell_size(&self) -> f64 {
        self.math.cell_size()
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.math.dimensions(self.variant)
    }

    pub fn bounds(&self) -> UsableAreaBounds {
        self.math.raw_usable_area_bounds(self.center, self.variant)
    }

    /// Grid projection of a pixel rectangle in this context's space
    pub fn to_grid(&self, rect: PixelRect) -> GridRect {
        self.math
            .pixels_to_grid(rect.translate(-self.center.x, -self.center.y))
    }

    /// Pixel rectangle of a grid rectangle in this context's space
    pub fn to_pixels(&self, grid: GridRect) -> PixelRect {
        self.math
            .grid_to_pixels(grid)
            .translate(self.center.x, self.center.y)
    }

    /// Snap a point to the nearest grid line intersection
    pub fn snap_point(&self, point: Point) -> Point {
        let config = self.config();
        Point {
            x: self.math.snap_to_grid(point.x - self.center.x, config.offset_x()) + self.center.x,
            y: self.math.snap_to_grid(point.y - self.center.y, config.offset_y()) + self.center.y,
        }
    }

    /// Snap position and size of a rectangle to the grid
    pub fn snap_rect(&self, rect: PixelRect) -> PixelRect {
        let position = self.snap_point(rect.position());
        PixelRect {
            x: position.x,
            y: position.y,
            width: self.math.snap_size_to_grid(rect.width),
            height: self.math.snap_size_to_grid(rect.height),
        }
    }
}
