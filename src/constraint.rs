//! Keeping rectangles inside the usable area

use crate::grid::{PixelRect, Point, Size, UsableAreaBounds};

/// Clamp a rectangle into `bounds`
///
/// The position is clamped so the rectangle fits when it can. With
/// `allow_shrink`, a rectangle larger than the area is also reduced to fit,
/// never below `min_size`; without it the size is returned unchanged (only
/// negative sizes are zeroed). When the area is smaller than the resulting
/// size the rectangle is anchored at the area's origin.
pub fn constrain_to_viewport(
    rect: PixelRect,
    bounds: &UsableAreaBounds,
    allow_shrink: bool,
    min_size: Size,
) -> PixelRect {
    let size = Size::new(rect.width.max(0.0), rect.height.max(0.0));
    let position = constrain_position(rect.position(), size, bounds);
    if !allow_shrink {
        return PixelRect::new(position.x, position.y, size.width, size.height);
    }

    let size = constrain_size_to_viewport(position, size, min_size, bounds);
    let position = constrain_position(position, size, bounds);
    PixelRect::new(position.x, position.y, size.width, size.height)
}

/// Size that fits between `position` and the far edges of `bounds`
///
/// Never smaller than `min_size` (negative minimums count as zero), even if
/// that overflows the area.
pub fn constrain_size_to_viewport(
    position: Point,
    size: Size,
    min_size: Size,
    bounds: &UsableAreaBounds,
) -> Size {
    let available_width = (bounds.max_x - position.x).max(0.0);
    let available_height = (bounds.max_y - position.y).max(0.0);
    Size {
        width: size.width.min(available_width).max(min_size.width.max(0.0)),
        height: size.height.min(available_height).max(min_size.height.max(0.0)),
    }
}

/// Clamp the top-left corner so a rectangle of `size` stays inside `bounds`
pub fn constrain_position(position: Point, size: Size, bounds: &UsableAreaBounds) -> Point {
    Point {
        x: clamp_axis(position.x, bounds.min_x, bounds.max_x - size.width),
        y: clamp_axis(position.y, bounds.min_y, bounds.max_y - size.height),
    }
}

fn clamp_axis(value: f64, min: f64, max_start: f64) -> f64 {
    if max_start < min {
        min
    } else {
        value.clamp(min, max_start)
    }
}
