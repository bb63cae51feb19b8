//! Overlap tests and nearest free placement
//!
//! Placement search walks square rings of grid cells around the requested
//! position. Candidates are ranked by squared displacement, then by row
//! (top first), then by column (left first), which makes the result a pure
//! function of its inputs.

use crate::grid::{PixelRect, Point, UsableAreaBounds};
use crate::widget::Widget;

/// Upper bound on search rings, whatever the bounds say
const MAX_SEARCH_RADIUS: i64 = 1024;

/// Strict axis-aligned intersection; touching edges do not overlap
pub fn overlaps(a: &PixelRect, b: &PixelRect) -> bool {
    a.intersects(b)
}

/// Widgets in `placed` that overlap `rect`, skipping `exclude_id`
pub fn overlapping<'a>(
    rect: &'a PixelRect,
    placed: &'a [Widget],
    exclude_id: Option<&'a str>,
) -> impl Iterator<Item = &'a Widget> + 'a {
    placed
        .iter()
        .filter(move |w| Some(w.id.as_str()) != exclude_id)
        .filter(move |w| overlaps(rect, &w.rect()))
}

/// Whether `rect` overlaps any widget in `placed` other than `exclude_id`
pub fn collides(rect: &PixelRect, placed: &[Widget], exclude_id: Option<&str>) -> bool {
    overlapping(rect, placed, exclude_id).next().is_some()
}

/// Inside `bounds` and free of overlaps
pub fn is_valid_position(
    rect: &PixelRect,
    placed: &[Widget],
    exclude_id: Option<&str>,
    bounds: &UsableAreaBounds,
) -> bool {
    bounds.contains(rect) && !collides(rect, placed, exclude_id)
}

/// Closest position to `rect` where it fits inside `bounds` without
/// overlapping anything in `placed` (ignoring `exclude_id`)
///
/// Candidates are `rect` shifted by whole cells. Returns the original
/// position when it is already valid or when no candidate is.
pub fn find_nearest_valid_position(
    rect: PixelRect,
    placed: &[Widget],
    exclude_id: Option<&str>,
    bounds: &UsableAreaBounds,
    cell: f64,
) -> Point {
    let origin = rect.position();
    if is_valid_position(&rect, placed, exclude_id, bounds) {
        return origin;
    }
    if !(cell > 0.0) || rect.width > bounds.width() || rect.height > bounds.height() {
        return origin;
    }

    let max_radius = search_radius(&rect, bounds, cell);
    // (squared distance in cells, dy, dx)
    let mut best: Option<(i64, i64, i64)> = None;

    for radius in 1..=max_radius {
        if let Some((d2, _, _)) = best {
            if radius * radius > d2 {
                break;
            }
        }
        for (dx, dy) in ring(radius) {
            let key = (dx * dx + dy * dy, dy, dx);
            if best.is_some_and(|b| key >= b) {
                continue;
            }
            let candidate = rect.translate(dx as f64 * cell, dy as f64 * cell);
            if is_valid_position(&candidate, placed, exclude_id, bounds) {
                best = Some(key);
            }
        }
    }

    match best {
        Some((_, dy, dx)) => Point::new(origin.x + dx as f64 * cell, origin.y + dy as f64 * cell),
        None => origin,
    }
}

/// Rings needed to reach every cell of `bounds` from `rect`
fn search_radius(rect: &PixelRect, bounds: &UsableAreaBounds, cell: f64) -> i64 {
    let reach_x = (rect.x - bounds.min_x).abs().max((bounds.max_x - rect.x).abs());
    let reach_y = (rect.y - bounds.min_y).abs().max((bounds.max_y - rect.y).abs());
    let cells = (reach_x.max(reach_y) / cell).ceil() as i64 + 1;
    cells.clamp(1, MAX_SEARCH_RADIUS)
}

/// Offsets on the square ring at Chebyshev distance `radius`
fn ring(radius: i64) -> impl Iterator<Item = (i64, i64)> {
    let edges = (-radius..=radius).flat_map(move |dx| [(dx, -radius), (dx, radius)]);
    let sides = (-radius + 1..radius).flat_map(move |dy| [(-radius, dy), (radius, dy)]);
    edges.chain(sides)
}
