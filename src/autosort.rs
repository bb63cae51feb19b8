//! Greedy repacking of movable widgets
//!
//! Locked and pinned widgets are obstacles that never move. Everything else
//! is placed, in list order, at the first row-major cell where it fits.
//! A widget's placement depends only on the obstacles and the widgets before
//! it, so sorting a sorted layout changes nothing.

use tracing::{debug, warn};

use crate::collision;
use crate::grid::{GridRect, LayoutContext, PixelRect};
use crate::widget::Widget;

/// Repack every unlocked, unpinned widget around the fixed ones
///
/// The result keeps the input order. A widget that cannot fit inside the
/// usable rows is placed in the first free rows below them.
pub fn autosort(widgets: &[Widget], ctx: &LayoutContext) -> Vec<Widget> {
    let dims = ctx.dimensions();
    let mut placed: Vec<PixelRect> = widgets
        .iter()
        .filter(|w| !w.is_movable())
        .map(Widget::rect)
        .collect();

    let mut sorted = Vec::with_capacity(widgets.len());
    for widget in widgets {
        if !widget.is_movable() {
            sorted.push(widget.clone());
            continue;
        }

        let footprint = ctx.to_grid(widget.rect());
        let grid = first_fit(footprint.w, footprint.h, &placed, ctx);
        if grid.right() > dims.cols || grid.bottom() > dims.rows {
            warn!(
                id = %widget.id,
                col = grid.col,
                row = grid.row,
                "widget does not fit inside the usable area"
            );
        }

        let rect = ctx.to_pixels(grid);
        debug!(id = %widget.id, col = grid.col, row = grid.row, "autosort placed widget");
        placed.push(rect);

        let mut moved = widget.clone();
        moved.place(rect, grid);
        sorted.push(moved);
    }
    sorted
}

/// First row-major cell where a `w` x `h` block overlaps nothing in `placed`
fn first_fit(w: i32, h: i32, placed: &[PixelRect], ctx: &LayoutContext) -> GridRect {
    let max_col = (ctx.dimensions().cols - w).max(0);
    let last_row = first_row_below(placed, ctx);

    for row in 0..=last_row {
        for col in 0..=max_col {
            let grid = GridRect::new(col, row, w, h);
            let rect = ctx.to_pixels(grid);
            if !placed.iter().any(|other| collision::overlaps(&rect, other)) {
                return grid;
            }
        }
    }
    GridRect::new(0, last_row, w, h)
}

/// A row whose top edge lies at or below every placed rectangle
fn first_row_below(placed: &[PixelRect], ctx: &LayoutContext) -> i32 {
    let top = ctx.to_pixels(GridRect::new(0, 0, 1, 1)).y;
    let bottom = placed
        .iter()
        .map(PixelRect::bottom)
        .fold(top, f64::max);
    ((bottom - top) / ctx.cell_size()).ceil().max(0.0) as i32
}
