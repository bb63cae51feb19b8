//! Host-side widget list operations
//!
//! Each operation takes the current list and returns the next one. On error
//! the host keeps the list it already has.

use tracing::{debug, warn};

use crate::collision;
use crate::constraint::constrain_to_viewport;
use crate::error::LayoutError;
use crate::grid::{LayoutContext, PixelRect, Point};
use crate::widget::{Settings, Widget, WidgetKind, WidgetRegistry};

/// Add a widget of `kind` near `click`
///
/// `click` is in the same coordinate space as the widgets. A click that falls
/// outside the viewport once mapped to screen space (e.g. a menu opened from
/// the keyboard) targets the slot right of the rightmost widget, or the
/// configured default origin (relative to the grid origin) on an empty page.
/// The widget gets its kind's minimum size and the nearest free position to
/// the target. In a degenerate viewport the widget is anchored at the area
/// origin and only overlaps can reject it.
pub fn add_widget(
    widgets: &[Widget],
    kind: WidgetKind,
    click: Point,
    ctx: &LayoutContext,
    registry: &WidgetRegistry,
) -> Result<Vec<Widget>, LayoutError> {
    if !registry.contains(kind) {
        warn!(%kind, "widget kind not available on this page");
        return Err(LayoutError::unknown_kind(kind.as_str()));
    }
    if !registry.allows_multiple(kind) && widgets.iter().any(|w| w.kind == kind) {
        warn!(%kind, "widget already exists");
        return Err(LayoutError::DuplicateWidget { kind });
    }

    let id = registry.next_widget_id(kind, widgets);
    let min = registry.min_size(kind, &ctx.math);
    let target = ctx.snap_point(drop_target(widgets, click, ctx));
    let bounds = ctx.bounds();

    let rect = constrain_to_viewport(
        PixelRect::new(target.x, target.y, min.width, min.height),
        &bounds,
        true,
        min,
    );
    let placed = if bounds.is_empty() {
        (!collision::collides(&rect, widgets, None)).then_some(rect)
    } else {
        let position =
            collision::find_nearest_valid_position(rect, widgets, None, &bounds, ctx.cell_size());
        let moved = rect.with_position(position);
        collision::is_valid_position(&moved, widgets, None, &bounds).then_some(moved)
    };
    let Some(rect) = placed else {
        warn!(%id, "no free position for new widget");
        return Err(LayoutError::unplaceable(id));
    };

    let grid = ctx.to_grid(rect);
    debug!(%id, col = grid.col, row = grid.row, "widget added");
    let mut result = widgets.to_vec();
    result.push(Widget::new(id, kind, rect, grid));
    Ok(result)
}

fn drop_target(widgets: &[Widget], click: Point, ctx: &LayoutContext) -> Point {
    let screen_center = ctx.math.calculate_center_offset(ctx.variant);
    let on_screen = Point::new(
        click.x - ctx.center.x + screen_center.x,
        click.y - ctx.center.y + screen_center.y,
    );
    if ctx.math.viewport().contains(on_screen) {
        return click;
    }
    let rightmost = widgets
        .iter()
        .max_by(|a, b| a.rect().right().total_cmp(&b.rect().right()));
    match rightmost {
        Some(widget) => Point::new(widget.rect().right() + ctx.cell_size(), widget.y),
        None => {
            let origin = ctx.config().default_origin;
            Point::new(origin.x + ctx.center.x, origin.y + ctx.center.y)
        }
    }
}

pub fn remove_widget(widgets: &[Widget], id: &str) -> Result<Vec<Widget>, LayoutError> {
    if !widgets.iter().any(|w| w.id == id) {
        warn!(id, "remove: no such widget");
        return Err(LayoutError::invalid_reference(id));
    }
    Ok(widgets.iter().filter(|w| w.id != id).cloned().collect())
}

/// Flip the lock flag; locking clears the pin
pub fn toggle_lock(widgets: &[Widget], id: &str) -> Result<Vec<Widget>, LayoutError> {
    modify(widgets, id, |w| w.set_locked(!w.locked))
}

/// Flip the pin flag; pinning clears the lock
pub fn toggle_pin(widgets: &[Widget], id: &str) -> Result<Vec<Widget>, LayoutError> {
    modify(widgets, id, |w| w.set_pinned(!w.pinned))
}

/// Shallow-merge `patch` into a widget's settings
pub fn update_settings(
    widgets: &[Widget],
    id: &str,
    patch: &Settings,
) -> Result<Vec<Widget>, LayoutError> {
    modify(widgets, id, |w| {
        for (key, value) in patch {
            w.settings.insert(key.clone(), value.clone());
        }
    })
}

fn modify(
    widgets: &[Widget],
    id: &str,
    f: impl FnOnce(&mut Widget),
) -> Result<Vec<Widget>, LayoutError> {
    let mut result = widgets.to_vec();
    match result.iter_mut().find(|w| w.id == id) {
        Some(widget) => {
            f(widget);
            Ok(result)
        }
        None => {
            warn!(id, "no such widget");
            Err(LayoutError::invalid_reference(id))
        }
    }
}
