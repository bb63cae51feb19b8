//! Gesture state machine for dragging and resizing widgets

use tracing::{debug, warn};

use crate::collision;
use crate::constraint::constrain_to_viewport;
use crate::grid::{GridRect, LayoutContext, PixelRect, Point, Size, EPSILON};
use crate::widget::{Widget, WidgetKind, WidgetRegistry};

use super::{
    InteractionSnapshot, NoopReason, PointerButton, PointerEffect, PointerEvent, PointerTarget,
    ResizeHandle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    Drag,
    Resize(ResizeHandle),
}

/// The one gesture in progress
#[derive(Debug, Clone)]
struct Session {
    widget_id: String,
    gesture: Gesture,
    /// Pointer position at pointer-down
    origin: Point,
    /// Widget rectangle at pointer-down
    initial: PixelRect,
    /// Latest proposed rectangle
    proposal: PixelRect,
    /// Pointer travelled past the drag threshold
    moved: bool,
}

/// Drives drag and resize gestures over a host-owned widget list
///
/// Every call takes the host's current list and returns the list the host
/// should render next; the controller itself only keeps the session.
#[derive(Debug, Clone)]
pub struct InteractionController {
    ctx: LayoutContext,
    registry: WidgetRegistry,
    layout_mode: bool,
    session: Option<Session>,
    collision_widget_id: Option<String>,
    swap_target_id: Option<String>,
    was_last_interaction_drag: bool,
}

impl InteractionController {
    pub fn new(ctx: LayoutContext, registry: WidgetRegistry) -> Self {
        Self {
            ctx,
            registry,
            layout_mode: false,
            session: None,
            collision_widget_id: None,
            swap_target_id: None,
            was_last_interaction_drag: false,
        }
    }

    pub fn context(&self) -> &LayoutContext {
        &self.ctx
    }

    /// Replace the geometry after a viewport or variant change
    pub fn set_context(&mut self, ctx: LayoutContext) {
        self.ctx = ctx;
    }

    /// Layout mode (Ctrl held) enables resize handles and lets drags start on
    /// interactive children
    pub fn set_layout_mode(&mut self, enabled: bool) {
        self.layout_mode = enabled;
    }

    pub fn layout_mode(&self) -> bool {
        self.layout_mode
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture() == Some(Gesture::Drag)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture(), Some(Gesture::Resize(_)))
    }

    pub fn collision_widget_id(&self) -> Option<&str> {
        self.collision_widget_id.as_deref()
    }

    pub fn swap_target_id(&self) -> Option<&str> {
        self.swap_target_id.as_deref()
    }

    pub fn was_last_interaction_drag(&self) -> bool {
        self.was_last_interaction_drag
    }

    pub fn snapshot(&self) -> InteractionSnapshot {
        InteractionSnapshot {
            is_dragging: self.is_dragging(),
            is_resizing: self.is_resizing(),
            active_widget_id: self.session.as_ref().map(|s| s.widget_id.clone()),
            collision_widget_id: self.collision_widget_id.clone(),
            swap_target_id: self.swap_target_id.clone(),
            was_last_interaction_drag: self.was_last_interaction_drag,
            resize_handle: match self.gesture() {
                Some(Gesture::Resize(handle)) => Some(handle),
                _ => None,
            },
        }
    }

    /// Start a drag or resize session
    ///
    /// Rejected presses leave the controller untouched and report why.
    pub fn pointer_down(
        &mut self,
        event: &PointerEvent,
        target: &PointerTarget,
        widgets: &[Widget],
    ) -> PointerEffect {
        if self.session.is_some() {
            return ignore(NoopReason::SessionActive);
        }
        if event.button != PointerButton::Primary {
            return ignore(NoopReason::NonPrimaryButton);
        }
        let Some(widget) = find(widgets, target.widget_id()) else {
            warn!(id = target.widget_id(), "pointer down on unknown widget");
            return ignore(NoopReason::UnknownWidget);
        };
        if widget.locked {
            return ignore(NoopReason::WidgetLocked);
        }

        let layout_mode = self.layout_mode || event.ctrl;
        let (gesture, effect) = match target {
            PointerTarget::Body {
                interactive_child: true,
                ..
            } if !layout_mode => return ignore(NoopReason::InteractiveChild),
            PointerTarget::Body { .. } => (
                Gesture::Drag,
                PointerEffect::DragStarted {
                    widget_id: widget.id.clone(),
                },
            ),
            PointerTarget::Handle { .. } if !layout_mode => {
                return ignore(NoopReason::LayoutModeInactive)
            }
            PointerTarget::Handle { handle, .. } => (
                Gesture::Resize(*handle),
                PointerEffect::ResizeStarted {
                    widget_id: widget.id.clone(),
                    handle: *handle,
                },
            ),
        };

        self.was_last_interaction_drag = false;
        self.collision_widget_id = None;
        self.swap_target_id = None;
        self.session = Some(Session {
            widget_id: widget.id.clone(),
            gesture,
            origin: event.position,
            initial: widget.rect(),
            proposal: widget.rect(),
            moved: false,
        });
        debug!(id = %widget.id, ?gesture, "gesture started");
        effect
    }

    /// Preview the active gesture at the pointer's current position
    pub fn pointer_move(&mut self, event: &PointerEvent, widgets: &[Widget]) -> Vec<Widget> {
        let Some(mut session) = self.session.take() else {
            return widgets.to_vec();
        };
        let Some(active) = find(widgets, &session.widget_id) else {
            warn!(id = %session.widget_id, "active widget disappeared, ending gesture");
            self.clear_feedback();
            return widgets.to_vec();
        };

        let dx = event.position.x - session.origin.x;
        let dy = event.position.y - session.origin.y;
        let threshold = self.ctx.config().interaction.drag_threshold;
        if !session.moved && event.position.distance_to(session.origin) > threshold {
            session.moved = true;
            if session.gesture == Gesture::Drag {
                self.was_last_interaction_drag = true;
            }
        }

        session.proposal = match session.gesture {
            Gesture::Drag => self.drag_proposal(session.initial, active.kind, dx, dy),
            Gesture::Resize(handle) => {
                self.resize_proposal(session.initial, active.kind, handle, dx, dy)
            }
        };
        self.update_feedback(&session, active, widgets);

        let preview = with_rect(widgets, &session.widget_id, session.proposal);
        self.session = Some(session);
        preview
    }

    /// Commit the active gesture and return to idle
    pub fn pointer_up(&mut self, widgets: &[Widget]) -> Vec<Widget> {
        let Some(session) = self.session.take() else {
            return widgets.to_vec();
        };
        let swap_target = self.swap_target_id.take();
        self.collision_widget_id = None;

        let Some(active) = find(widgets, &session.widget_id) else {
            warn!(id = %session.widget_id, "active widget disappeared, nothing to commit");
            return widgets.to_vec();
        };

        let placement = match session.gesture {
            // a click, not a drag
            Gesture::Drag if !session.moved => {
                return with_rect(widgets, &session.widget_id, session.initial)
            }
            Gesture::Drag => {
                let swapped = swap_target
                    .as_deref()
                    .and_then(|target_id| self.swap(&session, target_id, widgets));
                if let Some(swapped) = swapped {
                    return swapped;
                }
                self.settle_drop(session.proposal, active, widgets)
            }
            Gesture::Resize(handle) => self.settle_resize(&session, handle, active, widgets),
        };

        let Some(rect) = placement else {
            debug!(id = %session.widget_id, "no valid placement, restoring");
            return with_rect(widgets, &session.widget_id, session.initial);
        };
        let grid = self.ctx.to_grid(rect);
        debug!(
            id = %session.widget_id,
            col = grid.col,
            row = grid.row,
            w = grid.w,
            h = grid.h,
            "gesture committed"
        );
        let mut result = widgets.to_vec();
        if let Some(widget) = result.iter_mut().find(|w| w.id == session.widget_id) {
            widget.place(rect, grid);
        }
        result
    }

    /// Abandon the active gesture, restoring the pre-gesture rectangle
    pub fn cancel(&mut self, widgets: &[Widget]) -> Vec<Widget> {
        self.clear_feedback();
        match self.session.take() {
            Some(session) => {
                debug!(id = %session.widget_id, "gesture cancelled");
                with_rect(widgets, &session.widget_id, session.initial)
            }
            None => widgets.to_vec(),
        }
    }

    fn gesture(&self) -> Option<Gesture> {
        self.session.as_ref().map(|s| s.gesture)
    }

    fn clear_feedback(&mut self) {
        self.collision_widget_id = None;
        self.swap_target_id = None;
    }

    fn min_size(&self, kind: WidgetKind) -> Size {
        self.registry.min_size(kind, &self.ctx.math)
    }

    fn drag_proposal(&self, initial: PixelRect, kind: WidgetKind, dx: f64, dy: f64) -> PixelRect {
        constrain_to_viewport(
            initial.translate(dx, dy),
            &self.ctx.bounds(),
            false,
            self.min_size(kind),
        )
    }

    fn resize_proposal(
        &self,
        initial: PixelRect,
        kind: WidgetKind,
        handle: ResizeHandle,
        dx: f64,
        dy: f64,
    ) -> PixelRect {
        let bounds = self.ctx.bounds();
        let min = self.min_size(kind);

        let mut left = initial.x;
        let mut right = initial.right();
        let mut top = initial.y;
        let mut bottom = initial.bottom();
        if handle.affects_left() {
            left = (left + dx).max(bounds.min_x);
        }
        if handle.affects_right() {
            right = (right + dx).min(bounds.max_x);
        }
        if handle.affects_top() {
            top = (top + dy).max(bounds.min_y);
        }
        if handle.affects_bottom() {
            bottom = (bottom + dy).min(bounds.max_y);
        }

        // minimum size wins over the pointer; the opposite edge stays put
        if right - left < min.width {
            if handle.affects_left() {
                left = right - min.width;
            } else {
                right = left + min.width;
            }
        }
        if bottom - top < min.height {
            if handle.affects_top() {
                top = bottom - min.height;
            } else {
                bottom = top + min.height;
            }
        }

        constrain_to_viewport(
            PixelRect::new(left, top, right - left, bottom - top),
            &bounds,
            false,
            min,
        )
    }

    fn update_feedback(&mut self, session: &Session, active: &Widget, widgets: &[Widget]) {
        self.clear_feedback();
        let proposal = session.proposal;
        let hits: Vec<&Widget> =
            collision::overlapping(&proposal, widgets, Some(&session.widget_id)).collect();

        if session.gesture == Gesture::Drag {
            if let [target] = hits.as_slice() {
                if self.is_swap_compatible(session.initial, &proposal, target) {
                    self.swap_target_id = Some(target.id.clone());
                    return;
                }
            }
        }
        if !hits.is_empty() {
            self.collision_widget_id = Some(active.id.clone());
        }
    }

    /// Equal grid footprint, movable, and covered enough by the proposal
    fn is_swap_compatible(&self, initial: PixelRect, proposal: &PixelRect, target: &Widget) -> bool {
        if !target.is_movable() {
            return false;
        }
        let target_rect = target.rect();
        if !self.ctx.to_grid(initial).same_size(&self.ctx.to_grid(target_rect)) {
            return false;
        }
        let ratio = self.ctx.config().interaction.swap_overlap_ratio;
        proposal.intersection_area(&target_rect) + EPSILON >= target_rect.area() * ratio
    }

    /// Exchange the dragged widget's slot with the target's
    fn swap(&self, session: &Session, target_id: &str, widgets: &[Widget]) -> Option<Vec<Widget>> {
        let active = find(widgets, &session.widget_id)?;
        let target = find(widgets, target_id)?;
        if !target.is_movable() {
            return None;
        }

        let active_grid = active.grid();
        let target_grid = target.grid();
        let target_rect = target.rect();
        let active_rect = session.initial.with_position(target_rect.position());
        let active_slot = GridRect::new(target_grid.col, target_grid.row, active_grid.w, active_grid.h);
        let target_rect = target_rect.with_position(session.initial.position());
        let target_slot = GridRect::new(active_grid.col, active_grid.row, target_grid.w, target_grid.h);

        debug!(id = %active.id, target = %target.id, "swapping widgets");
        let mut result = widgets.to_vec();
        for widget in &mut result {
            if widget.id == active.id {
                widget.place(active_rect, active_slot);
            } else if widget.id == target.id {
                widget.place(target_rect, target_slot);
            }
        }
        Some(result)
    }

    /// Snap, constrain and resolve a dropped rectangle
    fn settle_drop(&self, proposal: PixelRect, active: &Widget, widgets: &[Widget]) -> Option<PixelRect> {
        let bounds = self.ctx.bounds();
        let snapped = constrain_to_viewport(
            self.ctx.snap_rect(proposal),
            &bounds,
            true,
            self.min_size(active.kind),
        );
        self.relocate(snapped, active, widgets)
    }

    /// Snap and constrain a resized rectangle, then resolve overlaps by
    /// shrinking the dragged edges first and relocating second
    fn settle_resize(
        &self,
        session: &Session,
        handle: ResizeHandle,
        active: &Widget,
        widgets: &[Widget],
    ) -> Option<PixelRect> {
        let bounds = self.ctx.bounds();
        let min = self.min_size(active.kind);
        let proposal = session.proposal;

        let width = self.ctx.math.snap_size_to_grid(proposal.width).max(min.width);
        let height = self.ctx.math.snap_size_to_grid(proposal.height).max(min.height);
        let anchor = Point {
            x: if handle.affects_left() {
                proposal.right() - width
            } else {
                proposal.x
            },
            y: if handle.affects_top() {
                proposal.bottom() - height
            } else {
                proposal.y
            },
        };
        let position = self.ctx.snap_point(anchor);
        let sized = constrain_to_viewport(
            PixelRect::new(position.x, position.y, width, height),
            &bounds,
            true,
            min,
        );

        self.shrink_to_fit(sized, handle, min, active, widgets)
            .or_else(|| self.relocate(sized, active, widgets))
    }

    fn shrink_to_fit(
        &self,
        rect: PixelRect,
        handle: ResizeHandle,
        min: Size,
        active: &Widget,
        widgets: &[Widget],
    ) -> Option<PixelRect> {
        let bounds = self.ctx.bounds();
        let cell = self.ctx.cell_size();
        let exclude = Some(active.id.as_str());

        let mut rect = rect;
        loop {
            if collision::is_valid_position(&rect, widgets, exclude, &bounds) {
                return Some(rect);
            }
            let mut shrunk = rect;
            if handle.affects_width() && rect.width - cell >= min.width - EPSILON {
                shrunk.width -= cell;
                if handle.affects_left() {
                    shrunk.x += cell;
                }
            }
            if handle.affects_height() && rect.height - cell >= min.height - EPSILON {
                shrunk.height -= cell;
                if handle.affects_top() {
                    shrunk.y += cell;
                }
            }
            if shrunk == rect {
                return None;
            }
            rect = shrunk;
        }
    }

    fn relocate(&self, rect: PixelRect, active: &Widget, widgets: &[Widget]) -> Option<PixelRect> {
        let bounds = self.ctx.bounds();
        let exclude = Some(active.id.as_str());
        let position = collision::find_nearest_valid_position(
            rect,
            widgets,
            exclude,
            &bounds,
            self.ctx.cell_size(),
        );
        let placed = rect.with_position(position);
        collision::is_valid_position(&placed, widgets, exclude, &bounds).then_some(placed)
    }
}

fn ignore(reason: NoopReason) -> PointerEffect {
    debug!(?reason, "pointer down ignored");
    PointerEffect::Ignored(reason)
}

fn find<'a>(widgets: &'a [Widget], id: &str) -> Option<&'a Widget> {
    widgets.iter().find(|w| w.id == id)
}

/// Copy of `widgets` with one widget's pixel rectangle replaced
fn with_rect(widgets: &[Widget], id: &str, rect: PixelRect) -> Vec<Widget> {
    widgets
        .iter()
        .cloned()
        .map(|mut w| {
            if w.id == id {
                w.set_rect(rect);
            }
            w
        })
        .collect()
}
