//! Gesture scenarios against a viewport-centered grid

use gridboard::{
    GridConfig, GridMath, GridRect, InteractionController, LayoutContext, LayoutVariant,
    NoopReason, PointerEffect, PointerEvent, PointerTarget, ResizeHandle, Viewport, Widget,
    WidgetKind, WidgetRegistry,
};
use pretty_assertions::assert_eq;

fn ctx() -> LayoutContext {
    let math = GridMath::new(GridConfig::default(), Viewport::new(1920.0, 1080.0));
    LayoutContext::new(math, LayoutVariant::Main)
}

fn widget(id: &str, kind: WidgetKind, col: i32, row: i32, w: i32, h: i32) -> Widget {
    let grid = GridRect::new(col, row, w, h);
    Widget::new(id, kind, ctx().to_pixels(grid), grid)
}

fn find<'a>(widgets: &'a [Widget], id: &str) -> &'a Widget {
    widgets.iter().find(|w| w.id == id).unwrap()
}

fn grab(widget: &Widget) -> PointerEvent {
    PointerEvent::at(widget.x + 30.0, widget.y + 30.0)
}

fn cells(event: PointerEvent, dx: i32, dy: i32) -> PointerEvent {
    PointerEvent::at(
        event.position.x + f64::from(dx) * 45.0,
        event.position.y + f64::from(dy) * 45.0,
    )
}

#[test]
fn test_swap_exchanges_positions_exactly() {
    let widgets = vec![
        widget("block-1", WidgetKind::Block, 2, 2, 4, 4),
        widget("block-2", WidgetKind::Block, 10, 2, 4, 4),
        widget("time", WidgetKind::Time, 20, 0, 2, 2),
    ];
    let mut controller = InteractionController::new(ctx(), WidgetRegistry::builtin());

    let start = grab(&widgets[0]);
    controller.pointer_down(&start, &PointerTarget::body("block-1"), &widgets);
    let preview = controller.pointer_move(&cells(start, 7, 0), &widgets);
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.swap_target_id.as_deref(), Some("block-2"));
    assert_eq!(snapshot.collision_widget_id, None);
    assert!(snapshot.is_dragging);

    let committed = controller.pointer_up(&preview);
    assert_eq!(find(&committed, "block-1").rect(), widgets[1].rect());
    assert_eq!(find(&committed, "block-1").grid(), GridRect::new(10, 2, 4, 4));
    assert_eq!(find(&committed, "block-2").rect(), widgets[0].rect());
    assert_eq!(find(&committed, "block-2").grid(), GridRect::new(2, 2, 4, 4));
    assert_eq!(find(&committed, "time"), &widgets[2]);
    assert!(controller.snapshot().is_idle());
    assert!(controller.was_last_interaction_drag());
}

#[test]
fn test_small_overlap_is_a_collision_not_a_swap() {
    let widgets = vec![
        widget("block-1", WidgetKind::Block, 2, 2, 4, 4),
        widget("block-2", WidgetKind::Block, 10, 2, 4, 4),
    ];
    let mut controller = InteractionController::new(ctx(), WidgetRegistry::builtin());
    let start = grab(&widgets[0]);
    controller.pointer_down(&start, &PointerTarget::body("block-1"), &widgets);
    // a 21px sliver of the target is covered
    controller.pointer_move(&cells(start, 5, 0), &widgets);
    assert_eq!(controller.swap_target_id(), None);
    assert_eq!(controller.collision_widget_id(), Some("block-1"));
}

#[test]
fn test_different_sizes_do_not_swap() {
    let widgets = vec![
        widget("block-1", WidgetKind::Block, 2, 2, 4, 4),
        widget("spotlight", WidgetKind::Spotlight, 10, 2, 6, 4),
    ];
    let mut controller = InteractionController::new(ctx(), WidgetRegistry::builtin());
    let start = grab(&widgets[0]);
    controller.pointer_down(&start, &PointerTarget::body("block-1"), &widgets);
    let preview = controller.pointer_move(&cells(start, 9, 0), &widgets);
    assert_eq!(controller.swap_target_id(), None);
    assert_eq!(controller.collision_widget_id(), Some("block-1"));

    let committed = controller.pointer_up(&preview);
    let spotlight = find(&committed, "spotlight");
    assert_eq!(spotlight, &widgets[1]);
    assert!(!gridboard::overlaps(&find(&committed, "block-1").rect(), &spotlight.rect()));
}

#[test]
fn test_locked_widget_resize_handle_is_noop() {
    let widgets = vec![widget("block-1", WidgetKind::Block, 2, 2, 4, 4).with_locked(true)];
    let mut controller = InteractionController::new(ctx(), WidgetRegistry::builtin());
    controller.set_layout_mode(true);

    let before = controller.snapshot();
    let effect = controller.pointer_down(
        &grab(&widgets[0]),
        &PointerTarget::handle("block-1", ResizeHandle::SE),
        &widgets,
    );
    assert_eq!(effect, PointerEffect::Ignored(NoopReason::WidgetLocked));
    assert_eq!(controller.snapshot(), before);

    let after_move = controller.pointer_move(&PointerEvent::at(900.0, 700.0), &widgets);
    assert_eq!(after_move, widgets);
    assert_eq!(controller.pointer_up(&after_move), widgets);
}

#[test]
fn test_drag_is_clamped_to_usable_area_while_moving() {
    let widgets = vec![widget("block-1", WidgetKind::Block, 2, 2, 4, 4)];
    let mut controller = InteractionController::new(ctx(), WidgetRegistry::builtin());
    let start = grab(&widgets[0]);
    controller.pointer_down(&start, &PointerTarget::body("block-1"), &widgets);
    let preview = controller.pointer_move(&PointerEvent::at(-500.0, -500.0), &widgets);
    let bounds = ctx().bounds();
    let rect = find(&preview, "block-1").rect();
    assert_eq!((rect.x, rect.y), (bounds.min_x, bounds.min_y));

    let committed = controller.pointer_up(&preview);
    assert_eq!(find(&committed, "block-1").grid(), GridRect::new(0, 0, 4, 4));
}

#[test]
fn test_cancel_mid_resize_restores_original() {
    let widgets = vec![widget("block-1", WidgetKind::Block, 2, 2, 4, 4)];
    let mut controller = InteractionController::new(ctx(), WidgetRegistry::builtin());
    let start = grab(&widgets[0]);
    let effect = controller.pointer_down(
        &start.with_ctrl(true),
        &PointerTarget::handle("block-1", ResizeHandle::NW),
        &widgets,
    );
    assert!(matches!(effect, PointerEffect::ResizeStarted { .. }));
    assert_eq!(controller.snapshot().resize_handle, Some(ResizeHandle::NW));

    let preview = controller.pointer_move(&cells(start, -2, -1), &widgets);
    assert!(find(&preview, "block-1").width > widgets[0].width);
    let restored = controller.cancel(&preview);
    assert_eq!(restored, widgets);
    assert!(!controller.is_resizing());
}

#[test]
fn test_resize_below_minimum_is_held_at_minimum() {
    let widgets = vec![widget("spotlight", WidgetKind::Spotlight, 0, 0, 10, 6)];
    let mut controller = InteractionController::new(ctx(), WidgetRegistry::builtin());
    controller.set_layout_mode(true);
    let start = grab(&widgets[0]);
    controller.pointer_down(&start, &PointerTarget::handle("spotlight", ResizeHandle::SE), &widgets);
    let preview = controller.pointer_move(&cells(start, -20, -20), &widgets);
    let committed = controller.pointer_up(&preview);
    assert_eq!(find(&committed, "spotlight").grid(), GridRect::new(0, 0, 6, 4));
}

#[test]
fn test_widget_removed_mid_gesture_ends_session() {
    let widgets = vec![widget("block-1", WidgetKind::Block, 2, 2, 4, 4)];
    let mut controller = InteractionController::new(ctx(), WidgetRegistry::builtin());
    controller.pointer_down(&grab(&widgets[0]), &PointerTarget::body("block-1"), &widgets);
    let after = controller.pointer_move(&PointerEvent::at(800.0, 600.0), &[]);
    assert!(after.is_empty());
    assert!(controller.snapshot().is_idle());
}
