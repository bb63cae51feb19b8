//! Property tests for grid conversion, autosort and committed gestures.
//!
//! Every commit (drag end, resize end, autosort, add) must leave a layout
//! where no two widgets overlap and every widget lies inside the usable area.

use gridboard::collision::overlaps;
use gridboard::ops::add_widget;
use gridboard::{
    autosort, find_nearest_valid_position, GridConfig, GridMath, GridRect, InteractionController,
    LayoutContext, LayoutVariant, PixelRect, Point, PointerEvent, PointerTarget, ResizeHandle,
    Viewport, Widget, WidgetKind, WidgetRegistry,
};
use proptest::prelude::*;

fn math() -> GridMath {
    GridMath::new(GridConfig::default(), Viewport::new(1920.0, 1080.0))
}

fn centered() -> LayoutContext {
    LayoutContext::new(math(), LayoutVariant::Main)
}

fn widget_at(ctx: &LayoutContext, id: String, kind: WidgetKind, grid: GridRect) -> Widget {
    Widget::new(id, kind, ctx.to_pixels(grid), grid)
}

fn assert_committed(widgets: &[Widget], ctx: &LayoutContext) {
    let bounds = ctx.bounds();
    for (i, a) in widgets.iter().enumerate() {
        assert!(
            bounds.contains(&a.rect()),
            "{} at {:?} escapes {:?}",
            a.id,
            a.rect(),
            bounds
        );
        for b in &widgets[i + 1..] {
            assert!(
                !overlaps(&a.rect(), &b.rect()),
                "{} {:?} overlaps {} {:?}",
                a.id,
                a.rect(),
                b.id,
                b.rect()
            );
        }
    }
}

/// A valid starting layout: up to six blocks packed by autosort
fn packed_layout(sizes: &[(i32, i32)], ctx: &LayoutContext) -> Vec<Widget> {
    let widgets: Vec<Widget> = sizes
        .iter()
        .enumerate()
        .map(|(i, (w, h))| {
            widget_at(
                ctx,
                format!("block-{}", i + 1),
                WidgetKind::Block,
                GridRect::new(0, 0, *w, *h),
            )
        })
        .collect();
    autosort(&widgets, ctx)
}

/// Widgets from `(col, row, w, h, flag)`; flag 1 locks, 2 pins, as long as
/// the fixed widgets stay disjoint
fn fixed_or_movable(specs: &[(i32, i32, i32, i32, u8)], ctx: &LayoutContext) -> Vec<Widget> {
    let mut fixed: Vec<GridRect> = Vec::new();
    specs
        .iter()
        .enumerate()
        .map(|(i, (col, row, w, h, flag))| {
            let grid = GridRect::new(*col, *row, *w, *h);
            let widget = widget_at(ctx, format!("w{}", i), WidgetKind::Time, grid);
            if *flag > 0 && !fixed.iter().any(|f| f.intersects(&grid)) {
                fixed.push(grid);
                if *flag == 1 {
                    widget.with_locked(true)
                } else {
                    widget.with_pinned(true)
                }
            } else {
                widget
            }
        })
        .collect()
}

fn sizes() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((4..=6i32, 4..=6i32), 1..=6)
}

fn handle() -> impl Strategy<Value = ResizeHandle> {
    prop::sample::select(ResizeHandle::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn grid_projection_round_trips(
        x in -500.0..2500.0f64,
        y in -500.0..1500.0f64,
        width in 1.0..900.0f64,
        height in 1.0..900.0f64,
    ) {
        let math = math();
        let grid = math.pixels_to_grid(PixelRect::new(x, y, width, height));
        prop_assert_eq!(math.pixels_to_grid(math.grid_to_pixels(grid)), grid);
    }

    #[test]
    fn autosort_is_idempotent_and_overlap_free(
        specs in prop::collection::vec((0..30i32, 0..15i32, 2..=6i32, 2..=6i32, 0..3u8), 1..10),
    ) {
        let ctx = centered();
        let widgets = fixed_or_movable(&specs, &ctx);

        let once = autosort(&widgets, &ctx);
        let twice = autosort(&once, &ctx);
        prop_assert_eq!(&once, &twice);

        for (before, after) in widgets.iter().zip(&once) {
            prop_assert_eq!(&before.id, &after.id);
            if !before.is_movable() {
                prop_assert_eq!(before, after);
            }
        }
        for (i, a) in once.iter().enumerate() {
            for b in &once[i + 1..] {
                prop_assert!(!overlaps(&a.rect(), &b.rect()), "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn autosort_keeps_layouts_that_fit_inside_the_area(
        specs in prop::collection::vec((0..=28i32, 0..=13i32, 2..=6i32, 2..=6i32, 0..3u8), 1..=4),
    ) {
        // three obstacles of at most 6x6 touch at most 12 of the 15 disjoint
        // 6x6 tiles of a 34x19 grid, so every widget has a free slot
        let ctx = centered();
        let widgets = fixed_or_movable(&specs, &ctx);
        let sorted = autosort(&widgets, &ctx);
        let bounds = ctx.bounds();
        for widget in &sorted {
            prop_assert!(
                bounds.contains(&widget.rect()),
                "{} at {:?} escapes {:?}",
                widget.id,
                widget.grid(),
                bounds
            );
        }
    }

    #[test]
    fn nearest_valid_position_is_deterministic(
        sizes in sizes(),
        x in 0.0..1900.0f64,
        y in 0.0..1000.0f64,
    ) {
        let ctx = centered();
        let widgets = packed_layout(&sizes, &ctx);
        let rect = PixelRect::new(x, y, 156.0, 156.0);
        let bounds = ctx.bounds();
        let first = find_nearest_valid_position(rect, &widgets, None, &bounds, ctx.cell_size());
        let second = find_nearest_valid_position(rect, &widgets, None, &bounds, ctx.cell_size());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn drag_commit_keeps_layout_valid(
        sizes in sizes(),
        pick in any::<prop::sample::Index>(),
        dx in -800.0..800.0f64,
        dy in -500.0..500.0f64,
    ) {
        let ctx = centered();
        let widgets = packed_layout(&sizes, &ctx);
        let active = &widgets[pick.index(widgets.len())];
        let grab = Point::new(active.x + 20.0, active.y + 20.0);

        let mut controller = InteractionController::new(ctx.clone(), WidgetRegistry::builtin());
        controller.pointer_down(&PointerEvent::at(grab.x, grab.y), &PointerTarget::body(active.id.clone()), &widgets);
        let preview = controller.pointer_move(&PointerEvent::at(grab.x + dx, grab.y + dy), &widgets);
        let committed = controller.pointer_up(&preview);

        prop_assert!(controller.snapshot().is_idle());
        prop_assert_eq!(committed.len(), widgets.len());
        assert_committed(&committed, &ctx);
    }

    #[test]
    fn resize_commit_keeps_layout_valid(
        sizes in sizes(),
        pick in any::<prop::sample::Index>(),
        handle in handle(),
        dx in -400.0..400.0f64,
        dy in -400.0..400.0f64,
    ) {
        let ctx = centered();
        let widgets = packed_layout(&sizes, &ctx);
        let active = &widgets[pick.index(widgets.len())];
        let registry = WidgetRegistry::builtin();
        let min = registry.min_size(active.kind, &ctx.math);

        let mut controller = InteractionController::new(ctx.clone(), registry);
        controller.set_layout_mode(true);
        let start = PointerEvent::at(active.x, active.y);
        controller.pointer_down(&start, &PointerTarget::handle(active.id.clone(), handle), &widgets);
        let preview = controller.pointer_move(&PointerEvent::at(active.x + dx, active.y + dy), &widgets);
        let committed = controller.pointer_up(&preview);

        assert_committed(&committed, &ctx);
        let resized = committed.iter().find(|w| w.id == active.id).unwrap();
        prop_assert!(resized.width + 1e-6 >= min.width);
        prop_assert!(resized.height + 1e-6 >= min.height);
    }

    #[test]
    fn added_widgets_never_overlap(
        clicks in prop::collection::vec((-100.0..2000.0f64, -100.0..1100.0f64), 1..12),
    ) {
        let ctx = centered();
        let registry = WidgetRegistry::builtin();
        let mut widgets = Vec::new();
        for (x, y) in clicks {
            if let Ok(next) = add_widget(&widgets, WidgetKind::Block, Point::new(x, y), &ctx, &registry) {
                widgets = next;
            }
        }
        assert_committed(&widgets, &ctx);
    }
}
