//! Integration tests for saved layouts, host operations and lint

use std::path::PathBuf;

use gridboard::lint::{self, LintCategory};
use gridboard::ops::{add_widget, toggle_pin};
use gridboard::{
    autosort, build_widgets_from_layout, export_layout, format_layout_snippet, homepage_layout,
    load_layout_file, parse_layout, GridConfig, GridMath, GridRect, LayoutContext, LayoutEntry,
    LayoutError, LayoutFileError, LayoutVariant, Point, Viewport, Widget, WidgetKind,
    WidgetRegistry,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn desktop() -> LayoutContext {
    let math = GridMath::new(GridConfig::default(), Viewport::new(1920.0, 1080.0));
    LayoutContext::layout_space(math, LayoutVariant::Main)
}

fn load(name: &str, ctx: &LayoutContext) -> Vec<Widget> {
    let entries = load_layout_file(&fixture(name)).expect("fixture should parse");
    build_widgets_from_layout(&entries, ctx, &WidgetRegistry::builtin())
}

#[test]
fn test_snippet_fixture_matches_stock_homepage() {
    let entries = load_layout_file(&fixture("homepage.js")).unwrap();
    let mut expected = homepage_layout(false);
    expected[1]
        .settings
        .insert("title".to_string(), serde_json::json!("Latest work"));
    assert_eq!(entries, expected);
}

#[test]
fn test_export_reproduces_loaded_layout() {
    let ctx = desktop();
    let entries = load_layout_file(&fixture("homepage.js")).unwrap();
    let widgets = build_widgets_from_layout(&entries, &ctx, &WidgetRegistry::builtin());
    assert_eq!(export_layout(&widgets), entries);

    let snippet = format_layout_snippet(&export_layout(&widgets), "DEFAULT_HOMEPAGE_LAYOUT").unwrap();
    let on_disk = std::fs::read_to_string(fixture("homepage.js")).unwrap();
    assert_eq!(parse_layout(&snippet).unwrap(), parse_layout(&on_disk).unwrap());
}

#[test]
fn test_legacy_fixture_is_normalised() {
    let widgets = load("legacy.json", &desktop());
    let ids: Vec<&str> = widgets.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["time", "block-1"]);
    assert_eq!(widgets[0].grid(), GridRect::new(0, 0, 2, 2));
    // zero width falls back to the block minimum
    assert_eq!(widgets[1].grid(), GridRect::new(10, 3, 4, 4));
    assert!(widgets[1].locked);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_layout_file(&fixture("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, LayoutFileError::IoError(_)));
    assert!(err.to_string().starts_with("Failed to read layout file"));
}

#[test]
fn test_lint_flags_overlap_and_containment() {
    let ctx = desktop();
    let widgets = load("overlapping.json", &ctx);
    let categories: Vec<LintCategory> = lint::check(&widgets, &ctx).iter().map(|w| w.category).collect();
    assert_eq!(categories, vec![LintCategory::Overlap, LintCategory::Containment]);

    let sorted = autosort(&widgets, &ctx);
    assert!(lint::check(&sorted, &ctx).is_empty());
}

#[test]
fn test_autosort_packs_around_pinned_spotlight() {
    let ctx = desktop();
    let registry = WidgetRegistry::builtin();
    let layout = vec![
        LayoutEntry::new("block-1", WidgetKind::Block, GridRect::new(12, 10, 4, 4)),
        LayoutEntry::new("spotlight", WidgetKind::Spotlight, GridRect::new(0, 0, 8, 4)).pinned(),
        LayoutEntry::new("block-2", WidgetKind::Block, GridRect::new(3, 12, 4, 4)),
        LayoutEntry::new("time", WidgetKind::Time, GridRect::new(30, 17, 2, 2)),
    ];
    let widgets = build_widgets_from_layout(&layout, &ctx, &registry);
    let sorted = autosort(&widgets, &ctx);

    let grids: Vec<(&str, GridRect)> = sorted.iter().map(|w| (w.id.as_str(), w.grid())).collect();
    assert_eq!(
        grids,
        vec![
            ("block-1", GridRect::new(8, 0, 4, 4)),
            ("spotlight", GridRect::new(0, 0, 8, 4)),
            ("block-2", GridRect::new(12, 0, 4, 4)),
            ("time", GridRect::new(16, 0, 2, 2)),
        ]
    );
    assert_eq!(sorted[1], widgets[1]);
    assert_eq!(autosort(&sorted, &ctx), sorted);
}

#[test]
fn test_stock_homepage_is_already_sorted() {
    let ctx = desktop();
    let widgets = build_widgets_from_layout(&homepage_layout(false), &ctx, &WidgetRegistry::builtin());
    let unpinned = toggle_pin(&widgets, "spotlight").unwrap();
    assert!(unpinned[0].is_movable());
    let sorted = autosort(&unpinned, &ctx);
    assert_eq!(sorted, unpinned);
}

#[test]
fn test_add_off_screen_into_empty_layout_lands_on_safe_origin() {
    let math = GridMath::new(GridConfig::default(), Viewport::new(1920.0, 1080.0));
    let ctx = LayoutContext::new(math, LayoutVariant::Main);
    let widgets = add_widget(
        &[],
        WidgetKind::Block,
        Point::new(-50.0, -50.0),
        &ctx,
        &WidgetRegistry::builtin(),
    )
    .unwrap();
    let block = &widgets[0];
    assert_eq!(block.id, "block-1");
    assert_eq!(block.grid(), GridRect::new(2, 2, 4, 4));
    assert!((block.x - 301.2).abs() < 1e-9);
    assert!((block.y - 216.4).abs() < 1e-9);
    assert!(ctx.bounds().contains(&block.rect()));
}

#[test]
fn test_add_second_block_gets_next_suffix() {
    let ctx = desktop();
    let registry = WidgetRegistry::builtin();
    let widgets = build_widgets_from_layout(&homepage_layout(false), &ctx, &registry);
    let widgets = add_widget(&widgets, WidgetKind::Block, Point::new(900.0, 700.0), &ctx, &registry).unwrap();
    assert_eq!(widgets[3].id, "block-3");
    assert!(lint::check(&widgets, &ctx).is_empty());

    let err = add_widget(&widgets, WidgetKind::Spotlight, Point::new(900.0, 700.0), &ctx, &registry)
        .unwrap_err();
    assert_eq!(err, LayoutError::DuplicateWidget { kind: WidgetKind::Spotlight });
}

#[test]
fn test_mobile_build_keeps_widgets_in_eight_columns() {
    let math = GridMath::new(GridConfig::default(), Viewport::new(390.0, 844.0));
    let ctx = LayoutContext::layout_space(math, LayoutVariant::Mobile);
    let widgets = build_widgets_from_layout(&homepage_layout(false), &ctx, &WidgetRegistry::builtin());
    for widget in &widgets {
        assert!(widget.col + widget.w <= 8 || widget.w > 8, "{} at col {}", widget.id, widget.col);
        assert!(widget.col >= 0);
    }
}
