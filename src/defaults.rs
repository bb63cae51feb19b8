//! Stock layouts for fresh pages

use crate::grid::GridRect;
use crate::persistence::LayoutEntry;
use crate::widget::WidgetKind;

/// Homepage: pinned spotlight over a wide block, tall block on the right
pub fn homepage_layout(mobile: bool) -> Vec<LayoutEntry> {
    if mobile {
        return stacked_mobile_layout();
    }
    vec![
        LayoutEntry::new("spotlight", WidgetKind::Spotlight, GridRect::new(0, 0, 20, 5)).pinned(),
        LayoutEntry::new("block-1", WidgetKind::Block, GridRect::new(0, 5, 20, 7)),
        LayoutEntry::new("block-2", WidgetKind::Block, GridRect::new(20, 0, 14, 12)),
    ]
}

/// Blank template page, a slightly narrower variant of the homepage
pub fn template_page_layout(mobile: bool) -> Vec<LayoutEntry> {
    if mobile {
        return stacked_mobile_layout();
    }
    vec![
        LayoutEntry::new("spotlight", WidgetKind::Spotlight, GridRect::new(0, 0, 18, 5)).pinned(),
        LayoutEntry::new("block-1", WidgetKind::Block, GridRect::new(0, 5, 18, 8)),
        LayoutEntry::new("block-2", WidgetKind::Block, GridRect::new(18, 0, 16, 13)),
    ]
}

fn stacked_mobile_layout() -> Vec<LayoutEntry> {
    vec![
        LayoutEntry::new("spotlight", WidgetKind::Spotlight, GridRect::new(0, 0, 8, 4)).pinned(),
        LayoutEntry::new("block-1", WidgetKind::Block, GridRect::new(0, 4, 8, 8)),
        LayoutEntry::new("block-2", WidgetKind::Block, GridRect::new(0, 12, 8, 8)),
    ]
}
