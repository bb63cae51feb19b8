//! Gridboard - grid and layout engine for free-form widget dashboards
//!
//! This library provides the geometry behind a dashboard of draggable,
//! resizable widgets: pixel/grid conversion, viewport constraints, collision
//! avoidance, the drag/resize state machine, autosort and layout persistence.
//! Rendering stays with the host, which feeds pointer events in and draws the
//! widget rectangles that come back.
//!
//! # Example
//!
//! ```rust
//! use gridboard::{
//!     build_widgets_from_layout, homepage_layout, GridConfig, GridMath, InteractionController,
//!     LayoutContext, LayoutVariant, PointerEvent, PointerTarget, Viewport, WidgetRegistry,
//! };
//!
//! let math = GridMath::new(GridConfig::default(), Viewport::new(1920.0, 1080.0));
//! let ctx = LayoutContext::layout_space(math, LayoutVariant::Main);
//! let registry = WidgetRegistry::builtin();
//! let widgets = build_widgets_from_layout(&homepage_layout(false), &ctx, &registry);
//!
//! let mut controller = InteractionController::new(ctx, registry);
//! let target = PointerTarget::body("block-2");
//! let grab = PointerEvent::at(widgets[2].x + 10.0, widgets[2].y + 10.0);
//! controller.pointer_down(&grab, &target, &widgets);
//! assert!(controller.is_dragging());
//!
//! let widgets = controller.cancel(&widgets);
//! assert!(controller.snapshot().is_idle());
//! assert_eq!(widgets[2].col, 20);
//! ```

pub mod autosort;
pub mod collision;
pub mod config;
pub mod constraint;
pub mod defaults;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod lint;
pub mod ops;
pub mod persistence;
pub mod widget;

pub use autosort::autosort;
pub use collision::{find_nearest_valid_position, overlaps};
pub use config::{ConfigError, GridConfig, GridDimensions, InteractionConfig};
pub use constraint::{constrain_size_to_viewport, constrain_to_viewport};
pub use defaults::{homepage_layout, template_page_layout};
pub use error::LayoutError;
pub use grid::{
    CenterOffset, GridMath, GridRect, LayoutContext, LayoutVariant, PixelRect, Point, Size,
    UsableAreaBounds, Viewport,
};
pub use interaction::{
    InteractionController, InteractionSnapshot, NoopReason, PointerButton, PointerEffect,
    PointerEvent, PointerTarget, ResizeHandle,
};
pub use lint::{LintCategory, LintWarning};
pub use persistence::{
    build_widgets_from_layout, export_layout, format_layout_snippet, load_layout_file,
    parse_layout, LayoutEntry, LayoutFileError,
};
pub use widget::{Settings, Widget, WidgetKind, WidgetRegistry, WidgetSpec};
