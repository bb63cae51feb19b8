//! Drag and resize gestures
//!
//! The host forwards pointer events together with its current widget list
//! and gets a new list back. [`InteractionController`] owns the single active
//! gesture session; views read an [`InteractionSnapshot`] each frame.
//!
//! ```text
//! Idle --pointer_down(body)-----> Dragging --pointer_up/cancel--> Idle
//! Idle --pointer_down(handle)---> Resizing --pointer_up/cancel--> Idle
//! ```

pub mod controller;
pub mod handle;

pub use controller::InteractionController;
pub use handle::ResizeHandle;

use serde::Serialize;

use crate::grid::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// A pointer event in the same coordinate space as the widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    /// Ctrl held; enables layout mode for this event
    pub ctrl: bool,
}

impl PointerEvent {
    /// Primary-button event without modifiers
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            button: PointerButton::Primary,
            ctrl: false,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }
}

/// What the pointer went down on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// The widget body; `interactive_child` is set when the press landed on a
    /// button, input or link inside the widget
    Body {
        widget_id: String,
        interactive_child: bool,
    },
    /// One of the widget's resize handles
    Handle {
        widget_id: String,
        handle: ResizeHandle,
    },
}

impl PointerTarget {
    pub fn body(widget_id: impl Into<String>) -> Self {
        Self::Body {
            widget_id: widget_id.into(),
            interactive_child: false,
        }
    }

    pub fn interactive_child(widget_id: impl Into<String>) -> Self {
        Self::Body {
            widget_id: widget_id.into(),
            interactive_child: true,
        }
    }

    pub fn handle(widget_id: impl Into<String>, handle: ResizeHandle) -> Self {
        Self::Handle {
            widget_id: widget_id.into(),
            handle,
        }
    }

    pub fn widget_id(&self) -> &str {
        match self {
            Self::Body { widget_id, .. } | Self::Handle { widget_id, .. } => widget_id,
        }
    }
}

/// Why a pointer-down did not start a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoopReason {
    UnknownWidget,
    WidgetLocked,
    InteractiveChild,
    NonPrimaryButton,
    SessionActive,
    LayoutModeInactive,
}

/// Outcome of a pointer-down
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEffect {
    DragStarted {
        widget_id: String,
    },
    ResizeStarted {
        widget_id: String,
        handle: ResizeHandle,
    },
    Ignored(NoopReason),
}

impl PointerEffect {
    pub fn is_ignored(&self) -> bool {
        matches!(self, PointerEffect::Ignored(_))
    }
}

/// Read-only view of the gesture state for one frame
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InteractionSnapshot {
    pub is_dragging: bool,
    pub is_resizing: bool,
    pub active_widget_id: Option<String>,
    /// The active widget while its proposal overlaps another widget
    pub collision_widget_id: Option<String>,
    /// The widget a release would swap with
    pub swap_target_id: Option<String>,
    /// The last gesture was a drag past the threshold; hosts use this to swallow the
    /// click that follows the release
    pub was_last_interaction_drag: bool,
    pub resize_handle: Option<ResizeHandle>,
}

impl InteractionSnapshot {
    pub fn is_idle(&self) -> bool {
        !self.is_dragging && !self.is_resizing
    }
}
