//! Error types for layout operations
//!
//! None of these are fatal: every operation that reports one leaves the
//! caller's widget list untouched, so the host can keep its current snapshot
//! and surface the message.

use thiserror::Error;

use crate::widget::WidgetKind;

/// Reasons a layout operation was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Operation references a widget id not present in the list
    #[error("no widget with id '{id}'")]
    InvalidWidgetReference { id: String },

    /// No non-overlapping position exists inside the usable area
    #[error("no free position for widget '{id}'")]
    UnplaceableRectangle { id: String },

    /// A single-instance kind is already on the page
    #[error("widget '{kind}' already exists")]
    DuplicateWidget { kind: WidgetKind },

    /// Kind name not known, or not accepted by the page's registry
    #[error("unknown widget type '{name}'")]
    UnknownWidgetKind { name: String },
}

impl LayoutError {
    /// Create an invalid reference error
    pub fn invalid_reference(id: impl Into<String>) -> Self {
        Self::InvalidWidgetReference { id: id.into() }
    }

    /// Create an unplaceable rectangle error
    pub fn unplaceable(id: impl Into<String>) -> Self {
        Self::UnplaceableRectangle { id: id.into() }
    }

    /// Create an unknown kind error
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::UnknownWidgetKind { name: name.into() }
    }

    /// The widget id involved, if the error names one
    pub fn widget_id(&self) -> Option<&str> {
        match self {
            Self::InvalidWidgetReference { id } | Self::UnplaceableRectangle { id } => Some(id),
            _ => None,
        }
    }
}
