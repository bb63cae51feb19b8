//! Lint checks for widget layouts.
//!
//! Catches the defects a committed layout should never have: overlapping
//! widgets, widgets outside the usable area, contradictory flags, reused ids,
//! and pixel rectangles that drifted from their grid projection.

use std::collections::HashSet;
use std::fmt;

use crate::collision;
use crate::grid::{LayoutContext, EPSILON};
use crate::widget::Widget;

/// A lint warning about a layout defect
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Overlap,
    Containment,
    Flags,
    DuplicateId,
    GridMismatch,
    Viewport,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Containment => write!(f, "containment"),
            LintCategory::Flags => write!(f, "flags"),
            LintCategory::DuplicateId => write!(f, "duplicate-id"),
            LintCategory::GridMismatch => write!(f, "grid-mismatch"),
            LintCategory::Viewport => write!(f, "viewport"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Run all lint checks on a widget list.
pub fn check(widgets: &[Widget], ctx: &LayoutContext) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_ids(widgets, &mut warnings);
    check_flags(widgets, &mut warnings);
    check_overlaps(widgets, &mut warnings);
    check_grid_projection(widgets, ctx, &mut warnings);
    if ctx.math.viewport().is_degenerate() {
        // every widget would be reported outside a zero-sized area
        let viewport = ctx.math.viewport();
        warnings.push(LintWarning {
            category: LintCategory::Viewport,
            message: format!(
                "viewport {}x{} has no usable area; containment not checked",
                viewport.width, viewport.height
            ),
        });
    } else {
        check_containment(widgets, ctx, &mut warnings);
    }
    warnings
}

// ── Identity and flags ────────────────────────────────────────────

fn check_ids(widgets: &[Widget], warnings: &mut Vec<LintWarning>) {
    let mut seen = HashSet::new();
    for widget in widgets {
        if !seen.insert(widget.id.as_str()) {
            warnings.push(LintWarning {
                category: LintCategory::DuplicateId,
                message: format!("id \"{}\" is used more than once", widget.id),
            });
        }
    }
}

fn check_flags(widgets: &[Widget], warnings: &mut Vec<LintWarning>) {
    for widget in widgets.iter().filter(|w| w.locked && w.pinned) {
        warnings.push(LintWarning {
            category: LintCategory::Flags,
            message: format!("\"{}\" is both locked and pinned", widget.id),
        });
    }
}

// ── Geometry ──────────────────────────────────────────────────────

fn check_overlaps(widgets: &[Widget], warnings: &mut Vec<LintWarning>) {
    for (i, a) in widgets.iter().enumerate() {
        for b in &widgets[i + 1..] {
            let (ra, rb) = (a.rect(), b.rect());
            if collision::overlaps(&ra, &rb) {
                warnings.push(LintWarning {
                    category: LintCategory::Overlap,
                    message: format!(
                        "\"{}\" and \"{}\" overlap by {:.0}px²",
                        a.id,
                        b.id,
                        ra.intersection_area(&rb)
                    ),
                });
            }
        }
    }
}

fn check_containment(widgets: &[Widget], ctx: &LayoutContext, warnings: &mut Vec<LintWarning>) {
    let bounds = ctx.bounds();
    for widget in widgets {
        let rect = widget.rect();
        if !bounds.contains(&rect) {
            warnings.push(LintWarning {
                category: LintCategory::Containment,
                message: format!(
                    "\"{}\" ({:.1}, {:.1}, {:.1}x{:.1}) extends outside the {} usable area",
                    widget.id, rect.x, rect.y, rect.width, rect.height, ctx.variant
                ),
            });
        }
    }
}

fn check_grid_projection(widgets: &[Widget], ctx: &LayoutContext, warnings: &mut Vec<LintWarning>) {
    for widget in widgets {
        let expected = ctx.to_pixels(widget.grid());
        let rect = widget.rect();
        let drift = (rect.x - expected.x)
            .abs()
            .max((rect.y - expected.y).abs())
            .max((rect.width - expected.width).abs())
            .max((rect.height - expected.height).abs());
        if drift > EPSILON {
            let projected = ctx.to_grid(rect);
            warnings.push(LintWarning {
                category: LintCategory::GridMismatch,
                message: format!(
                    "\"{}\" is stored at col {} row {} ({}x{}) but its rectangle projects to col {} row {} ({}x{})",
                    widget.id,
                    widget.col,
                    widget.row,
                    widget.w,
                    widget.h,
                    projected.col,
                    projected.row,
                    projected.w,
                    projected.h
                ),
            });
        }
    }
}
