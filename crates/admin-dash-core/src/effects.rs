//! Cosmetic effects: ripple, tooltip placement, toast.
//!
//! None of these touch dashboard state. The browser runtime creates and
//! removes the transient elements; this module only does the arithmetic.

use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Gap between a tooltip and its anchor.
pub const TOOLTIP_GAP: f32 = 8.0;

/// A circular ripple overlay, positioned relative to its host element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ripple {
    /// Diameter (the larger of the host's width and height)
    pub diameter: f32,
    /// Left offset inside the host
    pub left: f32,
    /// Top offset inside the host
    pub top: f32,
}

impl Ripple {
    /// Center a ripple on `pointer` inside `host`.
    #[must_use]
    pub fn compute(host: Rect, pointer: Point) -> Self {
        let diameter = host.width.max(host.height);
        let radius = diameter / 2.0;
        let local = pointer - host.origin();
        Self {
            diameter,
            left: local.x - radius,
            top: local.y - radius,
        }
    }

    /// Inline style for the overlay element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width:{d}px;height:{d}px;left:{l}px;top:{t}px",
            d = self.diameter,
            l = self.left,
            t = self.top
        )
    }
}

/// Top-left corner for a tooltip of `tip` size over `anchor`.
///
/// Prefers above the anchor, horizontally centred; falls back to below when
/// there is no room above. Never placed left of the viewport edge.
#[must_use]
pub fn tooltip_position(anchor: Rect, tip: Size) -> Point {
    let x = (anchor.x + (anchor.width - tip.width) / 2.0).max(0.0);
    let above = anchor.y - tip.height - TOOLTIP_GAP;
    let y = if above >= 0.0 {
        above
    } else {
        anchor.bottom() + TOOLTIP_GAP
    };
    Point::new(x, y)
}

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Neutral notice
    #[default]
    Info,
    /// Completed action
    Success,
    /// Needs attention
    Warning,
    /// Failed action
    Error,
}

impl ToastKind {
    /// CSS modifier class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "toast-info",
            Self::Success => "toast-success",
            Self::Warning => "toast-warning",
            Self::Error => "toast-error",
        }
    }
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Text shown to the user
    pub message: String,
    /// Severity
    pub kind: ToastKind,
    /// Lifetime in milliseconds
    pub duration_ms: u32,
}

impl Toast {
    /// Create a toast.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms,
        }
    }
}
