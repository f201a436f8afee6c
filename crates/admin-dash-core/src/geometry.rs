//! Viewport-space primitives: `Point`, `Size`, `Rect`, and the `Viewport` class.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A position in CSS pixels, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the origin (top-left) point.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Viewport class derived from the window width.
///
/// There is exactly one breakpoint; widths at or above it are desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Viewport {
    /// Below the breakpoint: the sidebar is a drawer behind an overlay.
    #[default]
    Mobile,
    /// At or above the breakpoint: the sidebar is a rail that can expand.
    Desktop,
}

impl Viewport {
    /// Default breakpoint in CSS pixels.
    pub const DEFAULT_BREAKPOINT: f32 = 1024.0;

    /// Classify a viewport width.
    #[must_use]
    pub fn classify(width: f32, breakpoint: f32) -> Self {
        if width >= breakpoint {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    /// Whether this is the desktop class.
    #[must_use]
    pub const fn is_desktop(self) -> bool {
        matches!(self, Self::Desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_at_breakpoint_is_desktop() {
        assert_eq!(Viewport::classify(1024.0, 1024.0), Viewport::Desktop);
        assert_eq!(Viewport::classify(1023.9, 1024.0), Viewport::Mobile);
        assert_eq!(Viewport::classify(1920.0, 1024.0), Viewport::Desktop);
        assert_eq!(Viewport::classify(0.0, 1024.0), Viewport::Mobile);
    }

    #[test]
    fn test_viewport_default_is_mobile() {
        assert!(!Viewport::default().is_desktop());
    }

    #[test]
    fn test_point_sub() {
        let p = Point::new(30.0, 40.0) - Point::new(10.0, 15.0);
        assert_eq!(p, Point::new(20.0, 25.0));
    }

    #[test]
    fn test_rect_accessors() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.origin(), Point::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(100.0, 50.0));
        assert_eq!(r.bottom(), 70.0);
    }
}
