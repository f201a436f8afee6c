//! Horizontal swipe recognition for the mobile drawer.
//!
//! Only the first finger is tracked. A swipe is reported once the horizontal
//! travel from the start point exceeds the threshold and dominates the
//! vertical travel; after that the touch is consumed until the next start.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Right-to-left travel
    Left,
    /// Left-to-right travel
    Right,
}

/// Configuration for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal travel that must be exceeded (in pixels).
    pub threshold: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self { threshold: 50.0 }
    }
}

/// Single-touch swipe recognizer.
#[derive(Debug, Clone, Default)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
    start: Option<Point>,
}

impl SwipeRecognizer {
    /// Create a new recognizer with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new recognizer with custom config.
    pub fn with_config(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Whether a touch is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Begin tracking at `position`, replacing any unfinished touch.
    pub fn on_touch_start(&mut self, position: Point) {
        self.start = Some(position);
    }

    /// Update with a new position, returning a swipe once recognized.
    pub fn on_touch_move(&mut self, position: Point) -> Option<SwipeDirection> {
        let start = self.start?;
        let travel = start - position;
        let (dx, dy) = (travel.x.abs(), travel.y.abs());

        if dx > dy && dx > self.config.threshold {
            self.start = None;
            // start - current > 0 means the finger moved left
            return Some(if travel.x > 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            });
        }
        None
    }

    /// Stop tracking.
    pub fn on_touch_end(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn swipe(from: Point, to: Point) -> Option<SwipeDirection> {
        let mut recognizer = SwipeRecognizer::new();
        recognizer.on_touch_start(from);
        recognizer.on_touch_move(to)
    }

    #[test]
    fn test_left_swipe_past_threshold() {
        let result = swipe(Point::new(200.0, 100.0), Point::new(140.0, 100.0));
        assert_eq!(result, Some(SwipeDirection::Left));
    }

    #[test]
    fn test_right_swipe_past_threshold() {
        let result = swipe(Point::new(10.0, 100.0), Point::new(70.0, 110.0));
        assert_eq!(result, Some(SwipeDirection::Right));
    }

    #[test]
    fn test_below_threshold_ignored() {
        assert_eq!(swipe(Point::new(200.0, 100.0), Point::new(160.0, 100.0)), None);
    }

    #[test]
    fn test_exactly_threshold_ignored() {
        assert_eq!(swipe(Point::new(200.0, 100.0), Point::new(150.0, 100.0)), None);
    }

    #[test]
    fn test_vertical_dominant_ignored() {
        assert_eq!(swipe(Point::new(200.0, 100.0), Point::new(130.0, 300.0)), None);
    }

    #[test]
    fn test_move_without_start_ignored() {
        let mut recognizer = SwipeRecognizer::new();
        assert_eq!(recognizer.on_touch_move(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_recognized_swipe_consumes_touch() {
        let mut recognizer = SwipeRecognizer::new();
        recognizer.on_touch_start(Point::new(200.0, 0.0));
        assert!(recognizer.on_touch_move(Point::new(100.0, 0.0)).is_some());
        assert!(!recognizer.is_tracking());
        assert_eq!(recognizer.on_touch_move(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_accumulates_over_moves() {
        let mut recognizer = SwipeRecognizer::new();
        recognizer.on_touch_start(Point::new(200.0, 0.0));
        assert_eq!(recognizer.on_touch_move(Point::new(180.0, 0.0)), None);
        assert_eq!(recognizer.on_touch_move(Point::new(160.0, 0.0)), None);
        assert_eq!(
            recognizer.on_touch_move(Point::new(140.0, 0.0)),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_touch_end_resets() {
        let mut recognizer = SwipeRecognizer::new();
        recognizer.on_touch_start(Point::new(200.0, 0.0));
        recognizer.on_touch_end();
        assert_eq!(recognizer.on_touch_move(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_custom_threshold() {
        let mut recognizer = SwipeRecognizer::with_config(SwipeConfig { threshold: 20.0 });
        recognizer.on_touch_start(Point::new(100.0, 0.0));
        assert_eq!(
            recognizer.on_touch_move(Point::new(75.0, 0.0)),
            Some(SwipeDirection::Left)
        );
    }

    proptest! {
        #[test]
        fn prop_sub_threshold_never_recognized(dx in -50.0f32..=50.0, dy in -200.0f32..200.0) {
            prop_assert_eq!(swipe(Point::new(500.0, 500.0), Point::new(500.0 + dx, 500.0 + dy)), None);
        }
    }
}
