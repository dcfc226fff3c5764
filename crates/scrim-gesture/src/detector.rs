#![forbid(unsafe_code)]

//! The two-sample swipe recognizer.
//!
//! # Invariants
//!
//! - A swipe is recognized only on `touch_end`, never mid-gesture.
//! - Every `touch_end` consumes the tracked start, recognized or not, so
//!   one touch can produce at most one swipe.
//! - The detector holds no history of past gestures.
//!
//! # Failure Modes
//!
//! - `touch_end` without a preceding `touch_start` returns `None` (the host
//!   dropped or filtered the start event).
//! - A second `touch_start` before `touch_end` overwrites the first; with
//!   multi-touch the host is expected to forward only the primary touch.

use crate::config::SwipeBackConfig;

/// One touch sample in CSS-pixel viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchPoint {
    /// Distance from the left viewport edge.
    pub x: f64,
    /// Distance from the top viewport edge.
    pub y: f64,
}

impl TouchPoint {
    /// A point from raw coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A recognized edge swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeBack {
    /// Rightward travel in pixels.
    pub travel: f64,
    /// Vertical drift in pixels, positive meaning downward.
    pub drift: f64,
}

/// Recognizes left-edge rightward swipes from start/end touch pairs.
///
/// Feed it `touch_start` and `touch_end` from the host's touch listeners;
/// a `Some` from [`touch_end`](SwipeBackDetector::touch_end) means the user
/// performed a back swipe. What to do about it is the caller's decision.
#[derive(Debug, Clone)]
pub struct SwipeBackDetector {
    config: SwipeBackConfig,
    start: Option<TouchPoint>,
}

impl SwipeBackDetector {
    /// Detector with default thresholds.
    pub fn new() -> Self {
        Self::with_config(SwipeBackConfig::new())
    }

    /// Detector with custom thresholds.
    pub fn with_config(config: SwipeBackConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    /// The active thresholds.
    #[inline]
    pub fn config(&self) -> &SwipeBackConfig {
        &self.config
    }

    /// Whether a touch is currently being tracked.
    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Record where a touch began.
    ///
    /// Always records, even outside the edge zone; the edge test happens at
    /// the end so the config can change mid-gesture without stale rejects.
    pub fn touch_start(&mut self, point: TouchPoint) {
        self.start = Some(point);
    }

    /// Record where the touch ended and judge the gesture.
    pub fn touch_end(&mut self, point: TouchPoint) -> Option<SwipeBack> {
        let start = self.start.take()?;
        let travel = point.x - start.x;
        let drift = point.y - start.y;

        let from_edge = start.x < self.config.edge_width;
        let far_enough = travel > self.config.min_horizontal;
        let straight_enough = drift.abs() < self.config.max_vertical;

        if from_edge && far_enough && straight_enough {
            Some(SwipeBack { travel, drift })
        } else {
            None
        }
    }

    /// Forget the tracked touch (`touchcancel`, visibility change).
    pub fn cancel(&mut self) {
        self.start = None;
    }
}

impl Default for SwipeBackDetector {
    fn default() -> Self {
        Self::new()
    }
}
