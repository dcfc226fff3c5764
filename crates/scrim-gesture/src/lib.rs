#![forbid(unsafe_code)]

//! Edge-swipe back-gesture detection.
//!
//! iOS Safari users dismiss things by swiping right from the left screen
//! edge. This crate recognizes that gesture from raw touch points, nothing
//! more: it does not decide whether a recognized swipe should close
//! anything (that is session policy, and depends on whether any modal is
//! open), and it never touches history itself.
//!
//! The detector is a two-sample recognizer, not a tracker: it keeps the
//! start point, judges on the end point, and ignores everything between.
//! That matches the browser reality of passive touch listeners, where
//! per-move work is the thing you are trying to avoid.

pub mod config;
pub mod detector;

pub use config::SwipeBackConfig;
pub use detector::{SwipeBack, SwipeBackDetector, TouchPoint};
