#![forbid(unsafe_code)]

//! Swipe thresholds.

/// Default width of the left-edge start zone, in CSS pixels.
pub const EDGE_WIDTH_PX: f64 = 30.0;

/// Default minimum rightward travel for a swipe to count, in CSS pixels.
pub const MIN_HORIZONTAL_PX: f64 = 100.0;

/// Default maximum vertical drift before a swipe is rejected as a scroll,
/// in CSS pixels.
pub const MAX_VERTICAL_PX: f64 = 50.0;

/// Thresholds for recognizing an edge swipe.
///
/// The defaults suit phone-sized viewports. Tablets usually want a wider
/// edge zone and a longer minimum travel; hosts tune this per device class
/// and hand the result to [`SwipeBackDetector::with_config`].
///
/// [`SwipeBackDetector::with_config`]: crate::SwipeBackDetector::with_config
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeBackConfig {
    /// Touches starting at `x >= edge_width` never begin a swipe.
    pub edge_width: f64,
    /// Rightward travel must strictly exceed this.
    pub min_horizontal: f64,
    /// Absolute vertical drift must stay strictly below this.
    pub max_vertical: f64,
}

impl SwipeBackConfig {
    /// Defaults: 30px edge zone, 100px travel, 50px drift ceiling.
    pub const fn new() -> Self {
        Self {
            edge_width: EDGE_WIDTH_PX,
            min_horizontal: MIN_HORIZONTAL_PX,
            max_vertical: MAX_VERTICAL_PX,
        }
    }

    /// Set the edge start zone width.
    #[must_use]
    pub const fn edge_width(mut self, px: f64) -> Self {
        self.edge_width = px;
        self
    }

    /// Set the minimum rightward travel.
    #[must_use]
    pub const fn min_horizontal(mut self, px: f64) -> Self {
        self.min_horizontal = px;
        self
    }

    /// Set the vertical drift ceiling.
    #[must_use]
    pub const fn max_vertical(mut self, px: f64) -> Self {
        self.max_vertical = px;
        self
    }
}

impl Default for SwipeBackConfig {
    fn default() -> Self {
        Self::new()
    }
}
