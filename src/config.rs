//! Thresholds for the comparator's interpolation quality gate.

/// Heading change, in degrees, beyond which an interpolated box is unusable.
pub const DEFAULT_MAX_HEADING_DEVIATION_DEG: f64 = 40.0;
/// Centroid deviation, in degrees, beyond which an interpolated box is unusable.
pub const DEFAULT_MAX_CENTROID_DEVIATION_DEG: f64 = 40.0;
/// Longest interpolation run whose boxes are still compared.
pub const DEFAULT_MAX_INTERPOLATION_RUN: u32 = 2;

/// Controls which interpolated boxes the comparator refuses to score.
///
/// Boxes that were not interpolated are always scored.
///
/// ```
/// use trackgeo::config::CompareConfig;
///
/// let strict = CompareConfig::default().with_max_interpolation_run(1);
/// assert_eq!(strict.max_interpolation_run, 1);
/// assert_eq!(strict.max_heading_deviation_deg, 40.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareConfig {
    /// Max absolute heading change across an interpolated box.
    pub max_heading_deviation_deg: f64,
    /// Max absolute centroid heading deviation of an interpolated box.
    pub max_centroid_deviation_deg: f64,
    /// Max length of the interpolation run an interpolated box belongs to.
    pub max_interpolation_run: u32,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_heading_deviation_deg: DEFAULT_MAX_HEADING_DEVIATION_DEG,
            max_centroid_deviation_deg: DEFAULT_MAX_CENTROID_DEVIATION_DEG,
            max_interpolation_run: DEFAULT_MAX_INTERPOLATION_RUN,
        }
    }
}

impl CompareConfig {
    /// Sets the heading-change threshold.
    #[must_use]
    pub fn with_max_heading_deviation(mut self, degrees: f64) -> Self {
        self.max_heading_deviation_deg = degrees;
        self
    }

    /// Sets the centroid-deviation threshold.
    #[must_use]
    pub fn with_max_centroid_deviation(mut self, degrees: f64) -> Self {
        self.max_centroid_deviation_deg = degrees;
        self
    }

    /// Sets the longest interpolation run that is still compared.
    #[must_use]
    pub fn with_max_interpolation_run(mut self, boxes: u32) -> Self {
        self.max_interpolation_run = boxes;
        self
    }
}
