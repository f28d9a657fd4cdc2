//! Tuning parameters and named presets.

/// The seven tuning knobs of the detection pipeline.
///
/// Values are raw integers in pixel or percent units and are handed to the
/// stages verbatim; the pipeline never clamps. Hosting surfaces that expose
/// sliders run [`DetectionParameters::clamped`] before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DetectionParameters {
    /// Lower Canny hysteresis threshold (gradient magnitude units).
    pub canny_low: i32,
    /// Upper Canny hysteresis threshold; gradients above it always seed edges.
    ///
    /// Expected to exceed `canny_low`; an inverted pair is reordered by the
    /// edge stage before use.
    pub canny_high: i32,
    /// Minimum accumulated votes for a Hough line candidate.
    pub hough_threshold: i32,
    /// Shortest accepted segment extent in pixels.
    pub hough_min_length: i32,
    /// Longest run of non-edge pixels a segment may bridge.
    pub hough_max_gap: i32,
    /// Top edge of the region of interest, percent of frame height.
    pub roi_top: i32,
    /// Bottom edge of the region of interest, percent of frame height.
    ///
    /// Carried and reported but not consulted by the mask, whose lower
    /// vertices are pinned to the frame bottom (see `roi`).
    pub roi_bottom: i32,
}

impl DetectionParameters {
    /// Documented range of [`canny_low`](Self::canny_low), inclusive.
    pub const CANNY_LOW_RANGE: (i32, i32) = (1, 200);
    /// Documented range of [`canny_high`](Self::canny_high), inclusive.
    pub const CANNY_HIGH_RANGE: (i32, i32) = (50, 500);
    /// Documented range of [`hough_threshold`](Self::hough_threshold), inclusive.
    pub const HOUGH_THRESHOLD_RANGE: (i32, i32) = (10, 200);
    /// Documented range of [`hough_min_length`](Self::hough_min_length), inclusive.
    pub const HOUGH_MIN_LENGTH_RANGE: (i32, i32) = (10, 300);
    /// Documented range of [`hough_max_gap`](Self::hough_max_gap), inclusive.
    pub const HOUGH_MAX_GAP_RANGE: (i32, i32) = (1, 50);
    /// Documented range of both region-of-interest fields, inclusive.
    pub const ROI_RANGE: (i32, i32) = (0, 100);

    /// Copy with every field clamped to its documented range.
    ///
    /// Clamping is a hosting-surface concern; the pipeline itself accepts the
    /// raw values. The expected orderings (`canny_low < canny_high`,
    /// `roi_top < roi_bottom`) are not enforced here, matching independent
    /// sliders.
    pub fn clamped(&self) -> Self {
        Self {
            canny_low: clamp_to(self.canny_low, Self::CANNY_LOW_RANGE),
            canny_high: clamp_to(self.canny_high, Self::CANNY_HIGH_RANGE),
            hough_threshold: clamp_to(self.hough_threshold, Self::HOUGH_THRESHOLD_RANGE),
            hough_min_length: clamp_to(self.hough_min_length, Self::HOUGH_MIN_LENGTH_RANGE),
            hough_max_gap: clamp_to(self.hough_max_gap, Self::HOUGH_MAX_GAP_RANGE),
            roi_top: clamp_to(self.roi_top, Self::ROI_RANGE),
            roi_bottom: clamp_to(self.roi_bottom, Self::ROI_RANGE),
        }
    }
}

impl Default for DetectionParameters {
    fn default() -> Self {
        Self {
            canny_low: 50,
            canny_high: 150,
            hough_threshold: 50,
            hough_min_length: 50,
            hough_max_gap: 10,
            roi_top: 50,
            roi_bottom: 100,
        }
    }
}

fn clamp_to(value: i32, (lo, hi): (i32, i32)) -> i32 {
    value.clamp(lo, hi)
}

/// Named parameter bundles for one-click tuning.
///
/// Applying a preset atomically replaces the five edge/line fields; the two
/// region-of-interest fields are left as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Preset {
    /// Few, long, high-confidence segments.
    Conservative,
    /// The pipeline defaults.
    Balanced,
    /// Many short segments, tolerant of weak edges.
    Aggressive,
}

impl Preset {
    /// All presets in display order.
    pub const ALL: [Preset; 3] = [Preset::Conservative, Preset::Balanced, Preset::Aggressive];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Conservative => "Conservative",
            Preset::Balanced => "Balanced",
            Preset::Aggressive => "Aggressive",
        }
    }

    /// The `(canny_low, canny_high, hough_threshold, hough_min_length,
    /// hough_max_gap)` bundle.
    pub fn bundle(self) -> (i32, i32, i32, i32, i32) {
        match self {
            Preset::Conservative => (30, 90, 80, 100, 5),
            Preset::Balanced => (50, 150, 50, 50, 10),
            Preset::Aggressive => (20, 60, 30, 30, 20),
        }
    }

    /// Replace the five edge/line fields of `params` in one step.
    pub fn apply_to(self, params: &mut DetectionParameters) {
        let (canny_low, canny_high, hough_threshold, hough_min_length, hough_max_gap) =
            self.bundle();
        params.canny_low = canny_low;
        params.canny_high = canny_high;
        params.hough_threshold = hough_threshold;
        params.hough_min_length = hough_min_length;
        params.hough_max_gap = hough_max_gap;
    }
}
