//! Output bundle of a detection pass.

use image::{GrayImage, RgbImage};

use crate::hough::LineSegment;
use crate::stats::SegmentStats;

/// Everything a detection pass produces for one frame.
///
/// An empty `lines` list is a legitimate outcome, not a failure: sparse
/// scenes or strict tuning values simply find nothing, and the annotated
/// frame then carries only the region outline.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    /// Input frame with segment strokes and the region outline painted in.
    pub annotated: RgbImage,
    /// Edge map as produced by the Canny stage, before region masking.
    /// Kept full frame so a host can show what the tuning values see.
    pub edge_map: GrayImage,
    /// Detected segments in extraction order.
    pub lines: Vec<LineSegment>,
    /// Processed frame size as `[width, height]`.
    pub image_size: [u32; 2],
}

impl DetectionResult {
    /// Aggregate numbers over the detected segments.
    pub fn stats(&self) -> SegmentStats {
        SegmentStats::from_segments(&self.lines)
    }

    /// Image-free digest of the outcome for reporting.
    pub fn summary(&self) -> DetectionSummary {
        DetectionSummary {
            image_size: self.image_size,
            lines: self.lines.clone(),
            stats: self.stats(),
        }
    }
}

/// Serializable digest of a [`DetectionResult`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DetectionSummary {
    pub image_size: [u32; 2],
    pub lines: Vec<LineSegment>,
    pub stats: SegmentStats,
}
