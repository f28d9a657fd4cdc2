//! Summary statistics over a detection's segments.

use crate::hough::LineSegment;

/// Aggregate numbers for a set of detected segments.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentStats {
    /// Number of detected segments.
    pub count: usize,
    /// Mean Euclidean segment length in pixels, absent when no segments
    /// were found. An undefined mean is not reported as zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_length_px: Option<f64>,
}

impl SegmentStats {
    pub fn from_segments(segments: &[LineSegment]) -> Self {
        let count = segments.len();
        let mean_length_px = if count == 0 {
            None
        } else {
            let total: f64 = segments.iter().map(LineSegment::length).sum();
            Some(total / count as f64)
        };
        Self { count, mean_length_px }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_length_over_two_segments() {
        let segments = [
            LineSegment { x1: 0, y1: 0, x2: 3, y2: 4 },
            LineSegment { x1: 0, y1: 0, x2: 0, y2: 10 },
        ];
        let stats = SegmentStats::from_segments(&segments);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean_length_px, Some(7.5));
    }

    #[test]
    fn empty_input_has_no_mean() {
        let stats = SegmentStats::from_segments(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean_length_px, None);
    }

    #[test]
    fn serialization_omits_an_absent_mean() {
        let empty = serde_json::to_string(&SegmentStats::from_segments(&[])).unwrap();
        assert!(!empty.contains("mean_length_px"));

        let one = [LineSegment { x1: 0, y1: 0, x2: 3, y2: 4 }];
        let filled = serde_json::to_string(&SegmentStats::from_segments(&one)).unwrap();
        assert!(filled.contains("\"mean_length_px\":5.0"));
    }
}
