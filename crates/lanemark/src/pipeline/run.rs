//! The detection pass itself.

use std::fmt;

use image::RgbImage;

use crate::params::DetectionParameters;
use crate::pipeline::DetectionResult;
use crate::{edges, hough, preprocess, render, roi};

/// A frame with zero area cannot be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidImageError {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for InvalidImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid frame dimensions {}x{}: zero-area frames cannot be processed",
            self.width, self.height
        )
    }
}

impl std::error::Error for InvalidImageError {}

/// Run the full detection pipeline over one frame.
///
/// Tuning values are applied exactly as given. Contradictory settings are
/// legitimate inputs that produce sparse or empty output rather than errors,
/// so a host can sweep parameters freely. The only rejected input is a frame
/// with zero area.
pub fn detect(
    frame: &RgbImage,
    params: &DetectionParameters,
) -> Result<DetectionResult, InvalidImageError> {
    let (width, height) = frame.dimensions();
    if width == 0 || height == 0 {
        return Err(InvalidImageError { width, height });
    }

    let gray = preprocess::grayscale(frame);
    let smoothed = preprocess::smooth(&gray);
    let edge_map = edges::edge_map(&smoothed, params.canny_low, params.canny_high);

    let mask = roi::region_mask(width, height, params.roi_top);
    let masked = roi::mask_edges(&edge_map, &mask);

    let lines = hough::line_segments(
        &masked,
        params.hough_threshold,
        params.hough_min_length,
        params.hough_max_gap,
    );

    let region = roi::region_polygon(width, height, params.roi_top);
    let annotated = render::annotate(frame, &lines, region);

    tracing::info!(width, height, n_lines = lines.len(), "detection pass complete");

    Ok(DetectionResult {
        annotated,
        edge_map,
        lines,
        image_size: [width, height],
    })
}
