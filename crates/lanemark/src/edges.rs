//! Edge detection stage.

use image::GrayImage;

/// Binary edge map from the smoothed frame.
///
/// Thin wrapper over Canny with both hysteresis thresholds supplied by the
/// caller; nothing is auto-selected. An inverted pair is reordered first:
/// the smaller value links edges, the larger seeds them, which is the
/// underlying detector's convention for swapped inputs. Output pixels are
/// 255 on edges and 0 elsewhere.
pub fn edge_map(smoothed: &GrayImage, canny_low: i32, canny_high: i32) -> GrayImage {
    let low = canny_low.min(canny_high) as f32;
    let high = canny_low.max(canny_high) as f32;
    imageproc::edges::canny(smoothed, low, high)
}
