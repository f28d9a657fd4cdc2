//! Synthetic inputs shared by the unit tests.

use image::{GrayImage, Luma, Rgb, RgbImage};

/// Uniform mid-gray frame with no structure at all.
pub(crate) fn blank_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([90, 90, 90]))
}

/// Dark frame with one bright vertical stripe, giving strong vertical
/// boundaries at `stripe_x` and `stripe_x + stripe_w`.
pub(crate) fn stripe_frame(width: u32, height: u32, stripe_x: u32, stripe_w: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x >= stripe_x && x < stripe_x + stripe_w {
            Rgb([230, 230, 230])
        } else {
            Rgb([20, 20, 20])
        }
    })
}

/// Binary edge map with a single vertical run at `x` covering `y0..y1`.
pub(crate) fn vertical_edge_run(width: u32, height: u32, x: u32, y0: u32, y1: u32) -> GrayImage {
    let mut edges = GrayImage::new(width, height);
    for y in y0..y1 {
        edges.put_pixel(x, y, Luma([255]));
    }
    edges
}
