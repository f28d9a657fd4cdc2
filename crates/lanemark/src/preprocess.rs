//! Frame preprocessing: luminance collapse and fixed smoothing.

use image::{GrayImage, Luma, RgbImage};

/// 5-tap binomial kernel, the standard auto-derived Gaussian for this width.
const KERNEL: [u32; 5] = [1, 4, 6, 4, 1];

/// Collapse an RGB frame to single-channel luminance.
///
/// Uses the fixed Rec.601 weighting 0.299 R + 0.587 G + 0.114 B, rounded to
/// the nearest level.
pub fn grayscale(frame: &RgbImage) -> GrayImage {
    GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
        let [r, g, b] = frame.get_pixel(x, y).0;
        let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
        Luma([luma.round() as u8])
    })
}

/// Smooth with the fixed 5×5 separable kernel.
///
/// There are no tunables: the kernel weights are [1 4 6 4 1] / 16 per axis.
/// Borders replicate the edge pixel.
pub fn smooth(gray: &GrayImage) -> GrayImage {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return gray.clone();
    }
    let w = width as usize;

    // Horizontal pass; accumulators stay within 255 * 16 = 4080.
    let mut tmp = vec![0u16; w * height as usize];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0u32;
            for (k, &weight) in KERNEL.iter().enumerate() {
                let xi = (i64::from(x) + k as i64 - 2).clamp(0, i64::from(width) - 1) as u32;
                acc += weight * u32::from(gray.get_pixel(xi, y)[0]);
            }
            tmp[y as usize * w + x as usize] = acc as u16;
        }
    }

    // Vertical pass; 4080 * 16 = 65280, normalized back by >> 8 with rounding.
    let mut out = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0u32;
            for (k, &weight) in KERNEL.iter().enumerate() {
                let yi = (i64::from(y) + k as i64 - 2).clamp(0, i64::from(height) - 1) as usize;
                acc += weight * u32::from(tmp[yi * w + x as usize]);
            }
            out.put_pixel(x, y, Luma([((acc + 128) >> 8) as u8]));
        }
    }
    out
}
