use image::{Rgb, RgbImage};

/// Dark road-like frame with two bright vertical lane markings.
///
/// The markings sit at 1/4 and 11/16 of the width and are width/40 wide, so
/// the geometry is preserved under uniform downscaling.
pub fn road_frame(width: u32, height: u32) -> RgbImage {
    let x1 = width / 4;
    let x2 = width * 11 / 16;
    let sw = width / 40;
    RgbImage::from_fn(width, height, |x, _| {
        let on_marking = (x >= x1 && x < x1 + sw) || (x >= x2 && x < x2 + sw);
        if on_marking {
            Rgb([235, 235, 235])
        } else {
            Rgb([30, 30, 30])
        }
    })
}
