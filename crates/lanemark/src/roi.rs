//! Region-of-interest masking.
//!
//! The region is the trapezoid with corners (0, H), (0, topPx), (W, topPx),
//! (W, H), where `topPx = ⌊H · roi_top / 100⌋`. With both upper corners
//! pinned to the frame sides the shape degenerates to a band across the full
//! width; the four-corner form is kept because the outline rendering works
//! from the same list.

use image::{GrayImage, Luma};

fn top_row_raw(height: u32, roi_top: i32) -> i64 {
    i64::from(height) * i64::from(roi_top) / 100
}

/// First frame row inside the region, clamped to `[0, height]`.
///
/// Raw `roi_top` values pass through the percent arithmetic unclamped, so a
/// negative percentage opens the region to the whole frame and one above 100
/// collapses it to nothing.
pub fn top_row(height: u32, roi_top: i32) -> u32 {
    top_row_raw(height, roi_top).clamp(0, i64::from(height)) as u32
}

/// The four region corners in outline order: bottom-left, top-left,
/// top-right, bottom-right.
///
/// Corners on the far frame edge (x = W or y = H) are returned as-is;
/// rasterization clips them. `roi_bottom` deliberately plays no part here:
/// the legacy tool derives a bottom row from it but pins the lower corners
/// to the frame bottom, so the knob has no geometric effect. Preserved
/// as-is; the value still travels with [`DetectionParameters`].
///
/// [`DetectionParameters`]: crate::DetectionParameters
pub fn region_polygon(width: u32, height: u32, roi_top: i32) -> [(i32, i32); 4] {
    let top = top_row_raw(height, roi_top).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    let w = width as i32;
    let h = height as i32;
    [(0, h), (0, top), (w, top), (w, h)]
}

/// Rasterize the region: 255 inside, 0 outside.
pub fn region_mask(width: u32, height: u32, roi_top: i32) -> GrayImage {
    let top = top_row(height, roi_top);
    let mut mask = GrayImage::new(width, height);
    for y in top..height {
        for x in 0..width {
            mask.put_pixel(x, y, Luma([255]));
        }
    }
    mask
}

/// Pixelwise AND of the edge map with the region mask.
pub fn mask_edges(edges: &GrayImage, mask: &GrayImage) -> GrayImage {
    debug_assert_eq!(edges.dimensions(), mask.dimensions());
    let mut out = edges.clone();
    for (e, m) in out.pixels_mut().zip(mask.pixels()) {
        e.0[0] &= m.0[0];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_row_floors_the_percentage() {
        assert_eq!(top_row(720, 38), 273); // ⌊720 * 38 / 100⌋
        assert_eq!(top_row(720, 50), 360);
        assert_eq!(top_row(99, 33), 32);
    }

    #[test]
    fn top_row_clamps_raw_extremes() {
        assert_eq!(top_row(720, -40), 0);
        assert_eq!(top_row(720, 140), 720);
    }

    #[test]
    fn mask_covers_rows_from_top_downwards() {
        let mask = region_mask(8, 10, 50);
        for y in 0..10 {
            let expected = if y >= 5 { 255 } else { 0 };
            for x in 0..8 {
                assert_eq!(mask.get_pixel(x, y)[0], expected, "({x},{y})");
            }
        }
    }

    #[test]
    fn full_percentage_collapses_the_mask() {
        let mask = region_mask(8, 10, 100);
        assert!(mask.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn zero_percentage_opens_the_whole_frame() {
        let mask = region_mask(8, 10, 0);
        assert!(mask.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn polygon_pins_bottom_corners_to_frame_bottom() {
        assert_eq!(
            region_polygon(100, 80, 25),
            [(0, 80), (0, 20), (100, 20), (100, 80)]
        );
    }

    #[test]
    fn masked_edges_survive_only_inside_the_region() {
        let edges = GrayImage::from_pixel(4, 6, Luma([255]));
        let mask = region_mask(4, 6, 50);
        let kept = mask_edges(&edges, &mask);
        for (_, y, p) in kept.enumerate_pixels() {
            assert_eq!(p[0], if y >= 3 { 255 } else { 0 });
        }
    }
}
