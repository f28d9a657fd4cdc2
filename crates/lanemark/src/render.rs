//! Overlay rendering on the original frame.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::hough::LineSegment;

/// Stroke color for detected segments.
pub const SEGMENT_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Stroke color for the region outline.
pub const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 0, 255]);

/// A 2 px stroke: the base line plus a twin shifted one pixel along the
/// minor axis. Pixels falling outside the canvas are dropped.
fn stroke_line(canvas: &mut RgbImage, start: (f32, f32), end: (f32, f32), color: Rgb<u8>) {
    draw_line_segment_mut(canvas, start, end, color);
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    if dx.abs() >= dy.abs() {
        draw_line_segment_mut(canvas, (start.0, start.1 + 1.0), (end.0, end.1 + 1.0), color);
    } else {
        draw_line_segment_mut(canvas, (start.0 + 1.0, start.1), (end.0 + 1.0, end.1), color);
    }
}

/// Draw the detected segments and the region outline over a copy of the
/// frame. Segments go down first, the outline is painted on top of them.
///
/// The outline traces the closed region polygon. Corners sitting on the far
/// frame edges lie one pixel outside the canvas, so the right and bottom
/// outline runs clip away and only the left and top runs are visible, the
/// same footprint the legacy overlay leaves.
pub fn annotate(frame: &RgbImage, segments: &[LineSegment], region: [(i32, i32); 4]) -> RgbImage {
    let mut canvas = frame.clone();
    for seg in segments {
        stroke_line(
            &mut canvas,
            (seg.x1 as f32, seg.y1 as f32),
            (seg.x2 as f32, seg.y2 as f32),
            SEGMENT_COLOR,
        );
    }
    for k in 0..4 {
        let (ax, ay) = region[k];
        let (bx, by) = region[(k + 1) % 4];
        stroke_line(
            &mut canvas,
            (ax as f32, ay as f32),
            (bx as f32, by as f32),
            OUTLINE_COLOR,
        );
    }
    canvas
}
