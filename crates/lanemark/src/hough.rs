//! Progressive probabilistic Hough transform over a binary edge map.
//!
//! Edge pixels are drawn in random order. Each drawn pixel votes across all
//! angle bins of a (ρ, θ) accumulator; once some bin crosses the caller's
//! threshold, the corresponding line is traced out from the pixel in both
//! directions with fixed-point stepping, bridging gaps of up to `max_gap`
//! pixels. Traced pixels are removed from the working set, and the votes of
//! a confirmed segment are retracted so the remaining pixels compete for the
//! bins on equal footing. The grid is fixed at 1 px of ρ and 1° of θ.

use image::GrayImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of θ bins at the fixed 1° step.
const N_ANGLE: usize = 180;

/// Fixed-point fraction bits for the line walk.
const SHIFT: u32 = 16;

/// Seed for the random scan order over edge pixels. Fixing it makes the
/// extraction order, and with it the output, a pure function of the edge
/// map and the three tuning values.
const SCAN_SEED: u64 = 42;

/// A detected line segment with integer pixel endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    /// Euclidean length in pixels.
    pub fn length(&self) -> f64 {
        let dx = f64::from(self.x2 - self.x1);
        let dy = f64::from(self.y2 - self.y1);
        dx.hypot(dy)
    }
}

/// Extract line segments from a binary edge map.
///
/// `threshold` is the accumulator vote count a bin must reach before a line
/// is traced. `min_length` is measured along the dominant axis of the traced
/// span, and `max_gap` is the number of consecutive off pixels the trace
/// tolerates before it stops. All three are taken as given, out-of-range
/// values shrink or inflate the output rather than erroring.
pub fn line_segments(
    edges: &GrayImage,
    threshold: i32,
    min_length: i32,
    max_gap: i32,
) -> Vec<LineSegment> {
    let (width, height) = edges.dimensions();
    let w = width as i64;
    let h = height as i64;

    // Working set of edge pixels in raster order. The mask mirrors pool
    // membership and is what the line walks consume.
    let mut pool: Vec<(i32, i32)> = Vec::new();
    let mut mask = vec![false; (w * h) as usize];
    for (x, y, p) in edges.enumerate_pixels() {
        if p[0] != 0 {
            pool.push((x as i32, y as i32));
            mask[(i64::from(y) * w + i64::from(x)) as usize] = true;
        }
    }
    let n_points = pool.len();

    let trig: Vec<(f64, f64)> = (0..N_ANGLE)
        .map(|n| {
            let ang = n as f64 * std::f64::consts::PI / N_ANGLE as f64;
            (ang.cos(), ang.sin())
        })
        .collect();

    let n_rho = (2 * (w + h) + 1) as usize;
    let rho_offset = (n_rho as i32 - 1) / 2;
    let mut accum = vec![0i32; N_ANGLE * n_rho];

    let mut rng = StdRng::seed_from_u64(SCAN_SEED);
    let mut segments = Vec::new();

    while !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        let (px, py) = pool.swap_remove(idx);

        // Pixels consumed by an earlier trace no longer vote.
        if !mask[(py as i64 * w + px as i64) as usize] {
            continue;
        }

        // Vote the pixel's sinusoid and track the strongest bin. Ties keep
        // the smaller angle.
        let mut best = threshold.saturating_sub(1);
        let mut best_n = 0usize;
        for (n, &(c, s)) in trig.iter().enumerate() {
            let r = ((f64::from(px) * c + f64::from(py) * s).round() as i32 + rho_offset) as usize;
            let votes = accum[n * n_rho + r] + 1;
            accum[n * n_rho + r] = votes;
            if votes > best {
                best = votes;
                best_n = n;
            }
        }
        if best < threshold {
            continue;
        }

        // Direction along the candidate line, perpendicular to the bin
        // normal. The walk steps one pixel per iteration on the dominant
        // axis and carries the other coordinate in fixed point.
        let (cos_t, sin_t) = trig[best_n];
        let dir_x = -sin_t;
        let dir_y = cos_t;
        let x_major = dir_x.abs() > dir_y.abs();
        let (x0, y0, dx0, dy0) = if x_major {
            (
                i64::from(px),
                (i64::from(py) << SHIFT) + (1 << (SHIFT - 1)),
                if dir_x > 0.0 { 1 } else { -1 },
                (dir_y * (1i64 << SHIFT) as f64 / dir_x.abs()).round() as i64,
            )
        } else {
            (
                (i64::from(px) << SHIFT) + (1 << (SHIFT - 1)),
                i64::from(py),
                (dir_x * (1i64 << SHIFT) as f64 / dir_y.abs()).round() as i64,
                if dir_y > 0.0 { 1 } else { -1 },
            )
        };

        // First walk: extend from the seed pixel in both directions and
        // record the far ends, bridging runs of up to `max_gap` off pixels.
        let mut ends = [(px, py); 2];
        for (k, end) in ends.iter_mut().enumerate() {
            let (mut x, mut y) = (x0, y0);
            let (dx, dy) = if k == 0 { (dx0, dy0) } else { (-dx0, -dy0) };
            let mut gap = 0;
            loop {
                let (ix, iy) = if x_major { (x, y >> SHIFT) } else { (x >> SHIFT, y) };
                if ix < 0 || ix >= w || iy < 0 || iy >= h {
                    break;
                }
                if mask[(iy * w + ix) as usize] {
                    gap = 0;
                    *end = (ix as i32, iy as i32);
                } else {
                    gap += 1;
                    if gap > max_gap {
                        break;
                    }
                }
                x += dx;
                y += dy;
            }
        }

        let good = (ends[1].0 - ends[0].0).abs() >= min_length
            || (ends[1].1 - ends[0].1).abs() >= min_length;

        // Second walk: consume the traced pixels. A confirmed segment also
        // retracts its pixels' votes; a rejected trace only clears the mask,
        // so its votes stay behind. Bounds need no check here, the walk
        // stops at an end the first walk reached in bounds.
        for (k, end) in ends.iter().enumerate() {
            let (mut x, mut y) = (x0, y0);
            let (dx, dy) = if k == 0 { (dx0, dy0) } else { (-dx0, -dy0) };
            loop {
                let (ix, iy) = if x_major { (x, y >> SHIFT) } else { (x >> SHIFT, y) };
                let cell = (iy * w + ix) as usize;
                if mask[cell] {
                    if good {
                        for (n, &(c, s)) in trig.iter().enumerate() {
                            let r = ((ix as f64 * c + iy as f64 * s).round() as i32 + rho_offset)
                                as usize;
                            accum[n * n_rho + r] -= 1;
                        }
                    }
                    mask[cell] = false;
                }
                if (ix as i32, iy as i32) == *end {
                    break;
                }
                x += dx;
                y += dy;
            }
        }

        if good {
            segments.push(LineSegment {
                x1: ends[0].0,
                y1: ends[0].1,
                x2: ends[1].0,
                y2: ends[1].1,
            });
        }
    }

    tracing::debug!(
        n_points,
        n_segments = segments.len(),
        "hough scan complete"
    );
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::vertical_edge_run;
    use image::Luma;

    fn sorted_pair(a: i32, b: i32) -> (i32, i32) {
        (a.min(b), a.max(b))
    }

    #[test]
    fn blank_map_yields_no_segments() {
        let edges = GrayImage::new(64, 64);
        assert!(line_segments(&edges, 10, 10, 2).is_empty());
    }

    #[test]
    fn recovers_a_vertical_line() {
        let edges = vertical_edge_run(50, 60, 25, 5, 55);
        let found = line_segments(&edges, 40, 30, 2);
        assert_eq!(found.len(), 1);
        let seg = found[0];
        assert_eq!(seg.x1, 25);
        assert_eq!(seg.x2, 25);
        assert_eq!(sorted_pair(seg.y1, seg.y2), (5, 54));
    }

    #[test]
    fn recovers_a_horizontal_line() {
        let mut edges = GrayImage::new(60, 40);
        for x in 5..45 {
            edges.put_pixel(x, 20, Luma([255]));
        }
        let found = line_segments(&edges, 32, 20, 2);
        assert_eq!(found.len(), 1);
        let seg = found[0];
        assert_eq!(seg.y1, 20);
        assert_eq!(seg.y2, 20);
        assert_eq!(sorted_pair(seg.x1, seg.x2), (5, 44));
    }

    #[test]
    fn recovers_a_diagonal_line() {
        let mut edges = GrayImage::new(60, 60);
        for i in 10..40 {
            edges.put_pixel(i, i, Luma([255]));
        }
        let found = line_segments(&edges, 25, 20, 2);
        assert_eq!(found.len(), 1);
        let seg = found[0];
        let mut endpoints = [(seg.x1, seg.y1), (seg.x2, seg.y2)];
        endpoints.sort_unstable();
        assert_eq!(endpoints, [(10, 10), (39, 39)]);
    }

    #[test]
    fn bridges_gaps_up_to_max_gap() {
        // Two collinear runs split by a 3 px hole. A tolerance of 5 fuses
        // them into a single span.
        let mut edges = vertical_edge_run(60, 60, 30, 10, 30);
        for y in 33..50 {
            edges.put_pixel(30, y, Luma([255]));
        }
        let found = line_segments(&edges, 27, 10, 5);
        assert_eq!(found.len(), 1);
        let seg = found[0];
        assert_eq!(seg.x1, 30);
        assert_eq!(seg.x2, 30);
        assert_eq!(sorted_pair(seg.y1, seg.y2), (10, 49));
    }

    #[test]
    fn short_spans_are_consumed_but_not_reported() {
        let edges = vertical_edge_run(40, 50, 10, 5, 35);
        assert!(line_segments(&edges, 25, 50, 2).is_empty());
    }

    #[test]
    fn unreachable_threshold_yields_nothing() {
        let edges = vertical_edge_run(50, 60, 25, 5, 55);
        assert!(line_segments(&edges, 1000, 30, 2).is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let mut edges = vertical_edge_run(80, 80, 20, 10, 70);
        for x in 30..70 {
            edges.put_pixel(x, 40, Luma([255]));
        }
        let first = line_segments(&edges, 30, 20, 3);
        let second = line_segments(&edges, 30, 20, 3);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn length_is_euclidean() {
        let seg = LineSegment { x1: 1, y1: 2, x2: 4, y2: 6 };
        assert!((seg.length() - 5.0).abs() < 1e-12);
    }
}
