mod common;

use common::road_frame;
use image::{DynamicImage, Rgb, RgbImage};
use lanemark::{detect, normalize_frame, top_row, DetectionParameters, LineSegment, SEGMENT_COLOR};

fn road_params() -> DetectionParameters {
    DetectionParameters {
        canny_low: 30,
        canny_high: 90,
        hough_threshold: 25,
        hough_min_length: 40,
        hough_max_gap: 5,
        roi_top: 50,
        roi_bottom: 100,
    }
}

/// A segment endpoint must sit on one of the two marking boundaries, give
/// or take the smoothing halo.
fn assert_on_marking(seg: &LineSegment, width: u32) {
    let x1 = width as i32 / 4;
    let x2 = width as i32 * 11 / 16;
    let sw = width as i32 / 40;
    let near =
        |x: i32| (x >= x1 - 8 && x <= x1 + sw + 8) || (x >= x2 - 8 && x <= x2 + sw + 8);
    assert!(
        near(seg.x1) && near(seg.x2),
        "segment off the markings: {seg:?}"
    );
}

#[test]
fn road_frame_markings_are_detected_inside_the_region() {
    let frame = road_frame(320, 240);
    let params = road_params();
    let result = detect(&frame, &params).expect("detection should run");

    assert!(!result.lines.is_empty(), "expected lane markings to be found");
    let top = top_row(240, params.roi_top) as i32;
    for seg in &result.lines {
        assert_on_marking(seg, 320);
        assert!(
            seg.y1 >= top && seg.y2 >= top,
            "segment escaped the region: {seg:?}"
        );
    }

    let stats = result.stats();
    assert_eq!(stats.count, result.lines.len());
    assert!(stats.mean_length_px.expect("segments present") >= 40.0);
}

#[test]
fn detection_is_reproducible() {
    let frame = road_frame(320, 240);
    let params = road_params();
    let first = detect(&frame, &params).expect("first pass");
    let second = detect(&frame, &params).expect("second pass");
    assert_eq!(first, second, "identical inputs must give identical output");
}

#[test]
fn oversized_frames_shrink_before_detection() {
    let big = road_frame(2560, 1440);
    let frame = normalize_frame(DynamicImage::ImageRgb8(big)).expect("normalization");
    assert_eq!(frame.dimensions(), (1280, 720));

    let result = detect(&frame, &road_params()).expect("detection should run");
    assert!(!result.lines.is_empty(), "markings lost in downscale");
    for seg in &result.lines {
        assert_on_marking(seg, 1280);
    }
}

#[test]
fn featureless_frame_finds_nothing() {
    let frame = RgbImage::from_pixel(50, 50, Rgb([90, 90, 90]));
    let result = detect(&frame, &DetectionParameters::default()).expect("detection should run");
    assert!(result.lines.is_empty());
    let stats = result.stats();
    assert_eq!(stats.count, 0);
    assert_eq!(stats.mean_length_px, None);
}

#[test]
fn collapsed_region_leaves_the_frame_untouched() {
    let frame = road_frame(320, 240);
    let mut params = road_params();
    params.roi_top = 100;
    let result = detect(&frame, &params).expect("detection should run");
    assert!(result.lines.is_empty());
    // With the region top at the frame bottom the whole outline clips away.
    assert_eq!(result.annotated, frame);
}

#[test]
fn annotated_frame_carries_segment_strokes() {
    let frame = road_frame(320, 240);
    let mut params = road_params();
    params.roi_top = 0;
    let result = detect(&frame, &params).expect("detection should run");
    assert!(!result.lines.is_empty());
    assert!(
        result.annotated.pixels().any(|p| *p == SEGMENT_COLOR),
        "no segment stroke visible in the overlay"
    );
}

#[test]
fn undecodable_bytes_are_reported() {
    let err = lanemark::frame_from_bytes(b"definitely not an image").unwrap_err();
    assert!(matches!(err, lanemark::LoadError::Decode(_)));
}
