//! Frame ingestion and normalization.
//!
//! Frames enter the pipeline from disk or from an encoded in-memory buffer.
//! Decoded images are promoted to 8-bit RGB (single-channel sources are
//! accepted and expanded) and, when they exceed [`MAX_FRAME_WIDTH`] ×
//! [`MAX_FRAME_HEIGHT`], downscaled once by a uniform factor so interactive
//! re-detection stays responsive. The downscale is deterministic: same
//! source bytes, same frame.

use std::fmt;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

/// Widest frame admitted without downscaling.
pub const MAX_FRAME_WIDTH: u32 = 1280;
/// Tallest frame admitted without downscaling.
pub const MAX_FRAME_HEIGHT: u32 = 720;

// ── Error type ──────────────────────────────────────────────────────────

/// Failure to produce a frame from an image source.
#[derive(Debug)]
pub enum LoadError {
    /// The source bytes are not a decodable image.
    Decode(image::ImageError),
    /// The source is empty: a zero-byte buffer or a zero-area image.
    EmptySource,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Decode(err) => write!(f, "image source could not be decoded: {err}"),
            LoadError::EmptySource => write!(f, "image source is empty"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Decode(err) => Some(err),
            LoadError::EmptySource => None,
        }
    }
}

// ── Loading ─────────────────────────────────────────────────────────────

/// Decode a frame from disk and normalize it for detection.
pub fn load_frame<P: AsRef<Path>>(path: P) -> Result<RgbImage, LoadError> {
    let decoded = image::open(path.as_ref()).map_err(LoadError::Decode)?;
    normalize_frame(decoded)
}

/// Decode a frame from an encoded in-memory buffer (PNG, JPEG, ...).
pub fn frame_from_bytes(bytes: &[u8]) -> Result<RgbImage, LoadError> {
    if bytes.is_empty() {
        return Err(LoadError::EmptySource);
    }
    let decoded = image::load_from_memory(bytes).map_err(LoadError::Decode)?;
    normalize_frame(decoded)
}

/// Normalize a decoded image: promote to RGB8 and bound its size.
///
/// Frames wider than [`MAX_FRAME_WIDTH`] or taller than [`MAX_FRAME_HEIGHT`]
/// are shrunk by `min(max_w / w, max_h / h)` with both dimensions rounded to
/// the nearest pixel, so the aspect ratio survives within a pixel. Frames
/// already inside the bounds pass through untouched.
pub fn normalize_frame(decoded: DynamicImage) -> Result<RgbImage, LoadError> {
    let rgb = decoded.into_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(LoadError::EmptySource);
    }
    if width <= MAX_FRAME_WIDTH && height <= MAX_FRAME_HEIGHT {
        return Ok(rgb);
    }

    let scale = f64::min(
        f64::from(MAX_FRAME_WIDTH) / f64::from(width),
        f64::from(MAX_FRAME_HEIGHT) / f64::from(height),
    );
    let scaled_w = (f64::from(width) * scale).round() as u32;
    let scaled_h = (f64::from(height) * scale).round() as u32;
    if scaled_w == 0 || scaled_h == 0 {
        // Extreme aspect ratios can round a dimension away entirely.
        return Err(LoadError::EmptySource);
    }
    tracing::debug!(width, height, scaled_w, scaled_h, "downscaling oversized frame");
    Ok(image::imageops::resize(&rgb, scaled_w, scaled_h, FilterType::Triangle))
}
