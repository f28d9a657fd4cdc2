//! Lane boundary detection for single road frames.
//!
//! The crate turns one RGB frame into an annotated overlay plus the line
//! segments found in it, through a fixed classical pipeline:
//!
//! 1. **Grayscale**: Rec. 601 luma conversion.
//! 2. **Smoothing**: fixed 5×5 binomial kernel.
//! 3. **Canny**: edge extraction with caller-supplied thresholds.
//! 4. **Region masking**: keep edges in the road-facing part of the frame.
//! 5. **Hough**: probabilistic line segment extraction.
//! 6. **Rendering**: segments and region outline painted over the frame.
//!
//! Every stage is deterministic, so one frame and one parameter set always
//! reproduce the same output. The entry points are [`detect`] for one-shot
//! use and [`TuningController`] for interactive sessions where a UI streams
//! parameter changes.

mod edges;
mod hough;
mod params;
mod pipeline;
mod preprocess;
mod render;
mod roi;
mod source;
mod stats;
mod tuner;

#[cfg(test)]
mod test_utils;

pub use edges::edge_map;
pub use hough::{line_segments, LineSegment};
pub use params::{DetectionParameters, Preset};
pub use pipeline::{detect, DetectionResult, DetectionSummary, InvalidImageError};
pub use preprocess::{grayscale, smooth};
pub use render::{annotate, OUTLINE_COLOR, SEGMENT_COLOR};
pub use roi::{mask_edges, region_mask, region_polygon, top_row};
pub use source::{
    frame_from_bytes, load_frame, normalize_frame, LoadError, MAX_FRAME_HEIGHT, MAX_FRAME_WIDTH,
};
pub use stats::SegmentStats;
pub use tuner::{DisplaySink, TuningController};
