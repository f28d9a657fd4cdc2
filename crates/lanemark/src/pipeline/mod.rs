//! Frame-to-overlay detection pipeline.
//!
//! A pass over one frame runs a fixed stage order:
//!
//! 1. grayscale conversion,
//! 2. 5×5 binomial smoothing,
//! 3. Canny edge extraction,
//! 4. region-of-interest masking,
//! 5. probabilistic Hough segment extraction,
//! 6. overlay rendering.
//!
//! Every stage is deterministic, so one frame and one parameter set always
//! produce the same [`DetectionResult`].

mod result;
mod run;

pub use result::{DetectionResult, DetectionSummary};
pub use run::{detect, InvalidImageError};
