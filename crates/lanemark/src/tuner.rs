//! Interactive tuning session over a single frame.
//!
//! A host UI feeds parameter changes in as fast as its widgets fire them;
//! the controller keeps only the newest unprocessed request and runs at most
//! one detection pass per [`TuningController::run_pending`] call. Slider
//! storms therefore cost one pass, not one pass per tick.

use image::RgbImage;

use crate::params::{DetectionParameters, Preset};
use crate::pipeline::{detect, DetectionResult, InvalidImageError};

/// Receiver for freshly computed detection results.
pub trait DisplaySink {
    fn present(&mut self, result: &DetectionResult);
}

/// Owns the frame under inspection and the tuning state for it.
pub struct TuningController {
    frame: RgbImage,
    params: DetectionParameters,
    pending: Option<DetectionParameters>,
    last_good: Option<DetectionResult>,
}

impl TuningController {
    /// Start a session. The initial pass is queued, not run, so the host
    /// decides when the first detection happens.
    pub fn new(frame: RgbImage, params: DetectionParameters) -> Self {
        let params = params.clamped();
        Self {
            frame,
            params,
            pending: Some(params),
            last_good: None,
        }
    }

    /// Values used by the most recent pass, or the initial values before
    /// the first pass runs.
    pub fn params(&self) -> &DetectionParameters {
        &self.params
    }

    /// Result of the most recent successful pass.
    pub fn last_result(&self) -> Option<&DetectionResult> {
        self.last_good.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Queue new tuning values. Values are clamped to their documented
    /// ranges on the way in. An unconsumed earlier request is discarded,
    /// only the newest one runs.
    pub fn request(&mut self, params: DetectionParameters) {
        if self.pending.replace(params.clamped()).is_some() {
            tracing::debug!("coalesced an unconsumed parameter request");
        }
    }

    /// Queue a preset. The five edge and line fields are replaced as one
    /// unit on top of the newest requested values; the region fields keep
    /// whatever the user set.
    pub fn apply_preset(&mut self, preset: Preset) {
        let mut next = self.pending.unwrap_or(self.params);
        preset.apply_to(&mut next);
        self.request(next);
    }

    /// Swap the frame under inspection and queue a pass with the current
    /// values so the new frame gets processed.
    pub fn replace_frame(&mut self, frame: RgbImage) {
        self.frame = frame;
        self.pending.get_or_insert(self.params);
    }

    /// Run one pass if a request is pending. Returns `Ok(true)` when a pass
    /// ran and was handed to the sink, `Ok(false)` when there was nothing to
    /// do. On failure the previous result is kept and the sink is not
    /// called.
    pub fn run_pending(&mut self, sink: &mut dyn DisplaySink) -> Result<bool, InvalidImageError> {
        let Some(next) = self.pending.take() else {
            return Ok(false);
        };
        self.params = next;
        let result = detect(&self.frame, &self.params)?;
        sink.present(&result);
        self.last_good = Some(result);
        Ok(true)
    }
}
