//! Reference-frame differencing foreground strategy.

use ndarray::{Array2, Zip};

use crate::detect::foreground::{DetectError, ForegroundDetector, ForegroundMask};
use crate::frame::Frame;

/// Configuration for [`FrameDifference`].
#[derive(Debug, Clone)]
pub struct DifferenceConfig {
    /// Minimum absolute intensity difference for a foreground pixel.
    pub threshold: u8,
    /// Connected components smaller than this are discarded as noise.
    pub min_region_area: usize,
}

impl Default for DifferenceConfig {
    fn default() -> Self {
        Self {
            threshold: 25,
            min_region_area: 64,
        }
    }
}

/// Flags pixels whose intensity differs from a reference frame by more than
/// the configured threshold.
///
/// The first frame seen becomes the reference and yields an all-zero mask;
/// [`reset`](ForegroundDetector::reset) re-arms capture of a fresh reference.
/// Differencing against a fixed reference, rather than the previous frame,
/// keeps stationary objects in the foreground for as long as they stay in
/// the scene.
#[derive(Debug, Default)]
pub struct FrameDifference {
    config: DifferenceConfig,
    reference: Option<Frame>,
}

impl FrameDifference {
    pub fn new(config: DifferenceConfig) -> Self {
        Self {
            config,
            reference: None,
        }
    }

    pub fn config(&self) -> &DifferenceConfig {
        &self.config
    }
}

impl ForegroundDetector for FrameDifference {
    fn apply(&mut self, frame: &Frame) -> Result<ForegroundMask, DetectError> {
        if frame.is_empty() {
            return Err(DetectError::EmptyFrame);
        }

        let Some(reference) = &self.reference else {
            self.reference = Some(frame.clone());
            let binary = Array2::zeros(frame.pixels().raw_dim());
            return Ok(ForegroundMask {
                visual: Frame::new(binary.clone()),
                binary,
            });
        };

        if reference.shape() != frame.shape() {
            return Err(DetectError::SizeMismatch {
                expected: reference.shape(),
                got: frame.shape(),
            });
        }

        let threshold = self.config.threshold;
        let mut binary = Array2::zeros(frame.pixels().raw_dim());
        Zip::from(&mut binary)
            .and(frame.pixels())
            .and(reference.pixels())
            .for_each(|out, &cur, &refp| {
                *out = if cur.abs_diff(refp) > threshold { 255 } else { 0 };
            });

        Ok(ForegroundMask {
            visual: Frame::new(binary.clone()),
            binary,
        })
    }

    fn reset(&mut self) {
        self.reference = None;
    }
}
