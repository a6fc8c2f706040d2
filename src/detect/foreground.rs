//! Output contract for pluggable foreground-detection strategies.

use ndarray::Array2;
use thiserror::Error;

use crate::frame::Frame;

/// Failures while producing a foreground mask.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectError {
    /// Frame with a zero dimension.
    #[error("empty frame")]
    EmptyFrame,
    /// Frame dimensions changed mid-stream.
    #[error("frame size changed from {expected:?} to {got:?}")]
    SizeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
}

/// Foreground detection output for one frame.
#[derive(Debug, Clone)]
pub struct ForegroundMask {
    /// Binary mask: 255 where a pixel is foreground, 0 elsewhere.
    pub binary: Array2<u8>,
    /// Visualization mask for display overlays.
    pub visual: Frame,
}

/// A strategy that classifies each pixel of a frame as foreground or
/// background.
///
/// On error, implementations must leave their committed state unchanged so a
/// single corrupt frame cannot poison the comparison for the next one.
pub trait ForegroundDetector {
    /// Produce the foreground mask for one frame.
    fn apply(&mut self, frame: &Frame) -> Result<ForegroundMask, DetectError>;

    /// Drop accumulated background state and start over.
    fn reset(&mut self);
}
