//! Collaborator contracts for frame capture and display.

use crate::frame::Frame;
use crate::tracker::Track;

/// Frame acquisition collaborator (camera, file, network stream).
pub trait FrameSource {
    /// Error type for acquisition failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Pull the next frame; `Ok(None)` signals end of stream. May block.
    fn read(&mut self) -> Result<Option<Frame>, Self::Error>;
}

/// Display collaborator. The core consumes no return value from it.
pub trait FrameSink {
    /// Render a frame with its foreground mask and the live track list.
    fn show(&mut self, frame: &Frame, mask: &Frame, tracks: &[Track]);
}

/// Sink for headless deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn show(&mut self, _frame: &Frame, _mask: &Frame, _tracks: &[Track]) {}
}
