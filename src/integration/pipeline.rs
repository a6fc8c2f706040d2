//! TrackingPipeline: the per-frame driver loop.

use std::io::Write;

use log::warn;
use thiserror::Error;

use crate::integration::source::{FrameSink, FrameSource};
use crate::sync::BlobSender;
use crate::tracker::ObjectTracker;

/// Fatal pipeline failures. Per-frame input and transport problems are
/// degraded, counted and logged instead of ending the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("frame source failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Counters for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Frames pulled from the source.
    pub frames: u64,
    /// Frames the tracker rejected. Nothing is published for these: the
    /// previous snapshot stays committed and republishing it would duplicate
    /// removals.
    pub skipped_frames: u64,
    /// Frames whose publish step failed. Their messages are lost together
    /// and never replayed in a later frame.
    pub failed_publishes: u64,
}

/// Single-threaded frame loop: capture, track, display, publish.
///
/// Owns every collaborator and threads them through the loop explicitly; no
/// process-wide state beyond the track id counter. The tracker owns the
/// track collection, the sender owns the connection, and neither touches
/// the other's resource.
pub struct TrackingPipeline<S, T, K, W>
where
    S: FrameSource,
    T: ObjectTracker,
    K: FrameSink,
    W: Write,
{
    camera_id: i32,
    source: S,
    tracker: T,
    sink: K,
    sender: BlobSender<W>,
    stats: PipelineStats,
}

impl<S, T, K, W> TrackingPipeline<S, T, K, W>
where
    S: FrameSource,
    T: ObjectTracker,
    K: FrameSink,
    W: Write,
{
    pub fn new(camera_id: i32, source: S, tracker: T, sink: K, sender: BlobSender<W>) -> Self {
        Self {
            camera_id,
            source,
            tracker,
            sink,
            sender,
            stats: PipelineStats::default(),
        }
    }

    /// Process one frame. `Ok(false)` means the stream ended.
    pub fn step(&mut self) -> Result<bool, PipelineError> {
        let frame = self
            .source
            .read()
            .map_err(|e| PipelineError::Source(Box::new(e)))?;
        let Some(frame) = frame else {
            return Ok(false);
        };
        self.stats.frames += 1;

        if let Err(err) = self.tracker.process_frame(&frame) {
            warn!("skipping frame: {err}");
            self.stats.skipped_frames += 1;
            return Ok(true);
        }

        self.sink
            .show(&frame, self.tracker.mask_image(), self.tracker.tracks());

        if let Err(err) = self.sender.publish(
            self.camera_id,
            self.tracker.tracks(),
            self.tracker.deleted_tracks(),
        ) {
            warn!("publish failed, dropping this frame's messages: {err}");
            self.stats.failed_publishes += 1;
        }

        Ok(true)
    }

    /// Run until end of stream.
    pub fn run(&mut self) -> Result<PipelineStats, PipelineError> {
        self.run_until(|| false)
    }

    /// Run until end of stream or until `stop` returns true; `stop` is
    /// polled between frames, the seam for an interrupt key or a signal
    /// handler flag.
    pub fn run_until(
        &mut self,
        mut stop: impl FnMut() -> bool,
    ) -> Result<PipelineStats, PipelineError> {
        while !stop() && self.step()? {}
        Ok(self.stats)
    }

    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut T {
        &mut self.tracker
    }

    /// Get a reference to the underlying sender.
    pub fn sender(&self) -> &BlobSender<W> {
        &self.sender
    }
}
