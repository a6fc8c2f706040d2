//! Integration module wiring capture, tracking, display and publishing.
//!
//! Capture and display are external collaborators; this module defines their
//! contracts and the single-threaded per-frame driver loop that feeds
//! tracker snapshots to the blob sender.

mod pipeline;
mod source;

pub use pipeline::{PipelineError, PipelineStats, TrackingPipeline};
pub use source::{FrameSink, FrameSource, NullSink};
