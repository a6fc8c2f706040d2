//! Blob tracking for video streams, with lifecycle synchronization to a
//! remote consumer.
//!
//! The crate turns a stream of greyscale frames into an identity-stable list
//! of tracked blobs and publishes each blob's lifecycle (creation, movement,
//! removal) over a persistent connection, frame by frame:
//!
//! - [`detect`] extracts foreground regions from each frame via a pluggable
//!   [`detect::ForegroundDetector`] strategy.
//! - [`tracker`] matches regions against live tracks, assigns and retires
//!   stable identities, and exposes the per-frame snapshot.
//! - [`sync`] encodes the snapshot delta into wire messages, flushing
//!   removals before creations and updates.
//! - [`integration`] wires a capture source, a tracker, a display sink and
//!   the sender into a single-threaded per-frame loop.
//!
//! Video capture and rendering are external collaborators behind the
//! [`integration::FrameSource`] and [`integration::FrameSink`] traits.

pub mod detect;
pub mod frame;
pub mod integration;
pub mod sync;
pub mod tracker;

pub use frame::Frame;
pub use integration::{FrameSink, FrameSource, TrackingPipeline};
pub use sync::{Blob, BlobKind, BlobSender};
pub use tracker::{
    DifferenceTracker, ObjectTracker, Rect, Track, TrackerConfig, TrackerStrategy,
};
