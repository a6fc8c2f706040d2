//! Tracker capability and configuration-driven construction.

use thiserror::Error;

use crate::detect::{DetectError, DifferenceConfig};
use crate::frame::Frame;
use crate::tracker::difference::DifferenceTracker;
use crate::tracker::track::Track;
use crate::tracker::track_table::TrackerConfig;

/// Failures while advancing a tracker by one frame.
///
/// Any error leaves the tracker's committed state untouched: accessors keep
/// returning the previous frame's snapshot.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("foreground detection failed: {0}")]
    Detect(#[from] DetectError),
}

/// A tracker turns frames into an identity-stable track list.
///
/// Accessors are read-only views of the state committed by the most recent
/// successful [`process_frame`](ObjectTracker::process_frame) call and return
/// identical results however often they are called in between.
pub trait ObjectTracker {
    /// Consume one frame and update track state.
    fn process_frame(&mut self, frame: &Frame) -> Result<(), TrackerError>;

    /// Currently live tracks, in ascending id order.
    fn tracks(&self) -> &[Track];

    /// Ids retired by the last successful `process_frame` call only;
    /// replaced each call, each id appearing exactly once.
    fn deleted_tracks(&self) -> &[u64];

    /// Detector visualization mask for the current frame.
    fn mask_image(&self) -> &Frame;
}

impl<T: ObjectTracker + ?Sized> ObjectTracker for Box<T> {
    fn process_frame(&mut self, frame: &Frame) -> Result<(), TrackerError> {
        (**self).process_frame(frame)
    }

    fn tracks(&self) -> &[Track] {
        (**self).tracks()
    }

    fn deleted_tracks(&self) -> &[u64] {
        (**self).deleted_tracks()
    }

    fn mask_image(&self) -> &Frame {
        (**self).mask_image()
    }
}

/// Detection strategy backing a tracker, selected via configuration.
#[derive(Debug, Clone)]
pub enum TrackerStrategy {
    /// Foreground from differencing against a reference frame.
    FrameDifference(DifferenceConfig),
}

/// Build the tracker variant named by `strategy`.
pub fn build_tracker(strategy: TrackerStrategy, config: TrackerConfig) -> Box<dyn ObjectTracker> {
    match strategy {
        TrackerStrategy::FrameDifference(detect) => {
            Box::new(DifferenceTracker::new(detect, config))
        }
    }
}
