//! Frame-differencing tracker variant.

use log::trace;

use crate::detect::{DifferenceConfig, ForegroundDetector, FrameDifference, extract_regions};
use crate::frame::Frame;
use crate::tracker::object_tracker::{ObjectTracker, TrackerError};
use crate::tracker::track::Track;
use crate::tracker::track_table::{TrackTable, TrackerConfig};

/// Tracks whatever moves: foreground regions from frame differencing,
/// identities from IoU association.
///
/// On a detection error the whole frame is rejected and every piece of
/// committed state (tracks, deleted set, mask) stays as the previous
/// successful frame left it.
pub struct DifferenceTracker {
    detector: FrameDifference,
    table: TrackTable,
    mask: Frame,
}

impl DifferenceTracker {
    pub fn new(detect_config: DifferenceConfig, config: TrackerConfig) -> Self {
        Self {
            detector: FrameDifference::new(detect_config),
            table: TrackTable::new(config),
            mask: Frame::default(),
        }
    }

    /// Tracker with default detection and matching parameters.
    pub fn with_defaults() -> Self {
        Self::new(DifferenceConfig::default(), TrackerConfig::default())
    }
}

impl ObjectTracker for DifferenceTracker {
    fn process_frame(&mut self, frame: &Frame) -> Result<(), TrackerError> {
        let mask = self.detector.apply(frame)?;
        let regions = extract_regions(&mask.binary, self.detector.config().min_region_area);
        trace!("frame yielded {} candidate regions", regions.len());

        self.table.observe(&regions);
        self.mask = mask.visual;
        Ok(())
    }

    fn tracks(&self) -> &[Track] {
        self.table.tracks()
    }

    fn deleted_tracks(&self) -> &[u64] {
        self.table.deleted()
    }

    fn mask_image(&self) -> &Frame {
        &self.mask
    }
}
