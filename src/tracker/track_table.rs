//! Identity engine: matches detected regions to live tracks frame over
//! frame, assigning and retiring stable ids.

use log::debug;

use crate::tracker::matching::{self, AssignmentResult};
use crate::tracker::rect::Rect;
use crate::tracker::track::Track;
use crate::tracker::track_state::TrackState;

/// Configuration for the track table.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Maximum acceptable IoU distance (1 - IoU) for a track/region pair.
    pub match_thresh: f32,
    /// Consecutive missed frames a track survives before retirement.
    /// 0 retires a track on its first miss.
    pub miss_tolerance: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            match_thresh: 0.8,
            miss_tolerance: 0,
        }
    }
}

/// The live track collection plus the ids retired by the most recent frame.
///
/// The table is the sole owner and mutator of its tracks; callers read
/// borrowed snapshots. Tracks are kept in ascending id order, which makes
/// matching tie-breaks and publish order deterministic.
#[derive(Debug, Default)]
pub struct TrackTable {
    tracks: Vec<Track>,
    deleted: Vec<u64>,
    config: TrackerConfig,
}

impl TrackTable {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tracks: Vec::new(),
            deleted: Vec::new(),
            config,
        }
    }

    /// Fold one frame's detected regions into the track set.
    ///
    /// Matched tracks take the region's box and age by one; unmatched tracks
    /// move toward retirement; unmatched regions spawn new tracks. The
    /// deleted set is replaced, not accumulated: it holds exactly the ids
    /// retired by this call.
    pub fn observe(&mut self, regions: &[Rect]) {
        let track_boxes: Vec<Rect> = self.tracks.iter().map(|t| t.rect).collect();
        let dists = matching::iou_distance(&track_boxes, regions);

        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_regions,
        } = matching::linear_assignment(&dists, self.config.match_thresh);

        for (track_idx, region_idx) in matches {
            self.tracks[track_idx].record_match(regions[region_idx]);
        }

        let mut deleted = Vec::new();
        for &track_idx in &unmatched_tracks {
            let track = &mut self.tracks[track_idx];
            if track.misses >= self.config.miss_tolerance {
                track.mark_removed();
                debug!("track {} retired after {} frames", track.id, track.age);
                deleted.push(track.id);
            } else {
                track.record_miss();
            }
        }

        self.tracks.retain(|t| t.state != TrackState::Removed);

        for &region_idx in &unmatched_regions {
            let track = Track::spawn(regions[region_idx]);
            debug!("track {} created at {:?}", track.id, track.rect);
            self.tracks.push(track);
        }

        self.deleted = deleted;
    }

    /// Live tracks after the last `observe` call, in ascending id order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Ids retired by the last `observe` call only.
    pub fn deleted(&self) -> &[u64] {
        &self.deleted
    }
}
