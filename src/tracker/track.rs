//! Track record for one blob held live across frames.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::tracker::rect::Rect;
use crate::tracker::track_state::TrackState;

/// Global track ID counter for unique ID generation.
///
/// Ids increase monotonically and are never reused within a run, so a REMOVE
/// for a retired id can never collide with a later NEW for an unrelated blob.
static TRACK_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Reset the global track ID counter (useful for testing).
pub fn reset_track_id_counter() {
    TRACK_ID_COUNTER.store(0, Ordering::SeqCst);
}

/// Get the next unique track ID.
fn next_track_id() -> u64 {
    TRACK_ID_COUNTER.fetch_add(1, Ordering::SeqCst) + 1
}

/// One tracked blob.
#[derive(Debug, Clone)]
pub struct Track {
    /// Unique track identifier, stable for the track's lifetime
    pub id: u64,
    /// Current lifecycle state
    pub state: TrackState,
    /// Bounding box in frame pixel coordinates, replaced on every match
    pub rect: Rect,
    /// Consecutive frames this track has been live; 1 on creation
    pub age: u32,
    /// Consecutive frames without a matching region; 0 while matched
    pub misses: u32,
}

impl Track {
    /// Create a live track for a region that matched no existing track.
    pub fn spawn(rect: Rect) -> Self {
        Self {
            id: next_track_id(),
            state: TrackState::Tracked,
            rect,
            age: 1,
            misses: 0,
        }
    }

    /// Matched to a region this frame: replace the box, survive one frame.
    pub fn record_match(&mut self, rect: Rect) {
        self.rect = rect;
        self.age += 1;
        self.misses = 0;
        self.state = TrackState::Tracked;
    }

    /// Unmatched this frame but inside the grace window: coast on the last
    /// known box and keep aging, so the published lifecycle has no gaps.
    pub fn record_miss(&mut self) {
        self.age += 1;
        self.misses += 1;
        self.state = TrackState::Lost;
    }

    pub fn mark_removed(&mut self) {
        self.state = TrackState::Removed;
    }

    /// Box center in frame coordinates.
    pub fn center(&self) -> (f32, f32) {
        self.rect.center()
    }
}
