mod difference;
mod matching;
mod object_tracker;
mod rect;
mod track;
mod track_state;
mod track_table;

pub use difference::DifferenceTracker;
pub use matching::{AssignmentResult, iou_distance, linear_assignment};
pub use object_tracker::{ObjectTracker, TrackerError, TrackerStrategy, build_tracker};
pub use rect::Rect;
pub use track::{Track, reset_track_id_counter};
pub use track_state::TrackState;
pub use track_table::{TrackTable, TrackerConfig};
