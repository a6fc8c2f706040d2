/// Lifecycle state of a tracked blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Matched to a region in the current frame
    #[default]
    Tracked,
    /// Unmatched, coasting inside the retirement grace window
    Lost,
    /// Retired; the id was surfaced once in that frame's deleted set
    Removed,
}
