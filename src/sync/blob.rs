//! Wire representation of track lifecycle events.

use serde::{Deserialize, Serialize};

use crate::tracker::Track;

/// Lifecycle event kind carried by every wire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlobKind {
    New,
    Update,
    Remove,
}

/// One blob on the wire.
///
/// Values are constructed fresh for every send; geometry is never carried
/// over from a previous message. The origin is recomputed from the integer
/// bounding fields, so `origin_x == bounding_x + bounding_width / 2` holds
/// for every message that leaves the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    /// Source stream identifier
    pub camera_id: i32,
    /// Track identity
    pub id: u64,
    /// Top-left of the bounding box
    pub bounding_x: i32,
    pub bounding_y: i32,
    /// Box size
    pub bounding_width: i32,
    pub bounding_height: i32,
    /// Box center
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Blob {
    /// Wire value carrying a live track's current geometry.
    pub fn from_track(camera_id: i32, track: &Track) -> Self {
        Self::with_bounds(
            camera_id,
            track.id,
            track.rect.x.round() as i32,
            track.rect.y.round() as i32,
            track.rect.width.round() as i32,
            track.rect.height.round() as i32,
        )
    }

    /// Wire value for a retired id. Geometry is vacuous once a blob is gone.
    pub fn removal(camera_id: i32, id: u64) -> Self {
        Self::with_bounds(camera_id, id, 0, 0, 0, 0)
    }

    fn with_bounds(camera_id: i32, id: u64, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            camera_id,
            id,
            bounding_x: x,
            bounding_y: y,
            bounding_width: width,
            bounding_height: height,
            origin_x: f64::from(x) + f64::from(width) / 2.0,
            origin_y: f64::from(y) + f64::from(height) / 2.0,
        }
    }
}

/// Framed unit written to the connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobEvent {
    pub kind: BlobKind,
    pub blob: Blob,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Rect;

    #[test]
    fn test_origin_is_box_center() {
        let track = Track::spawn(Rect::new(10.0, 10.0, 20.0, 20.0));

        let blob = Blob::from_track(3, &track);
        assert_eq!(blob.camera_id, 3);
        assert_eq!(blob.bounding_x, 10);
        assert_eq!(blob.bounding_width, 20);
        assert_eq!(blob.origin_x, 20.0);
        assert_eq!(blob.origin_y, 20.0);
    }

    #[test]
    fn test_origin_of_odd_width_box() {
        let track = Track::spawn(Rect::new(4.0, 6.0, 5.0, 3.0));
        let blob = Blob::from_track(0, &track);
        assert_eq!(blob.origin_x, 6.5);
        assert_eq!(blob.origin_y, 7.5);
    }

    #[test]
    fn test_removal_geometry_is_zeroed() {
        let blob = Blob::removal(1, 42);
        assert_eq!(blob.id, 42);
        assert_eq!(blob.bounding_width, 0);
        assert_eq!(blob.origin_x, 0.0);
    }
}
