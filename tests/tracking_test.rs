use blobtrack_rs::tracker::{ObjectTracker, Rect, TrackState, TrackerConfig, TrackerStrategy, build_tracker};
use blobtrack_rs::{DifferenceTracker, Frame};

/// 64x64 frame with a bright square of side `side` at (x, y).
fn frame_with_square(x: usize, y: usize, side: usize) -> Frame {
    let mut frame = Frame::zeros(64, 64);
    for row in y..y + side {
        for col in x..x + side {
            frame.pixels_mut()[[row, col]] = 200;
        }
    }
    frame
}

#[test]
fn test_basic_tracking() {
    let mut tracker = DifferenceTracker::with_defaults();

    // Reference frame: empty scene, nothing tracked.
    tracker.process_frame(&Frame::zeros(64, 64)).unwrap();
    assert!(tracker.tracks().is_empty());
    assert!(tracker.deleted_tracks().is_empty());

    // Frame 1: a blob appears.
    tracker.process_frame(&frame_with_square(10, 10, 20)).unwrap();
    assert_eq!(tracker.tracks().len(), 1);
    let id = tracker.tracks()[0].id;
    assert_eq!(tracker.tracks()[0].age, 1);
    assert_eq!(tracker.tracks()[0].rect, Rect::new(10.0, 10.0, 20.0, 20.0));

    // Frame 2: it stays unmoved; same identity, one frame older.
    tracker.process_frame(&frame_with_square(10, 10, 20)).unwrap();
    assert_eq!(tracker.tracks().len(), 1);
    assert_eq!(tracker.tracks()[0].id, id);
    assert_eq!(tracker.tracks()[0].age, 2);

    // Frame 3: it drifts; identity survives the overlap match.
    tracker.process_frame(&frame_with_square(14, 12, 20)).unwrap();
    assert_eq!(tracker.tracks()[0].id, id);
    assert_eq!(tracker.tracks()[0].age, 3);
    assert_eq!(tracker.tracks()[0].rect.x, 14.0);

    // Frame 4: it vanishes; zero tolerance retires it immediately and the
    // id surfaces in the deleted set exactly once.
    tracker.process_frame(&Frame::zeros(64, 64)).unwrap();
    assert!(tracker.tracks().is_empty());
    assert_eq!(tracker.deleted_tracks(), &[id]);

    // Frame 5: still empty; the deleted set was replaced, not accumulated.
    tracker.process_frame(&Frame::zeros(64, 64)).unwrap();
    assert!(tracker.deleted_tracks().is_empty());
}

#[test]
fn test_two_blobs_keep_separate_identities() {
    let mut tracker = DifferenceTracker::with_defaults();

    tracker.process_frame(&Frame::zeros(64, 64)).unwrap();

    // Two blobs appear in the same frame.
    let mut frame = frame_with_square(4, 4, 12);
    for row in 40..52 {
        for col in 40..52 {
            frame.pixels_mut()[[row, col]] = 200;
        }
    }
    tracker.process_frame(&frame).unwrap();

    assert_eq!(tracker.tracks().len(), 2);
    let ids: Vec<u64> = tracker.tracks().iter().map(|t| t.id).collect();
    assert_ne!(ids[0], ids[1]);

    // Both move; each keeps its own identity.
    let mut frame = frame_with_square(6, 5, 12);
    for row in 42..54 {
        for col in 41..53 {
            frame.pixels_mut()[[row, col]] = 200;
        }
    }
    tracker.process_frame(&frame).unwrap();

    let after: Vec<u64> = tracker.tracks().iter().map(|t| t.id).collect();
    assert_eq!(after, ids);
    assert!(tracker.tracks().iter().all(|t| t.age == 2));
}

#[test]
fn test_snapshot_accessors_are_idempotent() {
    let mut tracker = DifferenceTracker::with_defaults();

    tracker.process_frame(&Frame::zeros(64, 64)).unwrap();
    tracker.process_frame(&frame_with_square(10, 10, 20)).unwrap();

    let first: Vec<u64> = tracker.tracks().iter().map(|t| t.id).collect();
    let second: Vec<u64> = tracker.tracks().iter().map(|t| t.id).collect();
    assert_eq!(first, second);
    assert_eq!(tracker.deleted_tracks(), tracker.deleted_tracks());
    assert_eq!(tracker.mask_image(), tracker.mask_image());
}

#[test]
fn test_grace_window_bridges_a_dropout() {
    let strategy = TrackerStrategy::FrameDifference(Default::default());
    let mut tracker = build_tracker(
        strategy,
        TrackerConfig {
            miss_tolerance: 1,
            ..TrackerConfig::default()
        },
    );

    tracker.process_frame(&Frame::zeros(64, 64)).unwrap();
    tracker.process_frame(&frame_with_square(10, 10, 20)).unwrap();
    let id = tracker.tracks()[0].id;

    // One-frame detection dropout: the track coasts instead of retiring.
    tracker.process_frame(&Frame::zeros(64, 64)).unwrap();
    assert_eq!(tracker.tracks().len(), 1);
    assert_eq!(tracker.tracks()[0].id, id);
    assert_eq!(tracker.tracks()[0].state, TrackState::Lost);
    assert!(tracker.deleted_tracks().is_empty());

    // The blob comes back close to where it was: identity preserved.
    tracker.process_frame(&frame_with_square(11, 10, 20)).unwrap();
    assert_eq!(tracker.tracks().len(), 1);
    assert_eq!(tracker.tracks()[0].id, id);
    assert_eq!(tracker.tracks()[0].state, TrackState::Tracked);
}
