//! Region-to-track association.
//!
//! Matching is a bipartite assignment over an IoU-distance cost matrix:
//! lowest-cost pairs win, pairs above the acceptability threshold are
//! rejected. Tracks are presented in ascending id order, so equal-cost ties
//! resolve toward the lowest existing id and the assignment is reproducible
//! for the same input sequence.

use crate::tracker::rect::Rect;
use ndarray::Array2;

/// Compute the IoU distance matrix (1 - IoU) between tracks and regions.
pub fn iou_distance(track_boxes: &[Rect], region_boxes: &[Rect]) -> Array2<f32> {
    let mut dists = Array2::zeros((track_boxes.len(), region_boxes.len()));
    for (i, t) in track_boxes.iter().enumerate() {
        for (j, r) in region_boxes.iter().enumerate() {
            dists[[i, j]] = 1.0 - t.iou(r);
        }
    }
    dists
}

#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_regions: Vec<usize>,
}

/// Solve the assignment with LAPJV over a padded square matrix, rejecting
/// pairs whose cost exceeds `thresh`.
pub fn linear_assignment(cost_matrix: &Array2<f32>, thresh: f32) -> AssignmentResult {
    let (num_tracks, num_regions) = cost_matrix.dim();

    if num_tracks == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: vec![],
            unmatched_regions: (0..num_regions).collect(),
        };
    }

    if num_regions == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: (0..num_tracks).collect(),
            unmatched_regions: vec![],
        };
    }

    let size = num_tracks.max(num_regions);
    let mut padded = Array2::<f64>::from_elem((size, size), 1e6);

    for i in 0..num_tracks {
        for j in 0..num_regions {
            padded[[i, j]] = cost_matrix[[i, j]] as f64;
        }
    }

    let result = lapjv::lapjv(&padded);
    let mut matches = vec![];
    let mut unmatched_tracks = vec![];
    let mut unmatched_regions_mask: Vec<bool> = vec![true; num_regions];

    match result {
        Ok((row_to_col, _)) => {
            for (track_idx, &region_idx) in row_to_col.iter().enumerate() {
                if track_idx >= num_tracks {
                    continue;
                }
                if region_idx >= num_regions {
                    unmatched_tracks.push(track_idx);
                } else if cost_matrix[[track_idx, region_idx]] <= thresh {
                    matches.push((track_idx, region_idx));
                    unmatched_regions_mask[region_idx] = false;
                } else {
                    unmatched_tracks.push(track_idx);
                }
            }
        }
        Err(_) => {
            unmatched_tracks = (0..num_tracks).collect();
        }
    }

    let unmatched_regions: Vec<usize> = unmatched_regions_mask
        .iter()
        .enumerate()
        .filter_map(|(i, &u)| if u { Some(i) } else { None })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_regions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_prefers_overlap() {
        let tracks = vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(50.0, 50.0, 10.0, 10.0),
        ];
        // Regions presented in swapped order.
        let regions = vec![
            Rect::new(51.0, 51.0, 10.0, 10.0),
            Rect::new(1.0, 1.0, 10.0, 10.0),
        ];

        let dists = iou_distance(&tracks, &regions);
        let result = linear_assignment(&dists, 0.8);

        assert_eq!(result.matches.len(), 2);
        assert!(result.matches.contains(&(0, 1)));
        assert!(result.matches.contains(&(1, 0)));
        assert!(result.unmatched_tracks.is_empty());
        assert!(result.unmatched_regions.is_empty());
    }

    #[test]
    fn test_assignment_rejects_above_threshold() {
        let tracks = vec![Rect::new(0.0, 0.0, 10.0, 10.0)];
        let regions = vec![Rect::new(100.0, 100.0, 10.0, 10.0)];

        let dists = iou_distance(&tracks, &regions);
        let result = linear_assignment(&dists, 0.8);

        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0]);
        assert_eq!(result.unmatched_regions, vec![0]);
    }

    #[test]
    fn test_assignment_empty_inputs() {
        let empty: Vec<Rect> = vec![];
        let regions = vec![Rect::new(0.0, 0.0, 10.0, 10.0)];

        let result = linear_assignment(&iou_distance(&empty, &regions), 0.8);
        assert_eq!(result.unmatched_regions, vec![0]);

        let result = linear_assignment(&iou_distance(&regions, &empty), 0.8);
        assert_eq!(result.unmatched_tracks, vec![0]);
    }
}
