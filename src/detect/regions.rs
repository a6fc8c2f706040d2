//! Connected-component region extraction from binary masks.

use std::collections::VecDeque;

use ndarray::Array2;

use crate::tracker::Rect;

/// Extract the bounding boxes of 4-connected foreground components.
///
/// Components smaller than `min_area` pixels are discarded as noise. Output
/// order is the row-major order in which components are first encountered,
/// which keeps downstream matching deterministic.
pub fn extract_regions(mask: &Array2<u8>, min_area: usize) -> Vec<Rect> {
    let (height, width) = mask.dim();
    let mut visited = Array2::from_elem((height, width), false);
    let mut regions = Vec::new();
    let mut queue = VecDeque::new();

    for row in 0..height {
        for col in 0..width {
            if mask[[row, col]] == 0 || visited[[row, col]] {
                continue;
            }

            // Flood-fill one component, tracking its extent and area.
            let (mut min_row, mut max_row) = (row, row);
            let (mut min_col, mut max_col) = (col, col);
            let mut area = 0usize;

            visited[[row, col]] = true;
            queue.push_back((row, col));

            while let Some((r, c)) = queue.pop_front() {
                area += 1;
                min_row = min_row.min(r);
                max_row = max_row.max(r);
                min_col = min_col.min(c);
                max_col = max_col.max(c);

                // Out-of-range neighbors wrap to usize::MAX and fail the
                // bounds check.
                for (nr, nc) in [
                    (r.wrapping_sub(1), c),
                    (r + 1, c),
                    (r, c.wrapping_sub(1)),
                    (r, c + 1),
                ] {
                    if nr < height && nc < width && mask[[nr, nc]] != 0 && !visited[[nr, nc]] {
                        visited[[nr, nc]] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }

            if area >= min_area {
                regions.push(Rect::from_tlbr(
                    min_col as f32,
                    min_row as f32,
                    (max_col + 1) as f32,
                    (max_row + 1) as f32,
                ));
            }
        }
    }

    regions
}
