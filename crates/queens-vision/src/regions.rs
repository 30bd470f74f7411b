//! Color-group resolution.
//!
//! One pixel is sampled at every inferred cell center. Pass 1 labels cells by
//! exact color identity. When that yields fewer distinct colors than the
//! board has groups, two or more groups share a rendered color while being
//! spatially disconnected; pass 2 rebuilds the grouping structurally by
//! flood-filling connected regions of equal color.

use log::{debug, info};
use queens_core::{RgbImageView, RgbPixel};
use serde::{Deserialize, Serialize};

use crate::{Bin, DetectError};

/// Dense, 0-indexed group ids for an `size × size` board, row-major.
///
/// Every id in `[0, size)` is used by at least one cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGrid {
    size: usize,
    ids: Vec<u32>,
}

impl ColorGrid {
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Group id of the cell at grid position `(col, row)`.
    #[inline]
    pub fn id(&self, col: usize, row: usize) -> u32 {
        debug_assert!(col < self.size && row < self.size);
        self.ids[row * self.size + col]
    }

    /// Row-major group ids.
    #[inline]
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }
}

/// Resolve the per-cell color groups of a `size × size` board.
///
/// Cell centers are derived from the first bin coordinate and the bin pitch.
/// The caller guarantees that every projected center lies inside the buffer
/// and that both axes carry at least two bins.
pub fn resolve_regions(
    img: &RgbImageView<'_>,
    x_bins: &[Bin],
    y_bins: &[Bin],
    size: usize,
) -> Result<ColorGrid, DetectError> {
    debug_assert!(x_bins.len() >= 2 && y_bins.len() >= 2);

    let pitch = x_bins[1].coordinate - x_bins[0].coordinate;
    let origin_x = x_bins[0].coordinate - pitch / 2;
    let origin_y = y_bins[0].coordinate - pitch / 2;

    let mut palette: Vec<RgbPixel> = Vec::new();
    let mut ids = vec![0u32; size * size];

    for row in 0..size {
        for col in 0..size {
            let x = origin_x + pitch * col as i32;
            let y = origin_y + pitch * row as i32;
            let pixel = img.get(x as usize, y as usize);

            match palette.iter().position(|&seen| seen == pixel) {
                Some(id) => ids[row * size + col] = id as u32,
                None => {
                    if palette.len() == size {
                        return Err(DetectError::TooManyColors {
                            found: size + 1,
                            size,
                        });
                    }
                    ids[row * size + col] = palette.len() as u32;
                    palette.push(pixel);
                }
            }
        }
    }

    if palette.len() == size {
        return Ok(ColorGrid { size, ids });
    }

    // Fewer colors than groups: identically colored, disconnected groups.
    // Rebuild the grouping from connectivity instead of color identity.
    info!(
        "{} distinct colors for {size} groups, merging by connectivity",
        palette.len()
    );
    let (ids, regions) = relabel_connected(&ids, size);
    if regions != size {
        return Err(DetectError::GroupCountMismatch { regions, size });
    }

    Ok(ColorGrid { size, ids })
}

/// Relabel every 4-connected region of equal id with a fresh id, assigned in
/// row-major discovery order. Returns the labels and the region count.
fn relabel_connected(ids: &[u32], size: usize) -> (Vec<u32>, usize) {
    const UNLABELED: u32 = u32::MAX;

    let mut labels = vec![UNLABELED; ids.len()];
    let mut next = 0u32;
    let mut stack = Vec::new();

    for start in 0..ids.len() {
        if labels[start] != UNLABELED {
            continue;
        }

        labels[start] = next;
        stack.push(start);

        while let Some(index) = stack.pop() {
            let col = index % size;
            let row = index / size;

            let mut visit = |neighbor: usize| {
                if labels[neighbor] == UNLABELED && ids[neighbor] == ids[index] {
                    labels[neighbor] = next;
                    stack.push(neighbor);
                }
            };

            if col + 1 < size {
                visit(index + 1);
            }
            if col > 0 {
                visit(index - 1);
            }
            if row + 1 < size {
                visit(index + size);
            }
            if row > 0 {
                visit(index - size);
            }
        }

        next += 1;
    }

    debug!("flood fill produced {next} regions");
    (labels, next as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relabels_disconnected_equal_ids() {
        // Two separated regions of id 0 split by a stripe of id 1.
        #[rustfmt::skip]
        let ids = vec![
            0, 0, 0,
            1, 1, 1,
            0, 0, 0,
        ];

        let (labels, regions) = relabel_connected(&ids, 3);
        assert_eq!(regions, 3);
        assert_eq!(labels, vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn keeps_an_irregular_connected_region_together() {
        // An L-shaped region of id 0 around a corner of id 1.
        #[rustfmt::skip]
        let ids = vec![
            0, 0, 0,
            0, 1, 1,
            0, 1, 1,
        ];

        let (labels, regions) = relabel_connected(&ids, 3);
        assert_eq!(regions, 2);
        assert_eq!(labels, vec![0, 0, 0, 0, 1, 1, 0, 1, 1]);
    }

    #[test]
    fn relabeling_ignores_original_label_values() {
        // Permuting the input ids must not change the partition.
        #[rustfmt::skip]
        let a = vec![
            5, 5, 2,
            5, 2, 2,
            5, 5, 5,
        ];
        #[rustfmt::skip]
        let b = vec![
            1, 1, 9,
            1, 9, 9,
            1, 1, 1,
        ];

        let (labels_a, regions_a) = relabel_connected(&a, 3);
        let (labels_b, regions_b) = relabel_connected(&b, 3);
        assert_eq!(regions_a, regions_b);
        assert_eq!(labels_a, labels_b);
    }
}
