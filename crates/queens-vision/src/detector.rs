//! End-to-end board detection pipeline.

use log::{debug, info};
use queens_core::{RgbImageView, ScreenLayout};
use serde::{Deserialize, Serialize};

use crate::{cluster_axes, find_crossings, resolve_regions, ColorGrid, DetectError, DetectParams};

/// A fully resolved board: dimension, per-cell groups, and screen geometry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardDetection {
    /// Board dimension `N` (the board has `N × N` cells and `N` groups).
    pub size: usize,
    /// Dense group id per cell, row-major.
    pub colors: ColorGrid,
    /// Cell-center geometry in buffer coordinates.
    pub layout: ScreenLayout,
}

/// Detect a Queens board in a captured RGB buffer.
///
/// `Ok(None)` means no board is visible in this capture (too few crossings,
/// or no coherent grid survived clustering); the caller is expected to retry
/// with a fresh capture. An `Err` means the capture does contain a grid but
/// its coloring cannot be resolved into a valid board, which no retry will
/// fix.
pub fn detect_board(
    img: &RgbImageView<'_>,
    params: &DetectParams,
) -> Result<Option<BoardDetection>, DetectError> {
    let points = find_crossings(img, params);

    // A 5x5 board is the smallest solvable Queens; fewer crossings than its
    // 16 interior intersections means no board.
    if points.len() < params.min_points {
        info!("no board detected ({} crossing points)", points.len());
        return Ok(None);
    }
    debug!("{} crossing points", points.len());

    let (x_bins, y_bins) = cluster_axes(&points, params);
    if x_bins.len() < 2 || y_bins.len() < 2 {
        info!(
            "no coherent grid ({} x bins, {} y bins)",
            x_bins.len(),
            y_bins.len()
        );
        return Ok(None);
    }

    // N cells lie between N-1 interior grid lines; the outer border is not
    // itself detected as a crossing.
    let size = x_bins.len() + 1;
    let pitch = x_bins[1].coordinate - x_bins[0].coordinate;
    let layout = ScreenLayout {
        origin_x: x_bins[0].coordinate - pitch / 2,
        origin_y: y_bins[0].coordinate - pitch / 2,
        pitch,
    };

    if !grid_in_bounds(img, &layout, size) {
        info!("projected grid falls outside the buffer, discarding capture");
        return Ok(None);
    }

    let colors = resolve_regions(img, &x_bins, &y_bins, size)?;

    info!(
        "detected a size-{size} board at ({}, {}) with pitch {pitch}",
        layout.origin_x, layout.origin_y
    );

    Ok(Some(BoardDetection {
        size,
        colors,
        layout,
    }))
}

/// Every projected cell center must name a pixel inside the buffer.
fn grid_in_bounds(img: &RgbImageView<'_>, layout: &ScreenLayout, size: usize) -> bool {
    let (first_x, first_y) = layout.cell_center(0, 0);
    let (last_x, last_y) = layout.cell_center(size - 1, size - 1);
    img.contains(first_x, first_y) && img.contains(last_x, last_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use queens_core::{RgbImage, RgbPixel};

    #[test]
    fn blank_buffer_is_a_negative_result() {
        let img = RgbImage::filled(300, 300, RgbPixel::WHITE);
        let result = detect_board(&img.view(), &DetectParams::default());
        assert!(matches!(result, Ok(None)));
    }
}
