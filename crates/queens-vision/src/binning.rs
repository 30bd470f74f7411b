//! Axis clustering of crossing candidates.
//!
//! Crossing points vote for grid-line coordinates independently per axis.
//! Each surviving bin is one grid line; the board dimension is the bin count
//! plus one.

use log::{debug, warn};
use queens_core::PixelPoint;
use serde::{Deserialize, Serialize};

use crate::DetectParams;

/// One clustered grid-line coordinate on a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    /// Axis coordinate of the first point that opened the bin. Deliberately
    /// not a running mean; grid lines are several times wider than the
    /// clustering margin.
    pub coordinate: i32,
    /// Number of points that voted for this bin.
    pub support: u32,
}

/// Cluster candidate points into per-axis grid-line bins.
///
/// Returns `(x_bins, y_bins)`, each sanitized (low-support bins dropped,
/// axis counts reconciled) and sorted ascending by coordinate.
pub fn cluster_axes(points: &[PixelPoint], params: &DetectParams) -> (Vec<Bin>, Vec<Bin>) {
    let mut x_bins = accumulate(points.iter().map(|p| p.x), params.bin_margin);
    let mut y_bins = accumulate(points.iter().map(|p| p.y), params.bin_margin);

    discard_weak(&mut x_bins, params.min_bin_support);
    discard_weak(&mut y_bins, params.min_bin_support);
    reconcile(&mut x_bins, &mut y_bins);

    x_bins.sort_by_key(|b| b.coordinate);
    y_bins.sort_by_key(|b| b.coordinate);

    debug!("x bins: {x_bins:?}");
    debug!("y bins: {y_bins:?}");

    (x_bins, y_bins)
}

fn accumulate(coordinates: impl Iterator<Item = i32>, margin: i32) -> Vec<Bin> {
    let mut bins: Vec<Bin> = Vec::new();

    for coordinate in coordinates {
        match bins
            .iter_mut()
            .find(|bin| (bin.coordinate - coordinate).abs() < margin)
        {
            Some(bin) => bin.support += 1,
            None => bins.push(Bin {
                coordinate,
                support: 1,
            }),
        }
    }

    bins
}

/// Bins with too few votes are false intersections from unrelated UI chrome.
fn discard_weak(bins: &mut Vec<Bin>, min_support: u32) {
    bins.retain(|bin| bin.support >= min_support);
}

/// Equalize the axis bin counts by repeatedly dropping the lowest-support
/// bin from the larger axis.
///
/// This assumes a count mismatch stems from isolated noise. It is a known
/// approximation: a systematic mismatch can yield a wrong dimension, and the
/// intended behavior for that case has never been specified.
fn reconcile(x_bins: &mut Vec<Bin>, y_bins: &mut Vec<Bin>) {
    while x_bins.len() != y_bins.len() {
        let counts = (x_bins.len(), y_bins.len());
        let larger = if counts.0 > counts.1 {
            &mut *x_bins
        } else {
            &mut *y_bins
        };

        let Some(weakest) = larger
            .iter()
            .enumerate()
            .min_by_key(|(_, bin)| bin.support)
            .map(|(i, _)| i)
        else {
            break;
        };

        let dropped = larger.swap_remove(weakest);
        warn!(
            "axis bin counts differ ({} vs {}), dropping {dropped:?}",
            counts.0, counts.1
        );
    }
}
