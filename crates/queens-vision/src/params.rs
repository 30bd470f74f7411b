use serde::{Deserialize, Serialize};

/// Pixels at the buffer edge that are never scanned for crossings. Browser
/// chrome lives there, and the sampling pattern must stay in bounds.
pub const MIN_BORDER_MARGIN: usize = 16;

/// Tuning knobs for board detection.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DetectParams {
    /// Sampling radius of the plus-shaped crossing pattern, in pixels.
    pub crossing_offset: u32,

    /// Pixels to ignore at each buffer edge. Values below
    /// [`MIN_BORDER_MARGIN`] (or below `crossing_offset`) are raised to keep
    /// the sampling pattern inside the buffer.
    pub border_margin: usize,

    /// A pixel is "black" when all three channels fall below this value.
    pub black_threshold: u8,

    /// Max distance between a point coordinate and a bin representative for
    /// the point to join the bin. Grid lines are typically several times
    /// wider than this.
    pub bin_margin: i32,

    /// Bins with fewer supporting points are discarded as noise from
    /// unrelated UI crossings.
    pub min_bin_support: u32,

    /// Fewer candidate points than this means no board is visible. A 5×5
    /// board (the smallest solvable Queens) has 16 interior crossings.
    pub min_points: usize,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            crossing_offset: 5,
            border_margin: 32,
            black_threshold: 10,
            bin_margin: 12,
            min_bin_support: 3,
            min_points: 16,
        }
    }
}

impl DetectParams {
    /// Border margin clamped so the crossing pattern cannot sample outside
    /// the buffer.
    pub(crate) fn effective_border_margin(&self) -> usize {
        self.border_margin
            .max(MIN_BORDER_MARGIN)
            .max(self.crossing_offset as usize)
    }
}
