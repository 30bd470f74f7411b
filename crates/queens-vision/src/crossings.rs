//! Grid-line crossing detection.
//!
//! A crossing is a pixel where a horizontal and a vertical grid line meet.
//! It is recognized by a 3×3 sample pattern at `crossing_offset` radius:
//! center, up, down, left and right samples are black, the four diagonal
//! samples are not.

use log::debug;
use queens_core::{PixelPoint, RgbImageView};

use crate::DetectParams;

/// Expected darkness of the 3×3 samples around a crossing.
const PLUS_PATTERN: [[bool; 3]; 3] = [
    [false, true, false],
    [true, true, true],
    [false, true, false],
];

/// Scan the buffer for grid-line intersections.
///
/// The buffer is read-only; de-duplication of adjacent detections runs on a
/// separate visited bitmap, so any pixel next to an already confirmed
/// crossing is skipped without being re-tested.
pub fn find_crossings(img: &RgbImageView<'_>, params: &DetectParams) -> Vec<PixelPoint> {
    let margin = params.effective_border_margin();
    let mut points = Vec::new();

    if img.width <= 2 * margin || img.height <= 2 * margin {
        debug!(
            "buffer {}x{} smaller than twice the border margin {margin}",
            img.width, img.height
        );
        return points;
    }

    let mut confirmed = vec![false; img.width * img.height];
    let offset = params.crossing_offset as i32;

    for y in margin..img.height - margin {
        for x in margin..img.width - margin {
            let idx = y * img.width + x;

            // A confirmed neighbor means this pixel sits on the same
            // intersection.
            if confirmed[idx - 1] || confirmed[idx - img.width] || confirmed[idx - img.width - 1] {
                continue;
            }

            if matches_plus(img, x as i32, y as i32, offset, params.black_threshold) {
                confirmed[idx] = true;
                points.push(PixelPoint::new(x as i32, y as i32));
            }
        }
    }

    debug!("found {} crossing candidates", points.len());
    points
}

fn matches_plus(img: &RgbImageView<'_>, cx: i32, cy: i32, offset: i32, threshold: u8) -> bool {
    for (row, expectations) in PLUS_PATTERN.iter().enumerate() {
        for (col, &expect_dark) in expectations.iter().enumerate() {
            let sx = cx + (col as i32 - 1) * offset;
            let sy = cy + (row as i32 - 1) * offset;
            let pixel = img.get(sx as usize, sy as usize);
            if pixel.is_darker_than(threshold) != expect_dark {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use queens_core::{RgbImage, RgbPixel};

    /// Draw a thin plus: arms long enough for the ±offset samples, one pixel
    /// thick so only the exact center matches the pattern.
    fn draw_plus(img: &mut RgbImage, cx: usize, cy: usize, arm: usize) {
        for d in 0..=arm {
            img.put(cx + d, cy, RgbPixel::BLACK);
            img.put(cx - d, cy, RgbPixel::BLACK);
            img.put(cx, cy + d, RgbPixel::BLACK);
            img.put(cx, cy - d, RgbPixel::BLACK);
        }
    }

    #[test]
    fn finds_a_single_plus() {
        let mut img = RgbImage::filled(100, 100, RgbPixel::WHITE);
        draw_plus(&mut img, 50, 50, 6);

        let points = find_crossings(&img.view(), &DetectParams::default());
        assert_eq!(points, vec![PixelPoint::new(50, 50)]);
    }

    #[test]
    fn blank_buffer_yields_no_points() {
        let img = RgbImage::filled(200, 200, RgbPixel::WHITE);
        assert!(find_crossings(&img.view(), &DetectParams::default()).is_empty());
    }

    #[test]
    fn ignores_crossings_inside_the_border_margin() {
        let mut img = RgbImage::filled(100, 100, RgbPixel::WHITE);
        // Inside the default 32 px margin.
        draw_plus(&mut img, 20, 20, 6);

        assert!(find_crossings(&img.view(), &DetectParams::default()).is_empty());
    }

    #[test]
    fn thick_lines_do_not_match_the_diagonal_samples() {
        let mut img = RgbImage::filled(100, 100, RgbPixel::WHITE);
        // A solid 20x20 block is dark at the diagonals too.
        img.fill_rect(40, 40, 60, 60, RgbPixel::BLACK);

        assert!(find_crossings(&img.view(), &DetectParams::default()).is_empty());
    }

    #[test]
    fn buffer_is_left_untouched() {
        let mut img = RgbImage::filled(100, 100, RgbPixel::WHITE);
        draw_plus(&mut img, 50, 50, 6);
        let before = img.clone();

        let _ = find_crossings(&img.view(), &DetectParams::default());
        assert_eq!(img, before);
    }
}
