//! Shared helpers: render a synthetic board capture and save it as PNG.

use std::path::Path;

use queens::core::{RgbImage, RgbPixel};

pub const PITCH: usize = 40;
/// Position of the first interior grid line on both axes.
pub const FIRST_LINE: usize = 100;

pub fn group_color(id: u32) -> RgbPixel {
    const COLORS: [RgbPixel; 5] = [
        RgbPixel::new(187, 163, 226),
        RgbPixel::new(255, 201, 146),
        RgbPixel::new(150, 190, 255),
        RgbPixel::new(179, 223, 160),
        RgbPixel::new(223, 160, 191),
    ];
    COLORS[id as usize]
}

/// Colored cell rectangles with thin black interior grid lines on top.
pub fn render_board(size: usize, cell_colors: &[u32]) -> RgbImage {
    assert_eq!(cell_colors.len(), size * size);

    let board_min = FIRST_LINE - PITCH;
    let board_max = FIRST_LINE + PITCH * (size - 1);
    let extent = board_max + 60;
    let mut img = RgbImage::filled(extent, extent, RgbPixel::WHITE);

    for row in 0..size {
        for col in 0..size {
            img.fill_rect(
                board_min + PITCH * col,
                board_min + PITCH * row,
                board_min + PITCH * (col + 1),
                board_min + PITCH * (row + 1),
                group_color(cell_colors[row * size + col]),
            );
        }
    }

    for k in 0..size - 1 {
        let line = FIRST_LINE + PITCH * k;
        for t in line - 1..=line + 1 {
            img.fill_rect(t, board_min, t + 1, board_max, RgbPixel::BLACK);
            img.fill_rect(board_min, t, board_max, t + 1, RgbPixel::BLACK);
        }
    }

    img
}

pub fn save_png(img: &RgbImage, path: &Path) {
    let out = image::RgbImage::from_fn(img.width() as u32, img.height() as u32, |x, y| {
        let p = img.get(x as usize, y as usize);
        image::Rgb([p.r, p.g, p.b])
    });
    out.save(path).expect("write png");
}

/// A solvable 5x5 layout: groups built around the queen placement
/// (0,0), (2,1), (4,2), (1,3), (3,4).
pub fn solvable_groups() -> Vec<u32> {
    vec![
        0, 0, 1, 1, 1, //
        0, 1, 1, 2, 2, //
        3, 1, 1, 2, 2, //
        3, 3, 4, 2, 2, //
        3, 3, 4, 4, 2, //
    ]
}
