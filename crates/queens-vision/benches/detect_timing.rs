use criterion::{black_box, criterion_group, criterion_main, Criterion};
use queens_core::{RgbImage, RgbPixel};
use queens_vision::{detect_board, DetectParams};

const PITCH: usize = 40;
const FIRST_LINE: usize = 100;

/// Compact copy of the test renderer: one color per row, interior lines on
/// top, white surround.
fn render_board(size: usize) -> RgbImage {
    let board_min = FIRST_LINE - PITCH;
    let board_max = FIRST_LINE + PITCH * (size - 1);
    let extent = board_max + 60;
    let mut img = RgbImage::filled(extent, extent, RgbPixel::WHITE);

    for row in 0..size {
        let color = RgbPixel::new((120 + 10 * row) as u8, 200, 160);
        img.fill_rect(
            board_min,
            board_min + PITCH * row,
            board_max,
            board_min + PITCH * (row + 1),
            color,
        );
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

fn bench_detect(c: &mut Criterion) {
    let params = DetectParams::default();

    for size in [5usize, 9, 11] {
        let img = render_board(size);
        c.bench_function(&format!("detect_board_{size}x{size}"), |b| {
            b.iter(|| detect_board(black_box(&img.view()), &params))
        });
    }
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
