//! Screenshot-to-click-plan pipeline tests.

mod common;

use common::{render_board, save_png, solvable_groups, FIRST_LINE, PITCH};
use queens::detect::{detect_and_solve, detect_file};
use queens::{click_plan, CellState, DetectParams};

#[test]
fn detects_and_solves_a_rendered_capture() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("capture.png");
    save_png(&render_board(5, &solvable_groups()), &path);

    let detected = detect_and_solve(&path, &DetectParams::default())
        .expect("pipeline")
        .expect("board visible");

    assert_eq!(detected.board.size(), 5);
    assert!(detected.board.is_solved());
    assert_eq!(detected.layout.pitch, PITCH as i32);

    // Every queen click lands on a cell center of the detected grid.
    let plan = click_plan(&detected.board, &detected.layout.translate(500, 300));
    assert_eq!(plan.len(), 5);
    for (x, y) in plan {
        assert_eq!((x - 500 - detected.layout.origin_x) % PITCH as i32, 0);
        assert_eq!((y - 300 - detected.layout.origin_y) % PITCH as i32, 0);
    }
}

#[test]
fn detect_only_leaves_the_board_open() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("capture.png");
    save_png(&render_board(5, &solvable_groups()), &path);

    let detected = detect_file(&path, &DetectParams::default())
        .expect("pipeline")
        .expect("board visible");

    assert!(detected
        .board
        .cells()
        .iter()
        .all(|c| c.state == CellState::Open));
    assert!(detected.board.check_partitions());

    let ideal = (FIRST_LINE - PITCH / 2) as i32;
    assert!((detected.layout.origin_x - ideal).abs() <= 2);
    assert!((detected.layout.origin_y - ideal).abs() <= 2);
}

#[test]
fn blank_capture_reports_no_board() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("blank.png");
    save_png(
        &queens::core::RgbImage::filled(320, 240, queens::core::RgbPixel::WHITE),
        &path,
    );

    let result = detect_file(&path, &DetectParams::default()).expect("pipeline");
    assert!(result.is_none());
}

#[test]
fn missing_file_is_an_io_error() {
    let result = detect_file("definitely/not/here.png", &DetectParams::default());
    assert!(result.is_err());
}
