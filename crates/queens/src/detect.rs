//! End-to-end helpers from image files.
//!
//! The capture subsystem's contract is a plain RGB buffer; these helpers
//! fill it from a screenshot on disk via the `image` crate and run the
//! detection pipeline and solver on it.

use std::path::Path;

use log::info;
use queens_board::{Board, BoardError};
use queens_core::{RgbImage, RgbPixel, ScreenLayout};
use queens_solver::{solve, SolveError};
use queens_vision::{detect_board, DetectError, DetectParams};

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] ::image::ImageError),

    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// A detected board together with its screen geometry.
#[derive(Clone, Debug)]
pub struct Detected {
    pub board: Board,
    pub layout: ScreenLayout,
}

/// Convert a decoded `image::RgbImage` into the core buffer type.
pub fn rgb_buffer(img: &::image::RgbImage) -> RgbImage {
    let mut out = RgbImage::filled(
        img.width() as usize,
        img.height() as usize,
        RgbPixel::BLACK,
    );
    for (x, y, p) in img.enumerate_pixels() {
        out.put(x as usize, y as usize, RgbPixel::new(p.0[0], p.0[1], p.0[2]));
    }
    out
}

/// Load a screenshot from disk into the core buffer type.
pub fn load_rgb(path: impl AsRef<Path>) -> Result<RgbImage, PipelineError> {
    let img = ::image::ImageReader::open(path.as_ref())?.decode()?.to_rgb8();
    info!(
        "loaded {}x{} capture from {}",
        img.width(),
        img.height(),
        path.as_ref().display()
    );
    Ok(rgb_buffer(&img))
}

/// Run detection on a screenshot file and build the board model.
///
/// `Ok(None)` mirrors the detector's transient non-detection result.
pub fn detect_file(
    path: impl AsRef<Path>,
    params: &DetectParams,
) -> Result<Option<Detected>, PipelineError> {
    let buffer = load_rgb(path)?;
    let Some(detection) = detect_board(&buffer.view(), params)? else {
        return Ok(None);
    };

    let board = Board::from_groups(detection.size, detection.colors.ids())?;
    Ok(Some(Detected {
        board,
        layout: detection.layout,
    }))
}

/// Detect and solve in one go. Non-detection stays a `None` result.
pub fn detect_and_solve(
    path: impl AsRef<Path>,
    params: &DetectParams,
) -> Result<Option<Detected>, PipelineError> {
    let Some(detected) = detect_file(path, params)? else {
        return Ok(None);
    };

    let solved = solve(&detected.board)?;
    Ok(Some(Detected {
        board: solved,
        layout: detected.layout,
    }))
}
