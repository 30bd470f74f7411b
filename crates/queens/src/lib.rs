//! High-level facade crate for the `queens-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - click planning from a solved board and its screen layout
//! - (feature-gated) end-to-end helpers that load a screenshot through the
//!   `image` crate and run detection and solving on it.
//!
//! ## Quickstart
//!
//! ```no_run
//! use queens::detect;
//! use queens::DetectParams;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = DetectParams::default();
//! match detect::detect_file("capture.png", &params)? {
//!     Some(detected) => println!("found a size-{} board", detected.board.size()),
//!     None => println!("no board in this capture"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `queens::core`: pixel buffers, points, screen layout, logger.
//! - `queens::vision`: crossing scan, axis binning, region resolution.
//! - `queens::board`: the cell/set data model and the text board format.
//! - `queens::solver`: backtracking solve.
//! - `queens::detect` (feature `image`): end-to-end helpers from image files.

pub use queens_board as board;
pub use queens_core as core;
pub use queens_solver as solver;
pub use queens_vision as vision;

pub use queens_board::{parse_board, Board, CellState};
pub use queens_core::ScreenLayout;
pub use queens_solver::solve;
pub use queens_vision::{detect_board, BoardDetection, DetectParams};

mod clicks;
pub use clicks::click_plan;

#[cfg(feature = "image")]
pub mod detect;
