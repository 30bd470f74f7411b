//! Board detection for Queens puzzles rendered in a window.
//!
//! The pipeline recovers a structured board from a raw RGB capture with no
//! external metadata:
//! 1. Scan the buffer for plus-shaped black/white patterns marking grid-line
//!    intersections ([`find_crossings`]).
//! 2. Cluster the candidate points per axis into grid-line coordinates
//!    ([`cluster_axes`]).
//! 3. Sample one pixel per inferred cell and resolve color groups, merging
//!    same-colored but disconnected regions by connectivity
//!    ([`resolve_regions`]).
//!
//! [`detect_board`] wires the stages together. A capture without a visible
//! board is a negative result (`Ok(None)`), not an error; a board the
//! resolver cannot reconcile with the detected dimension is a
//! [`DetectError`].

mod binning;
mod crossings;
mod detector;
mod error;
mod params;
mod regions;

pub use binning::{cluster_axes, Bin};
pub use crossings::find_crossings;
pub use detector::{detect_board, BoardDetection};
pub use error::DetectError;
pub use params::DetectParams;
pub use regions::{resolve_regions, ColorGrid};
