//! Queens solver.
//!
//! The rules: exactly one queen per row, per column, and per color group,
//! and no two queens on diagonally adjacent cells. The solver walks the
//! board row by row, speculating each open cell of the current row on a
//! board clone and propagating eliminations before descending.

mod backtrack;

pub use backtrack::{solve, SolveError};
