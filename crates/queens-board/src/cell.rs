use serde::{Deserialize, Serialize};

/// Solver-visible state of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Still a candidate for a queen.
    #[default]
    Open,
    /// Eliminated; no queen can stand here.
    Crossed,
    /// Part of the solution.
    Queen,
    /// Solver-internal speculation marker; never produced by detection.
    Marked,
}

/// One board cell.
///
/// `row`, `col` and `group` double as indices into the board's three set
/// arrays; the row and column memberships follow directly from the grid
/// position, the group from the resolved color id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
    pub group: usize,
    pub state: CellState,
}
