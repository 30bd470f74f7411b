use queens_board::{Board, CellState};
use queens_core::ScreenLayout;

/// Screen positions to double-click for a solved board, row-major over the
/// queen cells.
///
/// The layout should already carry the window offset (see
/// [`ScreenLayout::translate`]) so the returned coordinates are absolute.
pub fn click_plan(board: &Board, layout: &ScreenLayout) -> Vec<(i32, i32)> {
    board
        .cells()
        .iter()
        .filter(|cell| cell.state == CellState::Queen)
        .map(|cell| layout.cell_center(cell.col, cell.row))
        .collect()
}
