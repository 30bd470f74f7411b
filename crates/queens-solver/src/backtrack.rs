use log::{debug, trace};
use queens_board::{Board, CellState};

/// Errors returned by the solver.
#[derive(thiserror::Error, Debug)]
pub enum SolveError {
    #[error("board has no valid queen placement")]
    Unsolvable,
}

/// Solve a board, returning a copy with one queen per row, column, and
/// group and every eliminated cell crossed out. The input is not mutated.
pub fn solve(board: &Board) -> Result<Board, SolveError> {
    let solved = place_from_row(board, 0).ok_or(SolveError::Unsolvable)?;
    debug_assert!(solved.is_solved());
    debug!("solved size-{} board", solved.size());
    Ok(solved)
}

fn place_from_row(board: &Board, row: usize) -> Option<Board> {
    if row == board.size() {
        return Some(board.clone());
    }

    // Snapshot the candidates; propagation below mutates the sets.
    let candidates: Vec<usize> = board.row(row).members().to_vec();

    for index in candidates {
        if board.cell(index).state != CellState::Open {
            continue;
        }

        let mut attempt = board.clone();
        if !place_and_propagate(&mut attempt, index) {
            trace!(
                "row {row}: column {} dead-ends, backtracking",
                board.cell(index).col
            );
            continue;
        }

        if let Some(solved) = place_from_row(&attempt, row + 1) {
            return Some(solved);
        }
    }

    None
}

/// Put a queen on `index` and cross out everything it excludes: the rest of
/// its row, column, and group, plus the four diagonal neighbors. Returns
/// false when a set is left without members, which means some row, column,
/// or group can no longer take a queen.
fn place_and_propagate(board: &mut Board, index: usize) -> bool {
    board.place_queen(index);

    let mut excluded: Vec<usize> = Vec::new();
    for set in board.sets_of(index) {
        excluded.extend(set.members().iter().copied().filter(|&m| m != index));
    }
    excluded.extend(board.diagonal_neighbors(index));

    for cell in excluded {
        if board.cell(cell).state == CellState::Open {
            board.cross(cell);
        }
    }

    (0..board.size()).all(|i| {
        !board.row(i).is_empty() && !board.column(i).is_empty() && !board.group(i).is_empty()
    })
}
