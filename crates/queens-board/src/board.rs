use log::trace;
use serde::{Deserialize, Serialize};

use crate::{Cell, CellSet, CellState, SetKind};

/// Errors raised when constructing a board from a group grid.
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    #[error("expected {expected} group ids, got {got}")]
    WrongCellCount { expected: usize, got: usize },

    #[error("group id {id} out of range for a size-{size} board")]
    GroupOutOfRange { id: u32, size: usize },

    #[error("group {group} has no cells")]
    EmptyGroup { group: usize },
}

/// A size-`N` Queens board.
///
/// Cloning yields an independent deep copy; sets reference cells by index,
/// so the copy shares no state with the original.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    rows: Vec<CellSet>,
    columns: Vec<CellSet>,
    groups: Vec<CellSet>,
}

impl Board {
    /// Build a board from a dense, row-major group-id grid.
    ///
    /// The grid must hold `size * size` ids, each in `[0, size)`, with every
    /// id used at least once: a solvable board has exactly `size` groups.
    pub fn from_groups(size: usize, group_ids: &[u32]) -> Result<Board, BoardError> {
        if group_ids.len() != size * size {
            return Err(BoardError::WrongCellCount {
                expected: size * size,
                got: group_ids.len(),
            });
        }
        if let Some(&id) = group_ids.iter().find(|&&id| id as usize >= size) {
            return Err(BoardError::GroupOutOfRange { id, size });
        }

        let mut cells = Vec::with_capacity(size * size);
        let mut rows: Vec<CellSet> = (0..size).map(|i| CellSet::new(SetKind::Row, i)).collect();
        let mut columns: Vec<CellSet> = (0..size)
            .map(|i| CellSet::new(SetKind::Column, i))
            .collect();
        let mut groups: Vec<CellSet> = (0..size).map(|i| CellSet::new(SetKind::Group, i)).collect();

        for row in 0..size {
            for col in 0..size {
                let index = row * size + col;
                let group = group_ids[index] as usize;

                cells.push(Cell {
                    col,
                    row,
                    group,
                    state: CellState::Open,
                });
                rows[row].push(index);
                columns[col].push(index);
                groups[group].push(index);
            }
        }

        if let Some(empty) = groups.iter().position(|g| g.is_empty()) {
            return Err(BoardError::EmptyGroup { group: empty });
        }

        Ok(Board {
            size,
            cells,
            rows,
            columns,
            groups,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cell_index(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < self.size && row < self.size);
        row * self.size + col
    }

    #[inline]
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn row(&self, index: usize) -> &CellSet {
        &self.rows[index]
    }

    #[inline]
    pub fn column(&self, index: usize) -> &CellSet {
        &self.columns[index]
    }

    #[inline]
    pub fn group(&self, index: usize) -> &CellSet {
        &self.groups[index]
    }

    /// The three sets a cell belongs to.
    pub fn sets_of(&self, index: usize) -> [&CellSet; 3] {
        let cell = &self.cells[index];
        [
            &self.rows[cell.row],
            &self.columns[cell.col],
            &self.groups[cell.group],
        ]
    }

    /// Eliminate a cell: mark it crossed and retire it from its row, column,
    /// and group. Crossing an already crossed cell is a no-op.
    pub fn cross(&mut self, index: usize) {
        let cell = self.cells[index];
        if cell.state == CellState::Crossed {
            return;
        }
        trace!("crossing cell ({}, {})", cell.col, cell.row);

        self.cells[index].state = CellState::Crossed;
        self.rows[cell.row].remove_member(index);
        self.columns[cell.col].remove_member(index);
        self.groups[cell.group].remove_member(index);
    }

    /// Mark a cell as part of the solution. The cell stays in its sets; the
    /// solver retires the rest of them separately.
    pub fn place_queen(&mut self, index: usize) {
        debug_assert_eq!(self.cells[index].state, CellState::Open);
        self.cells[index].state = CellState::Queen;
    }

    /// Solver-internal speculation marker.
    pub fn mark(&mut self, index: usize) {
        debug_assert_eq!(self.cells[index].state, CellState::Open);
        self.cells[index].state = CellState::Marked;
    }

    /// Indices of queen cells, row-major.
    pub fn queens(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.state == CellState::Queen)
            .map(|(i, _)| i)
    }

    /// The up-to-four diagonally adjacent cells.
    pub fn diagonal_neighbors(&self, index: usize) -> Vec<usize> {
        let cell = &self.cells[index];
        let mut neighbors = Vec::with_capacity(4);

        for (dc, dr) in [(-1i32, -1i32), (1, -1), (-1, 1), (1, 1)] {
            let col = cell.col as i32 + dc;
            let row = cell.row as i32 + dr;
            if col >= 0 && row >= 0 && (col as usize) < self.size && (row as usize) < self.size {
                neighbors.push(self.cell_index(col as usize, row as usize));
            }
        }

        neighbors
    }

    /// True when every row, column, and group holds exactly one queen.
    pub fn is_solved(&self) -> bool {
        let mut per_row = vec![0usize; self.size];
        let mut per_col = vec![0usize; self.size];
        let mut per_group = vec![0usize; self.size];

        for cell in &self.cells {
            if cell.state == CellState::Queen {
                per_row[cell.row] += 1;
                per_col[cell.col] += 1;
                per_group[cell.group] += 1;
            }
        }

        let one = |counts: &[usize]| counts.iter().all(|&c| c == 1);
        one(&per_row) && one(&per_col) && one(&per_group)
    }

    /// Structural sanity check: each set family partitions the full cell
    /// arena, and every membership agrees with the owning cell.
    pub fn check_partitions(&self) -> bool {
        for family in [&self.rows, &self.columns, &self.groups] {
            let mut seen = vec![false; self.cells.len()];
            for set in family {
                for &member in set.members() {
                    if member >= self.cells.len() || seen[member] {
                        return false;
                    }
                    seen[member] = true;

                    let cell = &self.cells[member];
                    let expected = match set.kind() {
                        SetKind::Row => cell.row,
                        SetKind::Column => cell.col,
                        SetKind::Group => cell.group,
                    };
                    if expected != set.index() {
                        return false;
                    }
                }
            }
            // Only crossed cells may be missing from a family.
            for (index, cell) in self.cells.iter().enumerate() {
                if seen[index] == (cell.state == CellState::Crossed) {
                    return false;
                }
            }
        }
        true
    }
}
