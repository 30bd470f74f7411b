//! ANSI terminal rendering of a board.

use std::fmt;

use crate::{Board, CellState};

/// Per-group foreground colors, cycled for boards with many groups.
const TEXT_COLORS: [u8; 15] = [31, 32, 33, 34, 35, 36, 37, 90, 91, 92, 93, 94, 95, 96, 97];

fn glyph(state: CellState) -> char {
    match state {
        CellState::Open => 'o',
        CellState::Crossed => '.',
        CellState::Queen => 'Q',
        CellState::Marked => 'M',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size() {
            write!(f, "{col:2}")?;
        }
        writeln!(f)?;

        for row in 0..self.size() {
            write!(f, "{row:2} ")?;
            for col in 0..self.size() {
                let cell = self.cell(self.cell_index(col, row));
                let color = TEXT_COLORS[cell.group % TEXT_COLORS.len()];
                write!(f, "\x1b[{color}m {}", glyph(cell.state))?;
            }
            writeln!(f, "\x1b[0m")?;
        }

        Ok(())
    }
}
