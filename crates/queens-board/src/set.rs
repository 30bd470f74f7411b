use serde::{Deserialize, Serialize};

/// The three partition families a board maintains over its cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetKind {
    Row,
    Column,
    Group,
}

/// One member of a partition: a row, a column, or a color group.
///
/// `members` holds the indices of the still-active cells; crossing a cell
/// removes it here. Order is not meaningful.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSet {
    kind: SetKind,
    index: usize,
    members: Vec<usize>,
}

impl CellSet {
    pub(crate) fn new(kind: SetKind, index: usize) -> Self {
        Self {
            kind,
            index,
            members: Vec::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> SetKind {
        self.kind
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Indices of the still-active member cells.
    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn push(&mut self, cell: usize) {
        self.members.push(cell);
    }

    /// Remove a cell by filling its slot with the last member.
    pub(crate) fn remove_member(&mut self, cell: usize) -> bool {
        match self.members.iter().position(|&m| m == cell) {
            Some(at) => {
                self.members.swap_remove(at);
                true
            }
            None => false,
        }
    }
}
