//! Text board format.
//!
//! A board file is `N * N` whitespace-separated tokens; identical tokens put
//! cells in the same group. Any non-whitespace characters form a token, so
//! `a a b` and `red red blue` describe the same two groups.

use crate::{Board, BoardError};

/// Errors raised while reading the text board format.
#[derive(thiserror::Error, Debug)]
pub enum ParseBoardError {
    #[error("board text contains no tokens")]
    Empty,

    #[error("token count {tokens} is not a perfect square")]
    NotSquare { tokens: usize },

    #[error("found {groups} distinct tokens for a size-{size} board")]
    WrongGroupCount { groups: usize, size: usize },

    #[error(transparent)]
    Invalid(#[from] BoardError),
}

/// Parse the token format into a board.
///
/// Group ids are assigned in order of first token occurrence, matching the
/// id assignment of the visual detector.
pub fn parse_board(text: &str) -> Result<Board, ParseBoardError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ParseBoardError::Empty);
    }

    let size = integer_sqrt(tokens.len()).ok_or(ParseBoardError::NotSquare {
        tokens: tokens.len(),
    })?;

    let mut seen: Vec<&str> = Vec::new();
    let mut ids = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let id = match seen.iter().position(|known| known == token) {
            Some(at) => at,
            None => {
                seen.push(token);
                seen.len() - 1
            }
        };
        ids.push(id as u32);
    }

    // Exactly one group per queen; anything else cannot be solved.
    if seen.len() != size {
        return Err(ParseBoardError::WrongGroupCount {
            groups: seen.len(),
            size,
        });
    }

    Ok(Board::from_groups(size, &ids)?)
}

fn integer_sqrt(n: usize) -> Option<usize> {
    let mut root = 0usize;
    while root * root < n {
        root += 1;
    }
    (root * root == n).then_some(root)
}
