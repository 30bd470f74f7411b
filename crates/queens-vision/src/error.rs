/// Errors returned by the board detector.
///
/// These mark a capture that *looks* like a board but cannot be resolved
/// into a valid one. Transient "nothing detected" outcomes are not errors;
/// [`detect_board`](crate::detect_board) reports them as `Ok(None)`.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("found {found} distinct colors on a size-{size} board")]
    TooManyColors { found: usize, size: usize },

    #[error("resolved {regions} connected groups on a size-{size} board")]
    GroupCountMismatch { regions: usize, size: usize },
}
