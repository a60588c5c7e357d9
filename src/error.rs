use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Board size was negative, or a column sequence does not describe a valid board.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convert a caller-supplied board size into a `usize`, rejecting negatives.
pub(crate) fn board_size(n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| Error::InvalidArgument(format!("board size must be non-negative, got {n}")))
}
