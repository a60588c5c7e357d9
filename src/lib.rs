// Backtracking N-Queens solver: lazy enumeration and counting
pub mod error;
pub mod board;
pub mod search;
pub mod count;

pub use board::{attacks, is_valid, Board, Queen};
pub use count::{count, count_with_params, CountParams, CountResult};
pub use error::{Error, Result};
pub use search::{solve, Solutions};
