use serde::{Deserialize, Serialize};

/// A single queen at `(row, column)`, both 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Queen {
    pub row: usize,
    pub column: usize,
}

impl Queen {
    pub fn new(row: usize, column: usize) -> Self { Self { row, column } }

    /// Index of the `row - column` diagonal, shifted to be non-negative on an `n`-board.
    pub fn diagonal(&self, n: usize) -> usize { n + self.row - self.column - 1 }

    /// Index of the `row + column` anti-diagonal.
    pub fn anti_diagonal(&self) -> usize { self.row + self.column }
}

/// True when the two queens share a row, a column or a diagonal.
/// A queen does not attack itself.
pub fn attacks(a: Queen, b: Queen) -> bool {
    if a == b { return false; }
    a.row == b.row
        || a.column == b.column
        || a.row.abs_diff(b.row) == a.column.abs_diff(b.column)
}
