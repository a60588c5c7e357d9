mod queen;

pub use queen::{attacks, Queen};

use crate::error::{Error, Result};
use crate::search::partial::PartialAssignment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete placement of `n` non-attacking queens, one per row.
///
/// `columns()[r]` is the column of the queen in row `r`. Boards only exist in a
/// valid state: the solver emits them at full depth and `try_from` checks
/// arbitrary input. Ordering is lexicographic on the column sequence, which is
/// the order the solver emits them in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Board {
    columns: Vec<usize>,
}

impl Board {
    /// Wrap columns already known to be valid (search output).
    pub(crate) fn from_search(columns: Vec<usize>) -> Self {
        debug_assert!(is_valid(&columns));
        Self { columns }
    }

    pub fn from_columns(columns: &[usize]) -> Result<Self> { Self::try_from(columns.to_vec()) }

    pub fn size(&self) -> usize { self.columns.len() }

    pub fn columns(&self) -> &[usize] { &self.columns }

    pub fn queens(&self) -> impl Iterator<Item = Queen> + '_ {
        self.columns.iter().enumerate().map(|(row, &column)| Queen::new(row, column))
    }

    pub fn is_occupied(&self, row: usize, column: usize) -> bool {
        self.columns.get(row) == Some(&column)
    }

    /// Reflect across the vertical axis.
    pub fn mirrored(&self) -> Self {
        let n = self.size();
        Self { columns: self.columns.iter().map(|&c| n - 1 - c).collect() }
    }

    /// Row-major grid, row 0 on top: `Q` for a queen, `.` for an empty cell.
    pub fn render(&self) -> String {
        let n = self.size();
        let mut out = String::with_capacity(n * (n + 1));
        for (row, &col) in self.columns.iter().enumerate() {
            if row > 0 { out.push('\n'); }
            out.extend((0..n).map(|c| if c == col { 'Q' } else { '.' }));
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.render()) }
}

impl TryFrom<Vec<usize>> for Board {
    type Error = Error;

    fn try_from(columns: Vec<usize>) -> Result<Self> {
        let n = columns.len();
        if let Some((row, &col)) = columns.iter().enumerate().find(|&(_, &c)| c >= n) {
            return Err(Error::InvalidArgument(format!("row {row}: column {col} out of range for a {n}x{n} board")));
        }
        if !is_valid(&columns) {
            return Err(Error::InvalidArgument(format!("queens attack each other in {columns:?}")));
        }
        Ok(Self { columns })
    }
}

impl From<Board> for Vec<usize> {
    fn from(board: Board) -> Self { board.columns }
}

/// True when `columns` places one queen per row with no two attacking,
/// and every column lies on the `columns.len()`-sized board.
pub fn is_valid(columns: &[usize]) -> bool {
    let mut partial = PartialAssignment::new(columns.len());
    for &c in columns {
        if !partial.is_free(c) { return false; }
        partial.place(c);
    }
    true
}
