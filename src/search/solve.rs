use crate::board::Board;
use crate::error::{board_size, Result};
use crate::search::partial::PartialAssignment;
use log::{debug, trace};

/// Lazily enumerate every solution for an `n`-board in lexicographic order.
///
/// Fails with `InvalidArgument` for negative `n`. An unsolvable size (2, 3)
/// is an empty iterator, not an error.
pub fn solve(n: i64) -> Result<Solutions> {
    Ok(Solutions::new(board_size(n)?))
}

/// Resumable depth-first search. Each `next()` continues from the last emitted
/// board, so the iterator only ever holds one partial assignment.
#[derive(Clone, Debug)]
pub struct Solutions {
    partial: PartialAssignment,
    // first column to try in the row being filled
    next_col: usize,
    emitted: u64,
    done: bool,
}

impl Solutions {
    fn new(n: usize) -> Self {
        Self { partial: PartialAssignment::new(n), next_col: 0, emitted: 0, done: false }
    }

    pub fn size(&self) -> usize { self.partial.size() }

    /// Step back one row; the popped row resumes at the column after the one removed.
    fn backtrack(&mut self) {
        match self.partial.unplace() {
            Some(col) => self.next_col = col + 1,
            None => {
                self.done = true;
                debug!("n={} search exhausted after {} solutions", self.size(), self.emitted);
            }
        }
    }
}

impl Iterator for Solutions {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        while !self.done {
            if self.partial.is_complete() {
                let board = Board::from_search(self.partial.columns().to_vec());
                self.emitted += 1;
                trace!("solution #{}: {:?}", self.emitted, board.columns());
                self.backtrack();
                return Some(board);
            }
            match self.partial.next_free(self.next_col) {
                Some(col) => {
                    self.partial.place(col);
                    self.next_col = 0;
                }
                None => self.backtrack(),
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Solutions {}
