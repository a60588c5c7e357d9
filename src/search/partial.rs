use crate::board::Queen;

/// Queens placed on rows `[0, depth)` plus occupancy of columns and both diagonal families.
///
/// Placement always goes into the next free row; `unplace` removes the most recent queen.
#[derive(Clone, Debug)]
pub struct PartialAssignment {
    n: usize,
    columns: Vec<usize>,
    used_cols: Vec<bool>,
    used_diag: Vec<bool>,
    used_anti: Vec<bool>,
}

impl PartialAssignment {
    pub fn new(n: usize) -> Self {
        let diagonals = (2 * n).saturating_sub(1);
        Self {
            n,
            columns: Vec::with_capacity(n),
            used_cols: vec![false; n],
            used_diag: vec![false; diagonals],
            used_anti: vec![false; diagonals],
        }
    }

    pub fn size(&self) -> usize { self.n }

    /// Number of rows filled so far.
    pub fn depth(&self) -> usize { self.columns.len() }

    pub fn is_complete(&self) -> bool { self.columns.len() == self.n }

    pub fn columns(&self) -> &[usize] { &self.columns }

    /// Whether a queen can go at `column` in the next row.
    pub fn is_free(&self, column: usize) -> bool {
        if column >= self.n || self.is_complete() { return false; }
        let q = Queen::new(self.depth(), column);
        !self.used_cols[column] && !self.used_diag[q.diagonal(self.n)] && !self.used_anti[q.anti_diagonal()]
    }

    /// Put a queen in the next row. Caller must have checked `is_free`.
    pub fn place(&mut self, column: usize) {
        debug_assert!(self.is_free(column), "placing on an attacked square");
        let q = Queen::new(self.depth(), column);
        self.mark(q, true);
        self.columns.push(column);
    }

    /// Remove the last placed queen, returning its column.
    pub fn unplace(&mut self) -> Option<usize> {
        let column = self.columns.pop()?;
        self.mark(Queen::new(self.depth(), column), false);
        Some(column)
    }

    /// First free column in the next row at or after `from`.
    pub fn next_free(&self, from: usize) -> Option<usize> {
        (from..self.n).find(|&c| self.is_free(c))
    }

    fn mark(&mut self, q: Queen, used: bool) {
        self.used_cols[q.column] = used;
        self.used_diag[q.diagonal(self.n)] = used;
        self.used_anti[q.anti_diagonal()] = used;
    }
}
