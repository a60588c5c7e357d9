// Counting search: same backtracking as `solve`, but boards are never materialised.
use crate::error::{board_size, Result};
use crate::search::partial::PartialAssignment;
use log::{debug, warn};
use rayon::prelude::*;
use std::time::Instant;

pub const THREADS_ENV: &str = "NQUEENS_THREADS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountParams {
    /// Worker threads for the root split; 0 and 1 both mean single-threaded.
    pub threads: usize,
}

impl Default for CountParams {
    fn default() -> Self { Self { threads: 1 } }
}

impl CountParams {
    /// Defaults, with `threads` overridden by `NQUEENS_THREADS` when it parses as a positive integer.
    pub fn from_env() -> Self {
        let mut p = Self::default();
        if let Some(t) = env_parse_usize(THREADS_ENV).filter(|&t| t > 0) { p.threads = t; }
        p
    }
}

fn env_parse_usize(name: &str) -> Option<usize> { std::env::var(name).ok().and_then(|s| s.trim().parse().ok()) }

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountResult {
    pub solutions: u64,
    /// Queens placed during the search.
    pub nodes: u64,
}

impl std::ops::Add for CountResult {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { solutions: self.solutions + rhs.solutions, nodes: self.nodes + rhs.nodes }
    }
}

/// Number of solutions for an `n`-board.
pub fn count(n: i64) -> Result<u64> {
    Ok(count_with_params(n, CountParams::default())?.solutions)
}

pub fn count_with_params(n: i64, params: CountParams) -> Result<CountResult> {
    let n = board_size(n)?;
    let threads = params.threads.max(1);
    debug!("count n={} threads={}", n, threads);
    let t0 = Instant::now();
    let res = if threads <= 1 || n < 2 { count_sequential(n) } else { count_root_split(n, threads) };
    debug!("count n={} solutions={} nodes={} elapsed={:.3}s", n, res.solutions, res.nodes, t0.elapsed().as_secs_f64());
    Ok(res)
}

fn count_sequential(n: usize) -> CountResult {
    let mut partial = PartialAssignment::new(n);
    let mut res = CountResult::default();
    descend(&mut partial, &mut res);
    res
}

// Each first-row column is an independent subtree with its own occupancy sets.
fn count_root_split(n: usize, threads: usize) -> CountResult {
    let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool,
        Err(e) => {
            warn!("could not build {}-thread pool ({}), counting single-threaded", threads, e);
            return count_sequential(n);
        }
    };
    pool.install(|| {
        (0..n).into_par_iter().map(|col| {
            let mut partial = PartialAssignment::new(n);
            partial.place(col);
            let mut res = CountResult { solutions: 0, nodes: 1 };
            descend(&mut partial, &mut res);
            res
        }).reduce(CountResult::default, |a, b| a + b)
    })
}

// Place/recurse/unplace without cloning the assignment.
fn descend(partial: &mut PartialAssignment, res: &mut CountResult) {
    if partial.is_complete() { res.solutions += 1; return; }
    let mut from = 0;
    while let Some(col) = partial.next_free(from) {
        partial.place(col);
        res.nodes += 1;
        descend(partial, res);
        partial.unplace();
        from = col + 1;
    }
}
