#![forbid(unsafe_code)]

//! Monte Carlo estimation of the percolation threshold of an n-by-n site
//! grid: the fraction of sites that must be opened, uniformly at random,
//! before an open path connects the top row to the bottom row.

mod experiment;
mod grid;
mod union_find;

pub mod stats;

pub use experiment::PercolationStats;
pub use grid::Percolation;
pub use union_find::UnionFind;

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("grid size must be positive")]
    GridSize,

    #[error("trial count must be positive")]
    Trials,

    #[error("coordinates ({row}, {col}) outside [1, {n}]")]
    Coordinates { row: usize, col: usize, n: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
