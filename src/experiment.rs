use rand::Rng;

use crate::{stats, Error, Percolation, Result};

////////////////////////////////////////////////////////////////////////////////

/// Multiplier of the standard error for a 95% confidence interval.
const CONFIDENCE_95: f64 = 1.96;

/// Monte Carlo estimate of the percolation threshold.
///
/// Runs independent trials on fresh n-by-n grids, opening uniformly random
/// sites until each grid percolates, and records the fraction of open sites
/// at that moment as one threshold sample per trial.
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` independent trials on n-by-n grids, drawing sites from
    /// `rng`.
    ///
    /// Each trial repeatedly draws a `(row, col)` pair uniformly from
    /// `[1, n] x [1, n]`; a draw that hits an already open site is simply
    /// redrawn. The loop has no upper bound, termination is almost-sure
    /// rather than guaranteed.
    ///
    /// # Errors
    ///
    /// [`Error::GridSize`] if `n` is zero, [`Error::Trials`] if `trials`
    /// is zero.
    pub fn run<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(Error::GridSize);
        }
        if trials == 0 {
            return Err(Error::Trials);
        }

        let mut thresholds = Vec::with_capacity(trials);

        for trial in 0..trials {
            let threshold = run_trial(n, rng)?;

            log::debug!("trial {trial}: threshold sample {threshold}");
            thresholds.push(threshold);
        }

        Ok(Self { thresholds })
    }

    /// Runs `trials` independent trials on n-by-n grids using the
    /// thread-local random generator.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::run(n, trials, &mut rand::thread_rng())
    }

    /// Returns the recorded threshold samples, one per trial, in trial
    /// order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Returns the sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.thresholds)
    }

    /// Returns the sample standard deviation of the percolation threshold.
    ///
    /// With a single trial the n - 1 denominator makes this NaN.
    pub fn stddev(&self) -> f64 {
        stats::stddev(&self.thresholds)
    }

    /// Returns the low endpoint of the 95% confidence interval for the true
    /// threshold. NaN whenever [`stddev`](Self::stddev) is.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_interval()
    }

    /// Returns the high endpoint of the 95% confidence interval for the
    /// true threshold. NaN whenever [`stddev`](Self::stddev) is.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_interval()
    }

    fn half_interval(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }
}

fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;

    while !grid.percolates() {
        let row = rng.gen_range(1..=n);
        let col = rng.gen_range(1..=n);

        if grid.is_open(row, col)? {
            log::trace!("redrawing, ({row}, {col}) already open");
            continue;
        }

        grid.open(row, col)?;
    }

    Ok(grid.number_of_open_sites() as f64 / (n * n) as f64)
}

////////////////////////////////////////////////////////////////////////////////
