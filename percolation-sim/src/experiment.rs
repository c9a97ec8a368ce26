//! Monte Carlo estimation of the percolation threshold.
//!
//! One trial starts from a fully blocked grid and opens uniformly random sites
//! until the grid percolates. The fraction of sites open at that moment is one
//! sample of p*. Draws may repeat; an already open site is left as is and not
//! counted again. A trial always terminates: at worst every site is open.
//!
//! Trials are independent. With the `parallel` feature they run on the rayon
//! pool, each with its own RNG seeded from the run seed and the trial index,
//! so a seeded run gives the same thresholds in either mode.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{PercolationError, Result};
use crate::grid::{site_count, PercolationGrid};
use crate::sampler::{random_site, SiteSampler};
use crate::stats::ThresholdStats;

/// Spacing between per-trial seeds derived from one run seed.
const TRIAL_SEED_STRIDE: u64 = 7919;

/// Seed for trial `trial` of a run seeded with `seed`.
pub fn trial_seed(seed: u64, trial: usize) -> u64 {
    seed.wrapping_add((trial as u64).wrapping_mul(TRIAL_SEED_STRIDE))
}

/// Run a single trial on a fresh N×N grid.
///
/// Returns the fraction of sites open when the grid first percolates.
pub fn run_trial<S: SiteSampler + ?Sized>(n: usize, sampler: &mut S) -> Result<f64> {
    let num_sites = site_count(n)?;
    let mut grid = PercolationGrid::new(n)?;
    while !grid.percolates() {
        let (row, col) = random_site(sampler, n);
        grid.open(row, col)?;
    }
    Ok(grid.open_sites() as f64 / num_sites as f64)
}

/// Repeated percolation trials on an N×N grid.
#[derive(Debug, Clone)]
pub struct ExperimentRunner {
    n: usize,
    trials: usize,
    seed: Option<u64>,
}

impl ExperimentRunner {
    /// Configure `trials` experiments on an `n`×`n` grid.
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        site_count(n)?;
        if trials == 0 {
            return Err(PercolationError::InvalidArgument(
                "number of trials must be positive".into(),
            ));
        }
        Ok(Self {
            n,
            trials,
            seed: None,
        })
    }

    /// Fix the run seed, making [`run`](Self::run) reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Grid dimension.
    pub fn grid_size(&self) -> usize {
        self.n
    }

    /// Number of trials.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Run every trial and summarize the thresholds.
    ///
    /// Without a fixed seed, the run seed is drawn from the thread RNG.
    pub fn run(&self) -> Result<ThresholdStats> {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        debug!(n = self.n, trials = self.trials, seed, "starting percolation experiment");

        let thresholds = self.seeded_thresholds(seed)?;
        let stats = ThresholdStats::from_thresholds(thresholds)?;

        debug!(
            n = self.n,
            mean = stats.mean(),
            stddev = stats.stddev(),
            "percolation experiment complete"
        );
        Ok(stats)
    }

    /// Run every trial sequentially, drawing all sites from `sampler`.
    pub fn run_with<S: SiteSampler + ?Sized>(&self, sampler: &mut S) -> Result<ThresholdStats> {
        let thresholds = (0..self.trials)
            .map(|_| run_trial(self.n, sampler))
            .collect::<Result<Vec<_>>>()?;
        ThresholdStats::from_thresholds(thresholds)
    }

    #[cfg(feature = "parallel")]
    fn seeded_thresholds(&self, seed: u64) -> Result<Vec<f64>> {
        (0..self.trials)
            .into_par_iter()
            .map(|trial| self.seeded_trial(seed, trial))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn seeded_thresholds(&self, seed: u64) -> Result<Vec<f64>> {
        (0..self.trials)
            .map(|trial| self.seeded_trial(seed, trial))
            .collect()
    }

    fn seeded_trial(&self, seed: u64, trial: usize) -> Result<f64> {
        let mut rng = StdRng::seed_from_u64(trial_seed(seed, trial));
        let threshold = run_trial(self.n, &mut rng)?;
        trace!(trial, threshold, "trial percolated");
        Ok(threshold)
    }
}

/// Threshold statistics for one grid size in a sweep.
#[derive(Debug, Clone)]
pub struct SweepEntry {
    /// Grid dimension.
    pub n: usize,
    /// Statistics over that size's trials.
    pub stats: ThresholdStats,
}

/// Run the same number of seeded trials for each grid size.
///
/// Entries come back in the order of `sizes`.
pub fn size_sweep(sizes: &[usize], trials: usize, seed: u64) -> Result<Vec<SweepEntry>> {
    sizes
        .iter()
        .map(|&n| {
            let stats = ExperimentRunner::new(n, trials)?.with_seed(seed).run()?;
            Ok(SweepEntry { n, stats })
        })
        .collect()
}
