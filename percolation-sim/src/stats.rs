//! Summary statistics over per-trial threshold estimates.

use crate::error::{PercolationError, Result};

/// z-score for a two-sided 95% confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Threshold estimates from a completed experiment.
///
/// Built once from the full set of trial results and never mutated, so every
/// accessor is a pure function of the recorded values.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdStats {
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl ThresholdStats {
    /// Summarize a non-empty set of thresholds, each in `[0, 1]`.
    pub fn from_thresholds(thresholds: Vec<f64>) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(PercolationError::InvalidArgument(
                "at least one threshold is required".into(),
            ));
        }
        if let Some(bad) = thresholds.iter().find(|t| !(0.0..=1.0).contains(*t)) {
            return Err(PercolationError::InvalidArgument(format!(
                "threshold {bad} is outside [0, 1]"
            )));
        }

        let t = thresholds.len() as f64;
        let mean = thresholds.iter().sum::<f64>() / t;
        // A single sample carries no spread; report 0 rather than 0/0.
        let stddev = if thresholds.len() == 1 {
            0.0
        } else {
            let variance = thresholds
                .iter()
                .map(|&x| (x - mean).powi(2))
                .sum::<f64>()
                / (t - 1.0);
            variance.sqrt()
        };

        Ok(Self {
            thresholds,
            mean,
            stddev,
        })
    }

    /// Recorded per-trial thresholds, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Number of trials.
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Sample mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation (divides by T − 1).
    ///
    /// Exactly `0.0` when there is a single trial.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean - self.half_width()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev / (self.trials() as f64).sqrt()
    }
}
