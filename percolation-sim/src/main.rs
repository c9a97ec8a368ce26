//! Percolation threshold estimator.
//!
//! ```text
//! percolation-sim N T
//! ```
//!
//! Runs T trials on an N×N grid and prints the mean threshold, its standard
//! deviation and the 95% confidence interval. Diagnostics go to stderr and
//! are controlled with `RUST_LOG` (default `warn`).

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use percolation_sim::experiment::ExperimentRunner;
use percolation_sim::stats::ThresholdStats;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::CliArgs;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    let CliArgs { n, trials } = CliArgs::parse(args)?;
    info!(n, trials, "estimating percolation threshold");

    let stats = ExperimentRunner::new(n, trials)
        .and_then(|runner| runner.run())
        .context("percolation experiment failed")?;

    for line in report_lines(&stats) {
        println!("{line}");
    }
    Ok(())
}

/// The three result lines: mean, stddev and the 95% interval.
fn report_lines(stats: &ThresholdStats) -> [String; 3] {
    [
        format!("mean = {:.6}", stats.mean()),
        format!("stddev = {:.6}", stats.stddev()),
        format!(
            "95% confidence interval = {}, {}",
            stats.confidence_lo(),
            stats.confidence_hi()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines_format() {
        let stats = ThresholdStats::from_thresholds(vec![0.5, 0.6, 0.7]).unwrap();
        let [mean, stddev, interval] = report_lines(&stats);
        assert_eq!(mean, "mean = 0.600000");
        assert_eq!(stddev, "stddev = 0.100000");

        let bounds = interval
            .strip_prefix("95% confidence interval = ")
            .expect("interval line prefix");
        let (lo, hi) = bounds.split_once(", ").expect("lo, hi separator");
        assert_eq!(lo.parse::<f64>().unwrap(), stats.confidence_lo());
        assert_eq!(hi.parse::<f64>().unwrap(), stats.confidence_hi());
        assert!(lo.parse::<f64>().unwrap() < hi.parse::<f64>().unwrap());
    }

    #[test]
    fn test_report_lines_single_trial() {
        let stats = ThresholdStats::from_thresholds(vec![1.0]).unwrap();
        assert_eq!(
            report_lines(&stats),
            [
                "mean = 1.000000".to_string(),
                "stddev = 0.000000".to_string(),
                "95% confidence interval = 1, 1".to_string(),
            ]
        );
    }
}
