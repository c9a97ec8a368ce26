//! Command-line arguments: `percolation-sim N T`.

use anyhow::{bail, Context, Result};

/// Grid size and trial count from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliArgs {
    /// Grid dimension N.
    pub n: usize,
    /// Number of trials T.
    pub trials: usize,
}

impl CliArgs {
    /// Parse from the full argument list, program name first.
    pub fn parse(args: &[String]) -> Result<Self> {
        let program = args.first().map_or("percolation-sim", String::as_str);
        let [_, n, trials] = args else {
            bail!("usage: {program} N T  (N = grid size, T = number of trials)");
        };

        Ok(Self {
            n: parse_positive(n, "N")?,
            trials: parse_positive(trials, "T")?,
        })
    }
}

fn parse_positive(raw: &str, name: &str) -> Result<usize> {
    let value: usize = raw
        .parse()
        .with_context(|| format!("{name} must be a positive integer, got {raw:?}"))?;
    if value == 0 {
        bail!("{name} must be a positive integer, got 0");
    }
    Ok(value)
}
