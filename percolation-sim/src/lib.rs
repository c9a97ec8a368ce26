//! # percolation-sim
//!
//! Site percolation on an N×N grid with Monte Carlo estimation of the
//! percolation threshold p*.
//!
//! Each site is either open or blocked. A **full** site is an open site
//! connected to the top row through a chain of open neighbours (up, down,
//! left, right). The system **percolates** when some bottom-row site is full.
//!
//! ## Connectivity
//!
//! Sites are tracked in a weighted quick-union structure with two virtual
//! nodes (top and bottom), so "does the grid percolate" reduces to a single
//! `connected(top, bottom)` query. A second structure without the virtual
//! bottom answers `is_full` without backwash.
//!
//! ## Threshold
//!
//! Opening uniformly random sites until the grid percolates and recording the
//! opened fraction gives one sample of p*. Over T trials the mean converges
//! to p* ≈ 0.5927 for large N.
//!
//! ```
//! use percolation_sim::prelude::*;
//!
//! let stats = ExperimentRunner::new(20, 50)?.with_seed(7).run()?;
//! assert!(stats.confidence_lo() <= stats.mean());
//! assert!(stats.mean() <= stats.confidence_hi());
//! # Ok::<(), PercolationError>(())
//! ```

pub mod error;
pub mod union_find;
pub mod grid;
pub mod sampler;
pub mod stats;
pub mod experiment;

pub use error::{PercolationError, Result};

pub mod prelude {
    pub use crate::error::*;
    pub use crate::union_find::*;
    pub use crate::grid::*;
    pub use crate::sampler::*;
    pub use crate::stats::*;
    pub use crate::experiment::*;
}
