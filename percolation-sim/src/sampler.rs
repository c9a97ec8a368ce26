//! Uniform site sampling.
//!
//! Trials draw coordinates through [`SiteSampler`] rather than a concrete
//! RNG, so tests can replay a fixed sequence of sites.

use rand::Rng;

/// Source of uniformly distributed integers over an inclusive range.
pub trait SiteSampler {
    /// A value in `low..=high`.
    fn uniform(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> SiteSampler for R {
    fn uniform(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }
}

/// Draw a site `(row, col)` uniformly from `[1, n] × [1, n]`.
pub fn random_site<S: SiteSampler + ?Sized>(sampler: &mut S, n: usize) -> (usize, usize) {
    let row = sampler.uniform(1, n);
    let col = sampler.uniform(1, n);
    (row, col)
}
