//! N×N percolation grid with incremental connectivity.
//!
//! Sites are addressed with 1-based `(row, col)` coordinates, row 1 at the top.
//! Union-find elements are numbered:
//! - `0`: virtual top, joined to every open site in row 1
//! - `(row - 1) * n + col`: site `(row, col)`, for `1..=n²`
//! - `n² + 1`: virtual bottom, joined to every open site in row n
//!
//! Two structures are kept. `sites` holds both virtual nodes and answers
//! `percolates`. `fullness` omits the virtual bottom and answers `is_full`:
//! once the grid percolates, an open bottom-row site would otherwise reach the
//! virtual top through the virtual bottom (backwash) without any real path.

use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

const VIRTUAL_TOP: usize = 0;

/// Open/blocked state of an N×N grid and its connectivity.
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    n: usize,
    open: Vec<bool>,
    open_sites: usize,
    sites: UnionFind,
    fullness: UnionFind,
}

/// Number of sites in an N×N grid.
///
/// Rejects `n = 0` and sizes whose site count plus the two virtual nodes
/// does not fit in `usize`.
pub fn site_count(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(PercolationError::InvalidArgument(
            "grid size must be positive".into(),
        ));
    }
    n.checked_mul(n)
        .filter(|sites| sites.checked_add(2).is_some())
        .ok_or_else(|| PercolationError::InvalidArgument(format!("grid size {n} too large")))
}

impl PercolationGrid {
    /// Create an N×N grid with every site blocked.
    pub fn new(n: usize) -> Result<Self> {
        let num_sites = site_count(n)?;
        Ok(Self {
            n,
            open: vec![false; num_sites],
            open_sites: 0,
            sites: UnionFind::new(num_sites + 2),
            fullness: UnionFind::new(num_sites + 1),
        })
    }

    /// Grid dimension.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of open sites.
    pub fn open_sites(&self) -> usize {
        self.open_sites
    }

    /// Open site `(row, col)` and join it to its open neighbours.
    ///
    /// Opening an already open site changes nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;
        let idx = self.site_index(row, col);
        if self.open[idx - 1] {
            return Ok(());
        }
        self.open[idx - 1] = true;
        self.open_sites += 1;

        if row == 1 {
            self.sites.union(VIRTUAL_TOP, idx);
            self.fullness.union(VIRTUAL_TOP, idx);
        }
        // On a 1×1 grid row 1 is also row n.
        if row == self.n {
            self.sites.union(self.virtual_bottom(), idx);
        }

        for (r, c) in self.neighbours(row, col).into_iter().flatten() {
            let other = self.site_index(r, c);
            if self.open[other - 1] {
                self.sites.union(other, idx);
                self.fullness.union(other, idx);
            }
        }
        Ok(())
    }

    /// Whether site `(row, col)` is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.open[self.site_index(row, col) - 1])
    }

    /// Whether site `(row, col)` is open and connected to the top row.
    ///
    /// Queries the structure without a virtual bottom, so bottom-row sites
    /// are never reported full through a reverse path.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        if !self.is_open(row, col)? {
            return Ok(false);
        }
        let idx = self.site_index(row, col);
        Ok(self.fullness.connected(VIRTUAL_TOP, idx))
    }

    /// Whether an open path joins the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        if self.n == 1 {
            return self.open[0];
        }
        let bottom = self.virtual_bottom();
        self.sites.connected(VIRTUAL_TOP, bottom)
    }

    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }

    fn site_index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if self.in_bounds(row, col) {
            Ok(())
        } else {
            Err(PercolationError::OutOfRange { row, col, n: self.n })
        }
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        (1..=self.n).contains(&row) && (1..=self.n).contains(&col)
    }

    /// The up to 4 in-grid neighbours of `(row, col)`.
    fn neighbours(&self, row: usize, col: usize) -> [Option<(usize, usize)>; 4] {
        let n = self.n;
        [
            (row > 1).then(|| (row - 1, col)), // up
            (row < n).then(|| (row + 1, col)), // down
            (col > 1).then(|| (row, col - 1)), // left
            (col < n).then(|| (row, col + 1)), // right
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_all(grid: &mut PercolationGrid, sites: &[(usize, usize)]) {
        for &(r, c) in sites {
            grid.open(r, c).unwrap();
        }
    }

    #[test]
    fn test_new_grid_all_blocked() {
        for n in 1..=6 {
            let mut grid = PercolationGrid::new(n).unwrap();
            assert_eq!(grid.open_sites(), 0);
            assert!(!grid.percolates(), "fresh {n}x{n} grid must not percolate");
            for r in 1..=n {
                for c in 1..=n {
                    assert!(!grid.is_open(r, c).unwrap());
                    assert!(!grid.is_full(r, c).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            PercolationGrid::new(0),
            Err(PercolationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        for n in [usize::MAX, usize::MAX / 2] {
            assert!(matches!(
                PercolationGrid::new(n),
                Err(PercolationError::InvalidArgument(_))
            ));
        }
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            PercolationGrid::new(1 << 32),
            Err(PercolationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_site_count() {
        assert_eq!(site_count(1), Ok(1));
        assert_eq!(site_count(20), Ok(400));
        assert!(site_count(0).is_err());
    }

    #[test]
    fn test_out_of_range_queries() {
        for n in [1, 3, 10] {
            let mut grid = PercolationGrid::new(n).unwrap();
            for (r, c) in [(0, 1), (n + 1, 1), (1, 0), (1, n + 1)] {
                assert_eq!(
                    grid.is_open(r, c),
                    Err(PercolationError::OutOfRange { row: r, col: c, n })
                );
                assert!(grid.is_full(r, c).is_err());
                assert!(grid.open(r, c).is_err());
            }
        }
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut once = PercolationGrid::new(4).unwrap();
        let mut twice = PercolationGrid::new(4).unwrap();
        open_all(&mut once, &[(1, 2), (2, 2)]);
        open_all(&mut twice, &[(1, 2), (2, 2), (2, 2), (1, 2)]);

        assert_eq!(once.open_sites(), 2);
        assert_eq!(twice.open_sites(), 2);
        for r in 1..=4 {
            for c in 1..=4 {
                assert_eq!(once.is_open(r, c), twice.is_open(r, c));
                assert_eq!(once.is_full(r, c), twice.is_full(r, c));
            }
        }
        assert_eq!(once.sites.count(), twice.sites.count());
        assert_eq!(once.fullness.count(), twice.fullness.count());
    }

    #[test]
    fn test_top_row_site_is_full() {
        let mut grid = PercolationGrid::new(3).unwrap();
        grid.open(1, 3).unwrap();
        assert!(grid.is_full(1, 3).unwrap());
        assert!(!grid.percolates());
    }

    #[test]
    fn test_fullness_follows_open_chain() {
        let mut grid = PercolationGrid::new(4).unwrap();
        open_all(&mut grid, &[(1, 1), (2, 1), (2, 2), (3, 2)]);
        assert!(grid.is_full(3, 2).unwrap());
        // Diagonal contact does not connect
        grid.open(4, 3).unwrap();
        assert!(!grid.is_full(4, 3).unwrap());
        assert!(!grid.percolates());
        grid.open(4, 2).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(4, 3).unwrap());
    }

    #[test]
    fn test_bottom_row_without_top_connection_not_full() {
        let n = 5;
        let mut grid = PercolationGrid::new(n).unwrap();
        for c in 1..=n {
            grid.open(n, c).unwrap();
        }
        assert!(!grid.percolates());
        for c in 1..=n {
            assert!(grid.is_open(n, c).unwrap());
            assert!(!grid.is_full(n, c).unwrap(), "bottom site (5, {c}) must not be full");
        }
    }

    #[test]
    fn test_no_backwash_after_percolation() {
        let mut grid = PercolationGrid::new(3).unwrap();
        open_all(&mut grid, &[(1, 1), (2, 1), (3, 1)]);
        assert!(grid.percolates());

        // (3, 3) touches the virtual bottom only
        grid.open(3, 3).unwrap();
        assert!(!grid.is_full(3, 3).unwrap());

        // Its blocked upper neighbour opens into an isolated pocket
        grid.open(2, 3).unwrap();
        assert!(!grid.is_full(2, 3).unwrap());

        // Bridging the gap makes them genuinely full
        grid.open(3, 2).unwrap();
        assert!(grid.is_full(3, 3).unwrap());
        assert!(grid.is_full(2, 3).unwrap());
    }

    #[test]
    fn test_single_site_grid() {
        let mut grid = PercolationGrid::new(1).unwrap();
        assert!(!grid.percolates());
        assert!(!grid.is_full(1, 1).unwrap());
        grid.open(1, 1).unwrap();
        assert!(grid.percolates());
        assert_eq!(grid.is_full(1, 1), grid.is_open(1, 1));
        assert!(grid.is_full(1, 1).unwrap());
    }

    #[test]
    fn test_fully_open_grid_percolates_and_is_full() {
        for n in 2..=7 {
            let mut grid = PercolationGrid::new(n).unwrap();
            for r in 1..=n {
                for c in 1..=n {
                    grid.open(r, c).unwrap();
                }
            }
            assert_eq!(grid.open_sites(), n * n);
            assert!(grid.percolates());
            for r in 1..=n {
                for c in 1..=n {
                    assert!(grid.is_full(r, c).unwrap(), "site ({r}, {c}) of {n}x{n}");
                }
            }
        }
    }

    #[test]
    fn test_two_by_two_needs_vertical_path() {
        let mut grid = PercolationGrid::new(2).unwrap();
        open_all(&mut grid, &[(1, 1), (2, 2)]);
        assert!(!grid.percolates());
        assert!(!grid.is_full(2, 2).unwrap());
        grid.open(1, 2).unwrap();
        assert!(grid.percolates());
    }
}
