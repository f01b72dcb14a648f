use crate::{union_find::UnionFind, Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// An n-by-n grid of sites, each either blocked or open, answering
/// connectivity queries against two virtual sentinel nodes: one standing for
/// the whole top row, one for the whole bottom row.
///
/// Sites are addressed by 1-indexed `(row, col)` pairs; row 1 is the top.
/// Opening a site is monotonic, it never reverts to blocked.
///
/// Two forests back the queries. `uf_full` contains both sentinels and
/// answers [`percolates`](Self::percolates); `uf_top` contains only the top
/// sentinel and answers [`is_full`](Self::is_full). Once the system
/// percolates the sentinels of `uf_full` share a component, so a bottom-row
/// site with no open path to the top would falsely report full if queried
/// there (backwash); the top-only forest is immune to it.
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    uf_full: UnionFind,
    uf_top: UnionFind,
}

impl Percolation {
    /// Creates an n-by-n grid with every site blocked.
    ///
    /// # Errors
    ///
    /// [`Error::GridSize`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::GridSize);
        }

        Ok(Self {
            n,
            open: vec![false; n * n],
            open_count: 0,
            // Element n * n is the top sentinel, n * n + 1 the bottom one.
            uf_full: UnionFind::new(n * n + 2),
            uf_top: UnionFind::new(n * n + 1),
        })
    }

    /// Returns the grid side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Opens the site at `(row, col)` and unites it with its open
    /// 4-neighbors. No-op if the site is already open.
    ///
    /// # Errors
    ///
    /// [`Error::Coordinates`] if `row` or `col` is outside `[1, n]`; the
    /// grid is left unchanged.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.index(row, col)?;

        if self.open[site] {
            return Ok(());
        }

        self.open[site] = true;
        self.open_count += 1;

        if row == 1 {
            self.uf_full.union(site, self.virtual_top());
            self.uf_top.union(site, self.virtual_top());
        }
        if row == self.n {
            self.uf_full.union(site, self.virtual_bottom());
        }

        let neighbors = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];

        for (neighbor_row, neighbor_col) in neighbors {
            if let Ok(neighbor) = self.index(neighbor_row, neighbor_col) {
                if self.open[neighbor] {
                    self.uf_full.union(site, neighbor);
                    self.uf_top.union(site, neighbor);
                }
            }
        }

        Ok(())
    }

    /// Returns whether the site at `(row, col)` is open.
    ///
    /// # Errors
    ///
    /// [`Error::Coordinates`] if `row` or `col` is outside `[1, n]`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.open[self.index(row, col)?])
    }

    /// Returns whether the site at `(row, col)` is full: open and connected
    /// to the top sentinel through a chain of open, 4-adjacent sites.
    ///
    /// Full implies open, not conversely.
    ///
    /// # Errors
    ///
    /// [`Error::Coordinates`] if `row` or `col` is outside `[1, n]`.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.index(row, col)?;

        Ok(self.open[site] && self.uf_top.connected(site, self.virtual_top()))
    }

    /// Returns the number of open sites. O(1), maintained incrementally.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns whether an open path connects the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        self.uf_full
            .connected(self.virtual_top(), self.virtual_bottom())
    }

    // index(row, col) = (row - 1) * n + (col - 1)
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row == 0 || col == 0 || row > self.n || col > self.n {
            return Err(Error::Coordinates {
                row,
                col,
                n: self.n,
            });
        }

        Ok((row - 1) * self.n + (col - 1))
    }

    fn virtual_top(&self) -> usize {
        self.n * self.n
    }

    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }
}

////////////////////////////////////////////////////////////////////////////////
