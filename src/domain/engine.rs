//! Stepping and pattern placement for [`Grid`].
//!
//! Wrap-around is only a neighbor-counting concept: plain indexing through
//! `get`/`set` never wraps, and placement truncates instead of wrapping.

use super::{Grid, Pattern};
use crate::error::Result;

impl Grid {
    /// Count live Moore neighbors of (row, col) using toroidal wrapping.
    ///
    /// Each of the 8 offsets is wrapped with floor-modulo independently, so on
    /// grids with a single row or column the same cell (the centre included)
    /// is counted once per offset that lands on it.
    pub fn count_neighbors(&self, row: usize, col: usize) -> Result<u8> {
        self.check_bounds(row, col)?;
        Ok(self.count_wrapped(row, col))
    }

    fn count_wrapped(&self, row: usize, col: usize) -> u8 {
        let (rows, cols) = self.dimensions();
        let (rows, cols) = (rows as isize, cols as isize);

        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| {
                let nr = (row as isize + dr).rem_euclid(rows) as usize;
                let nc = (col as isize + dc).rem_euclid(cols) as usize;
                self.cells[self.index(nr, nc)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance one generation under B3/S23.
    ///
    /// Every next state is computed from the untouched current buffer into
    /// the scratch buffer; the buffers are then swapped and the generation
    /// counter incremented.
    pub fn step(&mut self) {
        let (rows, cols) = self.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                let idx = self.index(row, col);
                let next = self.cells[idx].evolve(self.count_wrapped(row, col));
                self.scratch[idx] = next;
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
    }

    /// Top-left anchor that centres `pattern`, clamped to (0, 0) when the
    /// pattern is larger than the grid.
    pub fn centered_anchor(&self, pattern: &Pattern) -> (usize, usize) {
        let (rows, cols) = self.dimensions();
        let (p_rows, p_cols) = pattern.dimensions();
        let row0 = (rows as isize - p_rows as isize) / 2;
        let col0 = (cols as isize - p_cols as isize) / 2;
        (row0.max(0) as usize, col0.max(0) as usize)
    }

    /// Stamp `pattern` at the centre of the grid. Returns the anchor used.
    pub fn place_pattern(&mut self, pattern: &Pattern) -> (usize, usize) {
        let (row0, col0) = self.centered_anchor(pattern);
        self.stamp(pattern, row0, col0);
        (row0, col0)
    }

    /// Stamp `pattern` with its top-left corner at (row, col).
    ///
    /// The anchor must lie inside the grid; template cells that spill past
    /// the bottom or right edge are dropped.
    pub fn place_pattern_at(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;
        self.stamp(pattern, row, col);
        Ok(())
    }

    fn stamp(&mut self, pattern: &Pattern, row0: usize, col0: usize) {
        let (rows, cols) = self.dimensions();
        for (r, c, cell) in pattern.iter_cells() {
            let (row, col) = (row0 + r, col0 + c);
            if row < rows && col < cols {
                let idx = self.index(row, col);
                self.cells[idx] = cell;
            }
        }
    }
}
