use super::Cell;
use crate::error::{LifeError, Result};
use rand::Rng;

/// Grid owns the authoritative live/dead matrix and the generation count.
///
/// Cells are stored row-major. A second buffer of the same size is kept for
/// stepping (see `engine`); it is never visible outside a step.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    pub(super) cells: Vec<Cell>,
    pub(super) scratch: Vec<Cell>,
    pub(super) generation: u64,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
            scratch: vec![Cell::Dead; rows * cols],
            generation: 0,
        })
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub(super) const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(super) fn check_bounds(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Cell state at (row, col). No wrap-around is applied.
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.check_bounds(row, col)?;
        Ok(self.cells[idx].is_alive())
    }

    /// Overwrite a single cell. The generation count is untouched.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = Cell::from(alive);
        Ok(())
    }

    /// Flip a single cell and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx].is_alive())
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self.generation = 0;
    }

    /// Clear, then bring each cell alive with probability `density`.
    /// The density is clamped to `0.0..=1.0`; NaN counts as 0.
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.clear();
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over the coordinates of live cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }
}

/// Grids compare by their visible cells only; the generation is ignored.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for Grid {}
