//! Arena module - the grid of locked cells
//!
//! A 12x20 grid stored as a flat row-major array (`y * WIDTH + x`), row 0 on top.
//! The dimensions are fixed at compile time and never change.

use crate::game_state::Piece;
use crate::types::{Cell, ARENA_HEIGHT, ARENA_WIDTH, EMPTY};

/// Total number of cells in the arena
const ARENA_SIZE: usize = ARENA_WIDTH * ARENA_HEIGHT;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arena {
    cells: [Cell; ARENA_SIZE],
}

impl Arena {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; ARENA_SIZE],
        }
    }

    /// Build an arena from `ARENA_HEIGHT` rows of `ARENA_WIDTH` cells.
    ///
    /// # Panics
    ///
    /// Panics if the row count or any row width does not match the arena.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Self {
        assert_eq!(rows.len(), ARENA_HEIGHT);
        let mut arena = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), ARENA_WIDTH);
            arena.row_mut(y).copy_from_slice(row);
        }
        arena
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= ARENA_WIDTH as i32 || y < 0 || y >= ARENA_HEIGHT as i32 {
            return None;
        }
        Some(y as usize * ARENA_WIDTH + x as usize)
    }

    pub fn width(&self) -> usize {
        ARENA_WIDTH
    }

    pub fn height(&self) -> usize {
        ARENA_HEIGHT
    }

    /// Cell at `(x, y)`, `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Set cell at `(x, y)`. Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and non-empty.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= ARENA_HEIGHT`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * ARENA_WIDTH;
        &self.cells[start..start + ARENA_WIDTH]
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * ARENA_WIDTH;
        &mut self.cells[start..start + ARENA_WIDTH]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < ARENA_HEIGHT && self.row(y).iter().all(|&c| c != EMPTY)
    }

    /// Remove row `y`, shift every row above it down by one and insert an
    /// empty row at the top.
    pub(crate) fn remove_row(&mut self, y: usize) {
        if y >= ARENA_HEIGHT {
            return;
        }
        // copy_within handles the overlap
        self.cells.copy_within(0..y * ARENA_WIDTH, ARENA_WIDTH);
        self.row_mut(0).fill(EMPTY);
    }

    /// Copy the piece's non-empty cells into the arena.
    ///
    /// Cells that fall outside the arena are skipped. Returns how many cells
    /// were written.
    pub fn merge(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y, v) in piece.occupied() {
            if self.set(x, y, v) {
                written += 1;
            }
        }
        written
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Flat row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Convert to nested rows for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..ARENA_HEIGHT).map(|y| self.row(y).to_vec()).collect()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
