//! Pieces module - tetromino shape templates and matrix rotation
//!
//! Every piece is a small square matrix of cells in its own local frame.
//! Rotation is a transpose followed by a row or column reversal, so the
//! matrix must stay square; the largest piece (I) needs 4x4.

use crate::types::{Cell, PieceKind, EMPTY};

/// Largest supported matrix side.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square shape matrix stored in a fixed buffer.
///
/// Only the top-left `size x size` block is meaningful; the rest stays empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from `size` rows of `size` cells.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not square or larger than [`MAX_SHAPE_SIZE`].
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Self {
        let size = rows.len();
        assert!(size > 0 && size <= MAX_SHAPE_SIZE, "shape size {size} out of range");

        let mut cells = [[EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), size, "shape must be square");
            cells[y][..size].copy_from_slice(row);
        }
        Self {
            size: size as u8,
            cells,
        }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Width in columns (equal to the height, shapes are square).
    pub fn width(&self) -> usize {
        self.size()
    }

    /// Cell at local `(x, y)`, or `None` outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.size() || y >= self.size() {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Iterate the occupied cells as `(x, y, cell)` in local coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| {
                let v = self.cells[y][x];
                (v != EMPTY).then_some((x, y, v))
            })
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells().count()
    }

    /// Copy the meaningful block out as nested rows (test/debug helper).
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        let n = self.size();
        self.cells[..n].iter().map(|row| row[..n].to_vec()).collect()
    }

    /// Rotate 90° in place: clockwise when `dir > 0`, counter-clockwise otherwise.
    pub fn rotate(&mut self, dir: i8) {
        let n = self.size();

        for y in 0..n {
            for x in 0..y {
                let tmp = self.cells[y][x];
                self.cells[y][x] = self.cells[x][y];
                self.cells[x][y] = tmp;
            }
        }

        if dir > 0 {
            for row in &mut self.cells[..n] {
                row[..n].reverse();
            }
        } else {
            self.cells[..n].reverse();
        }
    }

    /// Pure variant of [`ShapeMatrix::rotate`].
    pub fn rotated(&self, dir: i8) -> Self {
        let mut out = *self;
        out.rotate(dir);
        out
    }
}

/// Return a fresh copy of the spawn-orientation shape for `kind`.
///
/// The matrix is `Copy`, so callers own an independent instance they can
/// rotate without touching the template.
pub fn create_piece(kind: PieceKind) -> ShapeMatrix {
    let c = kind.cell();
    match kind {
        PieceKind::T => ShapeMatrix::from_rows(&[[0, 0, 0], [c, c, c], [0, c, 0]]),
        PieceKind::O => ShapeMatrix::from_rows(&[[c, c], [c, c]]),
        PieceKind::L => ShapeMatrix::from_rows(&[[0, c, 0], [0, c, 0], [0, c, c]]),
        PieceKind::J => ShapeMatrix::from_rows(&[[0, c, 0], [0, c, 0], [c, c, 0]]),
        PieceKind::I => ShapeMatrix::from_rows(&[
            [0, c, 0, 0],
            [0, c, 0, 0],
            [0, c, 0, 0],
            [0, c, 0, 0],
        ]),
        PieceKind::S => ShapeMatrix::from_rows(&[[0, c, c], [c, c, 0], [0, 0, 0]]),
        PieceKind::Z => ShapeMatrix::from_rows(&[[c, c, 0], [0, c, c], [0, 0, 0]]),
    }
}
