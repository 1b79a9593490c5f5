//! Shared types and constants.
//!
//! Plain data only: no I/O and no dependencies, so the engine, the input
//! adapters and the terminal renderer can all agree on the same vocabulary.
//!
//! # Arena Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 on top)
//!
//! Both are compile-time constants; the arena never changes size.
//!
//! # Cell Values
//!
//! A cell is a small integer. `0` is empty and `1..=7` identify the piece kind
//! that locked there, which is also the renderer's palette index:
//!
//! | Kind | Cell |
//! |------|------|
//! | T | 1 |
//! | O | 2 |
//! | L | 3 |
//! | J | 4 |
//! | I | 5 |
//! | S | 6 |
//! | Z | 7 |
//!
//! # Examples
//!
//! ```
//! use arena_tetris_types::{GameAction, PieceKind, ARENA_HEIGHT, ARENA_WIDTH};
//!
//! assert_eq!(PieceKind::from_cell(2), Some(PieceKind::O));
//! assert_eq!(PieceKind::T.cell(), 1);
//! assert_eq!(GameAction::RotateCcw.as_str(), "rotateCcw");
//! assert_eq!((ARENA_WIDTH, ARENA_HEIGHT), (12, 20));
//! ```

/// Arena width in cells (12 columns)
pub const ARENA_WIDTH: usize = 12;

/// Arena height in cells (20 rows)
pub const ARENA_HEIGHT: usize = 20;

/// Gravity threshold: the active piece drops once the accumulated time exceeds this.
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared row.
pub const LINE_SCORE: u32 = 10;

/// Default frame cadence for the terminal runner (~60 FPS).
pub const FRAME_MS: u32 = 16;

/// Value stored in an arena or shape cell.
pub type Cell = u8;

/// The empty cell.
pub const EMPTY: Cell = 0;

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    I,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, ordered by cell value.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Cell value this kind writes into the arena (also its palette index).
    pub const fn cell(self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::cell`]. Returns `None` for empty or unknown values.
    pub const fn from_cell(cell: Cell) -> Option<Self> {
        match cell {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Upper-case single letter, used in logs.
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::I => "I",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// The logical commands an input adapter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Drop the piece one row (locks if it cannot descend)
    SoftDrop,
    /// Rotate 90° clockwise
    RotateCw,
    /// Rotate 90° counter-clockwise
    RotateCcw,
}

impl GameAction {
    /// camelCase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
        }
    }
}
