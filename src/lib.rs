//! Arena Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and holds the glue the
//! terminal runner needs between them.

pub mod config;

pub use arena_tetris_core as core;
pub use arena_tetris_input as input;
pub use arena_tetris_term as term;
pub use arena_tetris_types as types;

pub use config::RunConfig;

use crate::core::Piece;
use crate::input::{GridPoint, PieceFootprint};

/// Describe the active piece for the pointer adapter, in arena cells.
pub fn piece_footprint(piece: &Piece) -> PieceFootprint {
    PieceFootprint::new(
        GridPoint::new(piece.pos.x as i32, piece.pos.y as i32),
        piece.occupied().map(|(x, y, _)| GridPoint::new(x, y)),
    )
}
