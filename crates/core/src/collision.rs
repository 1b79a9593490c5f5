//! Collision detection between the active piece and the arena.

use crate::arena::Arena;
use crate::game_state::Piece;
use crate::types::EMPTY;

/// True if any occupied cell of `piece` lands outside the arena or on a
/// non-empty arena cell.
///
/// Empty cells of the shape matrix never collide, so a matrix may hang over
/// a wall as long as its occupied cells stay inside.
pub fn collide(arena: &Arena, piece: &Piece) -> bool {
    piece
        .occupied()
        .any(|(x, y, _)| arena.get(x, y).map_or(true, |cell| cell != EMPTY))
}
