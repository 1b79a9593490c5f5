//! Core game logic - pure, deterministic and testable
//!
//! Everything that decides what happens on the arena lives here, with no
//! terminal, input device or clock dependencies:
//!
//! - [`pieces`]: the seven shape templates and matrix rotation
//! - [`arena`]: the 12x20 grid of locked cells
//! - [`collision`]: overlap test between the active piece and the arena
//! - [`game_state`]: the active piece controller (drop, shift, rotate, spawn)
//! - [`sweep`]: removal of completed rows
//! - [`driver`]: delta-time gravity and the renderer interface
//! - [`rng`]: seeded uniform piece selection
//!
//! # Rules
//!
//! - A piece falls one row each time more than 1000ms has accumulated.
//! - Horizontal moves are checked one column at a time.
//! - Rotation tries x offsets `0, -1, +1` and is undone if all collide.
//! - Each cleared row scores 10 points.
//! - A piece that cannot spawn wipes the arena and the score; play continues.
//!
//! # Example
//!
//! ```
//! use arena_tetris_core::{DropOutcome, GameState};
//! use arena_tetris_types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new(12345);
//! game.spawn_kind(PieceKind::O);
//! assert_eq!(game.piece().pos.x, 5);
//!
//! game.apply_action(GameAction::MoveLeft);
//! assert_eq!(game.piece().pos.x, 4);
//!
//! // Drop until the piece locks on the floor
//! while let DropOutcome::Moved = game.drop() {}
//! assert_eq!(game.arena().filled_count(), 4);
//! ```

pub mod arena;
pub mod collision;
pub mod driver;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod sweep;

pub use arena_tetris_types as types;

pub use arena::Arena;
pub use collision::collide;
pub use driver::{GameLoop, Renderer, TickOutcome};
pub use game_state::{DropOutcome, GameState, LockEvent, Piece, Position};
pub use pieces::{create_piece, ShapeMatrix};
pub use rng::{PieceRandomizer, SimpleRng};
pub use sweep::{sweep, ClearedRows};
