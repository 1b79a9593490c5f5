//! Input adapters (engine-facing).
//!
//! Translates raw terminal events into the five logical
//! [`GameAction`](crate::types::GameAction)s. Keyboard events map one to one;
//! pointer drags are debounced into single-column moves so every step goes
//! through the engine's per-column collision check.

pub mod map;
pub mod pointer;

pub use arena_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{GridPoint, PieceFootprint, PointerAdapter, PointerActions};
