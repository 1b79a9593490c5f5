//! Terminal presentation for the arena.
//!
//! Frames are painted into a plain [`FrameBuffer`] by [`GameView`] and
//! flushed by [`TerminalRenderer`], which only rewrites cells that changed.
//! Each arena cell is two characters wide so blocks look square.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use arena_tetris_core as core;
pub use arena_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{palette_color, GameView, Viewport, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::Screen;
