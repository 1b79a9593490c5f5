//! `Screen`: the engine-facing [`Renderer`] backed by a framebuffer.

use std::convert::Infallible;

use crate::core::{Arena, Piece, Renderer};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};

/// Paints engine frames into an in-memory framebuffer.
///
/// Flushing to a terminal is left to [`crate::TerminalRenderer`] so the
/// same screen works headless in tests.
pub struct Screen {
    view: GameView,
    viewport: Viewport,
    fb: FrameBuffer,
}

impl Screen {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            view: GameView::default(),
            viewport,
            fb: FrameBuffer::new(viewport.width, viewport.height),
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Arena cell under a terminal column/row.
    pub fn cell_at(&self, column: u16, row: u16) -> (i32, i32) {
        self.view.cell_at(self.viewport, column, row)
    }
}

impl Renderer for Screen {
    type Error = Infallible;

    fn render_frame(&mut self, arena: &Arena, piece: &Piece) -> Result<(), Infallible> {
        self.view.draw_frame(&mut self.fb, self.viewport, arena, piece);
        Ok(())
    }

    fn render_score(&mut self, score: u32) -> Result<(), Infallible> {
        self.view.draw_score(&mut self.fb, self.viewport, score);
        Ok(())
    }
}
