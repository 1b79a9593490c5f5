//! GameView: paints the arena, the falling piece and the score into a
//! framebuffer.
//!
//! Pure (no I/O), so layout and colors can be unit-tested.

use crate::core::{Arena, Piece};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell as ArenaCell, ARENA_HEIGHT, ARENA_WIDTH, EMPTY};

/// Fixed palette keyed by cell value. Index 0 is never drawn.
pub const PALETTE: [Rgb; 8] = [
    Rgb::hex(0x000000),
    Rgb::hex(0xFF0D72), // T
    Rgb::hex(0x0DC2FF), // O
    Rgb::hex(0x0DFF72), // L
    Rgb::hex(0xF538FF), // J
    Rgb::hex(0xFF8E0D), // I
    Rgb::hex(0xFFE138), // S
    Rgb::hex(0x3877FF), // Z
];

const BACKGROUND: Rgb = Rgb::hex(0x1E1E28);
const BLOCK: char = '█';

/// Color for a cell value, `None` for empty or unknown values.
pub fn palette_color(cell: ArenaCell) -> Option<Rgb> {
    if cell == EMPTY {
        return None;
    }
    PALETTE.get(cell as usize).copied()
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub struct GameView {
    /// Arena cell width in terminal columns.
    cell_w: u16,
    /// Arena cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up a cell in most terminal fonts
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            ARENA_WIDTH as u16 * self.cell_w + 2,
            ARENA_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Top-left corner of the bordered arena, centered in the viewport.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.frame_size();
        (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h) / 2,
        )
    }

    /// Map a terminal column/row to an arena cell. The result is not clamped:
    /// positions outside the arena map to out-of-range cells.
    pub fn cell_at(&self, viewport: Viewport, column: u16, row: u16) -> (i32, i32) {
        let (ox, oy) = self.origin(viewport);
        let x = (column as i32 - ox as i32 - 1).div_euclid(self.cell_w as i32);
        let y = (row as i32 - oy as i32 - 1).div_euclid(self.cell_h as i32);
        (x, y)
    }

    /// Paint the border, the locked cells and the active piece.
    ///
    /// Clears the whole framebuffer first, so it must run before
    /// [`GameView::draw_score`].
    pub fn draw_frame(&self, fb: &mut FrameBuffer, viewport: Viewport, arena: &Arena, piece: &Piece) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let (ox, oy) = self.origin(viewport);
        let (w, h) = self.frame_size();
        fb.fill_rect(
            ox + 1,
            oy + 1,
            w - 2,
            h - 2,
            Cell::new(' ', CellStyle::new(BACKGROUND, BACKGROUND)),
        );
        draw_border(fb, ox, oy, w, h);

        for y in 0..ARENA_HEIGHT {
            for (x, &cell) in arena.row(y).iter().enumerate() {
                self.draw_cell(fb, ox, oy, x as i32, y as i32, cell);
            }
        }

        for (x, y, cell) in piece.occupied() {
            self.draw_cell(fb, ox, oy, x, y, cell);
        }
    }

    /// Paint the score panel to the right of the arena, if it fits.
    pub fn draw_score(&self, fb: &mut FrameBuffer, viewport: Viewport, score: u32) {
        let (ox, oy) = self.origin(viewport);
        let (w, _) = self.frame_size();
        let panel_x = ox.saturating_add(w).saturating_add(2);
        if panel_x.saturating_add(5) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        fb.put_str(panel_x, oy, "SCORE", label);
        fb.put_str(panel_x, oy.saturating_add(1), &score.to_string(), CellStyle::default());
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: i32, y: i32, cell: ArenaCell) {
        if x < 0 || x >= ARENA_WIDTH as i32 || y < 0 || y >= ARENA_HEIGHT as i32 {
            return;
        }
        let Some(color) = palette_color(cell) else {
            return;
        };
        let px = ox + 1 + x as u16 * self.cell_w;
        let py = oy + 1 + y as u16 * self.cell_h;
        fb.fill_rect(
            px,
            py,
            self.cell_w,
            self.cell_h,
            Cell::new(BLOCK, CellStyle::new(color, BACKGROUND)),
        );
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.set(x, y, Cell::new('┌', style));
    fb.set(right, y, Cell::new('┐', style));
    fb.set(x, bottom, Cell::new('└', style));
    fb.set(right, bottom, Cell::new('┘', style));
    for dx in 1..w - 1 {
        fb.set(x + dx, y, Cell::new('─', style));
        fb.set(x + dx, bottom, Cell::new('─', style));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, Cell::new('│', style));
        fb.set(right, y + dy, Cell::new('│', style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_piece_colors() {
        for a in 1..PALETTE.len() {
            for b in a + 1..PALETTE.len() {
                assert_ne!(PALETTE[a], PALETTE[b]);
            }
        }
        assert_eq!(palette_color(EMPTY), None);
        assert_eq!(palette_color(8), None);
    }

    #[test]
    fn cell_at_inverts_layout() {
        let view = GameView::default();
        let vp = Viewport::new(26, 22);
        // frame is 26x22, origin (0, 0); cell (0, 0) starts at column 1, row 1
        assert_eq!(view.cell_at(vp, 1, 1), (0, 0));
        assert_eq!(view.cell_at(vp, 2, 1), (0, 0));
        assert_eq!(view.cell_at(vp, 3, 1), (1, 0));
        assert_eq!(view.cell_at(vp, 0, 0), (-1, -1));
    }
}
