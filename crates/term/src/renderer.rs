//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Only the cells that changed since the previous frame are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen. `None` forces a full redraw.
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(EnableMouseCapture)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(DisableMouseCapture)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next draw (terminal resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then hand the previously shown frame back through `fb` for
    /// the caller to repaint.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        let mut back = match self.shown.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.out)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.out)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush()?;

        std::mem::swap(&mut back, fb);
        self.shown = Some(back);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Queues styled characters, emitting style changes only when needed.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn put(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            let s = cell.style;
            self.out
                .queue(SetAttribute(Attribute::Reset))?
                .queue(SetForegroundColor(color(s.fg)))?
                .queue(SetBackgroundColor(color(s.bg)))?;
            if s.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            self.style = Some(s);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    /// Leave the terminal with default attributes if anything was styled.
    fn finish(self) -> Result<()> {
        if self.style.is_some() {
            self.out
                .queue(ResetColor)?
                .queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Clear the screen and paint every cell of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        painter.move_to(0, y)?;
        for x in 0..fb.width() {
            painter.put(fb.get(x, y).unwrap_or_default())?;
        }
    }
    painter.finish()
}

/// Paint only the cells of `next` that differ from `prev` into `out`.
///
/// Both frames must have the same size; [`TerminalRenderer::draw_swap`]
/// falls back to [`encode_full_into`] otherwise.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        painter.move_to(x, y)?;
        for dx in 0..len {
            painter.put(next.get(x + dx, y).unwrap_or_default())?;
        }
    }
    painter.finish()
}

/// Horizontal runs `(x, y, len)` of cells that differ between two frames.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let w = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < w && !differs(x) {
                x += 1;
            }
            if x >= w {
                return None;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            b.set(x, 0, Cell::new('X', style));
        }
        b.set(5, 1, Cell::new('Y', style));

        let runs: Vec<_> = changed_runs(&a, &b).collect();
        assert_eq!(runs, vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let fb = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn full_encode_prints_every_cell() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("abc"));
    }
}
