//! Mouse drag and click handling.
//!
//! Pressing on an occupied cell of the falling piece starts a drag. While the
//! button is held, each arena column the pointer crosses becomes exactly one
//! `MoveLeft`/`MoveRight`, never a multi-column jump, so the engine validates
//! every step. A click that did not drag and lands in the 4x4 area around the
//! piece origin rotates counter-clockwise.
//!
//! Coordinates are arena cells. Mapping terminal columns/rows to cells is the
//! renderer's job since only it knows the layout.

use arrayvec::ArrayVec;
use crossterm::event::{MouseButton, MouseEventKind};

use crate::types::{GameAction, ARENA_WIDTH};

/// Side of the square click target around the piece origin.
const CLICK_AREA: i32 = 4;

/// An arena cell position. May lie outside the arena while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The active piece as the pointer adapter sees it.
#[derive(Debug, Clone, Default)]
pub struct PieceFootprint {
    origin: GridPoint,
    cells: ArrayVec<GridPoint, 16>,
}

impl PieceFootprint {
    /// `origin` is the arena position of the shape's local (0, 0); `cells`
    /// are its occupied cells in arena coordinates.
    pub fn new(origin: GridPoint, cells: impl IntoIterator<Item = GridPoint>) -> Self {
        let mut out = ArrayVec::new();
        for cell in cells {
            if out.try_push(cell).is_err() {
                break;
            }
        }
        Self { origin, cells: out }
    }

    pub fn origin(&self) -> GridPoint {
        self.origin
    }

    pub fn covers(&self, p: GridPoint) -> bool {
        self.cells.contains(&p)
    }

    fn click_area_contains(&self, p: GridPoint) -> bool {
        let left = (self.origin.x - CLICK_AREA / 2).max(0);
        let top = (self.origin.y - CLICK_AREA / 2).max(0);
        (left..left + CLICK_AREA).contains(&p.x) && (top..top + CLICK_AREA).contains(&p.y)
    }
}

/// Actions produced by one pointer event. A drag can cross at most the arena
/// width in a single event.
pub type PointerActions = ArrayVec<GameAction, ARENA_WIDTH>;

#[derive(Debug, Clone, Default)]
pub struct PointerAdapter {
    /// Column of the last emitted step while dragging.
    drag_x: Option<i32>,
    /// Set once a press has produced at least one move.
    moved: bool,
    pressed: bool,
}

impl PointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_x.is_some()
    }

    pub fn press(&mut self, at: GridPoint, piece: &PieceFootprint) {
        self.pressed = true;
        self.moved = false;
        self.drag_x = piece.covers(at).then_some(at.x);
    }

    pub fn drag(&mut self, at: GridPoint) -> PointerActions {
        let mut out = PointerActions::new();
        let Some(last) = self.drag_x else {
            return out;
        };

        let delta = at.x - last;
        if delta == 0 {
            return out;
        }

        let action = if delta > 0 {
            GameAction::MoveRight
        } else {
            GameAction::MoveLeft
        };
        let steps = (delta.unsigned_abs() as usize).min(out.capacity());
        for _ in 0..steps {
            out.push(action);
        }
        self.drag_x = Some(at.x);
        self.moved = true;
        out
    }

    /// End the press. Returns a rotation if this was a click near the piece.
    pub fn release(&mut self, at: GridPoint, piece: &PieceFootprint) -> Option<GameAction> {
        let was_click = self.pressed && !self.moved;
        self.pressed = false;
        self.moved = false;
        self.drag_x = None;

        (was_click && piece.click_area_contains(at)).then_some(GameAction::RotateCcw)
    }

    /// Feed a crossterm mouse event already mapped to an arena cell.
    pub fn handle(
        &mut self,
        kind: MouseEventKind,
        at: GridPoint,
        piece: &PieceFootprint,
    ) -> PointerActions {
        let mut out = PointerActions::new();
        match kind {
            MouseEventKind::Down(MouseButton::Left) => self.press(at, piece),
            MouseEventKind::Drag(MouseButton::Left) => out = self.drag(at),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(action) = self.release(at, piece) {
                    out.push(action);
                }
            }
            _ => {}
        }
        out
    }
}
