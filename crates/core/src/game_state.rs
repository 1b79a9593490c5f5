//! Game state module - the active piece and everything it acts on
//!
//! `GameState` owns the arena, the falling piece, the score and the drop
//! counter. Every operation mutates it through `&mut self`; there is no
//! shared or global state, so independent games can run side by side.
//!
//! Rejected moves and rotations leave the state untouched. A piece that
//! cannot spawn tops the game out: the arena is wiped, the score resets and
//! play continues with the freshly spawned piece.

use tracing::{debug, info, trace};

use crate::arena::Arena;
use crate::collision::collide;
use crate::pieces::{create_piece, ShapeMatrix};
use crate::rng::PieceRandomizer;
use crate::sweep::{sweep, ClearedRows};
use crate::types::{Cell, GameAction, PieceKind, ARENA_WIDTH, LINE_SCORE};

/// Wall-kick offsets tried after a rotation, relative to the pre-rotation x.
pub const KICK_OFFSETS: [i8; 3] = [0, -1, 1];

/// Arena offset of a shape matrix's local (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// The falling piece: a shape matrix placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub matrix: ShapeMatrix,
    pub pos: Position,
}

impl Piece {
    pub fn new(matrix: ShapeMatrix, pos: Position) -> Self {
        Self { matrix, pos }
    }

    /// Place a fresh `kind` at the top of the arena, horizontally centered.
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = create_piece(kind);
        let x = (ARENA_WIDTH / 2) as i8 - (matrix.width() / 2) as i8;
        Self::new(matrix, Position::new(x, 0))
    }

    /// Occupied cells in arena coordinates, as `(x, y, cell)`.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let (ox, oy) = (self.pos.x as i32, self.pos.y as i32);
        self.matrix
            .cells()
            .map(move |(x, y, v)| (ox + x as i32, oy + y as i32, v))
    }

    /// Whether the whole matrix span (empty columns included) lies within
    /// `[0, ARENA_WIDTH)`.
    pub fn within_side_walls(&self) -> bool {
        let x = self.pos.x as i32;
        x >= 0 && x + self.matrix.width() as i32 <= ARENA_WIDTH as i32
    }
}

/// What happened when a piece locked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// Row where the piece's matrix origin came to rest.
    pub rest_y: i8,
    /// Rows removed by the sweep, pre-sweep coordinates, bottom first.
    pub cleared_rows: ClearedRows,
    /// Points awarded for the cleared rows.
    pub points: u32,
    /// The next piece could not spawn and the game was reset.
    pub topped_out: bool,
}

impl LockEvent {
    pub fn lines_cleared(&self) -> usize {
        self.cleared_rows.len()
    }
}

/// Result of a single gravity or soft-drop step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Moved,
    /// The piece could not descend and was locked into the arena.
    Locked(LockEvent),
}

impl DropOutcome {
    pub fn locked(&self) -> Option<&LockEvent> {
        match self {
            DropOutcome::Locked(event) => Some(event),
            DropOutcome::Moved => None,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    arena: Arena,
    piece: Piece,
    randomizer: PieceRandomizer,
    score: u32,
    /// Milliseconds accumulated toward the next gravity drop.
    drop_counter_ms: u32,
    lines: u32,
    pieces_locked: u32,
    top_outs: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first piece.
    pub fn new(seed: u32) -> Self {
        Self::with_arena(seed, Arena::new())
    }

    /// Start from an existing arena (tests and replays).
    ///
    /// The first piece spawns against `arena`; if it is blocked the usual
    /// top-out reset applies and the arena comes back empty.
    pub fn with_arena(seed: u32, arena: Arena) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let first = randomizer.draw();
        let mut state = Self {
            arena,
            piece: Piece::spawn(first),
            randomizer,
            score: 0,
            drop_counter_ms: 0,
            lines: 0,
            pieces_locked: 0,
            top_outs: 0,
            last_event: None,
        };
        state.spawn_kind(first);
        state
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Replace the active piece as-is, without collision checks.
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn top_outs(&self) -> u32 {
        self.top_outs
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Whether the active piece currently overlaps the arena or its walls.
    pub fn collides(&self) -> bool {
        collide(&self.arena, &self.piece)
    }

    /// Add elapsed time to the drop counter and report whether it now exceeds
    /// `interval_ms`.
    pub(crate) fn accumulate(&mut self, elapsed_ms: u32, interval_ms: u32) -> bool {
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        self.drop_counter_ms > interval_ms
    }

    /// Move the piece down one row, locking it if it cannot descend.
    ///
    /// Always resets the drop counter, so a soft drop also restarts gravity.
    pub fn drop(&mut self) -> DropOutcome {
        self.drop_counter_ms = 0;
        self.piece.pos.y += 1;
        if !self.collides() {
            return DropOutcome::Moved;
        }

        self.piece.pos.y -= 1;
        DropOutcome::Locked(self.lock())
    }

    /// Merge the piece, sweep full rows, then spawn the next piece.
    fn lock(&mut self) -> LockEvent {
        let rest_y = self.piece.pos.y;
        self.arena.merge(&self.piece);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let cleared_rows = sweep(&mut self.arena);
        let points = cleared_rows.len() as u32 * LINE_SCORE;
        self.lines += cleared_rows.len() as u32;
        self.score += points;
        if !cleared_rows.is_empty() {
            debug!(rows = ?cleared_rows.as_slice(), points, score = self.score, "rows cleared");
        }

        let topped_out = self.spawn();
        debug!(rest_y, topped_out, "piece locked");

        let event = LockEvent {
            rest_y,
            cleared_rows,
            points,
            topped_out,
        };
        self.last_event = Some(event.clone());
        event
    }

    /// Shift horizontally by `offset` columns, one column at a time.
    ///
    /// Stops at the first step that would collide or push the matrix past a
    /// side wall. Returns the signed number of columns actually moved.
    pub fn shift(&mut self, offset: i8) -> i8 {
        let dir = offset.signum();
        let mut moved = 0i8;
        for _ in 0..offset.unsigned_abs() {
            self.piece.pos.x += dir;
            if self.collides() || !self.piece.within_side_walls() {
                self.piece.pos.x -= dir;
                break;
            }
            moved += dir;
        }
        moved
    }

    /// Rotate 90° (clockwise when `dir > 0`) with a small wall kick.
    ///
    /// Tries x offsets `0, -1, +1` from the current position. If all collide
    /// the matrix and position are restored and `false` is returned.
    pub fn rotate(&mut self, dir: i8) -> bool {
        let x = self.piece.pos.x;
        self.piece.matrix.rotate(dir);

        for offset in KICK_OFFSETS {
            self.piece.pos.x = x + offset;
            if !self.collides() {
                return true;
            }
        }

        self.piece.matrix.rotate(if dir > 0 { -1 } else { 1 });
        self.piece.pos.x = x;
        false
    }

    /// Spawn a uniformly random piece. Returns `true` if it topped out.
    pub fn spawn(&mut self) -> bool {
        let kind = self.randomizer.draw();
        self.spawn_kind(kind)
    }

    /// Spawn a specific piece. Returns `true` if it topped out.
    ///
    /// A top-out clears the arena and resets the score; the new piece stays
    /// at its spawn position on the now empty arena.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        self.piece = Piece::spawn(kind);
        if !self.collides() {
            trace!(kind = kind.letter(), x = self.piece.pos.x, "spawn");
            return false;
        }

        info!(score = self.score, lines = self.lines, "top-out, resetting arena");
        self.arena.clear();
        self.score = 0;
        self.lines = 0;
        self.top_outs = self.top_outs.wrapping_add(1);
        true
    }

    /// Apply one logical input command.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                self.shift(-1);
            }
            GameAction::MoveRight => {
                self.shift(1);
            }
            GameAction::SoftDrop => {
                self.drop();
            }
            GameAction::RotateCw => {
                self.rotate(1);
            }
            GameAction::RotateCcw => {
                self.rotate(-1);
            }
        }
    }
}
