//! Game loop driver - turns clock timestamps into gravity drops
//!
//! The host calls [`GameLoop::tick`] with a monotonically increasing timestamp
//! at whatever cadence it renders (typically once per frame). Elapsed time is
//! accumulated, so uneven intervals between calls are fine. Input commands go
//! through [`GameLoop::apply`] on the same owner, which keeps input-triggered
//! moves and tick-triggered drops strictly serialized.

use crate::arena::Arena;
use crate::game_state::{DropOutcome, GameState, Piece};
use crate::types::{GameAction, DROP_INTERVAL_MS};
use tracing::trace;

/// Presentation collaborator, invoked once per frame after the engine has
/// mutated.
///
/// Cell value `0` must draw nothing; `1..=7` map to a fixed palette.
pub trait Renderer {
    type Error;

    fn render_frame(&mut self, arena: &Arena, piece: &Piece) -> Result<(), Self::Error>;

    fn render_score(&mut self, score: u32) -> Result<(), Self::Error>;
}

/// Result of one clock tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not enough time accumulated for a drop.
    Idle,
    /// Gravity fired.
    Dropped(DropOutcome),
}

/// Owns the game state and the clock bookkeeping.
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    last_time_ms: u64,
    drop_interval_ms: u32,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            last_time_ms: 0,
            drop_interval_ms: DROP_INTERVAL_MS,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance the clock to `now_ms`.
    ///
    /// The first timestamp is measured from zero. A timestamp earlier than
    /// the previous one counts as no elapsed time.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        let delta = now_ms.saturating_sub(self.last_time_ms);
        self.last_time_ms = self.last_time_ms.max(now_ms);

        let elapsed = u32::try_from(delta).unwrap_or(u32::MAX);
        if self.state.accumulate(elapsed, self.drop_interval_ms) {
            // drop() resets the counter whether the piece moved or locked
            TickOutcome::Dropped(self.state.drop())
        } else {
            TickOutcome::Idle
        }
    }

    /// Apply one input command between ticks.
    pub fn apply(&mut self, action: GameAction) {
        trace!(action = action.as_str(), "input");
        self.state.apply_action(action);
    }

    /// Hand the current arena, piece and score to `renderer`.
    pub fn present<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.render_frame(self.state.arena(), self.state.piece())?;
        renderer.render_score(self.state.score())
    }
}
