//! Terminal runner (default binary).
//!
//! Single-threaded: each frame ticks the clock, paints, then waits for input
//! until the next frame is due.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use arena_tetris::core::{DropOutcome, GameLoop, GameState, TickOutcome};
use arena_tetris::input::{handle_key_event, should_quit, GridPoint, PointerAdapter};
use arena_tetris::term::{Screen, TerminalRenderer, Viewport};
use arena_tetris::{piece_footprint, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_tracing(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file when one is configured; the terminal is busy with the game.
fn init_tracing(config: &RunConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut game = GameLoop::new(GameState::new(config.seed.unwrap_or_else(clock_seed)));
    info!(seed = game.state().seed(), frame_ms = config.frame_ms, "starting");

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut screen = Screen::new(Viewport::new(w, h));
    let mut pointer = PointerAdapter::new();

    let frame = Duration::from_millis(config.frame_ms as u64);
    let start = Instant::now();
    let mut next_frame = start;

    loop {
        let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        if let TickOutcome::Dropped(DropOutcome::Locked(event)) = game.tick(now_ms) {
            debug!(lines = event.lines_cleared(), score = game.state().score(), "gravity lock");
        }

        game.present(&mut screen).unwrap_or_else(|never| match never {});
        term.draw_swap(screen.framebuffer_mut())?;

        next_frame += frame;
        let now = Instant::now();
        if next_frame < now {
            // Fell behind (suspended terminal, slow flush): don't try to catch up
            next_frame = now;
        }

        while event::poll(next_frame.saturating_duration_since(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    info!(
                        score = game.state().score(),
                        lines = game.state().lines(),
                        "quit"
                    );
                    return Ok(());
                }
                Event::Key(key) => {
                    if let Some(action) = handle_key_event(key) {
                        game.apply(action);
                    }
                }
                Event::Mouse(mouse) => {
                    let (x, y) = screen.cell_at(mouse.column, mouse.row);
                    let footprint = piece_footprint(game.state().piece());
                    for action in pointer.handle(mouse.kind, GridPoint::new(x, y), &footprint) {
                        game.apply(action);
                    }
                }
                Event::Resize(w, h) => {
                    screen.set_viewport(Viewport::new(w, h));
                    term.invalidate();
                }
                _ => {}
            }
        }
    }
}
