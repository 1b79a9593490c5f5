//! End-to-end engine scenarios on the 12x20 arena.

use arena_tetris::core::{
    create_piece, Arena, DropOutcome, GameLoop, GameState, LockEvent, Piece, Position, TickOutcome,
};
use arena_tetris::types::{GameAction, PieceKind, ARENA_HEIGHT, ARENA_WIDTH, EMPTY};

fn fill_row_except(arena: &mut Arena, y: i32, gaps: &[i32]) {
    for x in 0..ARENA_WIDTH as i32 {
        if !gaps.contains(&x) {
            arena.set(x, y, 1);
        }
    }
}

fn drop_until_locked(state: &mut GameState) -> LockEvent {
    for _ in 0..=ARENA_HEIGHT {
        if let DropOutcome::Locked(event) = state.drop() {
            return event;
        }
    }
    panic!("piece never locked");
}

#[test]
fn o_spawns_centered_on_empty_arena() {
    let mut state = GameState::new(1);
    assert!(!state.spawn_kind(PieceKind::O));
    assert_eq!(state.piece().pos, Position::new(5, 0));
}

#[test]
fn shift_into_left_wall_is_rejected() {
    let mut state = GameState::new(1);
    state.spawn_kind(PieceKind::O);
    assert_eq!(state.shift(-5), -5);
    assert_eq!(state.piece().pos.x, 0);

    assert_eq!(state.shift(-1), 0);
    assert_eq!(state.piece().pos.x, 0);

    state.apply_action(GameAction::MoveLeft);
    assert_eq!(state.piece().pos.x, 0);
}

#[test]
fn locking_into_the_bottom_row_clears_it() {
    let mut arena = Arena::new();
    fill_row_except(&mut arena, 19, &[5, 6]);
    let mut state = GameState::with_arena(3, arena);
    state.spawn_kind(PieceKind::O);

    let event = drop_until_locked(&mut state);
    assert_eq!(event.rest_y, 18);
    assert_eq!(event.cleared_rows.as_slice(), &[19]);
    assert_eq!(event.points, 10);
    assert_eq!(state.score(), 10);
    assert_eq!(state.lines(), 1);

    // Upper half of the O moved down into the bottom row
    assert_eq!(state.arena().filled_count(), 2);
    assert_eq!(state.arena().get(5, 19), Some(PieceKind::O.cell()));
    assert_eq!(state.arena().get(6, 19), Some(PieceKind::O.cell()));
}

#[test]
fn two_non_adjacent_rows_score_twenty() {
    let mut arena = Arena::new();
    fill_row_except(&mut arena, 19, &[5]);
    fill_row_except(&mut arena, 17, &[5]);
    arena.set(0, 18, 3);
    let mut state = GameState::with_arena(3, arena);
    state.spawn_kind(PieceKind::I);
    assert_eq!(state.piece().pos.x, 4);

    let event = drop_until_locked(&mut state);
    assert_eq!(event.rest_y, 16);
    assert_eq!(event.cleared_rows.as_slice(), &[19, 17]);
    assert_eq!(state.score(), 20);

    let arena = state.arena();
    for y in 0..2 {
        assert!(arena.row(y).iter().all(|&c| c == EMPTY), "row {y} not empty");
    }
    // Old row 18 is now the bottom row, old row 16 sits above it
    assert_eq!(arena.get(0, 19), Some(3));
    assert_eq!(arena.get(5, 19), Some(PieceKind::I.cell()));
    assert_eq!(arena.get(5, 18), Some(PieceKind::I.cell()));
    assert_eq!(arena.filled_count(), 3);
}

#[test]
fn filling_a_single_gap_clears_exactly_that_row() {
    let mut arena = Arena::new();
    fill_row_except(&mut arena, 19, &[5]);
    fill_row_except(&mut arena, 18, &[0, 5]);
    let mut state = GameState::with_arena(9, arena);
    state.spawn_kind(PieceKind::I);

    let event = drop_until_locked(&mut state);
    assert_eq!(event.lines_cleared(), 1);
    assert_eq!(state.score(), 10);

    // Former row 18, now complete except column 0
    assert!(!state.arena().is_row_full(19));
    assert_eq!(state.arena().get(0, 19), Some(EMPTY));
    assert_eq!(state.arena().get(5, 19), Some(PieceKind::I.cell()));
}

#[test]
fn spawning_into_a_blocked_top_wipes_the_arena() {
    let mut arena = Arena::new();
    for y in 0..4 {
        fill_row_except(&mut arena, y, &[0]);
    }
    fill_row_except(&mut arena, 19, &[5, 6]);
    let mut state = GameState::new(5);
    *state.arena_mut() = arena;
    state.set_piece(Piece::new(create_piece(PieceKind::O), Position::new(5, 18)));

    let event = drop_until_locked(&mut state);
    assert_eq!(event.points, 10);
    assert!(event.topped_out);

    assert_eq!(state.score(), 0);
    assert_eq!(state.top_outs(), 1);
    assert_eq!(state.arena().filled_count(), 0);
    assert!(state.arena().cells().iter().all(|&c| c == EMPTY));
    assert_eq!(state.piece().pos.y, 0);
    assert!(!state.collides());
}

#[test]
fn repeated_drops_lock_then_spawn_at_the_top() {
    let mut state = GameState::new(77);
    state.spawn_kind(PieceKind::O);

    let event = drop_until_locked(&mut state);
    assert_eq!(event.rest_y, 18);
    assert!(!event.topped_out);
    assert_eq!(state.pieces_locked(), 1);
    assert_eq!(state.piece().pos.y, 0);
    assert_eq!(state.take_last_event(), Some(event));
    assert_eq!(state.take_last_event(), None);
}

#[test]
fn gravity_alone_lands_a_piece_in_about_nineteen_seconds() {
    let mut state = GameState::new(21);
    state.spawn_kind(PieceKind::O);
    let mut game = GameLoop::new(state);

    let mut now = 0u64;
    let mut locked_at = None;
    while now < 30_000 {
        now += 16;
        if let TickOutcome::Dropped(DropOutcome::Locked(_)) = game.tick(now) {
            locked_at = Some(now);
            break;
        }
    }

    // 18 moves plus the locking drop, each just over one second apart
    let locked_at = locked_at.expect("gravity never locked the piece");
    assert!((19_000..20_000).contains(&locked_at), "locked at {locked_at}");
    assert_eq!(game.state().arena().filled_count(), 4);
}
