use arena_tetris::core::{GameLoop, GameState, Renderer};
use arena_tetris::term::{Screen, Viewport, PALETTE};
use arena_tetris::types::PieceKind;

fn o_game() -> GameLoop {
    let mut state = GameState::new(1);
    state.spawn_kind(PieceKind::O);
    GameLoop::new(state)
}

#[test]
fn border_corners_frame_the_arena() {
    // 12 cells * 2 chars + border = 26 wide, 20 rows + border = 22 tall
    let mut screen = Screen::new(Viewport::new(26, 22));
    o_game().present(&mut screen).unwrap();
    let fb = screen.framebuffer();

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(25, 21).unwrap().ch, '┘');
}

#[test]
fn piece_cells_are_two_chars_wide_in_palette_color() {
    let mut screen = Screen::new(Viewport::new(40, 22));
    o_game().present(&mut screen).unwrap();
    let fb = screen.framebuffer();

    // Arena centered: origin x = (40 - 26) / 2 = 7; O at column 5 starts at 7 + 1 + 10
    for x in 18..22 {
        let cell = fb.get(x, 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, PALETTE[PieceKind::O.cell() as usize]);
    }
    assert_eq!(fb.get(17, 1).unwrap().ch, ' ');
    assert_eq!(fb.get(22, 1).unwrap().ch, ' ');
    assert_eq!(screen.cell_at(18, 1), (5, 0));
    assert_eq!(screen.cell_at(21, 2), (6, 1));
}

#[test]
fn locked_cells_use_their_own_color() {
    let mut state = GameState::new(1);
    state.arena_mut().set(0, 19, PieceKind::Z.cell());
    let mut screen = Screen::new(Viewport::new(26, 22));
    screen
        .render_frame(state.arena(), state.piece())
        .unwrap();

    let cell = screen.framebuffer().get(1, 20).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, PALETTE[7]);
}

#[test]
fn score_panel_shows_current_score() {
    let mut screen = Screen::new(Viewport::new(40, 22));
    let game = o_game();
    game.present(&mut screen).unwrap();
    assert!(screen.framebuffer().row_text(0).contains("SCORE"));
    assert_eq!(screen.framebuffer().row_text(1).trim_end().chars().last(), Some('0'));

    screen.render_score(120).unwrap();
    assert!(screen.framebuffer().row_text(1).ends_with("120  "));
}

#[test]
fn score_panel_is_skipped_when_too_narrow() {
    let mut screen = Screen::new(Viewport::new(26, 22));
    o_game().present(&mut screen).unwrap();
    assert!(!screen.framebuffer().row_text(0).contains("SCORE"));
}
