//! Integration tests for the engine: state machine, gravity, locking and
//! the collaborator ports.

use blockfall::core::{
    GameConfig, GameState, MemoryStore, Piece, ScoreStore, SequenceSource, SoundLog,
};
use blockfall::types::{GameAction, GameStatus, PieceKind, Settings, SoundEvent};

fn game(kinds: &[PieceKind]) -> (GameState, SoundLog) {
    game_with_store(kinds, MemoryStore::default())
}

fn game_with_store(kinds: &[PieceKind], store: MemoryStore) -> (GameState, SoundLog) {
    let log = SoundLog::new();
    let state = GameState::with_ports(
        GameConfig::default(),
        Box::new(SequenceSource::new(kinds.to_vec())),
        Box::new(log.clone()),
        Box::new(store),
    );
    (state, log)
}

fn fill_row_except(state: &mut GameState, y: i16, holes: &[i16]) {
    let width = state.board().width() as i16;
    for x in 0..width {
        if !holes.contains(&x) {
            state.board_mut().set(x, y, Some(PieceKind::Z));
        }
    }
}

#[test]
fn test_game_lifecycle() {
    let (mut state, _) = game(&[PieceKind::T]);
    assert_eq!(state.status(), GameStatus::Menu);
    assert!(state.active().is_none());

    assert!(state.start());
    assert_eq!(state.status(), GameStatus::Playing);
    assert!(state.active().is_some());
    assert!(state.next().is_some());
    assert_eq!((state.score(), state.level(), state.lines()), (0, 1, 0));
}

#[test]
fn test_commands_outside_playing_are_ignored() {
    let (mut state, log) = game(&[PieceKind::T]);

    // Menu
    assert!(!state.move_piece(1, 0));
    assert!(!state.rotate());
    assert!(state.hard_drop().is_none());
    assert!(!state.update(5000.0));
    assert!(!state.pause());
    assert!(!state.resume());

    // Paused
    state.start();
    state.pause();
    let before = *state.active().unwrap();
    assert!(!state.move_piece(-1, 0));
    assert!(!state.rotate());
    assert!(state.hard_drop().is_none());
    assert!(!state.update(5000.0));
    assert_eq!(*state.active().unwrap(), before);
    assert!(log.events().is_empty());
}

#[test]
fn test_pause_freezes_gravity_timer() {
    let (mut state, _) = game(&[PieceKind::O]);
    state.start();
    state.update(600.0);
    state.pause();
    state.update(10_000.0);
    assert_eq!(state.drop_timer_ms(), 600.0);

    state.resume();
    assert!(!state.update(300.0));
    assert!(state.update(100.0));
}

#[test]
fn test_toggle_pause_round_trip() {
    let (mut state, _) = game(&[PieceKind::O]);
    assert!(!state.toggle_pause());
    state.start();
    assert!(state.toggle_pause());
    assert_eq!(state.status(), GameStatus::Paused);
    assert!(state.toggle_pause());
    assert_eq!(state.status(), GameStatus::Playing);
}

#[test]
fn test_restart_after_game_over_resets_session() {
    let (mut state, _) = game(&[PieceKind::O]);
    state.start();
    fill_row_except(&mut state, 0, &[0]);
    state.hard_drop();
    assert_eq!(state.status(), GameStatus::GameOver);
    assert!(state.board().filled_count() > 0);

    // No way back to the menu; start goes straight into a new game.
    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.board().filled_count(), 0);
    assert_eq!((state.score(), state.level(), state.lines()), (0, 1, 0));
}

// Scenario A: an incomplete bottom row is left alone; completing it clears
// exactly one line.
#[test]
fn test_completing_bottom_row_clears_one_line() {
    let (mut state, log) = game(&[PieceKind::I]);
    state.start();
    fill_row_except(&mut state, 19, &[6, 7, 8, 9]);

    assert!(!state.board().is_row_full(19));

    state.set_active(Piece::spawn(PieceKind::I, 6, 0));
    state.hard_drop();

    assert_eq!(state.board().filled_count(), 0);
    assert_eq!(state.board().height(), 20);
    assert_eq!(state.score(), 100);
    assert_eq!(state.lines(), 1);
    assert_eq!(log.count(SoundEvent::Clear), 1);

    let event = state.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 1);
    assert_eq!(event.score_delta, 100);
}

// Scenario B: a piece that cannot leave the spawn rows ends the game on its
// next lock attempt, leaving the board as it was.
#[test]
fn test_blocked_spawn_ends_game_without_touching_board() {
    let (mut state, log) = game(&[PieceKind::T]);
    state.start();
    // T spawns at x=3..5 with its bottom row on row 0.
    state.board_mut().set(4, 1, Some(PieceKind::I));
    let before = state.board().clone();

    assert!(state.update(1000.0));
    assert_eq!(state.status(), GameStatus::GameOver);
    assert_eq!(state.board(), &before);
    assert_eq!(log.count(SoundEvent::GameOver), 1);
    assert!(state.active().is_none());
}

// Scenario C: moving into the left wall fails and leaves the piece put.
#[test]
fn test_move_into_wall_is_rejected() {
    let (mut state, log) = game(&[PieceKind::O]);
    state.start();
    while state.move_piece(-1, 0) {}
    let piece = *state.active().unwrap();
    assert_eq!(piece.x(), 0);
    log.clear();

    assert!(!state.move_piece(-1, 0));
    assert_eq!(*state.active().unwrap(), piece);
    assert!(log.events().is_empty());
}

// Scenario D: hard drop lands on the highest filled cell under the piece.
#[test]
fn test_hard_drop_lands_on_stack() {
    let (mut state, log) = game(&[PieceKind::O, PieceKind::T]);
    state.start();
    state.board_mut().set(5, 12, Some(PieceKind::L));

    let rows = state.hard_drop().unwrap();
    // O occupies columns 4-5; its bottom row rests on row 11.
    assert_eq!(rows, 11);
    for (x, y) in [(4, 10), (5, 10), (4, 11), (5, 11)] {
        assert_eq!(state.board().get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(log.count(SoundEvent::Drop), 1);
    assert_eq!(state.active().unwrap().kind(), PieceKind::T);
}

// Scenario E: four full rows at once.
#[test]
fn test_four_line_clear() {
    let (mut state, _) = game(&[PieceKind::I]);
    state.start();
    for y in 16..20 {
        fill_row_except(&mut state, y, &[0]);
    }
    let mut vertical = Piece::spawn(PieceKind::I, 0, 10);
    let shape = vertical.rotated();
    vertical.apply_rotation(shape);
    state.set_active(vertical);

    state.hard_drop();
    assert_eq!(state.lines(), 4);
    assert_eq!(state.score(), 400);
    assert_eq!(state.board().filled_count(), 0);
    assert_eq!(state.board().rows().count(), 20);
    assert_eq!(state.take_last_event().unwrap().lines_cleared, 4);
}

#[test]
fn test_level_up_speeds_up_gravity() {
    let (mut state, _) = game(&[PieceKind::I]);
    state.start();
    let slow = state.drop_interval_ms();

    // Ten single-line clears.
    for _ in 0..10 {
        fill_row_except(&mut state, 19, &[6, 7, 8, 9]);
        state.set_active(Piece::spawn(PieceKind::I, 6, 0));
        state.hard_drop();
    }
    assert_eq!(state.lines(), 10);
    assert_eq!(state.level(), 2);
    // The tenth clear was still scored at level 1.
    assert_eq!(state.score(), 1000);
    assert!((state.drop_interval_ms() - slow * 0.9).abs() < 1e-9);
}

#[test]
fn test_high_score_persisted_only_when_beaten() {
    let (mut state, _) = game_with_store(&[PieceKind::O], MemoryStore::new(50, Settings::default()));
    assert_eq!(state.high_score(), 50);

    state.start();
    fill_row_except(&mut state, 19, &[4, 5]);
    state.hard_drop();
    assert_eq!(state.score(), 100);
    assert_eq!(state.store().high_score(), 50);

    // Bury the spawn area to force a game over.
    fill_row_except(&mut state, 0, &[0]);
    state.hard_drop();
    assert_eq!(state.status(), GameStatus::GameOver);
    assert_eq!(state.high_score(), 100);
    assert_eq!(state.store().high_score(), 100);
}

#[test]
fn test_sound_toggle_is_persisted_and_silences_events() {
    let (mut state, log) = game(&[PieceKind::T]);
    state.start();
    state.move_piece(1, 0);
    assert_eq!(log.count(SoundEvent::Move), 1);

    state.apply_action(GameAction::ToggleSound);
    assert_eq!(state.store().settings(), Settings { sound_enabled: false });
    state.move_piece(1, 0);
    state.rotate();
    state.hard_drop();
    assert_eq!(log.events(), vec![SoundEvent::Move]);

    // Toggling also works from the menu.
    let (mut menu, _) = game(&[PieceKind::T]);
    assert!(menu.toggle_sound());
    assert!(!menu.settings().sound_enabled);
}

#[test]
fn test_stored_settings_are_loaded() {
    let (state, _) = game_with_store(
        &[PieceKind::T],
        MemoryStore::new(0, Settings { sound_enabled: false }),
    );
    assert!(!state.settings().sound_enabled);
    assert!(!state.snapshot().sound_enabled);
}

#[test]
fn test_snapshot_into_reuses_buffer() {
    let (mut state, _) = game(&[PieceKind::J, PieceKind::L]);
    state.start();
    let mut snap = state.snapshot();
    let capacity = snap.board.capacity();

    state.hard_drop();
    state.snapshot_into(&mut snap);
    assert_eq!(snap.board.len(), 200);
    assert_eq!(snap.board.capacity(), capacity);
    assert_eq!(snap.board.iter().filter(|c| c.is_some()).count(), 4);
    assert_eq!(snap.active.as_ref().unwrap().kind, PieceKind::L);
}
