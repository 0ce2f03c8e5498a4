//! Game state module - the engine and its state machine
//!
//! This module ties together all core components: board, pieces, piece
//! source, scoring and the collaborator ports. It owns the gravity timer,
//! applies player commands and drives the session through
//! Menu → Playing ⇄ Paused → GameOver → Playing.
//!
//! Every command is a silent no-op outside the states it applies to. The
//! driver is expected to call [`GameState::update`] and the command methods
//! from a single thread, one at a time.

use std::fmt;

use log::{debug, info};

use crate::config::GameConfig;
use crate::pieces::Piece;
use crate::ports::{AudioSink, MemoryStore, ScoreStore, Silent};
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::score_delta;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::types::{GameAction, GameStatus, LockEvent, Settings, SoundEvent};
use crate::Board;

/// Complete game state
pub struct GameState {
    config: GameConfig,
    board: Board,
    status: GameStatus,
    active: Option<Piece>,
    next: Option<Piece>,
    score: u32,
    level: u32,
    lines: u32,
    high_score: u32,
    settings: Settings,
    /// Milliseconds accumulated towards the next gravity step
    drop_timer_ms: f64,
    /// Last lock outcome (consumed by observers).
    last_event: Option<LockEvent>,
    pieces: Box<dyn PieceSource>,
    audio: Box<dyn AudioSink>,
    store: Box<dyn ScoreStore>,
}

impl GameState {
    /// Create a session in the menu with a uniform piece source seeded from
    /// the config, no audio and in-memory persistence.
    pub fn new(config: GameConfig) -> Self {
        Self::with_ports(
            config,
            Box::new(UniformSource::new(config.seed)),
            Box::new(Silent),
            Box::new(MemoryStore::default()),
        )
    }

    /// Create a session in the menu wired to the given collaborators.
    ///
    /// The high score and settings are read from `store` once, here.
    pub fn with_ports(
        config: GameConfig,
        pieces: Box<dyn PieceSource>,
        audio: Box<dyn AudioSink>,
        store: Box<dyn ScoreStore>,
    ) -> Self {
        let high_score = store.high_score();
        let settings = store.settings();
        Self {
            config,
            board: Board::new(config.board_width, config.board_height),
            status: GameStatus::Menu,
            active: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            high_score,
            settings,
            drop_timer_ms: 0.0,
            last_event: None,
            pieces,
            audio,
            store,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn store(&self) -> &dyn ScoreStore {
        self.store.as_ref()
    }

    pub fn drop_timer_ms(&self) -> f64 {
        self.drop_timer_ms
    }

    /// Current gravity interval based on level
    pub fn drop_interval_ms(&self) -> f64 {
        self.config.difficulty.drop_interval_ms(self.level)
    }

    /// Start a fresh game from the menu or after a game over.
    ///
    /// Returns false (and changes nothing) in any other state.
    pub fn start(&mut self) -> bool {
        if !self.status.accepts_start() {
            return false;
        }

        self.board = Board::new(self.config.board_width, self.config.board_height);
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_timer_ms = 0.0;
        self.last_event = None;

        let current = self.spawn_piece();
        let next = self.spawn_piece();
        self.active = Some(current);
        self.next = Some(next);
        self.status = GameStatus::Playing;

        info!(
            "game started on {}x{} board",
            self.config.board_width, self.config.board_height
        );
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.status = GameStatus::Paused;
        info!("game paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Playing;
        info!("game resumed");
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::Menu | GameStatus::GameOver => false,
        }
    }

    /// Turn sound on or off and persist the choice. Allowed in every state.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.settings.sound_enabled = enabled;
        self.store.set_settings(self.settings);
        debug!("sound enabled: {enabled}");
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.set_sound_enabled(!self.settings.sound_enabled);
        true
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulated time reaches the level's interval the piece moves
    /// down one row, or locks if it cannot. The accumulator then restarts from
    /// zero, so a single call performs at most one step. Returns whether a
    /// step happened.
    pub fn update(&mut self, elapsed_ms: f64) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.drop_timer_ms += elapsed_ms;
        }

        if self.drop_timer_ms < self.drop_interval_ms() {
            return false;
        }

        if !self.move_piece(0, 1) {
            self.lock_and_advance();
        }
        self.drop_timer_ms = 0.0;
        true
    }

    /// Try to move the active piece. Successful horizontal moves play `move`.
    pub fn move_piece(&mut self, dx: i16, dy: i16) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        if !self.board.is_valid_placement(&active.cells_offset(dx, dy)) {
            return false;
        }
        active.translate(dx, dy);

        if dx != 0 {
            self.play_sound(SoundEvent::Move);
        }
        true
    }

    /// Move the active piece one row down
    pub fn soft_drop(&mut self) -> bool {
        self.move_piece(0, 1)
    }

    /// Rotate the active piece clockwise in place.
    ///
    /// There are no wall kicks: if the rotated shape does not fit at the same
    /// position the piece keeps its orientation.
    pub fn rotate(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let candidate = active.rotated();
        if !self
            .board
            .is_valid_placement(&candidate.cells_at(active.x(), active.y()))
        {
            return false;
        }
        active.apply_rotation(candidate);

        self.play_sound(SoundEvent::Rotate);
        true
    }

    /// Drop the active piece as far as it goes and lock it immediately.
    ///
    /// Returns the number of rows descended, or None when not playing.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if self.status != GameStatus::Playing || self.active.is_none() {
            return None;
        }

        let mut rows = 0;
        while self.move_piece(0, 1) {
            rows += 1;
        }

        self.play_sound(SoundEvent::Drop);
        self.lock_and_advance();
        Some(rows)
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0),
            GameAction::MoveRight => self.move_piece(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Rotate => self.rotate(),
            GameAction::Start => self.start(),
            GameAction::Pause => self.pause(),
            GameAction::Resume => self.resume(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::ToggleSound => self.toggle_sound(),
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Lock the active piece, clear lines, score them and bring in the next
    /// piece. A piece that still sticks out above the board ends the game
    /// instead, leaving the board untouched.
    fn lock_and_advance(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let cells = active.occupied_cells();
        if cells.iter().any(|&(_, y)| y < 0) {
            self.last_event = Some(LockEvent {
                lines_cleared: 0,
                score_delta: 0,
                game_over: true,
            });
            self.end_game();
            return;
        }

        self.board.lock(&cells, active.kind());
        let cleared = self.board.clear_full_lines() as u32;

        let mut delta = 0;
        if cleared > 0 {
            delta = score_delta(cleared, self.level);
            self.score = self.score.saturating_add(delta);
            self.lines = self.lines.saturating_add(cleared);
            self.level = self.config.difficulty.level_for_lines(self.lines);
            debug!(
                "cleared {cleared} line(s) for {delta}; lines={} level={}",
                self.lines, self.level
            );
            self.play_sound(SoundEvent::Clear);
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            score_delta: delta,
            game_over: false,
        });

        let next = self.spawn_piece();
        self.active = self.next.replace(next);
        self.drop_timer_ms = 0.0;
    }

    fn end_game(&mut self) {
        self.status = GameStatus::GameOver;
        self.active = None;
        self.next = None;

        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.set_high_score(self.score);
            info!("game over with new high score {}", self.score);
        } else {
            info!("game over with score {}", self.score);
        }

        self.play_sound(SoundEvent::GameOver);
    }

    fn spawn_piece(&mut self) -> Piece {
        let kind = self.pieces.next_kind();
        debug!("generated {}", kind.as_str());
        Piece::spawn_for(kind, self.config.board_width)
    }

    fn play_sound(&mut self, event: SoundEvent) {
        if self.settings.sound_enabled {
            self.audio.play_sound(event);
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());

        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.next = self.next.as_ref().map(NextSnapshot::from);
        out.status = self.status;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.high_score = self.high_score;
        out.sound_enabled = self.settings.sound_enabled;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(any(test, feature = "test-support"))]
impl GameState {
    /// Direct board access for setting up scenarios.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece for setting up scenarios.
    pub fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("config", &self.config)
            .field("status", &self.status)
            .field("active", &self.active)
            .field("next", &self.next)
            .field("score", &self.score)
            .field("level", &self.level)
            .field("lines", &self.lines)
            .field("high_score", &self.high_score)
            .field("settings", &self.settings)
            .field("drop_timer_ms", &self.drop_timer_ms)
            .finish_non_exhaustive()
    }
}
