//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, persistence).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (a session may configure others):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn row**: -1, so a freshly spawned piece pokes above the visible board
//!
//! # Difficulty Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 1000 | Gravity interval at level 1 |
//! | `SPEED_FACTOR` | 0.9 | Interval multiplier per level |
//! | `LINES_PER_LEVEL` | 10 | Lines needed to gain a level |
//! | `POINTS_PER_LINE` | 100 | Base reward per cleared line (times level) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, GameStatus, PieceKind, SoundEvent, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert!(GameStatus::Menu.accepts_start());
//! assert!(!GameStatus::Paused.accepts_start());
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(SoundEvent::GameOver.as_str(), "gameOver");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest board edge a session accepts (the I piece is 4 cells long).
pub const MIN_BOARD_EDGE: u8 = 4;

/// Largest board edge a session accepts; keeps coordinates well inside `i16`.
pub const MAX_BOARD_EDGE: u8 = 255;

/// Row at which new pieces spawn. Negative rows are above the visible board.
pub const SPAWN_ROW: i16 = -1;

/// Fixed timestep used by the terminal driver (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 in milliseconds
pub const INITIAL_SPEED_MS: f64 = 1000.0;

/// Per-level multiplier applied to the gravity interval
pub const SPEED_FACTOR: f64 = 0.9;

/// Lines that must be cleared to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points awarded per cleared line, multiplied by the current level
pub const POINTS_PER_LINE: u32 = 100;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Map an index in `0..7` onto a kind (wrapping).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Session lifecycle states
///
/// The reachable transitions are:
///
/// ```text
/// Menu ──start──▶ Playing ◀──resume── Paused
///                  │  └────pause──────▶ ▲
///                  ▼                    (only from Playing)
///               GameOver ──start──▶ Playing
/// ```
///
/// There is no way back to `Menu` once a game has been started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Whether a `start` command begins a fresh game from this state.
    pub fn accepts_start(&self) -> bool {
        matches!(self, GameStatus::Menu | GameStatus::GameOver)
    }

    /// Whether a game (current and next piece) is in progress.
    pub fn in_game(&self) -> bool {
        matches!(self, GameStatus::Playing | GameStatus::Paused)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Menu => "menu",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }
}

/// Sound cues signalled to the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    /// Successful horizontal move
    Move,
    /// Successful rotation
    Rotate,
    /// Hard drop (once per drop, not per row)
    Drop,
    /// One or more lines cleared
    Clear,
    /// The game ended
    GameOver,
}

impl SoundEvent {
    /// Event name as understood by audio backends
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEvent::Move => "move",
            SoundEvent::Rotate => "rotate",
            SoundEvent::Drop => "drop",
            SoundEvent::Clear => "clear",
            SoundEvent::GameOver => "gameOver",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These are what the input collaborator produces. Each maps onto one engine
/// command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Start a new game (from the menu or after game over)
    Start,
    /// Pause a running game
    Pause,
    /// Resume a paused game
    Resume,
    /// Pause or resume, whichever applies
    TogglePause,
    /// Flip the sound setting
    ToggleSound,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "start" => Some(GameAction::Start),
            "pause" => Some(GameAction::Pause),
            "resume" => Some(GameAction::Resume),
            "togglepause" => Some(GameAction::TogglePause),
            "togglesound" => Some(GameAction::ToggleSound),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Resume => "resume",
            GameAction::TogglePause => "togglePause",
            GameAction::ToggleSound => "toggleSound",
        }
    }
}

/// User preferences persisted alongside the high score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Settings {
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
        }
    }
}

/// Outcome of the most recent lock, consumed by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// The piece stuck out above the board; nothing was written.
    pub game_over: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Filled cell, remembering which piece filled it
pub type Cell = Option<PieceKind>;
