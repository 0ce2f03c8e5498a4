//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management and simulation. It
//! does no I/O of its own: sound and persistence go through the traits in
//! [`ports`], and piece generation through [`rng::PieceSource`].
//!
//! # Module Structure
//!
//! - [`board`]: game grid with collision checks and line clearing
//! - [`pieces`]: tetromino matrices and clockwise rotation
//! - [`rng`]: uniform piece generation and fixed sequences for tests
//! - [`scoring`]: difficulty curve and line-clear rewards
//! - [`config`]: session configuration from the environment
//! - [`game_state`]: the engine and its Menu/Playing/Paused/GameOver machine
//! - [`snapshot`]: owned view for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn centred with their top row just above the board.
//! - Rotation is clockwise only and is rejected when it collides (no kicks).
//! - Gravity steps once per `initial * factor^(level - 1)` milliseconds.
//! - A piece that locks while poking above the board ends the game.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState};
//! use blockfall_core::types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(GameConfig::default());
//! game.apply_action(GameAction::Start);
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::HardDrop);
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod ports;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use game_state::GameState;
pub use pieces::{get_shape, Piece, Shape};
pub use ports::{AudioSink, MemoryStore, ScoreStore, Silent, SoundLog};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use scoring::DifficultyConfig;
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
