//! Terminal front-end pieces.
//!
//! A small, game-oriented rendering layer: the view draws a
//! [`GameSnapshot`](core::GameSnapshot) into a framebuffer of styled glyphs
//! and the renderer flushes that framebuffer to the terminal, writing only
//! what changed since the last frame. The terminal bell doubles as the
//! audio output.

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use audio::TerminalBell;
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
