//! Terminal bell as the game's sound output.

use std::io::{self, Write};

use log::debug;

use crate::core::AudioSink;
use crate::types::SoundEvent;

/// Rings the terminal bell for line clears and game over. Movement, rotation
/// and drops are silent.
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn rings_for(event: SoundEvent) -> bool {
        matches!(event, SoundEvent::Clear | SoundEvent::GameOver)
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play_sound(&mut self, event: SoundEvent) {
        if !Self::rings_for(event) {
            return;
        }
        let result = self.out.write_all(b"\x07").and_then(|()| self.out.flush());
        if let Err(err) = result {
            debug!("bell for {} failed: {err}", event.as_str());
        }
    }
}
