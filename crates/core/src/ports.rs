//! Collaborator ports - audio and persistence seen from the engine
//!
//! The engine calls these and never looks behind them. Implementations must
//! not fail or block the caller: a backend that cannot play a sound or write
//! a file swallows the problem (and logs it) on its side of the boundary.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::{Settings, SoundEvent};

/// Fire-and-forget sound output
pub trait AudioSink {
    fn play_sound(&mut self, event: SoundEvent);
}

/// High score and settings persistence
///
/// Missing entries read back as `0` and [`Settings::default`].
pub trait ScoreStore {
    fn high_score(&self) -> u32;
    fn set_high_score(&mut self, score: u32);
    fn settings(&self) -> Settings;
    fn set_settings(&mut self, settings: Settings);
}

/// Audio sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play_sound(&mut self, _event: SoundEvent) {}
}

/// Audio sink that records events, for headless drivers and tests.
///
/// Clones share the same log, so a clone can be handed to the engine while
/// the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct SoundLog {
    events: Rc<RefCell<Vec<SoundEvent>>>,
}

impl SoundLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first
    pub fn events(&self) -> Vec<SoundEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: SoundEvent) -> usize {
        self.events.borrow().iter().filter(|&&e| e == event).count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl AudioSink for SoundLog {
    fn play_sound(&mut self, event: SoundEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Non-persistent store kept in memory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    high_score: u32,
    settings: Settings,
}

impl MemoryStore {
    pub fn new(high_score: u32, settings: Settings) -> Self {
        Self {
            high_score,
            settings,
        }
    }
}

impl ScoreStore for MemoryStore {
    fn high_score(&self) -> u32 {
        self.high_score
    }

    fn set_high_score(&mut self, score: u32) {
        self.high_score = score;
    }

    fn settings(&self) -> Settings {
        self.settings
    }

    fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }
}
