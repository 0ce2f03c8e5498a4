//! Scoring module - difficulty curve and line-clear rewards
//!
//! Rules:
//! - Gravity interval shrinks geometrically: `initial * factor^(level - 1)`.
//! - Level is `lines / lines_per_level + 1`, so every game starts at level 1.
//! - A clear is worth `lines * 100 * level`. The reward is linear in the
//!   number of lines; there is no tiered bonus for multi-line clears.

use crate::types::{INITIAL_SPEED_MS, LINES_PER_LEVEL, POINTS_PER_LINE, SPEED_FACTOR};

/// Tunables for the difficulty curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyConfig {
    /// Gravity interval at level 1, in milliseconds
    pub initial_speed_ms: f64,
    /// Multiplier applied to the interval for each level above 1
    pub speed_factor: f64,
    /// Lines needed to gain a level
    pub lines_per_level: u32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            initial_speed_ms: INITIAL_SPEED_MS,
            speed_factor: SPEED_FACTOR,
            lines_per_level: LINES_PER_LEVEL,
        }
    }
}

impl DifficultyConfig {
    /// Gravity interval for a level (in milliseconds)
    pub fn drop_interval_ms(&self, level: u32) -> f64 {
        let exponent = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
        self.initial_speed_ms * self.speed_factor.powi(exponent)
    }

    /// Level reached after clearing `total_lines` lines
    pub fn level_for_lines(&self, total_lines: u32) -> u32 {
        total_lines / self.lines_per_level.max(1) + 1
    }
}

/// Gravity interval for a level with the default curve
pub fn drop_interval_ms(level: u32) -> f64 {
    DifficultyConfig::default().drop_interval_ms(level)
}

/// Level for a line total with the default lines-per-level
pub fn level_for_lines(total_lines: u32) -> u32 {
    DifficultyConfig::default().level_for_lines(total_lines)
}

/// Points for clearing `lines` rows in a single lock at `level`
pub fn score_delta(lines: u32, level: u32) -> u32 {
    lines.saturating_mul(POINTS_PER_LINE).saturating_mul(level)
}
