//! Session configuration
//!
//! Read from environment variables; anything missing, unparsable or out of
//! range falls back to the default with a warning.
//!
//! - `BLOCKFALL_BOARD_WIDTH` / `BLOCKFALL_BOARD_HEIGHT`: board size (default 10x20, 4..=255)
//! - `BLOCKFALL_INITIAL_SPEED_MS`: gravity interval at level 1 (default 1000)
//! - `BLOCKFALL_SPEED_FACTOR`: per-level interval multiplier in (0, 1] (default 0.9)
//! - `BLOCKFALL_LINES_PER_LEVEL`: lines per level (default 10)
//! - `BLOCKFALL_SEED`: piece generator seed (default derived from the clock)

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::scoring::DifficultyConfig;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_EDGE, MIN_BOARD_EDGE};

/// Everything needed to set up a game session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub board_width: u16,
    pub board_height: u16,
    pub difficulty: DifficultyConfig,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH as u16,
            board_height: BOARD_HEIGHT as u16,
            difficulty: DifficultyConfig::default(),
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok());
        if std::env::var("BLOCKFALL_SEED").is_err() {
            config.seed = clock_seed();
        }
        config
    }

    /// Create from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let edge = MIN_BOARD_EDGE as u16..=MAX_BOARD_EDGE as u16;

        let board_width = parse_or(&lookup, "BLOCKFALL_BOARD_WIDTH", defaults.board_width, |w| {
            edge.contains(w)
        });
        let board_height = parse_or(
            &lookup,
            "BLOCKFALL_BOARD_HEIGHT",
            defaults.board_height,
            |h| edge.contains(h),
        );

        let d = defaults.difficulty;
        let difficulty = DifficultyConfig {
            initial_speed_ms: parse_or(
                &lookup,
                "BLOCKFALL_INITIAL_SPEED_MS",
                d.initial_speed_ms,
                |ms| ms.is_finite() && *ms > 0.0,
            ),
            speed_factor: parse_or(&lookup, "BLOCKFALL_SPEED_FACTOR", d.speed_factor, |f| {
                *f > 0.0 && *f <= 1.0
            }),
            lines_per_level: parse_or(
                &lookup,
                "BLOCKFALL_LINES_PER_LEVEL",
                d.lines_per_level,
                |n| *n > 0,
            ),
        };

        let seed = parse_or(&lookup, "BLOCKFALL_SEED", defaults.seed, |_| true);

        Self {
            board_width,
            board_height,
            difficulty,
            seed,
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    accept: impl Fn(&T) -> bool,
) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => value,
        _ => {
            warn!("ignoring {key}={raw:?}, using {default:?}");
            default
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
