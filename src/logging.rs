//! Logger setup for the terminal binary.
//!
//! The game owns the terminal in raw alternate-screen mode, so log lines on
//! stderr would tear the frame. Records go to the file named by
//! `BLOCKFALL_LOG_PATH` when it is set. Without it logging stays off unless
//! `RUST_LOG` asks for it explicitly.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Environment variable naming the log file
pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";

/// Initializes the global logger from the environment.
pub fn init() -> Result<()> {
    init_with(std::env::var_os(LOG_PATH_VAR).map(PathBuf::from).as_deref())
}

/// Initializes the global logger, appending to `log_path` when given.
///
/// Fails only if the log file cannot be opened. A logger that was already
/// installed is left in place so tests can call this repeatedly.
pub fn init_with(log_path: Option<&Path>) -> Result<()> {
    let default_level = if log_path.is_some() {
        LevelFilter::Info
    } else {
        LevelFilter::Off
    };

    let env = Env::default().default_filter_or(default_level.to_string());
    let mut builder = Builder::from_env(env);

    if let Some(path) = log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    let _ = builder.try_init();
    Ok(())
}
