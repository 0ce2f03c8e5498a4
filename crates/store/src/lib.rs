//! JSON file persistence for high score and settings
//!
//! One file, `<data dir>/blockfall.json`:
//!
//! ```json
//! {"high_score": 1200, "settings": {"sound_enabled": true}}
//! ```
//!
//! Every key is optional. A missing file reads as defaults; an unreadable or
//! corrupt one also reads as defaults, with a warning. Writes happen on every
//! change and a failed write is logged and dropped, so the game never stops
//! because of persistence.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use blockfall_core::ScoreStore;
use blockfall_types::Settings;

/// File name inside the data directory
pub const FILE_NAME: &str = "blockfall.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed store file: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
struct StoredSettings {
    #[serde(default = "default_sound_enabled")]
    sound_enabled: bool,
}

impl Default for StoredSettings {
    fn default() -> Self {
        Self {
            sound_enabled: default_sound_enabled(),
        }
    }
}

fn default_sound_enabled() -> bool {
    true
}

/// On-disk document
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreData {
    #[serde(default)]
    high_score: u32,
    #[serde(default)]
    settings: StoredSettings,
}

impl StoreData {
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn settings(&self) -> Settings {
        Settings {
            sound_enabled: self.settings.sound_enabled,
        }
    }
}

/// [`ScoreStore`] backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonStore {
    /// Open the store at `path`, reading whatever is there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match Self::load(&path) {
            Ok(data) => data,
            Err(err) if err.is_not_found() => {
                debug!("no store at {}, starting fresh", path.display());
                StoreData::default()
            }
            Err(err) => {
                warn!("ignoring store at {}: {err}", path.display());
                StoreData::default()
            }
        };
        Self { path, data }
    }

    /// Open the store in the data directory chosen from the environment
    pub fn from_env() -> Self {
        Self::open(data_dir_from(|key| std::env::var_os(key)).join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> StoreData {
        self.data
    }

    /// Read and parse a store file.
    pub fn load(path: &Path) -> Result<StoreData, StoreError> {
        let bytes = fs::read(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write the current contents, creating the directory if needed.
    pub fn save(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, text).map_err(io_err)
    }

    fn persist(&self) {
        if let Err(err) = self.save() {
            warn!("could not save store: {err}");
        }
    }
}

impl ScoreStore for JsonStore {
    fn high_score(&self) -> u32 {
        self.data.high_score
    }

    fn set_high_score(&mut self, score: u32) {
        self.data.high_score = score;
        self.persist();
    }

    fn settings(&self) -> Settings {
        self.data.settings()
    }

    fn set_settings(&mut self, settings: Settings) {
        self.data.settings.sound_enabled = settings.sound_enabled;
        self.persist();
    }
}

/// Resolve the data directory.
///
/// `BLOCKFALL_DATA_DIR` wins, then `$XDG_DATA_HOME/blockfall`, then
/// `$HOME/.local/share/blockfall`, then the working directory.
pub fn data_dir_from(lookup: impl Fn(&str) -> Option<OsString>) -> PathBuf {
    if let Some(explicit) = lookup("BLOCKFALL_DATA_DIR") {
        return PathBuf::from(explicit);
    }
    lookup("XDG_DATA_HOME")
        .map(|base| PathBuf::from(base).join("blockfall"))
        .or_else(|| {
            lookup("HOME").map(|home| {
                let mut p = PathBuf::from(home);
                p.push(".local");
                p.push("share");
                p.push("blockfall");
                p
            })
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
