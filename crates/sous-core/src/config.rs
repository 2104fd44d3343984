//! Guide settings.
//!
//! The two read-aloud/timer toggles are plain injected booleans as far as the
//! session is concerned. This module only persists them as JSON in the XDG
//! config directory so the CLI can remember them between runs.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SousError};

/// Behavior switches for the cooking guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideSettings {
    /// Read each step aloud when it becomes current
    pub auto_read: bool,
    /// Start the step's timer automatically when entering a timed step
    pub auto_start_timer: bool,
}

impl Default for GuideSettings {
    fn default() -> Self {
        Self {
            auto_read: true,
            auto_start_timer: true,
        }
    }
}

impl GuideSettings {
    /// Loads settings from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `SousError::FileSystem` if the file exists but cannot be read
    /// Returns `SousError::Serialization` if the file is not valid JSON
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(SousError::FileSystem {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Writes settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SousError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| SousError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `$XDG_CONFIG_HOME/sous/settings.json`
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("sous")
            .place_config_file("settings.json")
            .map_err(|e| SousError::XdgDirectory(e.to_string()))
    }
}
