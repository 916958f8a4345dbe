//! User settings (`settings.toml` in the tutorial directory).
//!
//! Every field is optional; a missing file means all defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::ui;

/// Tunables for commands and cluster start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Timeout for ordinary tool invocations
    pub command_timeout_secs: u64,

    /// Timeout for `minikube start`, which pulls images on first run
    pub start_timeout_secs: u64,

    /// CPUs passed to `minikube start` on Linux
    pub cpus: u32,

    /// Memory (MiB) passed to `minikube start` on Linux
    pub memory_mb: u32,

    /// Recipe catalog location, when not given on the command line
    pub recipes_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            command_timeout_secs: 30,
            start_timeout_secs: 600,
            cpus: 4,
            memory_mb: 8192,
            recipes_file: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs.max(1))
    }

    pub fn start_timeout(&self) -> Duration {
        Duration::from_secs(self.start_timeout_secs.max(1))
    }
}

/// Load settings, warning and falling back to defaults on a broken file
pub fn load_or_default(path: &Path) -> Settings {
    match Settings::load(path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("{e:#}");
            ui::warn(&format!("{e:#} - using default settings"));
            Settings::default()
        }
    }
}
