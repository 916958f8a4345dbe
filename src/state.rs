use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Sections
// ============================================================================

/// Tutorial sections that are recorded when completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Introduction,
    Installation,
    MinikubeInstall,
    KvmSetup,
    DeployApp,
    Logging,
    Tracing,
}

impl SectionId {
    /// Identifier stored in `completed_sections`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::Installation => "installation",
            Self::MinikubeInstall => "minikube_install",
            Self::KvmSetup => "kvm_setup",
            Self::DeployApp => "deploy_app",
            Self::Logging => "logging",
            Self::Tracing => "tracing",
        }
    }
}

// ============================================================================
// Progress Record
// ============================================================================

/// Persisted tutorial progress (`config.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    /// Completed sections in completion order. Repeats are kept.
    pub completed_sections: Vec<String>,

    pub minikube_installed: bool,

    pub docker_installed: bool,

    pub kvm_configured: bool,

    /// Version that created the record
    pub tutorial_version: String,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            completed_sections: Vec::new(),
            minikube_installed: false,
            docker_installed: false,
            kvm_configured: false,
            tutorial_version: crate::VERSION.to_string(),
        }
    }
}

impl Progress {
    /// Load progress from disk, or return default if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Progress file does not exist, starting fresh");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read progress file: {}", path.display()))?;

        let progress: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse progress file: {}", path.display()))?;

        log::debug!("Loaded progress from {}", path.display());
        Ok(progress)
    }

    /// Save progress to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create progress directory: {}", dir.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize progress to JSON")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write progress file: {}", path.display()))?;

        log::debug!("Saved progress to {}", path.display());
        Ok(())
    }

    /// Append a completed section
    pub fn record(&mut self, section: SectionId) {
        self.completed_sections.push(section.as_str().to_string());
    }
}

// ============================================================================
// Tests
// ============================================================================
