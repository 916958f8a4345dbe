//! Path resolution for kubetour.
//!
//! # Environment Variables
//!
//! - `KUBETOUR_HOME` - Override the tutorial directory (default `~/.minikube_tutorial`)
//! - `KUBETOUR_RECIPES` - Override the recipe catalog location
//!
//! Both are read by clap (see `cli.rs`) and arrive here as flag values.
//!
//! # Recipe Catalog Priority
//!
//! 1. `--recipes` flag / `KUBETOUR_RECIPES`
//! 2. `recipes_file` in `settings.toml`
//! 3. `recipes.json` in the current directory

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;

/// Environment variable for tutorial directory override
pub const ENV_HOME: &str = "KUBETOUR_HOME";

/// Environment variable for recipe catalog override
pub const ENV_RECIPES: &str = "KUBETOUR_RECIPES";

/// Tutorial directory name under the user's home
pub const DEFAULT_DIR_NAME: &str = ".minikube_tutorial";

/// Files and directories owned by the tutorial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    home: PathBuf,
}

impl Paths {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Resolve the tutorial directory from an override or the default
    pub fn resolve(home: Option<&Path>) -> Result<Self> {
        if let Some(dir) = home {
            let path = expand(&dir.to_string_lossy());
            log::debug!("Using tutorial dir from {ENV_HOME}/--home: {}", path.display());
            return Ok(Self::new(path));
        }

        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(Self::new(home.join(DEFAULT_DIR_NAME)))
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.home.join("logs")
    }

    /// Progress record (`config.json`)
    pub fn progress_file(&self) -> PathBuf {
        self.home.join("config.json")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.home.join("settings.toml")
    }

    /// Generated manifest for the sample application `app`
    pub fn manifest_file(&self, app: &str) -> PathBuf {
        self.home.join(format!("{app}-deployment.yaml"))
    }

    /// Create the tutorial and log directories
    pub fn ensure(&self) -> Result<()> {
        let logs = self.logs_dir();
        fs::create_dir_all(&logs)
            .with_context(|| format!("Failed to create tutorial directory: {}", logs.display()))
    }
}

/// Pick the recipe catalog location
pub fn recipes_file(flag: Option<&Path>, settings: &Settings) -> PathBuf {
    if let Some(path) = flag {
        return expand(&path.to_string_lossy());
    }
    if let Some(path) = settings.recipes_file.as_deref().filter(|p| !p.trim().is_empty()) {
        return expand(path);
    }
    PathBuf::from(recipes::Catalog::FILE_NAME)
}

/// Expand `~` and environment variables in a path string.
///
/// Unknown variables leave the input untouched.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout() {
        let paths = Paths::new("/tmp/tour");
        assert_eq!(paths.home(), Path::new("/tmp/tour"));
        assert_eq!(paths.logs_dir(), PathBuf::from("/tmp/tour/logs"));
        assert_eq!(paths.progress_file(), PathBuf::from("/tmp/tour/config.json"));
        assert_eq!(paths.settings_file(), PathBuf::from("/tmp/tour/settings.toml"));
        assert_eq!(
            paths.manifest_file("myapp"),
            PathBuf::from("/tmp/tour/myapp-deployment.yaml")
        );
    }

    #[test]
    fn test_resolve_override_expands_tilde() {
        let home = dirs::home_dir().unwrap();
        let paths = Paths::resolve(Some(Path::new("~/kubetour-test"))).unwrap();
        assert_eq!(paths.home(), home.join("kubetour-test"));
    }

    #[test]
    fn test_resolve_default() {
        let home = dirs::home_dir().unwrap();
        let paths = Paths::resolve(None).unwrap();
        assert_eq!(paths.home(), home.join(DEFAULT_DIR_NAME));
    }

    #[test]
    fn test_ensure_creates_logs_dir() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::new(dir.path().join("nested").join("tour"));
        paths.ensure().unwrap();
        assert!(paths.logs_dir().is_dir());
        // Idempotent
        paths.ensure().unwrap();
    }

    #[test]
    fn test_recipes_file_priority() {
        let mut settings = Settings::default();
        assert_eq!(recipes_file(None, &settings), PathBuf::from("recipes.json"));

        settings.recipes_file = Some("/srv/catalog.json".to_string());
        assert_eq!(
            recipes_file(None, &settings),
            PathBuf::from("/srv/catalog.json")
        );

        assert_eq!(
            recipes_file(Some(Path::new("/flag/recipes.json")), &settings),
            PathBuf::from("/flag/recipes.json")
        );
    }

    #[test]
    fn test_blank_settings_path_is_ignored() {
        let settings = Settings {
            recipes_file: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(recipes_file(None, &settings), PathBuf::from("recipes.json"));
    }

    #[test]
    fn test_expand_unknown_var_is_untouched() {
        let path = expand("$KUBETOUR_SURELY_UNSET_VAR/x");
        assert_eq!(path, PathBuf::from("$KUBETOUR_SURELY_UNSET_VAR/x"));
    }
}
