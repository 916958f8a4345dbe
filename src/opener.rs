//! Open documentation links with the OS handler.

use anyhow::{Context, Result, bail};
use recipes::DocsLink;
use std::path::Path;
use std::process::{Command, Stdio};

/// Open a recipe's documentation link without waiting for the viewer
pub fn open(link: &DocsLink<'_>) -> Result<()> {
    let target = match link {
        DocsLink::Url(url) => (*url).to_string(),
        DocsLink::File(path) => resolve_file(path)?,
    };

    log::info!("Opening documentation: {target}");
    opener_command(&target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Could not open {target}"))?;
    Ok(())
}

/// Local documentation is only opened when it exists, by absolute path
fn resolve_file(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("Documentation file not found: {}", path.display());
    }
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    Ok(absolute.to_string_lossy().into_owned())
}

#[cfg(target_os = "macos")]
fn opener_command(target: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(target);
    cmd
}

#[cfg(windows)]
fn opener_command(target: &str) -> Command {
    // `start` is a cmd builtin; the empty string is the window title
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", target]);
    cmd
}

#[cfg(not(any(target_os = "macos", windows)))]
fn opener_command(target: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_opened() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("README.md");
        let err = open(&DocsLink::File(&missing)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_existing_file_resolves_absolute() {
        let dir = tempfile::TempDir::new().unwrap();
        let doc = dir.path().join("README.md");
        std::fs::write(&doc, "# docs").unwrap();

        let resolved = resolve_file(&doc).unwrap();
        assert!(Path::new(&resolved).is_absolute());
        assert!(resolved.ends_with("README.md"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_opener_program() {
        let cmd = opener_command("https://example.com");
        assert_eq!(cmd.get_program(), "xdg-open");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["https://example.com"]);
    }
}
