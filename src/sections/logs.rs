//! "View Logs": browse this and earlier runs' log files.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::{Flow, Session};
use crate::ui;

/// How many log files are offered
pub const MAX_LISTED: usize = 10;

/// `*.log` files in `dir`, newest first, at most `limit` of them
pub fn recent_logs(dir: &Path, limit: usize) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read log directory: {}", dir.display()))?;

    let mut logs: Vec<(SystemTime, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "log"))
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect();

    logs.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(logs.into_iter().take(limit).map(|(_, path)| path).collect())
}

pub fn view_logs(session: &mut Session<'_>) -> Result<Flow> {
    ui::section_header("Tutorial Logs", "📝");

    let logs = recent_logs(&session.paths.logs_dir(), MAX_LISTED)?;
    if logs.is_empty() {
        ui::warn("No log files found.");
        session.pause()?;
        return Ok(Flow::Done);
    }

    ui::section("Recent Log Files:");
    println!();
    for (index, path) in logs.iter().enumerate() {
        println!("{}. {}", index + 1, file_name(path));
    }

    let choice = session.input(&format!(
        "View log file (1-{}) or 'q' to quit",
        logs.len()
    ))?;

    let selected = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| logs.get(index));

    if let Some(path) = selected {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read log file: {}", path.display()))?;
        println!("\n{}\n", format!("=== {} ===", file_name(path)).green());
        println!("{content}");
    }

    session.pause()?;
    Ok(Flow::Done)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
