//! Per-run log file.
//!
//! Every run writes `logs/tutorial_YYYYMMDD_HHMMSS.log` through `env_logger`.
//! With `-v` the same lines are echoed to stderr.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use env_logger::{Target, WriteStyle};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Log file name for a run started at `started`
pub fn log_file_name(started: DateTime<Local>) -> String {
    format!("tutorial_{}.log", started.format("%Y%m%d_%H%M%S"))
}

/// File level for a verbosity count
pub fn level_for(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Writes log lines to the run's file and optionally to stderr.
struct LogWriter {
    file: File,
    echo: bool,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        if self.echo {
            // Echo is best effort; the file is the record
            let _ = io::stderr().write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Install the logger. Returns the path of this run's log file.
pub fn init(log_dir: &Path, verbose: u8, quiet: bool) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let path = log_dir.join(log_file_name(Local::now()));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    let writer = LogWriter {
        file,
        echo: verbose > 0 && !quiet,
    };

    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(writer)))
        .try_init()
        .context("Failed to initialize logger")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_log_file_name() {
        let started = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(log_file_name(started), "tutorial_20240309_070501.log");
    }

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), log::LevelFilter::Info);
        assert_eq!(level_for(1), log::LevelFilter::Debug);
        assert_eq!(level_for(5), log::LevelFilter::Trace);
    }

    #[test]
    fn test_writer_appends_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("run.log");
        let mut writer = LogWriter {
            file: File::create(&path).unwrap(),
            echo: false,
        };
        writer.write_all(b"one\n").unwrap();
        writer.write_all(b"two\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
