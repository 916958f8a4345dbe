//! External command execution.
//!
//! Every call to `docker`, `minikube` or `kubectl` goes through a [`Runner`].
//! Commands are argv-style (program plus discrete arguments, no shell), run
//! with a timeout, and always come back as an [`Outcome`]: failures to spawn,
//! non-zero exits and timeouts are folded into `success = false`.

use anyhow::{Context, Result};
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::ui;

/// Timeout applied when the caller does not ask for another one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome text for a command killed by its timeout
pub const TIMEOUT_MESSAGE: &str = "Command timeout";

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Normalized result of an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Exit status was zero
    pub success: bool,
    /// Stdout on success; stderr, timeout or spawn diagnostic otherwise
    pub text: String,
}

impl Outcome {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
        }
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
        }
    }

    /// First non-empty line of the text, e.g. a tool's version banner
    pub fn first_line(&self) -> &str {
        self.text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }

    pub fn timed_out(&self) -> bool {
        !self.success && self.text == TIMEOUT_MESSAGE
    }
}

/// Executes external commands.
pub trait Runner {
    /// Timeout used by [`Runner::run`]
    fn default_timeout(&self) -> Duration;

    /// Run `program` with `args`, waiting at most `timeout`
    fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        description: &str,
        timeout: Duration,
    ) -> Outcome;

    /// Run `program` with `args` and the default timeout
    fn run(&self, program: &str, args: &[&str], description: &str) -> Outcome {
        self.run_with_timeout(program, args, description, self.default_timeout())
    }
}

/// [`Runner`] backed by real child processes.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
    spinner: bool,
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl SystemRunner {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            spinner: false,
        }
    }

    /// Show a spinner on stderr while commands run
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.spinner = enabled;
        self
    }
}

impl Runner for SystemRunner {
    fn default_timeout(&self) -> Duration {
        self.timeout
    }

    fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        description: &str,
        timeout: Duration,
    ) -> Outcome {
        let label = if description.is_empty() {
            program
        } else {
            description
        };
        log::info!("Running: {label}");
        log::debug!("argv: {program} {args:?} (timeout {}s)", timeout.as_secs());

        let spinner = self.spinner.then(|| ui::spinner(label));
        let result = execute(program, args, timeout);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match result {
            Ok(Execution::Finished {
                success: true,
                stdout,
                ..
            }) => {
                log::info!("✅ {label}");
                Outcome::ok(stdout)
            }
            Ok(Execution::Finished { stderr, .. }) => {
                log::warn!("❌ {label}: {}", stderr.trim());
                Outcome::failed(stderr)
            }
            Ok(Execution::TimedOut) => {
                log::error!("⏱️  Command timeout: {label}");
                Outcome::failed(TIMEOUT_MESSAGE)
            }
            Err(e) => {
                log::error!("❌ Error executing command: {e:#}");
                Outcome::failed(format!("{e:#}"))
            }
        }
    }
}

enum Execution {
    Finished {
        success: bool,
        stdout: String,
        stderr: String,
    },
    TimedOut,
}

fn execute(program: &str, args: &[&str], timeout: Duration) -> Result<Execution> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to execute: {} {}", program, args.join(" ")))?;

    // Drain both pipes while waiting so a chatty child never blocks on a full pipe
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    // The deadline covers the pipes too: a background grandchild can keep
    // them open long after the direct child has exited.
    let deadline = Instant::now() + timeout;
    let mut status = None;
    loop {
        if status.is_none() {
            status = child
                .try_wait()
                .with_context(|| format!("Failed to wait for {program}"))?;
        }

        if let Some(status) = status
            && finished(stdout.as_ref())
            && finished(stderr.as_ref())
        {
            return Ok(Execution::Finished {
                success: status.success(),
                stdout: collect(stdout),
                stderr: collect(stderr),
            });
        }

        if Instant::now() >= deadline {
            if status.is_none() {
                let _ = child.kill();
                let _ = child.wait();
            }
            // Reader threads are left to finish on their own
            return Ok(Execution::TimedOut);
        }

        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<String>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

fn finished(handle: Option<&JoinHandle<String>>) -> bool {
    handle.is_none_or(JoinHandle::is_finished)
}

fn collect(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_first_line() {
        let outcome = Outcome::ok("\n  minikube version: v1.33.1\ncommit: abc\n");
        assert_eq!(outcome.first_line(), "minikube version: v1.33.1");
        assert_eq!(Outcome::ok("").first_line(), "");
    }

    #[test]
    fn test_outcome_timed_out() {
        assert!(Outcome::failed(TIMEOUT_MESSAGE).timed_out());
        assert!(!Outcome::failed("boom").timed_out());
        assert!(!Outcome::ok(TIMEOUT_MESSAGE).timed_out());
    }

    #[test]
    fn test_missing_program_is_failed_outcome() {
        let runner = SystemRunner::default();
        let outcome = runner.run(
            "kubetour-definitely-not-installed",
            &["--version"],
            "Checking missing tool",
        );
        assert!(!outcome.success);
        assert!(outcome.text.contains("kubetour-definitely-not-installed"));
    }

    #[cfg(unix)]
    #[test]
    fn test_success_returns_stdout() {
        let runner = SystemRunner::default();
        let outcome = runner.run("sh", &["-c", "echo hello; echo noise >&2"], "echo");
        assert_eq!(outcome, Outcome::ok("hello\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_returns_stderr() {
        let runner = SystemRunner::default();
        let outcome = runner.run("sh", &["-c", "echo out; echo oops >&2; exit 3"], "fail");
        assert_eq!(outcome, Outcome::failed("oops\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout() {
        let runner = SystemRunner::new(Duration::from_millis(200));
        let started = Instant::now();
        let outcome = runner.run("sleep", &["5"], "sleeping");

        assert_eq!(outcome, Outcome::failed(TIMEOUT_MESSAGE));
        assert!(outcome.timed_out());
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_covers_pipes_held_by_background_process() {
        let runner = SystemRunner::new(Duration::from_secs(1));
        let started = Instant::now();
        let outcome = runner.run("sh", &["-c", "sleep 6 & echo started"], "background");

        assert!(outcome.timed_out());
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_explicit_timeout_overrides_default() {
        let runner = SystemRunner::new(Duration::from_secs(60));
        let outcome = runner.run_with_timeout("sleep", &["5"], "sleeping", Duration::from_millis(100));
        assert!(outcome.timed_out());
    }

    #[cfg(unix)]
    #[test]
    fn test_metacharacters_stay_literal() {
        let runner = SystemRunner::default();
        let outcome = runner.run("printf", &["%s", "; rm -rf /"], "printf");
        assert_eq!(outcome, Outcome::ok("; rm -rf /"));
    }

    #[cfg(unix)]
    #[test]
    fn test_argument_count_preserved() {
        let runner = SystemRunner::default();
        let outcome = runner.run(
            "sh",
            &["-c", "printf %s \"$#\"", "sh", "; rm -rf /", "$(whoami) && ls"],
            "count args",
        );
        assert_eq!(outcome, Outcome::ok("2"));
    }

    #[cfg(unix)]
    #[test]
    fn test_large_output_does_not_block() {
        let runner = SystemRunner::default();
        let outcome = runner.run("sh", &["-c", "head -c 300000 /dev/zero | tr '\\0' 'x'"], "big");
        assert!(outcome.success);
        assert_eq!(outcome.text.len(), 300_000);
    }
}
