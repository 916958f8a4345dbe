//! User prompts.
//!
//! Sections talk to the user only through [`Prompt`], so they can be driven by
//! a script in tests. [`TerminalPrompt`] uses dialoguer when attached to a
//! terminal and falls back to plain line reads when input is piped.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::interrupt::{self, Interrupted};

/// Blocking questions to the user.
pub trait Prompt {
    /// Ask a yes/no question. Anything but an explicit yes is "no".
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Ask for a line of text, returned trimmed (possibly empty)
    fn input(&mut self, question: &str) -> Result<String>;

    /// Wait for Enter
    fn pause(&mut self) -> Result<()>;
}

/// Whether a typed answer means yes
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// [`Prompt`] reading from the real terminal.
pub struct TerminalPrompt {
    interactive: bool,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal() && io::stdout().is_terminal(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = if self.interactive {
            dialoguer::Confirm::new()
                .with_prompt(question)
                .default(false)
                .wait_for_newline(true)
                .interact()
                .map_err(from_dialoguer)?
        } else {
            is_affirmative(&read_line(&format!("{} ", format!("{question} (y/n):").bold()))?)
        };
        interrupt::check()?;
        Ok(answer)
    }

    fn input(&mut self, question: &str) -> Result<String> {
        let answer = if self.interactive {
            dialoguer::Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()
                .map_err(from_dialoguer)?
        } else {
            read_line(&format!("{} ", format!("{question}:").bold()))?
        };
        interrupt::check()?;
        Ok(answer.trim().to_string())
    }

    fn pause(&mut self) -> Result<()> {
        let line = if self.interactive {
            print!("\n{}", "Press Enter to continue...".yellow());
            io::stdout().flush().context("Failed to flush stdout")?;
            console::Term::stdout()
                .read_line()
                .map_err(|e| from_io(e, "Failed to read from terminal"))?
        } else {
            read_line(&format!("\n{}", "Press Enter to continue...".yellow()))?
        };
        log::trace!("pause answered with {line:?}");
        interrupt::check()?;
        Ok(())
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| from_io(e, "Failed to read from stdin"))?;
    if read == 0 {
        // End of input: nobody is left to answer
        println!();
        return Err(Interrupted.into());
    }
    Ok(line.trim().to_string())
}

fn from_io(err: io::Error, context: &'static str) -> anyhow::Error {
    if err.kind() == io::ErrorKind::Interrupted {
        Interrupted.into()
    } else {
        anyhow::Error::new(err).context(context)
    }
}

fn from_dialoguer(err: dialoguer::Error) -> anyhow::Error {
    match err {
        dialoguer::Error::IO(e) => from_io(e, "Failed to read prompt"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interrupt::is_interrupted;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative(" yes "));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yep"));
        assert!(!is_affirmative("no"));
    }

    #[test]
    fn test_interrupted_io_maps_to_interrupt() {
        let err = from_io(io::Error::from(io::ErrorKind::Interrupted), "reading");
        assert!(is_interrupted(&err));

        let err = from_io(io::Error::from(io::ErrorKind::BrokenPipe), "reading");
        assert!(!is_interrupted(&err));
        assert_eq!(err.to_string(), "reading");
    }

    #[test]
    fn test_dialoguer_interrupt_maps_to_interrupt() {
        let err = from_dialoguer(dialoguer::Error::IO(io::Error::from(
            io::ErrorKind::Interrupted,
        )));
        assert!(is_interrupted(&err));
    }
}
