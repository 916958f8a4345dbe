//! Tutorial sections.
//!
//! Each section is a function taking a [`Session`] and returning a [`Flow`]
//! that tells the menu loop what happened. Sections never touch the progress
//! file themselves; the loop records [`Flow::Completed`] sections.

pub mod deploy;
pub mod guides;
pub mod info;
pub mod install;
pub mod logs;
pub mod recipes;
pub mod verify;

use anyhow::Result;
use std::path::Path;

use crate::config::Settings;
use crate::interrupt;
use crate::paths::Paths;
use crate::platform::Os;
use crate::prompt::Prompt;
use crate::runner::{Outcome, Runner};
use crate::state::SectionId;

/// How a section ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Finished; record the section as completed. The menu saves progress
    /// before the closing pause, so the section leaves that pause to it.
    Completed(SectionId),
    /// Finished or abandoned; nothing to record
    Done,
    /// Leave the program
    Quit,
}

/// Everything a section may use.
pub struct Session<'a> {
    pub runner: &'a dyn Runner,
    pub prompt: &'a mut dyn Prompt,
    pub paths: &'a Paths,
    pub settings: &'a Settings,
    pub recipes_path: &'a Path,
    pub os: Os,
}

impl Session<'_> {
    /// Run a command with the default timeout.
    ///
    /// Fails only when the user interrupted while it ran.
    pub fn run(&self, program: &str, args: &[&str], description: &str) -> Result<Outcome> {
        let outcome = self.runner.run(program, args, description);
        interrupt::check()?;
        Ok(outcome)
    }

    /// `minikube start` with `args`, under the longer start-up timeout
    pub fn start_minikube(&self, args: &[&str], description: &str) -> Result<Outcome> {
        let mut argv = vec!["start"];
        argv.extend_from_slice(args);
        let outcome = self.runner.run_with_timeout(
            "minikube",
            &argv,
            description,
            self.settings.start_timeout(),
        );
        interrupt::check()?;
        Ok(outcome)
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.prompt.confirm(question)
    }

    pub fn input(&mut self, question: &str) -> Result<String> {
        self.prompt.input(question)
    }

    pub fn pause(&mut self) -> Result<()> {
        self.prompt.pause()
    }
}
