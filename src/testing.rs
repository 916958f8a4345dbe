//! Scripted collaborators for driving sections in tests.

use anyhow::Result;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;
use tempfile::TempDir;

use crate::config::Settings;
use crate::interrupt::Interrupted;
use crate::paths::Paths;
use crate::platform::Os;
use crate::prompt::{Prompt, is_affirmative};
use crate::runner::{Outcome, Runner};
use crate::sections::Session;

// ============================================================================
// Prompt
// ============================================================================

/// Scripted answer that behaves like Ctrl+C at that prompt
pub const CTRL_C: &str = "\u{3}";

#[derive(Default)]
struct Script {
    answers: VecDeque<String>,
    questions: Vec<String>,
    pauses: usize,
    interrupt_at_pause: Option<usize>,
}

/// Answers questions from a fixed list. Running out of answers behaves like
/// closed stdin. Clones share the same script.
#[derive(Clone, Default)]
pub struct ScriptedPrompt {
    script: Rc<RefCell<Script>>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        let prompt = Self::default();
        prompt.script.borrow_mut().answers = answers.iter().map(ToString::to_string).collect();
        prompt
    }

    /// Make the `n`th pause (1-based) behave like Ctrl+C
    pub fn interrupt_pause(self, n: usize) -> Self {
        self.script.borrow_mut().interrupt_at_pause = Some(n);
        self
    }

    /// Questions asked so far, in order
    pub fn questions(&self) -> Vec<String> {
        self.script.borrow().questions.clone()
    }

    pub fn pauses(&self) -> usize {
        self.script.borrow().pauses
    }

    pub fn remaining(&self) -> usize {
        self.script.borrow().answers.len()
    }

    fn answer(&mut self, question: &str) -> Result<String> {
        let mut script = self.script.borrow_mut();
        script.questions.push(question.to_string());
        match script.answers.pop_front() {
            Some(answer) if answer != CTRL_C => Ok(answer),
            _ => Err(Interrupted.into()),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(is_affirmative(&self.answer(question)?))
    }

    fn input(&mut self, question: &str) -> Result<String> {
        Ok(self.answer(question)?.trim().to_string())
    }

    fn pause(&mut self) -> Result<()> {
        let mut script = self.script.borrow_mut();
        script.pauses += 1;
        if script.interrupt_at_pause == Some(script.pauses) {
            return Err(Interrupted.into());
        }
        Ok(())
    }
}

// ============================================================================
// Runner
// ============================================================================

#[derive(Default)]
struct Recording {
    calls: Vec<(String, Duration)>,
    responses: HashMap<String, Outcome>,
}

/// Records command lines instead of running them. Commands without a
/// configured response succeed with empty output.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    recording: Rc<RefCell<Recording>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `command_line` (program and args joined by spaces)
    pub fn on(self, command_line: &str, outcome: Outcome) -> Self {
        self.recording
            .borrow_mut()
            .responses
            .insert(command_line.to_string(), outcome);
        self
    }

    /// Command lines seen so far
    pub fn calls(&self) -> Vec<String> {
        self.recording
            .borrow()
            .calls
            .iter()
            .map(|(line, _)| line.clone())
            .collect()
    }

    pub fn timeout_of(&self, command_line: &str) -> Option<Duration> {
        self.recording
            .borrow()
            .calls
            .iter()
            .find(|(line, _)| line == command_line)
            .map(|(_, timeout)| *timeout)
    }
}

impl Runner for RecordingRunner {
    fn default_timeout(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        _description: &str,
        timeout: Duration,
    ) -> Outcome {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        let mut recording = self.recording.borrow_mut();
        let outcome = recording
            .responses
            .get(&line)
            .cloned()
            .unwrap_or_else(|| Outcome::ok(""));
        recording.calls.push((line, timeout));
        outcome
    }
}

// ============================================================================
// Fixture
// ============================================================================

/// Temporary tutorial directory plus a recipe catalog location.
pub struct Fixture {
    pub dir: TempDir,
    pub paths: Paths,
    pub settings: Settings,
    pub recipes_path: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let paths = Paths::new(dir.path().join("home"));
        paths.ensure().unwrap();
        let recipes_path = dir.path().join("recipes.json");
        Self {
            dir,
            paths,
            settings: Settings::default(),
            recipes_path,
        }
    }

    pub fn write_recipes(&self, json: &str) {
        fs::write(&self.recipes_path, json).unwrap();
    }

    /// Create a manifest file and return its path as written in a catalog
    pub fn manifest(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, "kind: Deployment\n").unwrap();
        path.to_string_lossy().into_owned()
    }

    /// Path inside the fixture that does not exist
    pub fn missing(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().into_owned()
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn session<'a>(
        &'a self,
        runner: &'a RecordingRunner,
        prompt: &'a mut ScriptedPrompt,
    ) -> Session<'a> {
        Session {
            runner,
            prompt,
            paths: &self.paths,
            settings: &self.settings,
            recipes_path: &self.recipes_path,
            os: Os::Linux,
        }
    }
}
