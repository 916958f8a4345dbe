//! Main menu loop.
//!
//! The [`App`] owns the progress record. Sections report a [`Flow`]; completed
//! sections are appended and saved here, and [`Flow::Quit`] ends the loop.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Settings;
use crate::interrupt::is_interrupted;
use crate::paths::Paths;
use crate::platform::Os;
use crate::prompt::Prompt;
use crate::runner::Runner;
use crate::sections::{Flow, Session, deploy, guides, info, install, logs, recipes, verify};
use crate::state::{Progress, SectionId};
use crate::ui;

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Introduction,
    Installation,
    MinikubeInstall,
    KvmSetup,
    DeployApp,
    Logging,
    Tracing,
    Verify,
    ViewLogs,
    VersionInfo,
    Addons,
    Helm,
    Recipes,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => Self::Introduction,
            "2" => Self::Installation,
            "3" => Self::MinikubeInstall,
            "4" => Self::KvmSetup,
            "5" => Self::DeployApp,
            "6" => Self::Logging,
            "7" => Self::Tracing,
            "8" => Self::Verify,
            "9" => Self::ViewLogs,
            "10" => Self::VersionInfo,
            "11" => Self::Addons,
            "12" => Self::Helm,
            "13" => Self::Recipes,
            "0" => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

const MENU: [&str; 14] = [
    "1. 📖 Introduction - What is Minikube?",
    "2. 🔧 Full Installation Guide (Docker, Minikube, kubectl)",
    "3. 🐳 Install Minikube Only (Quick Setup)",
    "4. ⚙️  Configure KVM (Linux)",
    "5. 🎯 Deploy Sample Application",
    "6. 📊 Setup Logging",
    "7. 🔍 Setup Distributed Tracing",
    "8. ✅ Verify Installation",
    "9. 📝 View Logs",
    "10. ℹ️  Version & System Info",
    "11. 🎛️  Manage Minikube Add-ons",
    "12. 📦 Helm Packages",
    "13. 📋 Browse & Deploy Recipes",
    "0. 🚪 Exit",
];

fn print_menu() {
    ui::banner(crate::VERSION);
    println!("{}\n", "📋 MAIN MENU".bold());
    for entry in MENU {
        println!("{entry}");
    }
    println!();
}

pub struct App {
    paths: Paths,
    settings: Settings,
    recipes_path: PathBuf,
    os: Os,
    progress: Progress,
    runner: Box<dyn Runner>,
    prompt: Box<dyn Prompt>,
}

impl App {
    pub fn new(
        paths: Paths,
        settings: Settings,
        recipes_path: PathBuf,
        os: Os,
        progress: Progress,
        runner: Box<dyn Runner>,
        prompt: Box<dyn Prompt>,
    ) -> Self {
        Self {
            paths,
            settings,
            recipes_path,
            os,
            progress,
            runner,
            prompt,
        }
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Show the menu until the user exits
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.menu_once() {
                Ok(Flow::Quit) => return Ok(()),
                Ok(_) => {}
                Err(e) if is_interrupted(&e) => {
                    println!("\n{}", "Tutorial interrupted. Goodbye!".yellow());
                    log::info!("Tutorial interrupted");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Run a single entry outside the menu, as the CLI subcommands do
    pub fn run_single(&mut self, choice: MenuChoice) -> Result<()> {
        match self.open(choice) {
            Err(e) if is_interrupted(&e) => {
                println!("\n{}", "Interrupted by user.".yellow());
                Ok(())
            }
            other => other.map(|_| ()),
        }
    }

    fn menu_once(&mut self) -> Result<Flow> {
        print_menu();
        let input = self.prompt.input("Enter your choice (0-13)")?;
        match MenuChoice::parse(&input) {
            Some(choice) => self.open(choice),
            None => {
                ui::error("Invalid choice. Please try again.");
                self.prompt.pause()?;
                Ok(Flow::Done)
            }
        }
    }

    /// Run a menu entry. Section failures are reported and contained; only
    /// interrupts outside a section escape.
    pub fn open(&mut self, choice: MenuChoice) -> Result<Flow> {
        log::debug!("Menu choice: {choice:?}");

        let result = self.dispatch(choice).and_then(|flow| {
            if let Flow::Completed(section) = flow {
                self.complete(section)?;
                self.prompt.pause()?;
            }
            Ok(flow)
        });

        match result {
            Ok(flow) => Ok(flow),
            Err(e) if is_interrupted(&e) => {
                println!("\n{}\n", "Interrupted by user.".yellow());
                log::info!("Section interrupted: {choice:?}");
                Ok(Flow::Done)
            }
            Err(e) => {
                log::error!("Error in section: {e:#}");
                ui::error(&format!("Error: {e:#}"));
                self.prompt.pause()?;
                Ok(Flow::Done)
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        let mut session = Session {
            runner: self.runner.as_ref(),
            prompt: self.prompt.as_mut(),
            paths: &self.paths,
            settings: &self.settings,
            recipes_path: &self.recipes_path,
            os: self.os,
        };
        let progress = &mut self.progress;

        match choice {
            MenuChoice::Introduction => guides::introduction(&mut session),
            MenuChoice::Installation => install::installation(&mut session, progress),
            MenuChoice::MinikubeInstall => install::minikube_install(&mut session, progress),
            MenuChoice::KvmSetup => install::kvm_setup(&mut session, progress),
            MenuChoice::DeployApp => deploy::deploy_app(&mut session),
            MenuChoice::Logging => guides::logging(&mut session),
            MenuChoice::Tracing => guides::tracing(&mut session),
            MenuChoice::Verify => verify::verify(&mut session),
            MenuChoice::ViewLogs => logs::view_logs(&mut session),
            MenuChoice::VersionInfo => info::version_info(&mut session, progress),
            MenuChoice::Addons => guides::addons(&mut session),
            MenuChoice::Helm => guides::helm(&mut session),
            MenuChoice::Recipes => recipes::browse(&mut session),
            MenuChoice::Exit => Ok(guides::farewell(&self.paths.logs_dir())),
        }
    }

    /// Append a completed section and persist the record
    fn complete(&mut self, section: SectionId) -> Result<()> {
        self.progress.record(section);
        self.progress.save(&self.paths.progress_file())?;
        log::info!("Section completed: {}", section.as_str());
        Ok(())
    }
}
