mod app;
mod cli;
mod config;
mod interrupt;
mod logging;
mod manifest;
mod opener;
mod paths;
mod platform;
mod prompt;
mod runner;
mod sections;
mod state;
mod ui;

#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use std::io;

use app::{App, MenuChoice};
use paths::Paths;
use platform::Os;
use prompt::TerminalPrompt;
use runner::SystemRunner;
use state::Progress;

/// Version stamped into new progress records
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "kubetour", &mut io::stdout());
        return Ok(());
    }

    let paths = Paths::resolve(cli.home.as_deref())?;
    paths.ensure()?;

    let log_file = logging::init(&paths.logs_dir(), cli.verbose, cli.quiet)?;
    log::debug!("Logging to {}", log_file.display());

    if let Err(e) = interrupt::install() {
        log::warn!("{e:#}");
    }

    let settings = config::load_or_default(&paths.settings_file());
    let recipes_path = paths::recipes_file(cli.recipes.as_deref(), &settings);
    let progress = Progress::load(&paths.progress_file())?;

    let os = Os::detect();
    log::info!("Detected OS: {os}");

    let runner = SystemRunner::new(settings.command_timeout()).with_spinner(!cli.quiet);
    let mut app = App::new(
        paths,
        settings,
        recipes_path,
        os,
        progress,
        Box::new(runner),
        Box::new(TerminalPrompt::new()),
    );

    log::info!("Tutorial initialized. Version: {VERSION}");

    let result = match cli.command {
        None | Some(Command::Menu) => app.run(),
        Some(Command::Recipes) => app.run_single(MenuChoice::Recipes),
        Some(Command::Verify) => app.run_single(MenuChoice::Verify),
        Some(Command::Info) => app.run_single(MenuChoice::VersionInfo),
        Some(Command::Completions { .. }) => Ok(()),
    };

    log::debug!(
        "Sections completed so far: {}",
        app.progress().completed_sections.len()
    );
    result
}
