use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::paths::{ENV_HOME, ENV_RECIPES};

#[derive(Parser)]
#[command(name = "kubetour")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Interactive Minikube tutorial with ready-to-deploy recipes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v debug, -vv trace); also echoes the log to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Tutorial directory (progress, settings and logs)
    #[arg(long, value_name = "DIR", env = ENV_HOME, global = true)]
    pub home: Option<PathBuf>,

    /// Recipe catalog to browse
    #[arg(long, value_name = "FILE", env = ENV_RECIPES, global = true)]
    pub recipes: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive menu (default)
    Menu,

    /// Browse and deploy recipes
    Recipes,

    /// Check Docker, Minikube and kubectl
    Verify,

    /// Show version and system information
    Info,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
