//! Recipe browser and deployer.
//!
//! The browser reloads the catalog on every pass so edits to the descriptor
//! show up without restarting.

use anyhow::Result;
use colored::Colorize;
use recipes::{Catalog, Recipe};
use std::fmt::Write as _;

use super::{Flow, Session};
use crate::{opener, ui};

/// One line of input at the browser prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserCommand {
    /// A number; may or may not name a recipe
    Deploy(i64),
    ListDeployed,
    Delete,
    Back,
    Quit,
    Invalid,
}

impl BrowserCommand {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "l" => Self::ListDeployed,
            "d" => Self::Delete,
            "b" => Self::Back,
            "q" => Self::Quit,
            other => other.parse().map_or(Self::Invalid, Self::Deploy),
        }
    }
}

/// Find the recipe a typed number refers to
fn lookup(catalog: &Catalog, number: i64) -> Option<&Recipe> {
    u32::try_from(number).ok().and_then(|id| catalog.get(id))
}

/// Interactive catalog loop. Returns when the user goes back or quits.
pub fn browse(session: &mut Session<'_>) -> Result<Flow> {
    loop {
        ui::section_header("Minikube Recipes - Ready-to-Deploy Apps", "📋");

        let catalog = match Catalog::load(session.recipes_path) {
            Ok(catalog) if !catalog.is_empty() => catalog,
            Ok(_) => {
                log::warn!("No recipes found at {}", session.recipes_path.display());
                ui::error(&format!(
                    "Error: Could not load {}",
                    session.recipes_path.display()
                ));
                session.pause()?;
                return Ok(Flow::Done);
            }
            Err(e) => {
                log::error!("Failed to load recipes: {e}");
                ui::error(&format!("Error: Could not load {e}"));
                session.pause()?;
                return Ok(Flow::Done);
            }
        };

        ui::section("Available Recipes:");
        println!();
        print!("{}", render_catalog(&catalog));

        let choice = session.input(&format!(
            "Select recipe to deploy (1-{}) or option",
            catalog.len()
        ))?;

        match BrowserCommand::parse(&choice) {
            BrowserCommand::Back => return Ok(Flow::Done),
            BrowserCommand::Quit => return Ok(Flow::Quit),
            BrowserCommand::ListDeployed => list_deployed(session)?,
            BrowserCommand::Delete => delete_recipe(session, &catalog)?,
            BrowserCommand::Deploy(number) => match lookup(&catalog, number) {
                Some(recipe) => {
                    if deploy_recipe(session, recipe)? && !session.confirm("Deploy another recipe?")?
                    {
                        return Ok(Flow::Done);
                    }
                }
                None => {
                    ui::error("Invalid recipe number");
                    session.pause()?;
                }
            },
            BrowserCommand::Invalid => {
                ui::error("Invalid choice");
                session.pause()?;
            }
        }
    }
}

/// Catalog listing plus the browser's options
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for recipe in catalog {
        let _ = writeln!(
            out,
            "  {:2}. {:35} | {:12} | {}",
            recipe.id,
            recipe.name,
            recipe.difficulty(),
            recipe.time()
        );
    }
    out.push_str("\n  L. List deployed recipes\n");
    out.push_str("  D. Delete recipe\n");
    out.push_str("  B. Back to menu\n");
    out.push_str("  Q. Quit\n\n");
    out
}

/// Show a recipe, confirm, and `kubectl apply` its manifest.
///
/// Returns `true` only when the apply ran and succeeded.
pub fn deploy_recipe(session: &mut Session<'_>, recipe: &Recipe) -> Result<bool> {
    let manifest = recipe.manifest();
    if !manifest.exists() {
        log::warn!("Manifest for {} not found: {}", recipe.name, recipe.yaml);
        ui::error(&format!("Error: {} not found", recipe.yaml));
        return Ok(false);
    }

    ui::boxed_title(&recipe.name);
    print!("{}", render_details(recipe));

    if !session.confirm("Deploy this recipe?")? {
        ui::warn("Deployment cancelled.");
        return Ok(false);
    }

    println!("\n{}", format!("Deploying {}...", recipe.name).bold());
    let outcome = session.run(
        "kubectl",
        &["apply", "-f", &recipe.yaml],
        &format!("Deploying {}", recipe.name),
    )?;

    if !outcome.success {
        ui::error(&format!("Failed to deploy {}", recipe.name));
        ui::error(&format!("Error: {}", outcome.text.trim()));
        return Ok(false);
    }

    println!();
    ui::success(&format!("{} deployed successfully!", recipe.name));
    print!("{}", render_access(recipe));

    if let Some(link) = recipe.docs_link()
        && session.confirm("Open documentation in browser?")?
        && let Err(e) = opener::open(&link)
    {
        ui::warn(&format!("Could not open browser: {e:#}"));
        ui::warn(&format!("Please visit: {link}"));
    }

    Ok(true)
}

/// Metadata block shown before the deploy confirmation
pub fn render_details(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{} {}", "Category:".cyan(), recipe.category());
    let _ = writeln!(out, "{} {}", "Difficulty:".cyan(), recipe.difficulty());
    let _ = writeln!(out, "{} {}", "Time to Deploy:".cyan(), recipe.time());
    let _ = writeln!(out, "{} {}", "Description:".cyan(), recipe.description());

    if !recipe.ports.is_empty() {
        let _ = writeln!(out, "\n{}", "Port Mappings:".bold());
        for port in &recipe.ports {
            let _ = writeln!(out, "  • {port}");
        }
    }

    if !recipe.credentials.is_empty() {
        let _ = writeln!(out, "\n{}", "Credentials:".bold());
        for (label, value) in &recipe.credentials {
            let _ = writeln!(out, "  • {label}: {value}");
        }
    }

    out
}

/// Access text and common commands shown after a successful deploy
pub fn render_access(recipe: &Recipe) -> String {
    let mut out = String::new();

    if let Some(access) = recipe.access.as_deref().filter(|a| !a.trim().is_empty()) {
        let _ = writeln!(out, "\n{}", "How to Access:".bold());
        let _ = writeln!(out, "{}", access.cyan());
    }

    if !recipe.commands.is_empty() {
        let _ = writeln!(out, "\n{}", "Common Commands:".bold());
        for (label, command) in &recipe.commands {
            let _ = writeln!(out, "  {label}: {command}");
        }
    }

    out.push('\n');
    out
}

/// Show the cluster's pods
fn list_deployed(session: &mut Session<'_>) -> Result<()> {
    ui::section("Deployed Applications:");
    let outcome = session.run("kubectl", &["get", "pods"], "Listing pods")?;
    if outcome.success {
        ui::output(&outcome.text);
    } else {
        ui::error("Could not fetch pod list");
    }
    session.pause()
}

/// Ask for a recipe number and `kubectl delete` its manifest
fn delete_recipe(session: &mut Session<'_>, catalog: &Catalog) -> Result<()> {
    let answer = session.input("Enter recipe number to delete (or 'c' to cancel)")?;
    if answer.eq_ignore_ascii_case("c") {
        return session.pause();
    }

    let recipe = answer
        .parse::<i64>()
        .ok()
        .and_then(|number| lookup(catalog, number));

    match recipe {
        None => ui::error("Invalid recipe number"),
        Some(recipe) => {
            if session.confirm(&format!("Delete {}?", recipe.name))? {
                let outcome = session.run(
                    "kubectl",
                    &["delete", "-f", &recipe.yaml],
                    &format!("Deleting {}", recipe.name),
                )?;
                if outcome.success {
                    ui::success("Recipe deleted.");
                } else {
                    ui::error(&format!("Error: {}", outcome.text.trim()));
                }
            }
        }
    }

    session.pause()
}
