//! "Deploy Your First Application": render the sample manifest and apply it.

use anyhow::Result;
use colored::Colorize;

use super::install::start_cluster;
use super::{Flow, Session};
use crate::manifest;
use crate::state::SectionId;
use crate::ui;

const DEFAULT_APP: &str = "myapp";
const DEFAULT_REPLICAS: u32 = 3;

pub fn deploy_app(session: &mut Session<'_>) -> Result<Flow> {
    ui::section_header("Deploy Your First Application", "🎯");

    let app = ask_app_name(session)?;
    let replicas = ask_replicas(session)?;

    println!();
    ui::success(&format!(
        "Creating deployment for '{app}' with {replicas} replicas"
    ));

    let yaml = manifest::sample_deployment(&app, replicas);
    let path = session.paths.manifest_file(&app);
    manifest::write(&path, &yaml)?;

    println!(
        "\n{}\n",
        format!("Generated deployment file: {}", path.display()).bold()
    );
    println!("{}", yaml.cyan());

    let status = session.run("minikube", &["status"], "Checking Minikube status")?;
    if !status.success {
        ui::error("Minikube is not running!");
        if !session.confirm("Start Minikube now?")? {
            return Ok(Flow::Done);
        }
        start_cluster(session)?;
    }

    if session.confirm("Deploy application to Minikube?")? {
        println!("\n{}\n", "Deploying...".green());
        let manifest_arg = path.to_string_lossy();
        let applied = session.run(
            "kubectl",
            &["apply", "-f", &manifest_arg],
            &format!("Deploying {app}"),
        )?;
        if !applied.success {
            ui::error(&format!("Failed to deploy {app}"));
            ui::error(&format!("Error: {}", applied.text.trim()));
            session.pause()?;
            return Ok(Flow::Done);
        }

        for (title, resource) in [
            ("Deployment Status:", "deployments"),
            ("Pods Status:", "pods"),
            ("Services:", "services"),
        ] {
            ui::section(title);
            let outcome = session.run(
                "kubectl",
                &["get", resource],
                &format!("Getting {resource}"),
            )?;
            ui::output(&outcome.text);
        }

        println!();
        ui::success("Application deployed successfully!");
        ui::guide(&manifest::access_instructions(&app));
    }

    Ok(Flow::Completed(SectionId::DeployApp))
}

/// Ask until the name is acceptable; empty means the default
fn ask_app_name(session: &mut Session<'_>) -> Result<String> {
    loop {
        let answer = session.input(&format!("Enter application name (default: {DEFAULT_APP})"))?;
        let name = if answer.is_empty() {
            DEFAULT_APP.to_string()
        } else {
            answer
        };
        match manifest::validate_app_name(&name) {
            Ok(()) => return Ok(name),
            Err(e) => ui::error(&e.to_string()),
        }
    }
}

/// Ask until the count is a positive integer; empty means the default
fn ask_replicas(session: &mut Session<'_>) -> Result<u32> {
    loop {
        let answer = session.input(&format!(
            "Number of replicas (default: {DEFAULT_REPLICAS})"
        ))?;
        if answer.is_empty() {
            return Ok(DEFAULT_REPLICAS);
        }
        match answer.parse::<u32>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => ui::error("Replicas must be a positive integer"),
        }
    }
}
