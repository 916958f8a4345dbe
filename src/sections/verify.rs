//! "Verify Installation": tool versions, cluster status and cluster info.

use anyhow::Result;
use colored::Colorize;

use super::{Flow, Session};
use crate::ui;

/// Tools checked by the verification, as (display name, program, args)
pub const CHECKS: [(&str, &str, &[&str]); 3] = [
    ("Docker", "docker", &["--version"]),
    ("Minikube", "minikube", &["version"]),
    ("kubectl", "kubectl", &["version", "--client"]),
];

pub fn verify(session: &mut Session<'_>) -> Result<Flow> {
    ui::section_header("Verify Installation", "✅");
    run_checks(session)?;
    session.pause()?;
    Ok(Flow::Done)
}

/// Print every check. Returns whether all tools were found.
pub fn run_checks(session: &mut Session<'_>) -> Result<bool> {
    ui::section("Running system checks...");
    println!();

    let mut all_ok = true;
    for (name, program, args) in CHECKS {
        let outcome = session.run(program, args, &format!("Checking {name}"))?;
        if outcome.success {
            println!("{}", format!("✅ {name}").green());
            if !outcome.first_line().is_empty() {
                println!("   {}\n", outcome.first_line());
            }
        } else {
            println!("{}\n", format!("❌ {name} not found").red());
            all_ok = false;
        }
    }

    ui::section("Minikube Status:");
    let status = session.run("minikube", &["status"], "Checking Minikube status")?;
    if status.success {
        ui::output(&status.text);
    } else {
        ui::warn("Minikube is not running. Start it with: minikube start");
    }

    ui::section("Kubernetes Cluster Info:");
    let info = session.run("kubectl", &["cluster-info"], "Getting cluster info")?;
    if info.success {
        ui::output(&info.text);
    } else {
        ui::warn("Cluster info unavailable");
    }

    println!();
    if all_ok {
        println!("{}", "✓ All systems ready!".green().bold());
    } else {
        ui::warn("Please install missing components. See Installation Guide.");
    }
    println!();

    Ok(all_ok)
}
