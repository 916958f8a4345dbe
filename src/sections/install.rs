//! Installation sections: the full guided install, the Minikube-only quick
//! setup and the KVM driver guide.

use anyhow::Result;
use colored::Colorize;

use super::guides;
use super::{Flow, Session};
use crate::platform::Os;
use crate::state::{Progress, SectionId};
use crate::ui;

/// A prerequisite the guided installation checks for.
struct Tool {
    name: &'static str,
    title: &'static str,
    program: &'static str,
    args: &'static [&'static str],
    instructions: fn(Os) -> &'static str,
}

const TOOLS: [Tool; 3] = [
    Tool {
        name: "Docker",
        title: "Docker Installation",
        program: "docker",
        args: &["--version"],
        instructions: guides::docker_instructions,
    },
    Tool {
        name: "Minikube",
        title: "Minikube Installation",
        program: "minikube",
        args: &["version"],
        instructions: guides::minikube_instructions,
    },
    Tool {
        name: "kubectl",
        title: "kubectl (Kubernetes CLI) Installation",
        program: "kubectl",
        args: &["version", "--client"],
        instructions: guides::kubectl_instructions,
    },
];

/// Whether `minikube status` output reports a running host
pub fn is_running(status: &str) -> bool {
    status.contains("Running") || status.contains("running")
}

pub fn installation(session: &mut Session<'_>, progress: &mut Progress) -> Result<Flow> {
    ui::section_header("Guided Installation", "🔧");
    println!();
    ui::success(&format!("Detected OS: {}", session.os));

    for (index, tool) in TOOLS.iter().enumerate() {
        ui::step(index + 1, tool.title);
        if !ensure_tool(session, tool)? {
            session.pause()?;
            return Ok(Flow::Done);
        }
    }

    ui::step(TOOLS.len() + 1, "Start Minikube");
    let status = session.run("minikube", &["status"], "Checking Minikube status")?;
    if status.success {
        ui::success("Minikube is already running");
    } else {
        ui::warn("Minikube is not running");
        if session.confirm("Start Minikube now?")? {
            start_cluster(session)?;
        }
    }

    ui::guide(guides::INSTALL_SUMMARY);
    progress.docker_installed = true;
    progress.minikube_installed = true;

    Ok(Flow::Completed(SectionId::Installation))
}

/// Check for a tool, walking the user through installing it when missing.
///
/// Returns `false` when the tool is still unavailable.
fn ensure_tool(session: &mut Session<'_>, tool: &Tool) -> Result<bool> {
    let found = session.run(tool.program, tool.args, &format!("Checking {}", tool.name))?;
    if found.success {
        ui::success(&format!(
            "{} is already installed: {}",
            tool.name,
            found.first_line()
        ));
        return Ok(true);
    }

    ui::warn(&format!("{} is not installed", tool.name));
    ui::section("Installation Instructions:");
    ui::guide((tool.instructions)(session.os));

    if !session.confirm(&format!("Have you installed {}?", tool.name))? {
        ui::warn(&format!(
            "Please install {} first before continuing.",
            tool.name
        ));
        return Ok(false);
    }

    let verified = session.run(tool.program, tool.args, &format!("Verifying {}", tool.name))?;
    if verified.success {
        ui::success(&format!("{} verified: {}", tool.name, verified.first_line()));
        Ok(true)
    } else {
        ui::error(&format!(
            "{} verification failed. Please install {} first.",
            tool.name, tool.name
        ));
        Ok(false)
    }
}

/// Start the cluster and confirm it came up.
///
/// Linux asks for a driver and passes the configured CPU and memory limits.
pub(super) fn start_cluster(session: &mut Session<'_>) -> Result<bool> {
    let mut args = Vec::new();
    if session.os == Os::Linux {
        let choice = session.input("Which driver to use? (1=docker, 2=kvm2)")?;
        let driver = if choice == "2" { "kvm2" } else { "docker" };
        println!("\nStarting with {driver} driver...\n");
        args.push(format!("--driver={driver}"));
        args.push(format!("--cpus={}", session.settings.cpus));
        args.push(format!("--memory={}", session.settings.memory_mb));
    } else {
        println!("\nStarting with docker driver...\n");
        args.push("--driver=docker".to_string());
    }

    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let started = session.start_minikube(&args, "Starting Minikube")?;
    if started.timed_out() {
        ui::warn("Minikube is still starting; it may need a few more minutes.");
    }

    let status = session.run("minikube", &["status"], "Verifying Minikube")?;
    if status.success {
        ui::success("Minikube started successfully!");
        Ok(true)
    } else {
        ui::error("Failed to start Minikube. Check your system configuration.");
        Ok(false)
    }
}

pub fn minikube_install(session: &mut Session<'_>, progress: &mut Progress) -> Result<Flow> {
    ui::section_header("Install Minikube (Quick Setup)", "🐳");
    println!();
    ui::success(&format!("Detected OS: {}", session.os));
    ui::section("Checking if Minikube is already installed...");

    let found = session.run("minikube", &["version"], "Checking Minikube")?;
    if found.success {
        ui::success(&format!(
            "Minikube is already installed: {}",
            found.first_line()
        ));

        let status = session.run("minikube", &["status"], "Checking Minikube status")?;
        if status.success && is_running(&status.text) {
            ui::success("Minikube is running!");
        } else {
            ui::warn("Minikube is installed but not running.");
            if session.confirm("Start Minikube now?")? {
                start_cluster(session)?;
            }
        }

        session.pause()?;
        return Ok(Flow::Done);
    }

    ui::warn("Minikube is not installed");
    ui::section("Installation Instructions:");
    ui::guide(guides::quick_install_instructions(session.os));

    if session.confirm("Have you installed Minikube?")? {
        let verified = session.run("minikube", &["version"], "Verifying Minikube")?;
        if verified.success {
            ui::success("Minikube installed successfully!");
            println!("{}", verified.first_line().bold());
            progress.minikube_installed = true;

            ui::guide(&next_steps(session.os));

            if session.confirm("Start Minikube now?")? {
                ui::warn("Note: This may take a minute or two on first run.");
                if start_cluster(session)? {
                    ui::section("Useful Commands:");
                    ui::dim("Verify cluster: kubectl cluster-info");
                    ui::dim("List pods: kubectl get pods -A");
                } else {
                    println!("You can try manually with: minikube start --driver=docker\n");
                }
            }
        } else {
            ui::error("Minikube not found in PATH.");
            println!("Please ensure it's properly installed and accessible in your PATH.\n");
        }
    } else {
        ui::warn("Please install Minikube first, then restart this section.");
    }

    Ok(Flow::Completed(SectionId::MinikubeInstall))
}

fn next_steps(os: Os) -> String {
    let mut text = String::from(
        "\n## Next Steps:\n\
         ### Start Minikube with Docker driver:\n\
         ```\nminikube start --driver=docker\n```\n",
    );
    if os == Os::Linux {
        text.push_str(
            "### Or start with KVM2 driver (faster):\n\
             ```\nminikube start --driver=kvm2 --cpus=4 --memory=8192\n```\n",
        );
    }
    text.push_str(
        "### Check Minikube status:\n\
         ```\nminikube status\n```\n\
         ### Open Minikube dashboard:\n\
         ```\nminikube dashboard\n```\n",
    );
    text
}

pub fn kvm_setup(session: &mut Session<'_>, progress: &mut Progress) -> Result<Flow> {
    ui::section_header("Configure KVM Driver (Linux)", "⚙️");

    if !session.os.supports_kvm() {
        ui::warn(&format!(
            "KVM is only available on Linux. You're running {}.",
            session.os
        ));
        session.pause()?;
        return Ok(Flow::Done);
    }

    ui::guide(guides::KVM);
    progress.kvm_configured = true;

    Ok(Flow::Completed(SectionId::KvmSetup))
}
