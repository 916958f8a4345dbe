//! "Version & System Info".

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use serde::Deserialize;

use super::{Flow, Session};
use crate::state::Progress;
use crate::ui;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct KubectlVersion {
    client_version: Option<ClientVersion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientVersion {
    git_version: String,
}

/// Client version from `kubectl version --client -o json`, falling back to
/// the first line of whatever kubectl printed
pub fn kubectl_version(output: &str) -> String {
    serde_json::from_str::<KubectlVersion>(output)
        .ok()
        .and_then(|v| v.client_version)
        .map(|c| format!("Client Version: {}", c.git_version))
        .unwrap_or_else(|| {
            output
                .lines()
                .map(str::trim)
                .find(|l| !l.is_empty())
                .unwrap_or("")
                .to_string()
        })
}

/// Completed sections as display lines
pub fn completed_lines(sections: &[String]) -> Vec<String> {
    if sections.is_empty() {
        return vec!["(None yet)".to_string()];
    }
    sections
        .iter()
        .map(|id| format!("✓ {}", ui::title_case(id)))
        .collect()
}

pub fn version_info(session: &mut Session<'_>, progress: &Progress) -> Result<Flow> {
    ui::section_header("Version & System Information", "ℹ️");

    ui::section("Tutorial Information:");
    ui::kv("Version", crate::VERSION);
    ui::kv("Config Directory", &session.paths.home().display().to_string());
    ui::kv("Log Directory", &session.paths.logs_dir().display().to_string());
    ui::kv(
        "Last Updated",
        &Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    );

    ui::section("Completed Sections:");
    for line in completed_lines(&progress.completed_sections) {
        println!("  {line}");
    }

    ui::section("System Information:");
    let docker = session.run("docker", &["--version"], "Getting Docker version")?;
    print_version("Docker", docker.success.then(|| docker.first_line().to_string()));

    let minikube = session.run("minikube", &["version"], "Getting Minikube version")?;
    print_version(
        "Minikube",
        minikube.success.then(|| minikube.first_line().to_string()),
    );

    let kubectl = session.run(
        "kubectl",
        &["version", "--client", "-o", "json"],
        "Getting kubectl version",
    )?;
    print_version("kubectl", kubectl.success.then(|| kubectl_version(&kubectl.text)));

    ui::kv("OS", &session.os.to_string());

    session.pause()?;
    Ok(Flow::Done)
}

fn print_version(tool: &str, version: Option<String>) {
    match version {
        Some(version) => ui::kv(tool, &version),
        None => ui::kv(tool, &"Not installed".red().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::Outcome;
    use crate::testing::{Fixture, RecordingRunner, ScriptedPrompt};

    #[test]
    fn test_kubectl_version_json() {
        let json = r#"{
  "clientVersion": {
    "major": "1",
    "minor": "30",
    "gitVersion": "v1.30.2",
    "platform": "linux/amd64"
  },
  "kustomizeVersion": "v5.0.4"
}"#;
        assert_eq!(kubectl_version(json), "Client Version: v1.30.2");
    }

    #[test]
    fn test_kubectl_version_fallback() {
        assert_eq!(
            kubectl_version("Client Version: v1.29.0\nKustomize Version: v5\n"),
            "Client Version: v1.29.0"
        );
        assert_eq!(kubectl_version(""), "");
    }

    #[test]
    fn test_completed_lines() {
        assert_eq!(completed_lines(&[]), vec!["(None yet)"]);
        assert_eq!(
            completed_lines(&["minikube_install".to_string(), "logging".to_string()]),
            vec!["✓ Minikube Install", "✓ Logging"]
        );
    }

    #[test]
    fn test_version_info_queries_tools() {
        let fixture = Fixture::new();
        let runner = RecordingRunner::new().on("docker --version", Outcome::failed("not found"));
        let mut prompt = ScriptedPrompt::new(&[]);

        let flow = {
            let mut session = fixture.session(&runner, &mut prompt);
            version_info(&mut session, &Progress::default()).unwrap()
        };

        assert_eq!(flow, Flow::Done);
        assert_eq!(
            runner.calls(),
            vec![
                "docker --version",
                "minikube version",
                "kubectl version --client -o json",
            ]
        );
    }
}
