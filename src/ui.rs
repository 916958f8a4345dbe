use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg.green());
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg.yellow());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg.red());
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!("{}", title.bold());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a numbered step of a guided flow
pub fn step(num: usize, title: &str) {
    println!();
    println!("{} {}", format!("[{num}]").blue().bold(), title.bold());
}

/// Print the title of a tutorial section
pub fn section_header(title: &str, emoji: &str) {
    println!();
    println!("{}", format!("{emoji} {title}").cyan().bold());
    println!("{}", "─".repeat(70).cyan());
}

/// Print a name inside a box, used above recipe details
pub fn boxed_title(name: &str) {
    let border = "═".repeat(40);
    println!();
    println!("{}", format!("╔{border}╗").green().bold());
    println!("{}  {}", "║".green().bold(), name.cyan());
    println!("{}", format!("╚{border}╝").green().bold());
}

/// Print command output, indented
pub fn output(text: &str) {
    for line in text.trim_end().lines() {
        println!("  {line}");
    }
}

/// Print the kubetour banner
pub fn banner(version: &str) {
    let title = format!("🚀  MINIKUBE INTERACTIVE TUTORIAL - v{version}");
    println!();
    println!("{}", format!("╔{}╗", "═".repeat(66)).blue());
    println!("{}", format!("║  {title:<63}║").blue());
    println!(
        "{}",
        "║  Deploy applications as an alternative to Docker/Docker Compose  ║".blue()
    );
    println!("{}", format!("╚{}╝", "═".repeat(66)).blue());
    println!();
}

/// Start a spinner on stderr. Hidden automatically when stderr is not a terminal.
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

// ============================================================================
// Guides
// ============================================================================

/// One line of an instructional guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideLine<'a> {
    /// `## Title` - highlighted heading
    Heading(&'a str),
    /// `### Title` - bold sub-heading
    Subheading(&'a str),
    /// Line inside a ``` fence
    Code(&'a str),
    /// Anything else
    Text(&'a str),
}

/// Split a guide into classified lines. Fence markers themselves are dropped.
pub fn parse_guide(text: &str) -> Vec<GuideLine<'_>> {
    let mut in_code = false;
    let mut lines = Vec::new();

    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            in_code = !in_code;
            continue;
        }
        let parsed = if in_code {
            GuideLine::Code(line)
        } else if let Some(title) = line.strip_prefix("### ") {
            GuideLine::Subheading(title)
        } else if let Some(title) = line.strip_prefix("## ") {
            GuideLine::Heading(title)
        } else {
            GuideLine::Text(line)
        };
        lines.push(parsed);
    }

    lines
}

/// Render a guide written in the small markdown subset understood by
/// [`parse_guide`].
pub fn guide(text: &str) {
    for line in parse_guide(text) {
        match line {
            GuideLine::Heading(title) => println!("{}", title.green().bold()),
            GuideLine::Subheading(title) => println!("{}", title.bold()),
            GuideLine::Code(code) => println!("  {}", code.green()),
            GuideLine::Text(text) => println!("{text}"),
        }
    }
}

/// Turn a section identifier such as `minikube_install` into `Minikube Install`
pub fn title_case(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guide_classifies_lines() {
        let text = "## What is Minikube?\nA local cluster.\n### Commands\n```\nminikube start\n## not a heading\n```\ndone";
        let lines = parse_guide(text);

        assert_eq!(
            lines,
            vec![
                GuideLine::Heading("What is Minikube?"),
                GuideLine::Text("A local cluster."),
                GuideLine::Subheading("Commands"),
                GuideLine::Code("minikube start"),
                GuideLine::Code("## not a heading"),
                GuideLine::Text("done"),
            ]
        );
    }

    #[test]
    fn test_parse_guide_unterminated_fence() {
        let lines = parse_guide("```\nkubectl get pods");
        assert_eq!(lines, vec![GuideLine::Code("kubectl get pods")]);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("introduction"), "Introduction");
        assert_eq!(title_case("minikube_install"), "Minikube Install");
        assert_eq!(title_case("deploy_app"), "Deploy App");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("kvm__setup"), "Kvm Setup");
    }
}
