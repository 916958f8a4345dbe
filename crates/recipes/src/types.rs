use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Placeholder shown for display fields a recipe leaves out.
pub const NOT_AVAILABLE: &str = "N/A";

/// A pre-packaged workload: a manifest path plus the metadata shown around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Selection key, unique within a catalog
    pub id: u32,

    /// Display name
    pub name: String,

    /// Path to the manifest applied on deploy
    pub yaml: String,

    /// Grouping shown in the recipe details (e.g. "Databases")
    #[serde(default)]
    pub category: Option<String>,

    /// Difficulty label (e.g. "Beginner")
    #[serde(default)]
    pub difficulty: Option<String>,

    /// Rough time to deploy (e.g. "2 min")
    #[serde(default)]
    pub time: Option<String>,

    /// One-line description
    #[serde(default)]
    pub description: Option<String>,

    /// Port mappings to show before deploying
    #[serde(default)]
    pub ports: Vec<PortMapping>,

    /// Credentials, shown verbatim in descriptor order
    #[serde(default)]
    pub credentials: IndexMap<String, String>,

    /// Common commands (label -> command line) shown after a deploy, in
    /// descriptor order
    #[serde(default)]
    pub commands: IndexMap<String, String>,

    /// Free-text access instructions shown after a deploy
    #[serde(default)]
    pub access: Option<String>,

    /// Documentation link: an http(s) URL or a local file path
    #[serde(default)]
    pub docs_url: Option<String>,
}

/// A port exposed by a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    /// Service the port belongs to
    #[serde(default = "default_service")]
    pub service: String,

    /// Port on localhost
    pub local: u16,

    /// Port inside the container
    pub container: u16,
}

fn default_service() -> String {
    "Service".to_string()
}

impl fmt::Display for PortMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: localhost:{} → :{}",
            self.service, self.local, self.container
        )
    }
}

/// Where a recipe's documentation lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocsLink<'a> {
    /// Web page, opened in the browser
    Url(&'a str),
    /// Local file, opened with the default application
    File(&'a Path),
}

impl fmt::Display for DocsLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocsLink::Url(url) => f.write_str(url),
            DocsLink::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Recipe {
    /// Path of the manifest, as written in the catalog
    pub fn manifest(&self) -> &Path {
        Path::new(&self.yaml)
    }

    /// Category, or `N/A`
    pub fn category(&self) -> &str {
        or_not_available(self.category.as_deref())
    }

    /// Difficulty, or `N/A`
    pub fn difficulty(&self) -> &str {
        or_not_available(self.difficulty.as_deref())
    }

    /// Time to deploy, or `N/A`
    pub fn time(&self) -> &str {
        or_not_available(self.time.as_deref())
    }

    /// Description, or `N/A`
    pub fn description(&self) -> &str {
        or_not_available(self.description.as_deref())
    }

    /// Classify `docs_url`. Anything starting with `http` is a URL, everything
    /// else a file path.
    pub fn docs_link(&self) -> Option<DocsLink<'_>> {
        let target = self.docs_url.as_deref()?.trim();
        if target.is_empty() {
            None
        } else if target.starts_with("http") {
            Some(DocsLink::Url(target))
        } else {
            Some(DocsLink::File(Path::new(target)))
        }
    }
}

fn or_not_available(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}
