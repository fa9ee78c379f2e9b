//! Resource descriptors for the rule files the installer fetches.

use serde::Serialize;
use url::Url;

/// A named remote resource and the project-relative file it installs to.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Short name used in flags and reports.
    pub name: &'static str,
    /// Where the content is fetched from.
    pub url: Url,
    /// Project-relative destination file.
    pub dest: &'static str,
}

/// Result of installing a single resource.
///
/// Existence of the destination is a skip, not an error; fetch and write
/// failures are carried as data so the remaining resources still run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    Downloaded,
    SkippedExists,
    Failed { reason: String },
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed { .. })
    }
}

/// Per-invocation URL overrides for the default resources.
#[derive(Debug, Clone, Default)]
pub struct ResourceOverrides {
    pub architect: Option<Url>,
    pub ask: Option<Url>,
    pub code: Option<Url>,
}

const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/GreatScottyMac/roo-code-memory-bank/main/";

fn default_url(file: &str) -> Url {
    Url::parse(DEFAULT_BASE_URL)
        .and_then(|base| base.join(file))
        .expect("Default resource URL must be valid")
}

/// The three rule-file resources, with any URL overrides applied.
pub fn default_resources(overrides: ResourceOverrides) -> Vec<Resource> {
    vec![
        Resource {
            name: "architect",
            url: overrides.architect.unwrap_or_else(|| default_url(".clinerules-architect")),
            dest: ".clinerules-architect",
        },
        Resource {
            name: "ask",
            url: overrides.ask.unwrap_or_else(|| default_url(".clinerules-ask")),
            dest: ".clinerules-ask",
        },
        Resource {
            name: "code",
            url: overrides.code.unwrap_or_else(|| default_url(".clinerules-code")),
            dest: ".clinerules-code",
        },
    ]
}
