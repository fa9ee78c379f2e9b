//! Project-context document derivation from a README.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::domain::AppError;

/// README file names probed for a project description, in priority order.
pub const README_CANDIDATES: &[&str] = &["README.md", "readme.md", "README.txt", "readme.txt"];

/// Section headers that mark an explicit project description.
const SECTION_MARKERS: &[&str] = &["## Project Description", "## What it does"];

/// Description used when no README yields usable content.
pub const PLACEHOLDER_DESCRIPTION: &str = "No project description available.";

const PRODUCT_CONTEXT_TEMPLATE: &str = "# Product Context\n\n{{ description }}\n";

/// How the context document ended up on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ContextDocOutcome {
    Created { from_readme: bool },
    SkippedExists,
}

/// Extract a short project description from README content.
///
/// Prefers content after an explicit description header, collects at most the
/// first two non-empty lines before the next `##` header, and truncates the
/// result at the first sentence boundary.
pub fn extract_description(content: &str) -> Option<String> {
    let body = SECTION_MARKERS
        .iter()
        .find_map(|marker| content.split_once(marker).map(|(_, rest)| rest))
        .unwrap_or(content);

    let mut collected: Vec<&str> = Vec::new();
    for line in body.lines() {
        let line = line.trim();
        if line.starts_with("##") {
            break;
        }
        if !line.is_empty() {
            collected.push(line);
        }
        if collected.len() == 2 {
            break;
        }
    }

    if collected.is_empty() {
        return None;
    }

    let candidate = collected.join(" ");
    match candidate.split_once('.') {
        Some((sentence, _)) => Some(format!("{}.", sentence)),
        None => Some(candidate),
    }
}

/// Render the context document for the given description.
pub fn render_product_context(description: &str) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);

    env.render_str(PRODUCT_CONTEXT_TEMPLATE, context! { description }).map_err(|e| {
        AppError::Template { what: "productContext.md".to_string(), details: e.to_string() }
    })
}
