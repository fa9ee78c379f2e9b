//! Install command implementation: idempotent fetch-or-skip plus scaffold.

use serde::Serialize;
use url::Url;

use crate::app::AppContext;
use crate::domain::{
    AppError, ContextDocOutcome, FetchOutcome, GITIGNORE_FILE, MEMORY_BANK_DIR,
    PLACEHOLDER_DESCRIPTION, PRODUCT_CONTEXT_FILE, README_CANDIDATES, Resource, append_missing,
    extract_description, render_product_context,
};
use crate::ports::{EntryKind, ProjectStore, ResourceFetcher};

/// Options for the install command.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Resources to install, usually the three defaults with overrides applied.
    pub resources: Vec<Resource>,
}

/// Per-resource report entry.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceReport {
    pub name: String,
    pub dest: String,
    pub url: Url,
    #[serde(flatten)]
    pub outcome: FetchOutcome,
}

/// Outcome of the gitignore append step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GitignoreOutcome {
    /// Missing managed entries were appended.
    Appended { added: Vec<String> },
    /// Every managed entry was already present.
    AlreadyCurrent,
    /// The project has no `.gitignore` file; nothing was created.
    NoFile,
}

/// Result of an install run.
#[derive(Debug, Serialize)]
pub struct InstallReport {
    pub resources: Vec<ResourceReport>,
    pub context_doc: ContextDocOutcome,
    /// Expected files still missing after the run.
    pub missing: Vec<String>,
    /// `None` until the caller runs the gitignore step (or the user declines).
    pub gitignore: Option<GitignoreOutcome>,
}

impl InstallReport {
    /// Whether any resource failed to install.
    pub fn has_failures(&self) -> bool {
        self.resources.iter().any(|r| r.outcome.is_failed())
    }
}

/// Execute the install command.
///
/// Setup failures (cannot create the output folder) abort with `Err`; every
/// per-resource condition is folded into the report and the run continues.
pub fn execute<S, F>(
    ctx: &AppContext<S, F>,
    options: &InstallOptions,
) -> Result<InstallReport, AppError>
where
    S: ProjectStore,
    F: ResourceFetcher,
{
    let project = ctx.project();
    project.create_dir_all(MEMORY_BANK_DIR)?;

    let mut resources = Vec::with_capacity(options.resources.len());
    for resource in &options.resources {
        let outcome = install_resource(project, ctx.fetcher(), resource);
        resources.push(ResourceReport {
            name: resource.name.to_string(),
            dest: resource.dest.to_string(),
            url: resource.url.clone(),
            outcome,
        });
    }

    let context_doc = generate_context_doc(project)?;
    let missing = verify(project, &options.resources);

    Ok(InstallReport { resources, context_doc, missing, gitignore: None })
}

/// Append the managed entries to an existing `.gitignore`.
///
/// An absent file is a no-op; existing content is never removed or reordered.
pub fn append_ignore_entries<S: ProjectStore>(project: &S) -> Result<GitignoreOutcome, AppError> {
    if project.entry_kind(GITIGNORE_FILE) != EntryKind::File {
        return Ok(GitignoreOutcome::NoFile);
    }

    let existing = project.read_file(GITIGNORE_FILE)?;
    match append_missing(&existing) {
        Some(merged) => {
            project.write_file(GITIGNORE_FILE, &merged.content)?;
            Ok(GitignoreOutcome::Appended {
                added: merged.added.iter().map(|e| e.to_string()).collect(),
            })
        }
        None => Ok(GitignoreOutcome::AlreadyCurrent),
    }
}

fn install_resource<S, F>(project: &S, fetcher: &F, resource: &Resource) -> FetchOutcome
where
    S: ProjectStore,
    F: ResourceFetcher,
{
    match project.entry_kind(resource.dest) {
        EntryKind::File => return FetchOutcome::SkippedExists,
        EntryKind::Directory | EntryKind::Other => {
            return FetchOutcome::Failed {
                reason: format!("destination {} exists but is not a regular file", resource.dest),
            };
        }
        EntryKind::Missing => {}
    }

    let content = match fetcher.fetch(&resource.url) {
        Ok(content) => content,
        Err(e) => return FetchOutcome::Failed { reason: e.to_string() },
    };

    match project.write_file(resource.dest, &content) {
        Ok(()) => FetchOutcome::Downloaded,
        Err(e) => FetchOutcome::Failed { reason: e.to_string() },
    }
}

fn generate_context_doc<S: ProjectStore>(project: &S) -> Result<ContextDocOutcome, AppError> {
    if project.entry_kind(PRODUCT_CONTEXT_FILE) != EntryKind::Missing {
        return Ok(ContextDocOutcome::SkippedExists);
    }

    let description = readme_description(project);
    let from_readme = description.is_some();
    let document =
        render_product_context(description.as_deref().unwrap_or(PLACEHOLDER_DESCRIPTION))?;
    project.write_file(PRODUCT_CONTEXT_FILE, &document)?;

    Ok(ContextDocOutcome::Created { from_readme })
}

fn readme_description<S: ProjectStore>(project: &S) -> Option<String> {
    README_CANDIDATES
        .iter()
        .filter(|candidate| project.entry_kind(candidate) == EntryKind::File)
        .find_map(|candidate| {
            let content = project.read_file(candidate).ok()?;
            extract_description(&content)
        })
}

fn verify<S: ProjectStore>(project: &S, resources: &[Resource]) -> Vec<String> {
    resources
        .iter()
        .map(|r| r.dest.to_string())
        .chain(std::iter::once(PRODUCT_CONTEXT_FILE.to_string()))
        .filter(|path| project.entry_kind(path) != EntryKind::File)
        .collect()
}
