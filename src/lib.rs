//! membank: install the Roo Code Memory Bank extension into a project and
//! register the tool itself on the user's PATH.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError};

use app::AppContext;
use app::commands::{install, self_install};
use domain::{ContextDocOutcome, FetchOutcome, PRODUCT_CONTEXT_FILE, default_resources};
use services::{FilesystemProjectStore, HttpResourceFetcher};

pub use app::commands::install::{
    GitignoreOutcome, InstallOptions, InstallReport, ResourceReport,
};
pub use app::commands::self_install::{BINARY_NAME, InstallTarget};
pub use domain::AppError;
pub use domain::resource::ResourceOverrides;

/// Request for the install command, assembled from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct InstallRequest {
    /// Per-resource URL overrides.
    pub overrides: ResourceOverrides,
    /// Answer yes to every prompt.
    pub assume_yes: bool,
    /// Print the report as JSON instead of progress lines.
    pub json: bool,
}

/// Install the Memory Bank extension into the current directory.
///
/// Per-resource failures are reported and do not fail the run; only setup
/// errors (e.g. the output folder cannot be created) return `Err`.
pub fn install(request: InstallRequest) -> Result<(), AppError> {
    let project = FilesystemProjectStore::current()?;
    let fetcher = HttpResourceFetcher::new()?;
    let ctx = AppContext::new(project, fetcher);

    if !request.assume_yes
        && !confirm("Install the Memory Bank extension into the current directory?", true)?
    {
        println!("Installation aborted.");
        return Ok(());
    }

    let options = InstallOptions { resources: default_resources(request.overrides) };
    let mut report = install::execute(&ctx, &options)?;

    if !request.json {
        print_install_report(&report);
    }

    let update_ignore =
        request.assume_yes || confirm("Add the extension files to your .gitignore?", true)?;
    if update_ignore {
        let outcome = install::append_ignore_entries(ctx.project())?;
        if !request.json {
            print_gitignore_outcome(&outcome);
        }
        report.gitignore = Some(outcome);
    } else if !request.json {
        println!("Skipping .gitignore update.");
    }

    if request.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

/// Copy the membank binary into a per-user bin directory.
pub fn self_install(force: bool) -> Result<(), AppError> {
    let target = self_install::resolve_target()?;

    if target.path.exists() && !force {
        let prompt = format!("{} already exists. Overwrite?", target.path.display());
        if !confirm(&prompt, false)? {
            println!("Self-install aborted.");
            return Ok(());
        }
    }

    self_install::execute(&target)?;
    println!("✅ Installed {} to {}", BINARY_NAME, target.path.display());

    if !self_install::dir_on_path(&target.dir) {
        println!(
            "Note: {} is not on your PATH. Add it to run `{}` globally.",
            target.dir.display(),
            BINARY_NAME
        );
    }

    Ok(())
}

fn confirm(prompt: &str, default: bool) -> Result<bool, AppError> {
    match Confirm::new().with_prompt(prompt).default(default).interact() {
        Ok(answer) => Ok(answer),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(e) => Err(AppError::Prompt(e.to_string())),
    }
}

fn print_install_report(report: &InstallReport) {
    for resource in &report.resources {
        match &resource.outcome {
            FetchOutcome::Downloaded => println!("✅ Downloaded {}", resource.dest),
            FetchOutcome::SkippedExists => {
                println!("Skipped {} (already exists)", resource.dest);
            }
            FetchOutcome::Failed { reason } => {
                eprintln!("Failed to install {}: {}", resource.dest, reason);
            }
        }
    }

    match report.context_doc {
        ContextDocOutcome::Created { from_readme: true } => {
            println!("✅ Created {} from the project README", PRODUCT_CONTEXT_FILE);
        }
        ContextDocOutcome::Created { from_readme: false } => {
            println!("✅ Created {} with a placeholder description", PRODUCT_CONTEXT_FILE);
        }
        ContextDocOutcome::SkippedExists => {
            println!("Skipped {} (already exists)", PRODUCT_CONTEXT_FILE);
        }
    }

    if !report.missing.is_empty() {
        eprintln!("Warning: expected files missing after install: {}", report.missing.join(", "));
    }
}

fn print_gitignore_outcome(outcome: &GitignoreOutcome) {
    match outcome {
        GitignoreOutcome::Appended { added } => {
            for entry in added {
                println!("✅ Added '{}' to .gitignore", entry);
            }
        }
        GitignoreOutcome::AlreadyCurrent => {
            println!(".gitignore already lists the extension files.");
        }
        GitignoreOutcome::NoFile => {
            println!("No .gitignore found; nothing to update.");
        }
    }
}
