pub mod context_doc;
pub mod error;
pub mod ignore;
pub mod layout;
pub mod resource;

pub use context_doc::{
    ContextDocOutcome, PLACEHOLDER_DESCRIPTION, README_CANDIDATES, extract_description,
    render_product_context,
};
pub use error::AppError;
pub use ignore::{IgnoreAppend, MANAGED_IGNORE_ENTRIES, append_missing, missing_entries};
pub use layout::{GITIGNORE_FILE, MEMORY_BANK_DIR, PRODUCT_CONTEXT_FILE};
pub use resource::{FetchOutcome, Resource, ResourceOverrides, default_resources};
