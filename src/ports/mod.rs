mod project_store;
mod resource_fetcher;

pub use project_store::{EntryKind, ProjectStore};
pub use resource_fetcher::ResourceFetcher;
