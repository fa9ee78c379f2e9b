use url::Url;

use crate::domain::AppError;

/// Retrieves remote resource content.
pub trait ResourceFetcher {
    /// Fetch the resource at `url` and return its body as text.
    fn fetch(&self, url: &Url) -> Result<String, AppError>;
}
