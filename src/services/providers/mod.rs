/// Movie metadata provider abstraction
///
/// Providers translate a single title lookup against an external metadata
/// service into a normalized [`MovieDetails`]. Callers own retry and caching
/// policy; a provider makes exactly one outbound request per call.
use crate::{error::FetchError, models::MovieDetails};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch full metadata for a title
    ///
    /// Transport failures, non-success statuses, undecodable bodies and
    /// provider-reported misses all come back as a [`FetchError`].
    async fn fetch(&self, title: &str) -> Result<MovieDetails, FetchError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
