use crate::{error::AppResult, models::MovieDetails, services::providers::MetadataProvider};

/// Service function for a single title's full metadata
///
/// Always goes to the provider; detail lookups never read or write the cache.
pub async fn get_movie_detail(
    provider: &dyn MetadataProvider,
    title: &str,
) -> AppResult<MovieDetails> {
    let details = provider.fetch(title).await?;
    Ok(details)
}
