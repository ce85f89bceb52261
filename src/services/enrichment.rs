use crate::{
    db::{CacheStore, MetadataCache},
    error::{AppResult, FetchError},
    models::{MovieDetails, MovieSummary},
    services::providers::MetadataProvider,
};

/// Enriches titles in order, consulting the cache before the provider
///
/// Cache hits are returned verbatim without a network call. Fresh results are
/// upserted into `cache`. Titles whose fetch fails are logged and omitted, so
/// the output may be shorter than the input; they are retried on the next run.
pub async fn enrich_titles(
    provider: &dyn MetadataProvider,
    titles: &[String],
    cache: &mut MetadataCache,
) -> Vec<MovieSummary> {
    let mut results = Vec::with_capacity(titles.len());
    let mut fetched = 0usize;
    let mut skipped = 0usize;

    for title in titles {
        if let Some(cached) = cache.get(title) {
            tracing::info!(title = %title, "Using cached metadata");
            results.push(cached.clone());
            continue;
        }

        tracing::info!(title = %title, provider = provider.name(), "Fetching metadata");

        let outcome: Result<MovieDetails, FetchError> = provider.fetch(title).await;
        match outcome {
            Ok(details) => {
                let summary = MovieSummary::from(details);
                cache.upsert(title.clone(), summary.clone());
                results.push(summary);
                fetched += 1;
            }
            Err(FetchError::NotFound(message)) => {
                tracing::warn!(title = %title, error = %message, "Provider has no match, skipping");
                skipped += 1;
            }
            Err(e) => {
                tracing::error!(title = %title, error = %e, "Metadata fetch failed, skipping");
                skipped += 1;
            }
        }
    }

    tracing::info!(
        requested = titles.len(),
        returned = results.len(),
        fetched,
        skipped,
        "Enrichment pass completed"
    );

    results
}

/// Runs a full batch over the first `limit` titles
///
/// Loads the cache, enriches, then persists the whole cache once. Errors
/// here come from the cache store, never from individual titles.
pub async fn get_all_movies(
    store: &CacheStore,
    provider: &dyn MetadataProvider,
    titles: &[String],
    limit: usize,
) -> AppResult<Vec<MovieSummary>> {
    let mut cache = store.load().await?;
    let batch = &titles[..titles.len().min(limit)];

    let results = enrich_titles(provider, batch, &mut cache).await;

    store.persist_all(&cache).await?;

    tracing::info!(movies = results.len(), "Returning movies");

    Ok(results)
}

/// Cached summaries for the first `limit` titles, in catalog order
///
/// Titles without a cache entry are left out. Never calls the provider.
pub async fn cached_movies(
    store: &CacheStore,
    titles: &[String],
    limit: usize,
) -> AppResult<Vec<MovieSummary>> {
    let cache = store.load().await?;

    Ok(titles
        .iter()
        .take(limit)
        .filter_map(|title| cache.get(title).cloned())
        .collect())
}
