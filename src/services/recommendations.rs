use futures::future::join_all;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, MovieDetails, SimilarityIndex},
    services::providers::MetadataProvider,
};

/// Ranks every other title by similarity to `position`
///
/// Scores are sorted descending with a stable sort, so equal scores keep
/// catalog order. The queried position itself is never returned.
pub fn rank_similar(index: &SimilarityIndex, position: usize, k: usize) -> Vec<(usize, f64)> {
    let Some(row) = index.scores_for(position) else {
        return Vec::new();
    };

    let mut ranked: Vec<(usize, f64)> = row.filter(|(other, _)| *other != position).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(k);
    ranked
}

/// Recommends up to `k` titles similar to `title`, enriched with metadata
///
/// Details are fetched fresh for every recommendation (no cache). A failed
/// fetch drops that item only; survivors are returned in rank order.
pub async fn recommend(
    catalog: &Catalog,
    index: &SimilarityIndex,
    provider: &dyn MetadataProvider,
    title: &str,
    k: usize,
) -> AppResult<Vec<MovieDetails>> {
    let position = catalog
        .position_of(title)
        .ok_or_else(|| AppError::NotFound("movie not found".to_string()))?;

    let similar: Vec<&str> = rank_similar(index, position, k)
        .into_iter()
        .filter_map(|(other, _)| catalog.title_at(other))
        .collect();

    let outcomes = join_all(similar.iter().map(|similar_title| provider.fetch(similar_title))).await;

    let mut recommendations = Vec::with_capacity(outcomes.len());
    for (similar_title, outcome) in similar.iter().zip(outcomes) {
        match outcome {
            Ok(details) => recommendations.push(details),
            Err(e) => {
                tracing::error!(
                    title = %similar_title,
                    error = %e,
                    "Error fetching details for recommendation"
                );
            }
        }
    }

    tracing::info!(
        title = %title,
        requested = k,
        returned = recommendations.len(),
        "Recommendations generated"
    );

    Ok(recommendations)
}
