use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{
    MovieDetails, MovieSummary, MoviesResponse, RecommendationsResponse, SearchResponse,
};
use crate::services::{
    enrichment, movie_detail, recommendations,
    search::{self, MovieFilter, DEFAULT_PAGE_SIZE},
};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub min_rating: Option<f32>,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub min_votes: Option<u64>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl SearchParams {
    fn filter(&self) -> MovieFilter {
        MovieFilter {
            q: self.q.clone(),
            min_rating: self.min_rating,
            genre: self.genre.clone(),
            year: self.year.clone(),
            min_votes: self.min_votes,
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Runs one batch enrichment pass while holding the batch lock
async fn enriched_catalog(state: &AppState, request_id: &RequestId) -> AppResult<Vec<MovieSummary>> {
    let _guard = state.batch_lock.lock().await;

    enrichment::get_all_movies(
        &state.cache_store,
        state.provider.as_ref(),
        state.catalog.titles(),
        state.catalog_limit,
    )
    .await
    .map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Error in get_all_movies");
        e
    })
}

/// Enriched listing of the catalog, served from cache where possible
pub async fn get_all_movies(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<MoviesResponse>> {
    tracing::info!(request_id = %request_id, "Fetching all movies");

    let movies = enriched_catalog(&state, &request_id).await?;
    Ok(Json(MoviesResponse { movies }))
}

/// Similar titles with full metadata
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(title): Path<String>,
) -> AppResult<Json<RecommendationsResponse>> {
    tracing::info!(request_id = %request_id, title = %title, "Processing recommendation request");

    let result = recommendations::recommend(
        &state.catalog,
        &state.index,
        state.provider.as_ref(),
        &title,
        state.recommendation_count,
    )
    .await;

    match result {
        Ok(recommendations) => Ok(Json(RecommendationsResponse::Found { recommendations })),
        Err(AppError::NotFound(_)) => Ok(Json(RecommendationsResponse::Missing {
            error: "Movie not found".to_string(),
        })),
        Err(e) => Err(e),
    }
}

/// Full metadata for a single title
pub async fn get_movie_detail(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<MovieDetails>> {
    let details = movie_detail::get_movie_detail(state.provider.as_ref(), &title).await?;
    Ok(Json(details))
}

/// Filtered, paginated view over the cached listing
///
/// Only titles already enriched by `/all-movies` are searchable.
pub async fn search_movies(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let movies = {
        let _guard = state.batch_lock.lock().await;
        enrichment::cached_movies(&state.cache_store, state.catalog.titles(), state.catalog_limit)
            .await?
    };

    let response = search::search_movies(
        movies,
        &params.filter(),
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;

    tracing::info!(
        request_id = %request_id,
        matches = response.total,
        page = response.page,
        "Search completed"
    );

    Ok(Json(response))
}
