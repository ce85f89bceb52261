pub mod catalog;
pub mod movie;

pub use catalog::{Catalog, SimilarityIndex};
pub use movie::{MovieDetails, MovieSummary, OmdbResponse, NO_PLOT, UNKNOWN};

use serde::Serialize;

/// Response body for the batch listing
#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub movies: Vec<MovieSummary>,
}

/// Response body for a recommendation request
///
/// An unknown title is reported in-band rather than as an HTTP error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendationsResponse {
    Found { recommendations: Vec<MovieDetails> },
    Missing { error: String },
}

/// One page of filtered batch results
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub movies: Vec<MovieSummary>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_response_shapes() {
        let found = RecommendationsResponse::Found {
            recommendations: Vec::new(),
        };
        assert_eq!(
            serde_json::to_string(&found).unwrap(),
            r#"{"recommendations":[]}"#
        );

        let missing = RecommendationsResponse::Missing {
            error: "Movie not found".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&missing).unwrap(),
            r#"{"error":"Movie not found"}"#
        );
    }
}
