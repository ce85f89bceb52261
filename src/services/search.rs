use crate::{
    error::{AppError, AppResult},
    models::{MovieSummary, SearchResponse},
};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Criteria for narrowing the enriched movie listing
///
/// Every field is optional; an empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    /// Case-insensitive substring of the title
    pub q: Option<String>,
    pub min_rating: Option<f32>,
    /// Substring of the comma-separated genre list
    pub genre: Option<String>,
    /// Prefix of the year, e.g. "199" for the nineties
    pub year: Option<String>,
    pub min_votes: Option<u64>,
}

impl MovieFilter {
    pub fn matches(&self, movie: &MovieSummary) -> bool {
        if let Some(q) = non_empty(&self.q) {
            if !movie.title.to_lowercase().contains(&q.to_lowercase()) {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            match parse_rating(&movie.rating) {
                Some(rating) if rating >= min_rating => {}
                _ => return false,
            }
        }

        if let Some(genre) = non_empty(&self.genre) {
            if !movie.genre.contains(genre) {
                return false;
            }
        }

        if let Some(year) = non_empty(&self.year) {
            if !movie.year.starts_with(year) {
                return false;
            }
        }

        if let Some(min_votes) = self.min_votes {
            match parse_votes(&movie.votes) {
                Some(votes) if votes >= min_votes => {}
                _ => return false,
            }
        }

        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_rating(rating: &str) -> Option<f32> {
    rating.trim().parse().ok()
}

/// Parses OMDb vote counts such as "1,234,567"
fn parse_votes(votes: &str) -> Option<u64> {
    votes.replace(',', "").trim().parse().ok()
}

/// Filters the listing and returns one 1-based page of matches
pub fn search_movies(
    movies: Vec<MovieSummary>,
    filter: &MovieFilter,
    page: usize,
    per_page: usize,
) -> AppResult<SearchResponse> {
    if page == 0 {
        return Err(AppError::InvalidInput("page must be at least 1".to_string()));
    }
    if per_page == 0 {
        return Err(AppError::InvalidInput(
            "per_page must be at least 1".to_string(),
        ));
    }

    let matches: Vec<MovieSummary> = movies.into_iter().filter(|m| filter.matches(m)).collect();
    let total = matches.len();
    let total_pages = total.div_ceil(per_page);

    let movies = matches
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Ok(SearchResponse {
        movies,
        page,
        per_page,
        total,
        total_pages,
    })
}
