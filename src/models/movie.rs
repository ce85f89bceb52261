use serde::{Deserialize, Serialize};

/// Sentinel used for any metadata field the provider did not supply
pub const UNKNOWN: &str = "N/A";

/// Sentinel used when the provider has no plot summary
pub const NO_PLOT: &str = "No description available";

fn unknown() -> String {
    UNKNOWN.to_string()
}

/// Full metadata for a single movie
///
/// Every field is always populated: missing provider values are replaced with
/// [`UNKNOWN`] (or an empty string for the poster, [`NO_PLOT`] for the plot).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub poster: String,
    pub rating: String,
    pub year: String,
    pub runtime: String,
    pub genre: String,
    pub votes: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    pub country: String,
    pub language: String,
}

impl MovieDetails {
    /// Normalizes a raw provider response for the requested title
    pub fn from_omdb(title: &str, response: OmdbResponse) -> Self {
        let or_unknown = |value: Option<String>| value.unwrap_or_else(unknown);

        Self {
            title: title.to_string(),
            poster: response.poster.unwrap_or_default(),
            rating: or_unknown(response.imdb_rating),
            year: or_unknown(response.year),
            runtime: or_unknown(response.runtime),
            genre: or_unknown(response.genre),
            votes: or_unknown(response.imdb_votes),
            plot: response.plot.unwrap_or_else(|| NO_PLOT.to_string()),
            director: or_unknown(response.director),
            actors: or_unknown(response.actors),
            country: or_unknown(response.country),
            language: or_unknown(response.language),
        }
    }
}

/// Abbreviated metadata stored in the cache and returned by batch listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    /// Title with spaces encoded, usable as a path segment
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default = "unknown")]
    pub rating: String,
    #[serde(default = "unknown")]
    pub year: String,
    #[serde(default = "unknown")]
    pub runtime: String,
    #[serde(default = "unknown")]
    pub genre: String,
    #[serde(default = "unknown")]
    pub votes: String,
}

impl MovieSummary {
    /// Encodes a title the way listing links expect it
    pub fn encode_id(title: &str) -> String {
        title.replace(' ', "%20")
    }
}

impl From<MovieDetails> for MovieSummary {
    fn from(details: MovieDetails) -> Self {
        Self {
            id: Self::encode_id(&details.title),
            title: details.title,
            poster: details.poster,
            rating: details.rating,
            year: details.year,
            runtime: details.runtime,
            genre: details.genre,
            votes: details.votes,
        }
    }
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw response body from the OMDb title lookup
///
/// Every field is optional; OMDb omits most of them when `Response` is `"False"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbResponse {
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl OmdbResponse {
    /// OMDb signals "no such title" in-band with `"Response": "False"`
    pub fn is_not_found(&self) -> bool {
        self.response.as_deref() == Some("False")
    }
}
