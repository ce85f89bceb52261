use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// JSON file holding enriched metadata between batch runs
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,

    /// Catalog artifact (ordered list of titles)
    #[serde(default = "default_movies_path")]
    pub movies_path: PathBuf,

    /// Similarity matrix artifact aligned with the catalog
    #[serde(default = "default_similarity_path")]
    pub similarity_path: PathBuf,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum number of catalog titles enriched by a batch run
    #[serde(default = "default_catalog_limit")]
    pub catalog_limit: usize,

    /// Number of similar titles returned per recommendation request
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,

    /// Per-call timeout for the metadata provider
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_omdb_api_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("./static/data.json")
}

fn default_movies_path() -> PathBuf {
    PathBuf::from("./artifacts/movies.json")
}

fn default_similarity_path() -> PathBuf {
    PathBuf::from("./artifacts/similarity.json")
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_catalog_limit() -> usize {
    1000
}

fn default_recommendation_count() -> usize {
    5
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
