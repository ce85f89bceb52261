#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use tempfile::TempDir;

use movie_rec_api::api::{create_router, AppState};
use movie_rec_api::db::{CacheStore, ModelArtifacts};
use movie_rec_api::error::FetchError;
use movie_rec_api::models::{Catalog, MovieDetails, OmdbResponse, SimilarityIndex};
use movie_rec_api::services::MetadataProvider;

/// Provider double answering from a fixed table and recording every call
#[derive(Default)]
pub struct StubProvider {
    known: HashMap<String, MovieDetails>,
    calls: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn with_titles(titles: &[(&str, &str)]) -> Self {
        let known = titles
            .iter()
            .map(|(title, rating)| {
                let mut details = MovieDetails::from_omdb(title, OmdbResponse::default());
                details.rating = rating.to_string();
                details.year = "2000".to_string();
                details.genre = "Drama".to_string();
                details.votes = "1,000".to_string();
                (title.to_string(), details)
            })
            .collect();

        Self {
            known,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MetadataProvider for StubProvider {
    async fn fetch(&self, title: &str) -> Result<MovieDetails, FetchError> {
        self.calls.lock().unwrap().push(title.to_string());
        self.known
            .get(title)
            .cloned()
            .ok_or_else(|| FetchError::NotFound("Movie not found!".to_string()))
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Catalog [A, B, C, D] with A's row = [1.0, 0.9, 0.2, 0.5]
pub fn sample_artifacts() -> ModelArtifacts {
    let catalog = Catalog::new(
        ["A", "B", "C", "D"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    let index = SimilarityIndex::from_rows(vec![
        vec![1.0, 0.9, 0.2, 0.5],
        vec![0.9, 1.0, 0.1, 0.3],
        vec![0.2, 0.1, 1.0, 0.4],
        vec![0.5, 0.3, 0.4, 1.0],
    ])
    .unwrap();

    ModelArtifacts::new(catalog, index).unwrap()
}

pub struct TestApp {
    pub server: TestServer,
    pub provider: Arc<StubProvider>,
    pub cache_path: PathBuf,
    _dir: TempDir,
}

pub fn create_test_app(provider: StubProvider) -> TestApp {
    create_test_app_with_cache(provider, None)
}

pub fn create_test_app_with_cache(provider: StubProvider, cache_json: Option<&str>) -> TestApp {
    let dir = TempDir::new().unwrap();
    let cache_path = dir.path().join("data.json");
    if let Some(json) = cache_json {
        std::fs::write(&cache_path, json).unwrap();
    }

    let provider = Arc::new(provider);
    let state = AppState::new(
        sample_artifacts(),
        provider.clone(),
        CacheStore::new(&cache_path),
    );
    let server = TestServer::new(create_router(state)).unwrap();

    TestApp {
        server,
        provider,
        cache_path,
        _dir: dir,
    }
}

pub fn read_cache(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
