use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use movie_rec_api::api::{create_router, AppState};
use movie_rec_api::config::Config;
use movie_rec_api::db::{CacheStore, ModelArtifacts};
use movie_rec_api::services::OmdbProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Load the precomputed catalog and similarity matrix
    let artifacts = ModelArtifacts::load(&config.movies_path, &config.similarity_path).await?;

    let provider = OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
        config.request_timeout(),
    )
    .context("Failed to build OMDb client")?;

    let cache_store = CacheStore::new(config.cache_path.clone());
    // Creates the cache file on first start
    cache_store.load().await?;

    let state = AppState::new(artifacts, Arc::new(provider), cache_store).with_config(&config);
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(address = %address, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
