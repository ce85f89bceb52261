use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::models::{Catalog, SimilarityIndex};

/// A catalog entry as exported by the training job
///
/// Older exports are a bare list of strings; dataframe exports are records
/// carrying at least a `title` column.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogRecord {
    Title(String),
    Record { title: String },
}

impl CatalogRecord {
    fn into_title(self) -> String {
        match self {
            CatalogRecord::Title(title) | CatalogRecord::Record { title } => title,
        }
    }
}

/// Precomputed model artifacts loaded once at startup
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub catalog: Catalog,
    pub index: SimilarityIndex,
}

impl ModelArtifacts {
    /// Reads and validates the catalog and similarity artifacts
    ///
    /// Fails unless the matrix is square and its dimension equals the number
    /// of catalog titles.
    pub async fn load(movies_path: &Path, similarity_path: &Path) -> anyhow::Result<Self> {
        let movies_raw = tokio::fs::read_to_string(movies_path)
            .await
            .with_context(|| format!("Failed to read catalog {}", movies_path.display()))?;
        let similarity_raw = tokio::fs::read_to_string(similarity_path)
            .await
            .with_context(|| format!("Failed to read similarity matrix {}", similarity_path.display()))?;

        let artifacts = Self::from_json(&movies_raw, &similarity_raw)?;

        tracing::info!(
            titles = artifacts.catalog.len(),
            catalog = %movies_path.display(),
            similarity = %similarity_path.display(),
            "Loaded model artifacts"
        );

        Ok(artifacts)
    }

    pub fn from_json(movies_json: &str, similarity_json: &str) -> anyhow::Result<Self> {
        let records: Vec<CatalogRecord> =
            serde_json::from_str(movies_json).context("Catalog is not a JSON array of titles")?;
        let rows: Vec<Vec<f64>> = serde_json::from_str(similarity_json)
            .context("Similarity matrix is not a JSON array of numeric rows")?;

        let catalog = Catalog::new(records.into_iter().map(CatalogRecord::into_title).collect());
        let index = SimilarityIndex::from_rows(rows)?;

        Self::new(catalog, index)
    }

    pub fn new(catalog: Catalog, index: SimilarityIndex) -> anyhow::Result<Self> {
        if catalog.len() != index.dimension() {
            anyhow::bail!(
                "Catalog has {} titles but similarity matrix dimension is {}",
                catalog.len(),
                index.dimension()
            );
        }

        Ok(Self { catalog, index })
    }
}
