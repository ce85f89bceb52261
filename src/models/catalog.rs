use std::collections::HashMap;

use crate::error::{AppError, AppResult};

/// Ordered, immutable list of known titles
///
/// A title's position is its row and column in the [`SimilarityIndex`].
#[derive(Debug, Clone)]
pub struct Catalog {
    titles: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog and its title → position lookup
    ///
    /// Duplicate titles resolve to their first occurrence.
    pub fn new(titles: Vec<String>) -> Self {
        let mut positions = HashMap::with_capacity(titles.len());
        let mut duplicates = 0usize;

        for (position, title) in titles.iter().enumerate() {
            if positions.contains_key(title) {
                duplicates += 1;
                tracing::warn!(
                    title = %title,
                    position,
                    "Duplicate catalog title, lookups resolve to first occurrence"
                );
                continue;
            }
            positions.insert(title.clone(), position);
        }

        if duplicates > 0 {
            tracing::warn!(duplicates, "Catalog contains duplicate titles");
        }

        Self { titles, positions }
    }

    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    pub fn title_at(&self, position: usize) -> Option<&str> {
        self.titles.get(position).map(String::as_str)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Dense square matrix of precomputed pairwise similarity scores
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    dimension: usize,
    scores: Vec<f64>,
}

impl SimilarityIndex {
    /// Flattens the rows into a single buffer, rejecting non-square input
    pub fn from_rows(rows: Vec<Vec<f64>>) -> AppResult<Self> {
        let dimension = rows.len();
        let mut scores = Vec::with_capacity(dimension * dimension);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dimension {
                return Err(AppError::Artifact(format!(
                    "Similarity row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    dimension
                )));
            }
            scores.extend(row);
        }

        Ok(Self { dimension, scores })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Scores of one row as `(position, score)` pairs in catalog order
    pub fn scores_for(&self, position: usize) -> Option<impl Iterator<Item = (usize, f64)> + '_> {
        if position >= self.dimension {
            return None;
        }
        let start = position * self.dimension;
        let row = &self.scores[start..start + self.dimension];
        Some(row.iter().copied().enumerate())
    }
}
