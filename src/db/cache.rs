use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::models::MovieSummary;

/// In-memory view of the metadata cache, keyed by title
///
/// Keeps insertion order: entries loaded from disk keep their file order and
/// new titles are appended. Replacing an entry keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataCache {
    entries: Vec<(String, MovieSummary)>,
    positions: HashMap<String, usize>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, title: &str) -> Option<&MovieSummary> {
        self.positions.get(title).map(|&i| &self.entries[i].1)
    }

    #[cfg(test)]
    pub fn contains(&self, title: &str) -> bool {
        self.positions.contains_key(title)
    }

    /// Inserts or replaces the entry for a title
    pub fn upsert(&mut self, title: impl Into<String>, entry: MovieSummary) {
        let title = title.into();
        match self.positions.get(&title) {
            Some(&i) => self.entries[i].1 = entry,
            None => {
                self.positions.insert(title.clone(), self.entries.len());
                self.entries.push((title, entry));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(title, _)| title.as_str())
    }

    fn from_json_object(object: Map<String, Value>) -> serde_json::Result<Self> {
        let mut cache = Self::new();
        for (title, value) in object {
            cache.upsert(title, serde_json::from_value(value)?);
        }
        Ok(cache)
    }

    fn to_json_object(&self) -> serde_json::Result<Map<String, Value>> {
        let mut object = Map::with_capacity(self.entries.len());
        for (title, entry) in &self.entries {
            object.insert(title.clone(), serde_json::to_value(entry)?);
        }
        Ok(object)
    }
}

/// Durable JSON file backing the [`MetadataCache`]
///
/// The file always holds a single JSON object mapping titles to summaries.
/// Entries never expire; the whole mapping is rewritten on every persist.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the full mapping from disk
    ///
    /// A missing or blank file is initialized to `{}`. Content that does not
    /// parse is logged and treated as an empty cache; it is left on disk
    /// until the next persist overwrites it. Only I/O failures are errors.
    pub async fn load(&self) -> AppResult<MetadataCache> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(AppError::Cache(format!(
                    "Failed to read cache file {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if content.trim().is_empty() {
            tracing::info!(path = %self.path.display(), "Initializing empty cache file");
            let empty = MetadataCache::new();
            self.persist_all(&empty).await?;
            return Ok(empty);
        }

        let parsed = serde_json::from_str::<Map<String, Value>>(&content)
            .and_then(MetadataCache::from_json_object);

        match parsed {
            Ok(cache) => {
                tracing::debug!(entries = cache.len(), "Loaded metadata cache");
                Ok(cache)
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Corrupted cache file, starting from an empty cache"
                );
                Ok(MetadataCache::new())
            }
        }
    }

    /// Overwrites the file with the full mapping
    ///
    /// Writes to a sibling temp file first and renames it into place, so a
    /// crash mid-write leaves the previous contents intact.
    pub async fn persist_all(&self, cache: &MetadataCache) -> AppResult<()> {
        let json = cache
            .to_json_object()
            .and_then(|object| serde_json::to_string_pretty(&object))
            .map_err(|e| AppError::Cache(format!("Cache serialization error: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error("create cache directory", e))?;
        }

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| self.io_error("write cache file", e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| self.io_error("replace cache file", e))?;

        tracing::debug!(entries = cache.len(), path = %self.path.display(), "Persisted metadata cache");

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> AppError {
        AppError::Cache(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            e
        ))
    }
}
