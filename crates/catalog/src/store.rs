//! Storage abstraction for the movie document.
//!
//! The whole collection is read and written wholesale per request; the
//! store never hands out partial views. `FilmStore` is the seam that lets
//! the server run against a JSON file in production and an in-memory
//! collection in tests.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{CatalogError, Result};
use crate::types::MovieRecord;

/// Load/save of the full ordered collection.
///
/// Implementations must be safe to share across request handlers, hence
/// `Send + Sync`.
pub trait FilmStore: Send + Sync {
    /// Read the entire collection from the persisted document.
    ///
    /// # Returns
    /// * `Ok(Vec<MovieRecord>)` - Every record in stored order
    /// * `Err(CatalogError::Missing)` - The document does not exist
    /// * `Err(CatalogError::Malformed)` - The document is not valid JSON
    fn load(&self) -> Result<Vec<MovieRecord>>;

    /// Replace the persisted document with `records`.
    ///
    /// A failed save must leave the previous document intact; callers
    /// treat an error as "state not updated".
    fn save(&self, records: &[MovieRecord]) -> Result<()>;
}

/// Stores the collection as a pretty-printed JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FilmStore for JsonFileStore {
    fn load(&self) -> Result<Vec<MovieRecord>> {
        let contents = fs::read_to_string(&self.path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                CatalogError::Missing {
                    path: self.path.display().to_string(),
                }
            } else {
                CatalogError::Io(err)
            }
        })?;

        let records = serde_json::from_str(&contents)?;
        Ok(records)
    }

    fn save(&self, records: &[MovieRecord]) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)?;

        // Write to a sibling temp file first, then rename over the
        // document, so a failed write never truncates the previous state.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// In-memory store for tests.
///
/// Behaves like `JsonFileStore` without touching the filesystem: `load`
/// returns a copy of the current collection, `save` replaces it.
pub struct MemoryStore {
    records: Mutex<Vec<MovieRecord>>,
}

impl MemoryStore {
    pub fn new(initial: Vec<MovieRecord>) -> Self {
        Self {
            records: Mutex::new(initial),
        }
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, Vec<MovieRecord>> {
        // A poisoned lock still holds a complete collection
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FilmStore for MemoryStore {
    fn load(&self) -> Result<Vec<MovieRecord>> {
        Ok(self.guard().clone())
    }

    fn save(&self, records: &[MovieRecord]) -> Result<()> {
        *self.guard() = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<MovieRecord> {
        vec![
            MovieRecord {
                id: 1,
                title: "The Shawshank Redemption".to_string(),
                rating: "9.1".to_string(),
                year: 1994,
                budget: 25_000_000.0,
                gross: 28_341_469.0,
                poster: "https://example.com/shawshank.jpg".to_string(),
                position: 1,
            },
            MovieRecord {
                id: 2,
                title: "The Green Mile".to_string(),
                rating: "9.0".to_string(),
                year: 1999,
                budget: 60_000_000.0,
                gross: 286_801_374.0,
                poster: "https://example.com/green-mile.jpg".to_string(),
                position: 2,
            },
        ]
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("top250.json"));

        let records = sample_records();
        store.save(&records).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_file_store_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));

        let err = store.load().unwrap_err();
        assert!(matches!(err, CatalogError::Missing { .. }));
    }

    #[test]
    fn test_file_store_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top250.json");
        fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_file_store_save_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top250.json");
        let store = JsonFileStore::new(path.clone());

        let records = sample_records();
        store.save(&records).unwrap();
        store.save(&records[..1]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 1);

        // The temp file from the atomic write must not linger
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert!(store.load().unwrap().is_empty());

        let records = sample_records();
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }
}
