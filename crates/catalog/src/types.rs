//! Core domain types for the ranked movie list.

use serde::{Deserialize, Serialize};

/// Unique identifier for a movie record
pub type MovieId = u64;

/// A single entry in the ranked movie list.
///
/// `position` is the 1-based rank within the list; lower is higher-ranked.
/// After every mutation through the API the positions across the whole
/// collection form the contiguous range `1..=N`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    /// Provider rating formatted to one decimal place, e.g. "8.5"
    pub rating: String,
    pub year: u16,
    pub budget: f64,
    pub gross: f64,
    /// Poster URL
    pub poster: String,
    pub position: u32,
}

/// Next free id for a new record: one past the largest id in use.
///
/// Ids are unique within a single document, which is the only scope the
/// service ever works with.
pub fn next_movie_id(records: &[MovieRecord]) -> MovieId {
    records.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: MovieId) -> MovieRecord {
        MovieRecord {
            id,
            title: format!("Movie {id}"),
            rating: "8.0".to_string(),
            year: 2000,
            budget: 1_000_000.0,
            gross: 2_000_000.0,
            poster: "https://example.com/poster.jpg".to_string(),
            position: 1,
        }
    }

    #[test]
    fn test_next_movie_id_empty_collection() {
        assert_eq!(next_movie_id(&[]), 1);
    }

    #[test]
    fn test_next_movie_id_skips_past_largest() {
        let records = vec![record(3), record(7), record(2)];
        assert_eq!(next_movie_id(&records), 8);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let original = record(42);
        let json = serde_json::to_string(&original).unwrap();
        let parsed: MovieRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
