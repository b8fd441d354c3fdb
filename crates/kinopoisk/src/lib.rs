//! # Kinopoisk Client
//!
//! Client for the external movie-data provider. One call fetches the
//! provider's top-250 list and maps each document into a [`MovieRecord`],
//! ready to overwrite the local store wholesale.
//!
//! The provider nests the interesting fields (`rating.kp`, `budget.value`,
//! `fees.world.value`, `poster.url`); the mapping flattens them and formats
//! the rating to one decimal place. The request asks the provider to filter
//! out documents with null rank, budget, or gross, so a document that still
//! arrives incomplete is skipped with a warning rather than failing the
//! whole refresh.
//!
//! ## Example Usage
//!
//! ```ignore
//! use kinopoisk::KinopoiskClient;
//!
//! let client = KinopoiskClient::new("https://api.kinopoisk.dev", api_key);
//! let movies = client.fetch_top250().await?;
//! ```

use catalog::MovieRecord;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// Errors from talking to the movie-data provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Request failed, the provider answered with an error status, or the
    /// response body was not the expected JSON
    #[error("Provider request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ProviderError>;

const TOP250_PATH: &str = "/v1.4/movie";

/// Query for the top-250 list: rank, budget, and worldwide gross must all
/// be present, sorted by rank ascending.
const TOP250_QUERY: &[(&str, &str)] = &[
    ("page", "1"),
    ("limit", "250"),
    ("selectFields", "id"),
    ("selectFields", "name"),
    ("selectFields", "rating"),
    ("selectFields", "year"),
    ("selectFields", "budget"),
    ("selectFields", "fees"),
    ("selectFields", "poster"),
    ("selectFields", "top250"),
    ("notNullFields", "top250"),
    ("notNullFields", "budget.value"),
    ("notNullFields", "fees.world.value"),
    ("sortField", "top250"),
    ("sortType", "1"),
    ("lists", "top250"),
];

// ============================================================================
// Provider response shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct MovieListResponse {
    docs: Vec<MovieDoc>,
}

/// One provider document. Every field is optional on the wire; the mapping
/// decides what is required.
#[derive(Debug, Deserialize)]
struct MovieDoc {
    id: Option<u64>,
    name: Option<String>,
    rating: Option<RatingDoc>,
    year: Option<u16>,
    budget: Option<MoneyDoc>,
    fees: Option<FeesDoc>,
    poster: Option<PosterDoc>,
    top250: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RatingDoc {
    kp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MoneyDoc {
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct FeesDoc {
    world: Option<MoneyDoc>,
}

#[derive(Debug, Deserialize)]
struct PosterDoc {
    url: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the provider's movie API.
#[derive(Clone)]
pub struct KinopoiskClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl KinopoiskClient {
    /// Create a client against `base_url` (no trailing slash).
    ///
    /// `base_url` is a parameter rather than a constant so tests can point
    /// the client at a local mock server.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch the provider's top-250 list as local movie records.
    ///
    /// Positions come from the provider's own rank field, so the returned
    /// list is already ranked; the caller overwrites the store with it.
    pub async fn fetch_top250(&self) -> Result<Vec<MovieRecord>> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, TOP250_PATH))
            .query(TOP250_QUERY)
            .header("accept", "application/json")
            .header("X-API-KEY", &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<MovieListResponse>()
            .await?;

        let total = response.docs.len();
        let records: Vec<MovieRecord> = response
            .docs
            .into_iter()
            .filter_map(|doc| {
                let doc_id = doc.id;
                let record = map_doc(doc);
                if record.is_none() {
                    warn!("Skipping provider document {doc_id:?}: missing required fields");
                }
                record
            })
            .collect();

        info!("Mapped {} of {} provider documents", records.len(), total);
        Ok(records)
    }
}

/// Flatten one provider document into a movie record.
///
/// Returns None when any required field is absent.
fn map_doc(doc: MovieDoc) -> Option<MovieRecord> {
    let rating_kp = doc.rating.and_then(|r| r.kp)?;

    Some(MovieRecord {
        id: doc.id?,
        title: doc.name?,
        rating: format!("{rating_kp:.1}"),
        year: doc.year?,
        budget: doc.budget.and_then(|b| b.value)?,
        gross: doc.fees.and_then(|f| f.world).and_then(|w| w.value)?,
        poster: doc.poster.and_then(|p| p.url)?,
        position: doc.top250?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trimmed-down provider payload with the nesting the mapping relies on
    const SAMPLE_RESPONSE: &str = r#"{
        "docs": [
            {
                "id": 326,
                "name": "The Shawshank Redemption",
                "rating": { "kp": 9.111 },
                "year": 1994,
                "budget": { "value": 25000000 },
                "fees": { "world": { "value": 28418687 } },
                "poster": { "url": "https://example.com/326.jpg" },
                "top250": 1
            },
            {
                "id": 435,
                "name": "The Green Mile",
                "rating": { "kp": 9.07 },
                "year": 1999,
                "budget": { "value": 60000000 },
                "fees": { "world": { "value": 286801374 } },
                "poster": { "url": "https://example.com/435.jpg" },
                "top250": 2
            },
            {
                "id": 999,
                "name": "No Budget Movie",
                "rating": { "kp": 7.5 },
                "year": 2001,
                "fees": { "world": { "value": 1000 } },
                "poster": { "url": "https://example.com/999.jpg" },
                "top250": 3
            }
        ]
    }"#;

    fn parse_sample() -> Vec<MovieDoc> {
        let response: MovieListResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        response.docs
    }

    #[test]
    fn test_mapping_flattens_nested_fields() {
        let docs = parse_sample();
        let record = map_doc(docs.into_iter().next().unwrap()).unwrap();

        assert_eq!(record.id, 326);
        assert_eq!(record.title, "The Shawshank Redemption");
        assert_eq!(record.year, 1994);
        assert_eq!(record.budget, 25_000_000.0);
        assert_eq!(record.gross, 28_418_687.0);
        assert_eq!(record.poster, "https://example.com/326.jpg");
        assert_eq!(record.position, 1);
    }

    #[test]
    fn test_rating_is_formatted_to_one_decimal_place() {
        let docs = parse_sample();
        let records: Vec<MovieRecord> = docs.into_iter().filter_map(map_doc).collect();

        assert_eq!(records[0].rating, "9.1");
        assert_eq!(records[1].rating, "9.1");
    }

    #[test]
    fn test_documents_missing_required_fields_are_skipped() {
        let docs = parse_sample();
        let records: Vec<MovieRecord> = docs.into_iter().filter_map(map_doc).collect();

        // The third document has no budget and must be dropped
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.id != 999));
    }

    #[test]
    fn test_position_comes_from_provider_rank() {
        let docs = parse_sample();
        let records: Vec<MovieRecord> = docs.into_iter().filter_map(map_doc).collect();

        assert_eq!(records[0].position, 1);
        assert_eq!(records[1].position, 2);
    }
}
