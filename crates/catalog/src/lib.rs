//! # Catalog Crate
//!
//! This crate owns the persisted movie document: the domain types and the
//! storage abstraction the rest of the workspace goes through.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, MovieId)
//! - **store**: The FilmStore trait plus the JSON-file and in-memory implementations
//! - **error**: Error types for loading and saving the document
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{FilmStore, JsonFileStore};
//!
//! let store = JsonFileStore::new("top250.json");
//! let movies = store.load()?;
//! println!("{} movies on file", movies.len());
//! store.save(&movies)?;
//! ```

// Public modules
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use store::{FilmStore, JsonFileStore, MemoryStore};
pub use types::{MovieId, MovieRecord, next_movie_id};
