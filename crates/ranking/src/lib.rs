//! # Ranking Crate
//!
//! Pure position-maintenance logic for the ranked movie list. Given the
//! current collection and a requested insert, move, or delete, these
//! functions compute the resulting collection with positions kept dense
//! and ordered `1..=N`.
//!
//! No I/O happens here; the server loads the collection from the catalog
//! store, applies one operation, and saves the result.
//!
//! ## Example Usage
//!
//! ```ignore
//! use ranking::{insert, remove};
//!
//! let (records, assigned) = insert(records, new_record);
//! let (records, removed) = remove(records, movie_id)?;
//! ```

// Public modules
pub mod placement;

// Re-export for convenience
pub use placement::{RankError, insert, relocate, remove, sort_by_position};
