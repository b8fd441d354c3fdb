//! Server crate for the ranked movie list service.
//!
//! This crate wires the catalog store, the ranking logic, and the
//! provider client into the HTTP surface.

use axum::Router;
use axum::routing::{get, post};

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the application router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/fetch-top250", get(handlers::fetch_top250))
        .route("/api/films/readall", get(handlers::read_all_films))
        .route("/api/films/read", get(handlers::read_film))
        .route("/api/films/create", post(handlers::create_film))
        .route("/api/films/update", post(handlers::update_film))
        .route("/api/films/delete", post(handlers::delete_film))
        .with_state(state)
}
