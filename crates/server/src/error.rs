//! Request-boundary error taxonomy and its mapping to HTTP responses.
//!
//! Every handler returns `Result<_, ApiError>`; nothing is retried and no
//! error is fatal to the process. Internal failures are logged with their
//! detail and collapsed to a generic message for the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::{CatalogError, MovieId};
use kinopoisk::ProviderError;
use ranking::RankError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or invalid request field
    #[error("{0}")]
    Validation(String),

    /// No record with the requested id
    #[error("No movie with id {0}")]
    NotFound(MovieId),

    /// The movie document could not be read or written
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The external provider fetch failed
    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

impl From<RankError> for ApiError {
    fn from(err: RankError) -> Self {
        match err {
            RankError::UnknownId(id) => ApiError::NotFound(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Movie with id {id} not found."),
            )
                .into_response(),
            ApiError::Catalog(err) => {
                error!("Catalog failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to access the movie document.",
                )
                    .into_response()
            }
            ApiError::Upstream(err) => {
                error!("Provider fetch failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch movies from the provider.",
                )
                    .into_response()
            }
        }
    }
}
