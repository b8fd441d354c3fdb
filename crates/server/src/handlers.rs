//! Endpoint handlers for the films API.
//!
//! Each mutating handler follows the same shape: validate the payload,
//! take the document lock, load the full collection, apply one ranking
//! operation, save the collection back. Payload fields are `Option` and
//! checked by hand so a missing field answers 400 with a readable message
//! instead of the framework's 422 rejection.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use catalog::{MovieId, MovieRecord, next_movie_id};
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request payloads
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct IdPayload {
    pub id: Option<MovieId>,
}

/// Body for `/api/films/create`; every field is required.
#[derive(Debug, Deserialize)]
pub struct CreatePayload {
    pub title: Option<String>,
    pub rating: Option<String>,
    pub year: Option<i64>,
    pub budget: Option<f64>,
    pub gross: Option<f64>,
    pub poster: Option<String>,
    pub position: Option<i64>,
}

/// Body for `/api/films/update`; only `id` is required.
#[derive(Debug, Deserialize)]
pub struct UpdatePayload {
    pub id: Option<MovieId>,
    pub title: Option<String>,
    pub rating: Option<String>,
    pub year: Option<i64>,
    pub budget: Option<f64>,
    pub gross: Option<f64>,
    pub poster: Option<String>,
    pub position: Option<i64>,
}

// ============================================================================
// Field validation
// ============================================================================

fn require<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::Validation(format!("Missing required field: {field}.")))
}

/// Cinema was introduced in 1895; earlier years are rejected.
fn validate_year(year: i64) -> Result<u16, ApiError> {
    if year < 1895 {
        return Err(ApiError::Validation(
            "A movie cannot predate 1895, the year cinema was introduced.".to_string(),
        ));
    }
    u16::try_from(year).map_err(|_| ApiError::Validation(format!("Year {year} is out of range.")))
}

fn validate_money(field: &str, value: f64) -> Result<f64, ApiError> {
    if value < 0.0 {
        return Err(ApiError::Validation(format!("{field} cannot be negative.")));
    }
    Ok(value)
}

/// Requested rank as sent by the client. Anything at or below zero means
/// the head of the list; the ranking clamp bounds the other end.
fn desired_position(raw: i64) -> u32 {
    raw.clamp(1, i64::from(u32::MAX)) as u32
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /fetch-top250 - overwrite the document with the provider's list.
pub async fn fetch_top250(State(state): State<AppState>) -> Result<String, ApiError> {
    let mut records = state.provider.fetch_top250().await?;
    ranking::sort_by_position(&mut records);

    let _guard = state.document_lock.lock().await;
    state.store.save(&records)?;

    info!("Refreshed movie document with {} entries", records.len());
    Ok(format!("Fetched {} movies into the document.", records.len()))
}

/// GET /api/films/readall - the whole collection, sorted by position.
pub async fn read_all_films(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieRecord>>, ApiError> {
    let _guard = state.document_lock.lock().await;
    let mut records = state.store.load()?;
    ranking::sort_by_position(&mut records);
    Ok(Json(records))
}

/// GET /api/films/read - one record by id.
pub async fn read_film(
    State(state): State<AppState>,
    Json(payload): Json<IdPayload>,
) -> Result<Json<MovieRecord>, ApiError> {
    let id = require(payload.id, "id")?;

    let _guard = state.document_lock.lock().await;
    let records = state.store.load()?;

    let record = records
        .into_iter()
        .find(|r| r.id == id)
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(record))
}

/// POST /api/films/create - add a record at its requested rank.
pub async fn create_film(
    State(state): State<AppState>,
    Json(payload): Json<CreatePayload>,
) -> Result<(StatusCode, Json<MovieRecord>), ApiError> {
    let title = require(payload.title, "title")?;
    let rating = require(payload.rating, "rating")?;
    let year = validate_year(require(payload.year, "year")?)?;
    let budget = validate_money("budget", require(payload.budget, "budget")?)?;
    let gross = validate_money("gross", require(payload.gross, "gross")?)?;
    let poster = require(payload.poster, "poster")?;
    let position = desired_position(require(payload.position, "position")?);

    let _guard = state.document_lock.lock().await;
    let records = state.store.load()?;

    let record = MovieRecord {
        id: next_movie_id(&records),
        title,
        rating,
        year,
        budget,
        gross,
        poster,
        position,
    };
    let mut created = record.clone();

    let (records, assigned) = ranking::insert(records, record);
    state.store.save(&records)?;
    created.position = assigned;

    info!(id = created.id, position = assigned, "Created movie");
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/films/update - change fields and/or move a record.
pub async fn update_film(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePayload>,
) -> Result<Json<MovieRecord>, ApiError> {
    let id = require(payload.id, "id")?;
    let year = payload.year.map(validate_year).transpose()?;
    let budget = payload
        .budget
        .map(|value| validate_money("budget", value))
        .transpose()?;
    let gross = payload
        .gross
        .map(|value| validate_money("gross", value))
        .transpose()?;

    let _guard = state.document_lock.lock().await;
    let mut records = state.store.load()?;

    let record = records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(ApiError::NotFound(id))?;
    if let Some(title) = payload.title {
        record.title = title;
    }
    if let Some(rating) = payload.rating {
        record.rating = rating;
    }
    if let Some(year) = year {
        record.year = year;
    }
    if let Some(budget) = budget {
        record.budget = budget;
    }
    if let Some(gross) = gross {
        record.gross = gross;
    }
    if let Some(poster) = payload.poster {
        record.poster = poster;
    }

    let records = match payload.position {
        Some(raw) => ranking::relocate(records, id, desired_position(raw))?.0,
        None => records,
    };

    state.store.save(&records)?;

    let updated = records
        .into_iter()
        .find(|r| r.id == id)
        .ok_or(ApiError::NotFound(id))?;
    info!(id, position = updated.position, "Updated movie");
    Ok(Json(updated))
}

/// POST /api/films/delete - remove a record and close the gap.
pub async fn delete_film(
    State(state): State<AppState>,
    Json(payload): Json<IdPayload>,
) -> Result<String, ApiError> {
    let id = require(payload.id, "id")?;

    let _guard = state.document_lock.lock().await;
    let records = state.store.load()?;

    let (records, removed) = ranking::remove(records, id)?;
    state.store.save(&records)?;

    info!(id, position = removed.position, "Deleted movie");
    Ok(format!("Movie with id {id} deleted."))
}
