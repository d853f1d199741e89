//! Handlers for the `/movies` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movies_core::types::DbId;
use movies_db::models::movie::MovieDto;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Unwrap a path id, turning extractor failures into JSON 400s.
fn movie_id(path: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwrap a JSON body, turning extractor failures into JSON 400s.
fn movie_body(body: Result<Json<MovieDto>, JsonRejection>) -> AppResult<MovieDto> {
    body.map(|Json(input)| input)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// GET /v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MovieDto>> {
    let id = movie_id(path)?;
    tracing::debug!(movie_id = id, "Getting movie");
    let movie = state.movies.get(id).await?;
    Ok(Json(movie))
}

/// GET /v1/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieDto>>> {
    tracing::debug!("Getting all movies");
    let movies = state.movies.list().await?;
    Ok(Json(movies))
}

/// POST /v1/movies
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<MovieDto>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = movie_body(body)?;
    let created = state.movies.add(input).await?;
    Ok((StatusCode::CREATED, [(LOCATION, created.location)]))
}

/// PUT /v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<MovieDto>, JsonRejection>,
) -> AppResult<StatusCode> {
    let id = movie_id(path)?;
    let input = movie_body(body)?;
    state.movies.update(id, input).await?;
    Ok(StatusCode::OK)
}

/// DELETE /v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = movie_id(path)?;
    state.movies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
