//! Handlers for the `/filme` resource.

use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use filmes_core::error::CoreError;
use filmes_core::pagination::{clamp_skip, clamp_take};
use filmes_core::patch::{apply_patch, PatchOperation};
use filmes_core::types::DbId;
use filmes_db::models::movie::{CreateMovie, Movie, MovieResponse, UpdateMovie};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::SkipTakeParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// Load a movie or fail with 404.
async fn ensure_movie_exists(state: &AppState, id: DbId) -> AppResult<Movie> {
    state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Add a new movie.
#[utoipa::path(
    post,
    path = "/filme",
    tag = "filme",
    request_body = CreateMovie,
    responses(
        (status = 201, description = "Movie created", body = MovieResponse,
            headers(("location" = String, description = "URL of the new movie"))),
        (status = 422, description = "One or more fields are invalid"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let movie = state.store.create(input.into()).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    let location = format!("/filme/{}", movie.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(MovieResponse::from(movie)),
    ))
}

/// List movies in id order, windowed by `skip` and `take`.
#[utoipa::path(
    get,
    path = "/filme",
    tag = "filme",
    params(SkipTakeParams),
    responses(
        (status = 200, description = "Page of movies", body = [MovieResponse]),
        (status = 400, description = "Non-numeric skip or take"),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SkipTakeParams>,
) -> AppResult<Json<Vec<MovieResponse>>> {
    let skip = clamp_skip(params.skip);
    let take = clamp_take(params.take, state.config.max_page_size);

    let movies = state.store.list(skip, take).await?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

/// Fetch a single movie.
#[utoipa::path(
    get,
    path = "/filme/{id}",
    tag = "filme",
    params(("id" = i64, Path, description = "Movie id")),
    responses(
        (status = 200, description = "The movie", body = MovieResponse),
        (status = 404, description = "No movie with this id"),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieResponse>> {
    let movie = ensure_movie_exists(&state, id).await?;
    Ok(Json(MovieResponse::from(movie)))
}

/// Replace every mutable field with the submitted values.
#[utoipa::path(
    put,
    path = "/filme/{id}",
    tag = "filme",
    params(("id" = i64, Path, description = "Movie id")),
    request_body = UpdateMovie,
    responses(
        (status = 204, description = "Movie replaced"),
        (status = 404, description = "No movie with this id"),
        (status = 422, description = "One or more fields are invalid"),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<StatusCode> {
    input.validate()?;

    state
        .store
        .update(id, input.into())
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = id, "Movie updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Apply a JSON Patch document to a movie.
///
/// The patch runs against a copy of the current fields, which is written back
/// only if every operation succeeded and the result validates.
#[utoipa::path(
    patch,
    path = "/filme/{id}",
    tag = "filme",
    params(("id" = i64, Path, description = "Movie id")),
    request_body = [PatchOperation],
    responses(
        (status = 204, description = "Patch applied"),
        (status = 404, description = "No movie with this id"),
        (status = 422, description = "An operation failed or the result is invalid"),
    )
)]
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(operations): Json<Vec<PatchOperation>>,
) -> AppResult<StatusCode> {
    let movie = ensure_movie_exists(&state, id).await?;

    let mut view = UpdateMovie::from(&movie);
    apply_patch(&mut view, &operations)?;
    view.validate()?;

    state
        .store
        .update(id, view.into())
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = id, operations = operations.len(), "Movie patched");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a movie.
#[utoipa::path(
    delete,
    path = "/filme/{id}",
    tag = "filme",
    params(("id" = i64, Path, description = "Movie id")),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "No movie with this id"),
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = state.store.delete(id).await?;
    if deleted {
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
