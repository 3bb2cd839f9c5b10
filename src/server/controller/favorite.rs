use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{error::Error, model::app::AppState, service::favorite::FavoriteService},
};

/// OpenAPI tag for favorite management routes.
pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet to favorite")
    ),
    responses(
        (status = 201, description = "Planet added to favorites", body = MessageDto),
        (status = 404, description = "Current user or planet not found", body = ErrorDto),
        (status = 409, description = "Planet already in favorites", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let planet = favorite_service
        .add_planet(state.current_user_id, planet_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(MessageDto {
            message: format!("Planet {} added to favorites", planet.name),
        }),
    )
        .into_response())
}

/// Remove a planet from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet to unfavorite")
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 404, description = "Current user or planet not found, or planet not in favorites", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let planet = favorite_service
        .remove_planet(state.current_user_id, planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: format!("Planet {} removed from favorites", planet.name),
        }),
    )
        .into_response())
}

/// Add a person to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the person to favorite")
    ),
    responses(
        (status = 201, description = "Person added to favorites", body = MessageDto),
        (status = 404, description = "Current user or person not found", body = ErrorDto),
        (status = 409, description = "Person already in favorites", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let person = favorite_service
        .add_person(state.current_user_id, people_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(MessageDto {
            message: format!("Person {} added to favorites", person.name),
        }),
    )
        .into_response())
}

/// Remove a person from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the person to unfavorite")
    ),
    responses(
        (status = 200, description = "Person removed from favorites", body = MessageDto),
        (status = 404, description = "Current user or person not found, or person not in favorites", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let person = favorite_service
        .remove_person(state.current_user_id, people_id)
        .await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: format!("Person {} removed from favorites", person.name),
        }),
    )
        .into_response())
}
