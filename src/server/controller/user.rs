use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        user::{UserDto, UserFavoritesDto},
    },
    server::{
        data::user::UserRepository, error::Error, model::app::AppState,
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag for user routes.
pub static USER_TAG: &str = "users";

/// Get all registered users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving all users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let users = user_repository.get_all().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, axum::Json(user_dtos)).into_response())
}

/// Get everything the current user has favorited
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving the current user's favorites", body = UserFavoritesDto),
        (status = 404, description = "Current user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.get_favorites(state.current_user_id).await?;

    Ok((StatusCode::OK, axum::Json(favorites)).into_response())
}
