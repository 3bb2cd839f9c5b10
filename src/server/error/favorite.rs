use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, MessageDto};

/// Errors raised while managing a user's favorites.
///
/// Missing records map to 404 responses and duplicate favorites map to 409, so
/// handlers can bubble these up with `?` and still produce the right status code
/// and body for the client.
#[derive(Error, Debug)]
pub enum FavoriteError {
    /// The configured current user has no matching database record.
    #[error("Current user ID {0} not found in database")]
    UserNotFound(i32),
    /// The planet being favorited or unfavorited does not exist.
    #[error("Planet ID {0} not found in database")]
    PlanetNotFound(i32),
    /// The person being favorited or unfavorited does not exist.
    #[error("Person ID {0} not found in database")]
    PersonNotFound(i32),
    /// The user already has this planet in their favorites.
    #[error("Planet ID {planet_id} is already a favorite of user ID {user_id}")]
    PlanetAlreadyFavorite {
        /// ID of the user the favorite belongs to.
        user_id: i32,
        /// ID of the planet that was already favorited.
        planet_id: i32,
    },
    /// The user already has this person in their favorites.
    #[error("Person ID {person_id} is already a favorite of user ID {user_id}")]
    PersonAlreadyFavorite {
        /// ID of the user the favorite belongs to.
        user_id: i32,
        /// ID of the person that was already favorited.
        person_id: i32,
    },
    /// The user does not have this planet in their favorites.
    #[error("Planet ID {planet_id} is not a favorite of user ID {user_id}")]
    PlanetNotFavorite {
        /// ID of the user the favorite was looked up for.
        user_id: i32,
        /// ID of the planet that was not favorited.
        planet_id: i32,
    },
    /// The user does not have this person in their favorites.
    #[error("Person ID {person_id} is not a favorite of user ID {user_id}")]
    PersonNotFavorite {
        /// ID of the user the favorite was looked up for.
        user_id: i32,
        /// ID of the person that was not favorited.
        person_id: i32,
    },
}

impl FavoriteError {
    fn not_found(error: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: error.to_string(),
            }),
        )
            .into_response()
    }

    fn favorite_status(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(MessageDto {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotFound(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::not_found("Current user not found")
            }
            Self::PlanetNotFound(planet_id) => {
                tracing::debug!(planet_id = %planet_id, "{}", self);

                Self::not_found("Planet not found")
            }
            Self::PersonNotFound(person_id) => {
                tracing::debug!(person_id = %person_id, "{}", self);

                Self::not_found("Person not found")
            }
            Self::PlanetAlreadyFavorite { user_id, planet_id } => {
                tracing::debug!(user_id = %user_id, planet_id = %planet_id, "{}", self);

                Self::favorite_status(StatusCode::CONFLICT, "Planet already in favorites")
            }
            Self::PersonAlreadyFavorite { user_id, person_id } => {
                tracing::debug!(user_id = %user_id, person_id = %person_id, "{}", self);

                Self::favorite_status(StatusCode::CONFLICT, "Person already in favorites")
            }
            Self::PlanetNotFavorite { user_id, planet_id } => {
                tracing::debug!(user_id = %user_id, planet_id = %planet_id, "{}", self);

                Self::favorite_status(StatusCode::NOT_FOUND, "Planet not in favorites")
            }
            Self::PersonNotFavorite { user_id, person_id } => {
                tracing::debug!(user_id = %user_id, person_id = %person_id, "{}", self);

                Self::favorite_status(StatusCode::NOT_FOUND, "Person not in favorites")
            }
        }
    }
}
