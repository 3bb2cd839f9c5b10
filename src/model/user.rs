use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{person::PersonDto, planet::PlanetDto};

/// A blog user as returned by the user endpoints.
///
/// The stored password is intentionally absent from this shape.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub joined_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            joined_at: user.joined_at,
        }
    }
}

/// Everything the current user has favorited, grouped by kind.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    pub user_id: i32,
    pub favorite_planets: Vec<PlanetDto>,
    pub favorite_characters: Vec<PersonDto>,
}
