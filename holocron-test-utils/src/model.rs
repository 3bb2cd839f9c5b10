//! Database model type aliases for test utilities.
//!
//! This module provides convenient type aliases for the SeaORM entity models used
//! throughout the test utilities and the factories they return.

/// Type alias for blog user database model.
pub type UserModel = entity::user::Model;

/// Type alias for Star Wars character database model.
pub type PersonModel = entity::person::Model;

/// Type alias for Star Wars planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for blog post database model.
pub type PostModel = entity::post::Model;

/// Type alias for user favorite planet association model.
pub type FavoritePlanetModel = entity::favorite_planet::Model;

/// Type alias for user favorite character association model.
pub type FavoriteCharacterModel = entity::favorite_character::Model;
