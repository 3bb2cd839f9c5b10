pub use super::favorite_character::Entity as FavoriteCharacter;
pub use super::favorite_planet::Entity as FavoritePlanet;
pub use super::person::Entity as Person;
pub use super::planet::Entity as Planet;
pub use super::post::Entity as Post;
pub use super::user::Entity as User;
