pub mod prelude;

pub mod favorite_character;
pub mod favorite_planet;
pub mod person;
pub mod planet;
pub mod post;
pub mod user;
