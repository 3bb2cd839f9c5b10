//! Favorite association repositories.
//!
//! This module contains repositories for the user favorite associations. Each
//! favorite kind (characters, planets) is stored in a single association table
//! whose composite primary key doubles as the uniqueness guarantee, and each
//! repository exposes both navigation directions over that table.

pub mod character;
pub mod planet;
