//! Factory functions for generating mock user database models.
//!
//! Provides pure functions for creating user database models with standard test
//! values. These are in-memory model instances that don't require database
//! interaction, suitable for unit tests.

use chrono::Utc;

use crate::{
    constant::{TEST_EMAIL_DOMAIN, TEST_PASSWORD},
    model::UserModel,
};

/// Create a mock user database model for testing.
///
/// Returns a UserModel with credentials derived from the username. This creates an
/// in-memory model instance without database interaction, suitable for unit tests.
///
/// # Arguments
/// - `user_id` - The user record id
/// - `username` - Unique username for the user
///
/// # Returns
/// - `UserModel` - A user model with test data
pub fn mock_user_model(user_id: i32, username: &str) -> UserModel {
    UserModel {
        id: user_id,
        username: username.to_string(),
        email: format!("{username}@{TEST_EMAIL_DOMAIN}"),
        password: TEST_PASSWORD.to_string(),
        first_name: None,
        last_name: None,
        joined_at: Utc::now().naive_utc(),
    }
}
