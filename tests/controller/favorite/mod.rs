//! Tests for favorite controller endpoints.
//!
//! This module contains integration tests for the favorite management HTTP
//! endpoints, covering adding and removing planet and person favorites for
//! the current user.

mod remove_favorite_person;

use super::*;
