//! Tests for user controller endpoints.
//!
//! This module contains integration tests for user-related HTTP endpoints,
//! including the user listing and the current user's favorites view.


use super::*;
