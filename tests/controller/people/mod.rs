//! Tests for people controller endpoints.
//!
//! This module contains integration tests for the people catalog HTTP endpoints,
//! covering the full catalog listing and single person lookup.

mod get_people;

use super::*;
