//! Tests for planet controller endpoints.
//!
//! This module contains integration tests for the planet catalog HTTP endpoints,
//! covering the full catalog listing and single planet lookup.


use super::*;
