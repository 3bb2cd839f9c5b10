//! Tests for FavoriteService methods.
//!
//! This module contains integration tests for the favorite service, covering
//! favorite listing, addition with duplicate detection, and removal for both
//! planets and people.
