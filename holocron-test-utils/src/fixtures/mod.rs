//! Test fixture modules for database record creation.
//!
//! This module contains fixture utilities for creating test data during test execution.
//! Each submodule provides specialized fixtures for different aspects of the system:
//!
//! - `catalog` - Star Wars people and planets
//! - `user` - blog users, posts, and favorite associations

pub mod catalog;
pub mod user;
