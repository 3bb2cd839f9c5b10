//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (catalog entries, users, and favorites).

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
