//! HTTP controller endpoints for the Holocron web API.
//!
//! This module contains Axum handlers for catalog browsing, user listing, and
//! favorite management. Controllers handle HTTP requests, interact with
//! repositories and services, and return appropriate HTTP responses. They use
//! utoipa for OpenAPI documentation.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
