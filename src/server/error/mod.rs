//! Error types for the Holocron server application.
//!
//! This module provides an error handling system with specialized error types for
//! different domains (configuration, favorite management). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod config;
pub mod favorite;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, favorite::FavoriteError},
};

/// Main error type for the Holocron server application.
///
/// This enum aggregates all domain-specific error types and external library errors into
/// a single unified error type. It uses `thiserror`'s `#[from]` attribute to enable
/// automatic conversion from underlying error types via the `?` operator. The
/// `IntoResponse` implementation maps errors to appropriate HTTP responses for API
/// consumers.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Favorite errors (missing users or catalog entries, duplicate or absent favorites)
/// - Database errors (query failures, connection issues, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Favorite management error (missing records, duplicate or absent favorites).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error
/// responses. Favorite errors carry their own response mappings, while everything
/// else is treated as an internal server error (500) with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::FavoriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error
/// response.
///
/// This struct logs the error message and returns a generic "Internal server error"
/// message to the client to avoid leaking implementation details. Used as a fallback
/// for errors that don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to
/// the client to avoid exposing internal implementation details or sensitive
/// information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
