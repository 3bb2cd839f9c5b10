use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while reading configuration from the environment.
///
/// Every configuration variable has a default, so the only failure mode is a value
/// that is present but cannot be parsed into the expected type.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable was set to a value that failed to parse.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending environment variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
