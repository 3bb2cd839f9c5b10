use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response describing the outcome of a favorite mutation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// The outcome message
    pub message: String,
}
