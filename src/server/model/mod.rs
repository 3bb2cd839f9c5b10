//! Server-side application models.
//!
//! This module contains types that exist only on the server side, such as the shared
//! application state handed to Axum handlers. API-facing data transfer objects live
//! in the crate-level model module instead.

pub mod app;
