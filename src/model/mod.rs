//! Data transfer objects returned by the web API.
//!
//! These models define the JSON shapes of API responses. They are mapped from
//! database entities at the controller and service boundary so storage details
//! never leak into the HTTP surface.

pub mod api;
pub mod person;
pub mod planet;
pub mod user;
