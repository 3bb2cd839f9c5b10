//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response formatting, and error handling for the
//! catalog, user, and favorite endpoints.

mod favorite;
mod people;
mod planet;
mod user;

use holocron_test_utils::prelude::*;

use crate::util::{response_json, TestContextExt};
