//! Tests for the get_people endpoint.
//!
//! This module verifies the get_people endpoint's behavior, including catalog
//! listing with various record counts, response body contents, and error
//! handling for database issues.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::people::get_people;

use super::*;

/// Tests successful response listing every person in the catalog.
///
/// Verifies that the get_people endpoint returns a 200 OK response with all
/// people ordered by id, serialized with their catalog fields.
///
/// Expected: Ok with 200 OK response containing all three people
#[tokio::test]
async fn success_with_all_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_person(1)
        .with_mock_person(2)
        .with_mock_person(3)
        .build()
        .await?;

    let result = get_people(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await?;
    let people = body.as_array().unwrap();
    assert_eq!(people.len(), 3);
    assert_eq!(people[0]["name"], "Test Person 1");
    assert_eq!(people[2]["id"], 3);

    Ok(())
}

/// Tests successful response with an empty catalog.
///
/// Verifies that the get_people endpoint returns a 200 OK response with an
/// empty list when no people exist, rather than an error.
///
/// Expected: Ok with 200 OK response containing an empty list
#[tokio::test]
async fn success_with_empty_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;

    let result = get_people(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await?;
    assert_eq!(body.as_array().unwrap().len(), 0);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that the get_people endpoint returns a 500 INTERNAL SERVER ERROR
/// response when the person table does not exist.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_people(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
