//! Tests for the remove_favorite_person endpoint.
//!
//! This module verifies the remove_favorite_person endpoint's behavior,
//! including removing an existing favorite, the not-found responses for
//! favorites and people that do not exist, and error handling for database
//! issues.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::favorite::remove_favorite_person;

use super::*;

/// Tests successful removal of an existing person favorite.
///
/// Verifies that the remove_favorite_person endpoint returns a 200 OK response
/// with a confirmation message naming the removed person.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_with_existing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_user("luke_skywalker")
        .with_mock_person(1)
        .with_favorite_character(1, 1)
        .build()
        .await?;

    let result = remove_favorite_person(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await?;
    assert_eq!(body["message"], "Person Test Person 1 removed from favorites");

    Ok(())
}

/// Tests 404 response when the person is not in the user's favorites.
///
/// Verifies that the remove_favorite_person endpoint rejects removal of a
/// person the current user never favorited.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_when_not_favorited() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_user("luke_skywalker")
        .with_mock_person(1)
        .build()
        .await?;

    let result = remove_favorite_person(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = response_json(resp).await?;
    assert_eq!(body["message"], "Person not in favorites");

    Ok(())
}

/// Tests 404 response when the person does not exist.
///
/// Verifies that the remove_favorite_person endpoint rejects removal for a
/// person id with no catalog record.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_when_person_missing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_user("luke_skywalker")
        .build()
        .await?;

    let result = remove_favorite_person(State(test.into_app_state()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = response_json(resp).await?;
    assert_eq!(body["error"], "Person not found");

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that the remove_favorite_person endpoint returns a 500 INTERNAL
/// SERVER ERROR response when the favorite tables do not exist.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = remove_favorite_person(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
