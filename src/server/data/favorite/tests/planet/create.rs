//! Tests for FavoritePlanetRepository::create method.
//!
//! This module verifies favorite creation behavior, including the composite
//! primary key rejecting duplicate pairs and the foreign keys rejecting links
//! to missing users or planets.

use sea_orm::{DbErr, RuntimeErr};

use super::*;

/// Tests favoriting a planet for an existing user.
///
/// Expected: Ok with matching user and planet IDs
#[tokio::test]
async fn creates_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_planet(1)
        .with_mock_user("luke_skywalker")
        .build()
        .await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    let result = favorite_repo.create(1, 1).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let favorite = result.unwrap();
    assert_eq!(favorite.user_id, 1);
    assert_eq!(favorite.planet_id, 1);

    Ok(())
}

/// Tests favoriting the same planet twice for one user.
///
/// Verifies that the composite primary key on (user_id, planet_id) rejects the
/// second insert at the database level, with no prior existence check needed.
///
/// Expected: Err with SQLite primary key constraint code 1555
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_planet(1)
        .with_mock_user("luke_skywalker")
        .build()
        .await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    favorite_repo.create(1, 1).await?;
    let result = favorite_repo.create(1, 1).await;

    assert!(result.is_err());

    // Assert error code is 1555 indicating a primary key constraint error
    assert!(matches!(
        result,
        Err(DbErr::Query(RuntimeErr::SqlxError(err))) if err
            .as_database_error()
            .and_then(|d| d.code().map(|c| c == "1555"))
            .unwrap_or(false)
    ));

    Ok(())
}

/// Tests that the same planet can be favorited by two different users.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_planet_for_different_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_planet(1)
        .with_mock_user("luke_skywalker")
        .with_mock_user("leia_organa")
        .build()
        .await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    favorite_repo.create(1, 1).await?;
    let result = favorite_repo.create(2, 1).await;

    assert!(result.is_ok(), "Error: {:?}", result);

    Ok(())
}

/// Tests favoriting a planet for a user that does not exist.
///
/// Expected: Err with SQLite foreign key constraint code 787
#[tokio::test]
async fn rejects_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_planet(1)
        .build()
        .await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    let result = favorite_repo.create(1, 1).await;

    assert!(result.is_err());

    // Assert error code is 787 indicating a foreign key constraint error
    assert!(matches!(
        result,
        Err(DbErr::Query(RuntimeErr::SqlxError(err))) if err
            .as_database_error()
            .and_then(|d| d.code().map(|c| c == "787"))
            .unwrap_or(false)
    ));

    Ok(())
}

/// Tests favoriting a planet that does not exist.
///
/// Expected: Err with SQLite foreign key constraint code 787
#[tokio::test]
async fn rejects_missing_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_user("luke_skywalker")
        .build()
        .await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    let result = favorite_repo.create(1, 1).await;

    assert!(result.is_err());

    assert!(matches!(
        result,
        Err(DbErr::Query(RuntimeErr::SqlxError(err))) if err
            .as_database_error()
            .and_then(|d| d.code().map(|c| c == "787"))
            .unwrap_or(false)
    ));

    Ok(())
}
