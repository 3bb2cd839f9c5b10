//! Tests for FavoriteCharacterRepository::delete method.
//!
//! This module verifies favorite removal by (user, person) pair and the reported
//! row count when the pair is absent.

use super::*;

/// Tests removing an existing favorite.
///
/// Expected: Ok with rows_affected of 1 and the association gone
#[tokio::test]
async fn deletes_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_person(1)
        .with_mock_user("luke_skywalker")
        .with_favorite_character(1, 1)
        .build()
        .await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.delete(1, 1).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().rows_affected, 1);

    let remaining = favorite_repo.get_people_by_user_id(1).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests removing a favorite pair that does not exist.
///
/// Expected: Ok with rows_affected of 0
#[tokio::test]
async fn reports_zero_rows_for_missing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_person(1)
        .with_mock_user("luke_skywalker")
        .build()
        .await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.delete(1, 1).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().rows_affected, 0);

    Ok(())
}
