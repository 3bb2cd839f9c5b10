//! Tests for FavoriteCharacterRepository::get_users_by_person_id method.
//!
//! This module verifies the reverse navigation over the association table, from
//! a person to the users that favorited them.

use super::*;

/// Tests retrieving the users that favorited a person.
///
/// Expected: Ok with only the users that favorited them, ordered by user ID
#[tokio::test]
async fn returns_users_that_favorited() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_person(1)
        .with_mock_person(2)
        .with_mock_user("luke_skywalker")
        .with_mock_user("leia_organa")
        .with_favorite_character(1, 1)
        .with_favorite_character(2, 1)
        .build()
        .await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let users = favorite_repo.get_users_by_person_id(1).await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "luke_skywalker");
    assert_eq!(users[1].username, "leia_organa");

    Ok(())
}

/// Tests retrieving users for a person nobody favorited.
///
/// Expected: Ok with an empty Vec
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_person(1)
        .with_mock_user("luke_skywalker")
        .build()
        .await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let users = favorite_repo.get_users_by_person_id(1).await?;

    assert!(users.is_empty());

    Ok(())
}
