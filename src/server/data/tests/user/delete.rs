//! Tests for UserRepository::delete method.
//!
//! This module verifies user deletion, the reported row count for missing users,
//! and the cascading removal of dependent posts and favorites.

use sea_orm::EntityTrait;

use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok with rows_affected of 1
#[tokio::test]
async fn deletes_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_mock_user("luke_skywalker")
        .build()
        .await?;

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo.delete(1).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().rows_affected, 1);

    let remaining = user_repo.get_all().await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests deleting a user ID that does not exist.
///
/// Expected: Ok with rows_affected of 0
#[tokio::test]
async fn reports_zero_rows_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await?;

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo.delete(1).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().rows_affected, 0);

    Ok(())
}

/// Tests that deleting a user removes their posts and favorites.
///
/// Verifies that the cascading foreign keys clean up every row owned by the
/// deleted user while leaving the referenced catalog entries in place.
///
/// Expected: Ok with no favorite or post rows remaining
#[tokio::test]
async fn cascades_to_posts_and_favorites() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_blog_tables()
        .with_mock_person(1)
        .with_mock_planet(1)
        .with_mock_user("luke_skywalker")
        .with_favorite_planet(1, 1)
        .with_favorite_character(1, 1)
        .build()
        .await?;
    test.user().insert_post(1, "Binary Sunset").await?;

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo.delete(1).await?;
    assert_eq!(result.rows_affected, 1);

    let favorite_planets = entity::prelude::FavoritePlanet::find().all(&test.db).await?;
    assert!(favorite_planets.is_empty());

    let favorite_characters = entity::prelude::FavoriteCharacter::find()
        .all(&test.db)
        .await?;
    assert!(favorite_characters.is_empty());

    let posts = entity::prelude::Post::find().all(&test.db).await?;
    assert!(posts.is_empty());

    // Catalog entries survive the cascade
    let planets = entity::prelude::Planet::find().all(&test.db).await?;
    assert_eq!(planets.len(), 1);

    Ok(())
}
