//! Tests for the database seeder.
//!
//! This module runs the real migrations and the seeder against an in-memory
//! database, then checks that the example dataset lands intact, resolves
//! through the favorite service, and supports favoriting through the
//! endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::{
    controller::favorite::add_favorite_planet, seed::seed_database,
    service::favorite::FavoriteService,
};
use holocron_test_utils::prelude::*;
use migration::{Migrator, MigratorTrait};
use sea_orm::EntityTrait;

use crate::util::{response_json, TestContextExt};

/// Tests that the seeder inserts the full example dataset.
///
/// Verifies the record counts and a few representative values for each seeded
/// table.
///
/// Expected: Ok with one user, three planets, four people, and four favorites
#[tokio::test]
async fn seeds_example_dataset() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    Migrator::fresh(&test.db).await?;

    let result = seed_database(&test.db).await;
    assert!(result.is_ok(), "Error: {:?}", result);

    let users = entity::prelude::User::find().all(&test.db).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "luke_skywalker");

    let planets = entity::prelude::Planet::find().all(&test.db).await?;
    assert_eq!(planets.len(), 3);
    assert_eq!(planets[0].name, "Tatooine");

    let people = entity::prelude::Person::find().all(&test.db).await?;
    assert_eq!(people.len(), 4);
    assert_eq!(people[3].name, "Darth Vader");

    let favorite_planets = entity::prelude::FavoritePlanet::find().all(&test.db).await?;
    assert_eq!(favorite_planets.len(), 2);

    let favorite_characters = entity::prelude::FavoriteCharacter::find()
        .all(&test.db)
        .await?;
    assert_eq!(favorite_characters.len(), 2);

    Ok(())
}

/// Tests that seeded favorites resolve through the favorite service.
///
/// Verifies that the seeded user's favorites list the expected planets and
/// characters by name.
///
/// Expected: Ok with Tatooine and Hoth favorited alongside Leia and Han
#[tokio::test]
async fn seeded_favorites_resolve_through_service() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    Migrator::fresh(&test.db).await?;

    let result = seed_database(&test.db).await;
    assert!(result.is_ok(), "Error: {:?}", result);

    let favorite_service = FavoriteService::new(&test.db);
    let favorites = favorite_service.get_favorites(1).await;
    assert!(favorites.is_ok(), "Error: {:?}", favorites);

    let favorites = favorites.unwrap();
    assert_eq!(favorites.user_id, 1);

    let planet_names: Vec<&str> = favorites
        .favorite_planets
        .iter()
        .map(|planet| planet.name.as_str())
        .collect();
    assert_eq!(planet_names, vec!["Tatooine", "Hoth"]);

    let character_names: Vec<&str> = favorites
        .favorite_characters
        .iter()
        .map(|person| person.name.as_str())
        .collect();
    assert_eq!(character_names, vec!["Leia Organa", "Han Solo"]);

    Ok(())
}

/// Tests favoriting an unfavorited seeded planet through the endpoint.
///
/// Verifies that Alderaan, seeded without a favorite, can be added once and
/// that repeating the request reports the conflict.
///
/// Expected: 201 CREATED then 409 CONFLICT
#[tokio::test]
async fn seeded_catalog_accepts_new_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    Migrator::fresh(&test.db).await?;

    let result = seed_database(&test.db).await;
    assert!(result.is_ok(), "Error: {:?}", result);

    let result = add_favorite_planet(State(test.into_app_state()), Path(2)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = response_json(resp).await?;
    assert_eq!(body["message"], "Planet Alderaan added to favorites");

    let result = add_favorite_planet(State(test.into_app_state()), Path(2)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body = response_json(resp).await?;
    assert_eq!(body["message"], "Planet already in favorites");

    Ok(())
}
