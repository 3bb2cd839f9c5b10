//! Tests for PlanetRepository::get_by_id method.
//!
//! This module verifies single-planet lookup by catalog ID.

use super::*;

/// Tests looking up an existing planet.
///
/// Expected: Ok(Some(planet)) with matching catalog data
#[tokio::test]
async fn returns_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .with_mock_planet(1)
        .build()
        .await?;

    let planet_repo = PlanetRepository::new(&test.db);
    let result = planet_repo.get_by_id(1).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let maybe_planet = result.unwrap();
    assert!(maybe_planet.is_some());

    let planet = maybe_planet.unwrap();
    assert_eq!(planet.id, 1);
    assert_eq!(planet.name, "Test Planet 1");

    Ok(())
}

/// Tests looking up a planet ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .with_mock_planet(1)
        .build()
        .await?;

    let planet_repo = PlanetRepository::new(&test.db);
    let result = planet_repo.get_by_id(99).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
