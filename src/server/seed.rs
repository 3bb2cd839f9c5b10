//! Development database seeding.
//!
//! This module populates an empty schema with a small example dataset: one user,
//! three planets, four people, and a handful of favorites for the user. It backs
//! the `seed` binary, which resets the schema before inserting.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        favorite::{character::FavoriteCharacterRepository, planet::FavoritePlanetRepository},
        person::PersonRepository,
        planet::PlanetRepository,
        user::UserRepository,
    },
    error::Error,
};

/// Inserts the example dataset through the application repositories.
///
/// Assumes empty tables; callers reset the schema first (the `seed` binary uses
/// `Migrator::fresh` for this).
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), Error> {
    let user_repo = UserRepository::new(db);
    let person_repo = PersonRepository::new(db);
    let planet_repo = PlanetRepository::new(db);
    let favorite_planet_repo = FavoritePlanetRepository::new(db);
    let favorite_character_repo = FavoriteCharacterRepository::new(db);

    let luke = user_repo
        .create(
            "luke_skywalker".to_string(),
            "luke@tatooine.com".to_string(),
            "secreto".to_string(),
            Some("Luke".to_string()),
            Some("Skywalker".to_string()),
        )
        .await?;

    let tatooine = planet_repo
        .create(
            "Tatooine".to_string(),
            Some("arid".to_string()),
            Some("desert".to_string()),
            Some(200_000),
        )
        .await?;
    planet_repo
        .create(
            "Alderaan".to_string(),
            Some("temperate".to_string()),
            Some("grasslands, mountains".to_string()),
            Some(2_000_000_000),
        )
        .await?;
    let hoth = planet_repo
        .create(
            "Hoth".to_string(),
            Some("frozen".to_string()),
            Some("tundra, ice caves".to_string()),
            Some(0),
        )
        .await?;

    person_repo
        .create(
            "Luke Skywalker".to_string(),
            Some("19BBY".to_string()),
            Some("male".to_string()),
            Some("blue".to_string()),
        )
        .await?;
    let leia = person_repo
        .create(
            "Leia Organa".to_string(),
            Some("19BBY".to_string()),
            Some("female".to_string()),
            Some("brown".to_string()),
        )
        .await?;
    let han = person_repo
        .create(
            "Han Solo".to_string(),
            Some("29BBY".to_string()),
            Some("male".to_string()),
            Some("brown".to_string()),
        )
        .await?;
    person_repo
        .create(
            "Darth Vader".to_string(),
            Some("41.9BBY".to_string()),
            Some("male".to_string()),
            Some("yellow".to_string()),
        )
        .await?;

    favorite_planet_repo.create(luke.id, tatooine.id).await?;
    favorite_planet_repo.create(luke.id, hoth.id).await?;
    favorite_character_repo.create(luke.id, leia.id).await?;
    favorite_character_repo.create(luke.id, han.id).await?;

    tracing::info!("Database seeded with the example dataset");

    Ok(())
}
