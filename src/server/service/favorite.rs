use sea_orm::{DatabaseConnection, DbErr, RuntimeErr};

use crate::{
    model::{person::PersonDto, planet::PlanetDto, user::UserFavoritesDto},
    server::{
        data::{
            favorite::{character::FavoriteCharacterRepository, planet::FavoritePlanetRepository},
            person::PersonRepository,
            planet::PlanetRepository,
            user::UserRepository,
        },
        error::{favorite::FavoriteError, Error},
    },
};

/// Service for managing a user's favorite catalog entries.
///
/// Coordinates the user, catalog, and favorite association repositories for the
/// add, remove, and listing flows. Duplicate favorites are detected by letting the
/// association table's composite primary key reject the insert, so concurrent
/// requests for the same pair cannot both succeed.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves everything a user has favorited.
    ///
    /// Fetches the user record, then both favorite lists through the association
    /// tables.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose favorites to list
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - The user's favorited planets and characters
    /// - `Err(Error::FavoriteError(UserNotFound))` - No user record with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let favorite_planet_repo = FavoritePlanetRepository::new(self.db);
        let favorite_character_repo = FavoriteCharacterRepository::new(self.db);

        let user = user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(FavoriteError::UserNotFound(user_id))?;

        let favorite_planets = favorite_planet_repo.get_planets_by_user_id(user.id).await?;
        let favorite_people = favorite_character_repo
            .get_people_by_user_id(user.id)
            .await?;

        Ok(UserFavoritesDto {
            user_id: user.id,
            favorite_planets: favorite_planets.into_iter().map(PlanetDto::from).collect(),
            favorite_characters: favorite_people.into_iter().map(PersonDto::from).collect(),
        })
    }

    /// Adds a planet to a user's favorites.
    ///
    /// # Behavior
    /// - The user and planet are looked up first so a missing record maps to the
    ///   right not-found outcome.
    /// - The favorite row is then inserted without checking whether it already
    ///   exists; if the pair is already present the association table's primary
    ///   key rejects the insert and the violation is reported as a conflict.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user favoriting the planet
    /// - `planet_id` - ID of the planet to favorite
    ///
    /// # Returns
    /// - `Ok(Model)` - The favorited planet, for response formatting
    /// - `Err(Error::FavoriteError(UserNotFound))` - No user record with this ID
    /// - `Err(Error::FavoriteError(PlanetNotFound))` - No planet record with this ID
    /// - `Err(Error::FavoriteError(PlanetAlreadyFavorite))` - The pair already exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::planet::Model, Error> {
        let user_repo = UserRepository::new(self.db);
        let planet_repo = PlanetRepository::new(self.db);
        let favorite_repo = FavoritePlanetRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        let planet = planet_repo
            .get_by_id(planet_id)
            .await?
            .ok_or(FavoriteError::PlanetNotFound(planet_id))?;

        match favorite_repo.create(user_id, planet_id).await {
            Ok(_) => Ok(planet),
            Err(err) if is_unique_violation(&err) => {
                Err(FavoriteError::PlanetAlreadyFavorite { user_id, planet_id }.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a planet from a user's favorites.
    ///
    /// # Behavior
    /// - The user and planet are looked up first so a missing record maps to the
    ///   right not-found outcome.
    /// - The favorite row is deleted by its (user, planet) key; zero affected rows
    ///   means the planet was never favorited.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user unfavoriting the planet
    /// - `planet_id` - ID of the planet to remove
    ///
    /// # Returns
    /// - `Ok(Model)` - The unfavorited planet, for response formatting
    /// - `Err(Error::FavoriteError(UserNotFound))` - No user record with this ID
    /// - `Err(Error::FavoriteError(PlanetNotFound))` - No planet record with this ID
    /// - `Err(Error::FavoriteError(PlanetNotFavorite))` - The pair did not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::planet::Model, Error> {
        let user_repo = UserRepository::new(self.db);
        let planet_repo = PlanetRepository::new(self.db);
        let favorite_repo = FavoritePlanetRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        let planet = planet_repo
            .get_by_id(planet_id)
            .await?
            .ok_or(FavoriteError::PlanetNotFound(planet_id))?;

        let result = favorite_repo.delete(user_id, planet_id).await?;
        if result.rows_affected == 0 {
            return Err(FavoriteError::PlanetNotFavorite { user_id, planet_id }.into());
        }

        Ok(planet)
    }

    /// Adds a person to a user's favorites.
    ///
    /// Mirrors [`Self::add_planet`] over the character association table.
    ///
    /// # Returns
    /// - `Ok(Model)` - The favorited person, for response formatting
    /// - `Err(Error::FavoriteError(UserNotFound))` - No user record with this ID
    /// - `Err(Error::FavoriteError(PersonNotFound))` - No person record with this ID
    /// - `Err(Error::FavoriteError(PersonAlreadyFavorite))` - The pair already exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_person(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<entity::person::Model, Error> {
        let user_repo = UserRepository::new(self.db);
        let person_repo = PersonRepository::new(self.db);
        let favorite_repo = FavoriteCharacterRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        let person = person_repo
            .get_by_id(person_id)
            .await?
            .ok_or(FavoriteError::PersonNotFound(person_id))?;

        match favorite_repo.create(user_id, person_id).await {
            Ok(_) => Ok(person),
            Err(err) if is_unique_violation(&err) => {
                Err(FavoriteError::PersonAlreadyFavorite { user_id, person_id }.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a person from a user's favorites.
    ///
    /// Mirrors [`Self::remove_planet`] over the character association table.
    ///
    /// # Returns
    /// - `Ok(Model)` - The unfavorited person, for response formatting
    /// - `Err(Error::FavoriteError(UserNotFound))` - No user record with this ID
    /// - `Err(Error::FavoriteError(PersonNotFound))` - No person record with this ID
    /// - `Err(Error::FavoriteError(PersonNotFavorite))` - The pair did not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_person(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<entity::person::Model, Error> {
        let user_repo = UserRepository::new(self.db);
        let person_repo = PersonRepository::new(self.db);
        let favorite_repo = FavoriteCharacterRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        let person = person_repo
            .get_by_id(person_id)
            .await?
            .ok_or(FavoriteError::PersonNotFound(person_id))?;

        let result = favorite_repo.delete(user_id, person_id).await?;
        if result.rows_affected == 0 {
            return Err(FavoriteError::PersonNotFavorite { user_id, person_id }.into());
        }

        Ok(person)
    }
}

/// Whether a database error is a unique or primary key constraint violation.
///
/// SQLite reports duplicate composite keys with extended code 1555 and duplicate
/// unique columns with 2067; sqlx folds both into its unique violation kind.
fn is_unique_violation(err: &DbErr) -> bool {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(err)) | DbErr::Exec(RuntimeErr::SqlxError(err)) => err
            .as_database_error()
            .map(|db_err| db_err.is_unique_violation())
            .unwrap_or(false),
        _ => false,
    }
}
