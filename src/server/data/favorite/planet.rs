use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Repository for the user to planet favorite association.
pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorite entry linking a user to a planet
    ///
    /// The `(user_id, planet_id)` pair is the table's primary key, so inserting a
    /// pair that already exists fails with a unique constraint violation rather
    /// than producing a duplicate row. Callers translate that violation into a
    /// conflict rather than checking for the row up front.
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `planet_id` (`i32`): ID of the planet entry in the database
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite_planet::Model, DbErr> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        favorite.insert(self.db).await
    }

    /// Deletes the favorite entry for a user and planet pair
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanet::delete_by_id((user_id, planet_id))
            .exec(self.db)
            .await
    }

    /// Gets all planets favorited by the provided user ID
    ///
    /// # Returns
    /// Returns a result containing:
    /// - `Vec<`[`entity::planet::Model`]`>`: The favorited planets, ordered by planet ID
    /// - [`DbErr`]: If a database-related error occurs
    pub async fn get_planets_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .join_rev(
                JoinType::InnerJoin,
                entity::favorite_planet::Relation::Planet.def(),
            )
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all users that favorited the provided planet ID
    ///
    /// This is the reverse navigation over the same association table used by
    /// [`Self::get_planets_by_user_id`].
    pub async fn get_users_by_planet_id(
        &self,
        planet_id: i32,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .join_rev(
                JoinType::InnerJoin,
                entity::favorite_planet::Relation::User.def(),
            )
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
