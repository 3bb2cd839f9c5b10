use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Repository for the user to character favorite association.
pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorite entry linking a user to a person
    ///
    /// The `(user_id, person_id)` pair is the table's primary key, so inserting a
    /// pair that already exists fails with a unique constraint violation rather
    /// than producing a duplicate row.
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `person_id` (`i32`): ID of the person entry in the database
    pub async fn create(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<entity::favorite_character::Model, DbErr> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            person_id: ActiveValue::Set(person_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        favorite.insert(self.db).await
    }

    /// Deletes the favorite entry for a user and person pair
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32, person_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_by_id((user_id, person_id))
            .exec(self.db)
            .await
    }

    /// Gets all people favorited by the provided user ID
    ///
    /// # Returns
    /// Returns a result containing:
    /// - `Vec<`[`entity::person::Model`]`>`: The favorited people, ordered by person ID
    /// - [`DbErr`]: If a database-related error occurs
    pub async fn get_people_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .join_rev(
                JoinType::InnerJoin,
                entity::favorite_character::Relation::Person.def(),
            )
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all users that favorited the provided person ID
    ///
    /// This is the reverse navigation over the same association table used by
    /// [`Self::get_people_by_user_id`].
    pub async fn get_users_by_person_id(
        &self,
        person_id: i32,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .join_rev(
                JoinType::InnerJoin,
                entity::favorite_character::Relation::User.def(),
            )
            .filter(entity::favorite_character::Column::PersonId.eq(person_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
