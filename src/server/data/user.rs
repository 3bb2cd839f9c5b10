use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

/// Repository for blog user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user account
    ///
    /// # Arguments
    /// - `username` (`String`): Login name, unique across users
    /// - `email` (`String`): Contact address, unique across users
    /// - `password` (`String`): Password as provided, stored but never exposed via the API
    /// - `first_name` (`Option<String>`): Given name if provided
    /// - `last_name` (`Option<String>`): Family name if provided
    pub async fn create(
        &self,
        username: String,
        email: String,
        password: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            joined_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets all user accounts, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a single user by their ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Deletes a user account
    ///
    /// Returns OK regardless of the user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field. Posts and favorites owned
    /// by the user are removed by the cascading foreign keys.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
