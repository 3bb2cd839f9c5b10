//! User and favorite association fixture utilities.
//!
//! This module provides methods for creating user-related test fixtures including
//! user records, posts, favorite associations, and factory functions for creating
//! in-memory model instances.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

pub mod factory;

impl TestContext {
    pub fn user(&mut self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with credentials derived from the username.
    pub async fn insert_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        let user = factory::mock_user_model(0, username);

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(user.username),
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password),
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            joined_at: ActiveValue::Set(user.joined_at),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert a post authored by the given user.
    pub async fn insert_post(
        &self,
        user_id: i32,
        title: &str,
    ) -> Result<entity::post::Model, TestError> {
        Ok(entity::prelude::Post::insert(entity::post::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            content: ActiveValue::Set(format!("Content of {title}")),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert a favorite association between a user and a planet.
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite_planet::Model, TestError> {
        Ok(entity::prelude::FavoritePlanet::insert(
            entity::favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert a favorite association between a user and a person.
    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<entity::favorite_character::Model, TestError> {
        Ok(entity::prelude::FavoriteCharacter::insert(
            entity::favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                person_id: ActiveValue::Set(person_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
