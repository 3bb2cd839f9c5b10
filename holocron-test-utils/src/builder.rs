//! Declarative test builder for test environment setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. The builder pattern allows chaining multiple configuration methods together,
//! with all operations queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// record fixtures. Methods can be chained together and finalized with `build()` to
/// create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_blog_tables: bool,

    // Database fixtures to insert
    people: Vec<i32>,
    planets: Vec<i32>,
    users: Vec<String>,
    favorite_planets: Vec<(i32, i32)>,    // (user_id, planet_id)
    favorite_characters: Vec<(i32, i32)>, // (user_id, person_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_blog_tables: false,
            people: Vec::new(),
            planets: Vec::new(),
            users: Vec::new(),
            favorite_planets: Vec::new(),
            favorite_characters: Vec::new(),
        }
    }

    /// Add the full blog schema to the test database.
    ///
    /// Creates every table the application uses: User, Person, Planet, Post,
    /// FavoritePlanet, and FavoriteCharacter.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_blog_tables(mut self) -> Self {
        self.include_blog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Planet)
    ///     .with_table(FavoritePlanet)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock person into the database.
    ///
    /// Queues a person fixture to be inserted during `build()`. The record uses the
    /// given id with placeholder catalog values derived from it.
    ///
    /// # Arguments
    /// - `person_id` - The person id to insert
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_person(mut self, person_id: i32) -> Self {
        self.people.push(person_id);
        self
    }

    /// Insert a mock planet into the database.
    ///
    /// Queues a planet fixture to be inserted during `build()`. The record uses the
    /// given id with placeholder catalog values derived from it.
    ///
    /// # Arguments
    /// - `planet_id` - The planet id to insert
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_planet(mut self, planet_id: i32) -> Self {
        self.planets.push(planet_id);
        self
    }

    /// Insert a mock user into the database.
    ///
    /// Queues a user fixture to be inserted during `build()`, with email and password
    /// derived from the username. Users receive sequential ids in insertion order,
    /// starting at 1.
    ///
    /// # Arguments
    /// - `username` - Unique username for the user record
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_user(mut self, username: &str) -> Self {
        self.users.push(username.to_string());
        self
    }

    /// Insert a favorite planet association into the database.
    ///
    /// The referenced user and planet must be queued before this association so the
    /// foreign keys resolve during `build()`.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user owning the favorite
    /// - `planet_id` - Id of the favorited planet
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_favorite_planet(mut self, user_id: i32, planet_id: i32) -> Self {
        self.favorite_planets.push((user_id, planet_id));
        self
    }

    /// Insert a favorite character association into the database.
    ///
    /// The referenced user and person must be queued before this association so the
    /// foreign keys resolve during `build()`.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user owning the favorite
    /// - `person_id` - Id of the favorited person
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_favorite_character(mut self, user_id: i32, person_id: i32) -> Self {
        self.favorite_characters.push((user_id, person_id));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (blog tables if specified, then custom tables)
    /// 2. Inserts database fixtures (people, planets, users, favorite associations)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_blog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Post),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
                schema.create_table_from_entity(entity::prelude::FavoriteCharacter),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures (using existing fixture methods)
        for person_id in self.people {
            setup.catalog().insert_mock_person(person_id).await?;
        }

        for planet_id in self.planets {
            setup.catalog().insert_mock_planet(planet_id).await?;
        }

        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        for (user_id, planet_id) in self.favorite_planets {
            setup.user().insert_favorite_planet(user_id, planet_id).await?;
        }

        for (user_id, person_id) in self.favorite_characters {
            setup
                .user()
                .insert_favorite_character(user_id, person_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
