//! Catalog fixture utilities.
//!
//! This module provides methods for creating people and planet records, plus factory
//! functions for creating in-memory model instances.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

pub mod factory;

impl TestContext {
    pub fn catalog(&mut self) -> CatalogFixtures<'_> {
        CatalogFixtures { context: self }
    }
}

pub struct CatalogFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a person with placeholder values derived from the given id.
    pub async fn insert_mock_person(
        &self,
        person_id: i32,
    ) -> Result<entity::person::Model, TestError> {
        let person = factory::mock_person_model(person_id);

        Ok(entity::prelude::Person::insert(entity::person::ActiveModel {
            id: ActiveValue::Set(person.id),
            name: ActiveValue::Set(person.name),
            birth_year: ActiveValue::Set(person.birth_year),
            gender: ActiveValue::Set(person.gender),
            eye_color: ActiveValue::Set(person.eye_color),
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert a person with explicit catalog fields.
    pub async fn insert_person(
        &self,
        name: &str,
        birth_year: Option<&str>,
        gender: Option<&str>,
        eye_color: Option<&str>,
    ) -> Result<entity::person::Model, TestError> {
        Ok(entity::prelude::Person::insert(entity::person::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            birth_year: ActiveValue::Set(birth_year.map(str::to_string)),
            gender: ActiveValue::Set(gender.map(str::to_string)),
            eye_color: ActiveValue::Set(eye_color.map(str::to_string)),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert a planet with placeholder values derived from the given id.
    pub async fn insert_mock_planet(
        &self,
        planet_id: i32,
    ) -> Result<entity::planet::Model, TestError> {
        let planet = factory::mock_planet_model(planet_id);

        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            id: ActiveValue::Set(planet.id),
            name: ActiveValue::Set(planet.name),
            climate: ActiveValue::Set(planet.climate),
            terrain: ActiveValue::Set(planet.terrain),
            population: ActiveValue::Set(planet.population),
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert a planet with explicit catalog fields.
    pub async fn insert_planet(
        &self,
        name: &str,
        climate: Option<&str>,
        terrain: Option<&str>,
        population: Option<i64>,
    ) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set(climate.map(str::to_string)),
            terrain: ActiveValue::Set(terrain.map(str::to_string)),
            population: ActiveValue::Set(population),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
