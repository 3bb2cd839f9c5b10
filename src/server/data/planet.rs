use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Repository for planets in the Star Wars catalog.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet in the catalog
    ///
    /// # Arguments
    /// - `name` (`String`): Display name, unique across the catalog
    /// - `climate` (`Option<String>`): Climate description if known
    /// - `terrain` (`Option<String>`): Terrain description if known
    /// - `population` (`Option<i64>`): Population count if known
    pub async fn create(
        &self,
        name: String,
        climate: Option<String>,
        terrain: Option<String>,
        population: Option<i64>,
    ) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name),
            climate: ActiveValue::Set(climate),
            terrain: ActiveValue::Set(terrain),
            population: ActiveValue::Set(population),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets all planets in the catalog, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a single planet by its catalog ID
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }
}
