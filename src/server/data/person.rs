use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Repository for people in the Star Wars catalog.
pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new person in the catalog
    ///
    /// # Arguments
    /// - `name` (`String`): Display name, unique across the catalog
    /// - `birth_year` (`Option<String>`): Birth year in-universe, e.g. `19BBY`
    /// - `gender` (`Option<String>`): Gender if known
    /// - `eye_color` (`Option<String>`): Eye color if known
    pub async fn create(
        &self,
        name: String,
        birth_year: Option<String>,
        gender: Option<String>,
        eye_color: Option<String>,
    ) -> Result<entity::person::Model, DbErr> {
        let person = entity::person::ActiveModel {
            name: ActiveValue::Set(name),
            birth_year: ActiveValue::Set(birth_year),
            gender: ActiveValue::Set(gender),
            eye_color: ActiveValue::Set(eye_color),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    /// Gets all people in the catalog, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a single person by their catalog ID
    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }
}
