use serde::{Deserialize, Serialize};

/// A Star Wars character as returned by the catalog endpoints.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub eye_color: Option<String>,
}

impl From<entity::person::Model> for PersonDto {
    fn from(person: entity::person::Model) -> Self {
        Self {
            id: person.id,
            name: person.name,
            birth_year: person.birth_year,
            gender: person.gender,
            eye_color: person.eye_color,
        }
    }
}
