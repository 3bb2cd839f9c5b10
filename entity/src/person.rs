use sea_orm::entity::prelude::*;

/// A Star Wars character from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub eye_color: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
}

impl Related<super::favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacter.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_character::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_character::Relation::Person.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
