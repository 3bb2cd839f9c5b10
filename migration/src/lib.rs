pub use sea_orm_migration::prelude::*;

mod m20250601_000001_users;
mod m20250601_000002_people;
mod m20250601_000003_planets;
mod m20250601_000004_posts;
mod m20250601_000005_favorite_planets;
mod m20250601_000006_favorite_characters;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_users::Migration),
            Box::new(m20250601_000002_people::Migration),
            Box::new(m20250601_000003_planets::Migration),
            Box::new(m20250601_000004_posts::Migration),
            Box::new(m20250601_000005_favorite_planets::Migration),
            Box::new(m20250601_000006_favorite_characters::Migration),
        ]
    }
}
