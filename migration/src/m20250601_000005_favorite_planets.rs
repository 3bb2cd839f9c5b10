use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000001_users::Users, m20250601_000003_planets::Planets};

static IDX_FAVORITE_PLANETS_PLANET_ID: &str = "idx-favorite_planets-planet_id";
static FK_FAVORITE_PLANETS_USER_ID: &str = "fk-favorite_planets-user_id";
static FK_FAVORITE_PLANETS_PLANET_ID: &str = "fk-favorite_planets-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite primary key is the uniqueness guarantee: one row per
        // (user, planet) pair, enforced by the database rather than by a
        // lookup before insert.
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(integer(FavoritePlanets::UserId))
                    .col(integer(FavoritePlanets::PlanetId))
                    .col(timestamp(FavoritePlanets::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(FavoritePlanets::UserId)
                            .col(FavoritePlanets::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANETS_USER_ID)
                            .from(FavoritePlanets::Table, FavoritePlanets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANETS_PLANET_ID)
                            .from(FavoritePlanets::Table, FavoritePlanets::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse navigation (users who favorited a planet) filters on
        // planet_id, which the primary key does not cover.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_PLANETS_PLANET_ID)
                    .table(FavoritePlanets::Table)
                    .col(FavoritePlanets::PlanetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_PLANETS_PLANET_ID)
                    .table(FavoritePlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritePlanets {
    Table,
    UserId,
    PlanetId,
    CreatedAt,
}
