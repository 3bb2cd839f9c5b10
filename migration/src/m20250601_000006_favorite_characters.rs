use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000001_users::Users, m20250601_000002_people::People};

static IDX_FAVORITE_CHARACTERS_PERSON_ID: &str = "idx-favorite_characters-person_id";
static FK_FAVORITE_CHARACTERS_USER_ID: &str = "fk-favorite_characters-user_id";
static FK_FAVORITE_CHARACTERS_PERSON_ID: &str = "fk-favorite_characters-person_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacters::Table)
                    .if_not_exists()
                    .col(integer(FavoriteCharacters::UserId))
                    .col(integer(FavoriteCharacters::PersonId))
                    .col(timestamp(FavoriteCharacters::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(FavoriteCharacters::UserId)
                            .col(FavoriteCharacters::PersonId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTERS_USER_ID)
                            .from(FavoriteCharacters::Table, FavoriteCharacters::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTERS_PERSON_ID)
                            .from(FavoriteCharacters::Table, FavoriteCharacters::PersonId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_CHARACTERS_PERSON_ID)
                    .table(FavoriteCharacters::Table)
                    .col(FavoriteCharacters::PersonId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_CHARACTERS_PERSON_ID)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteCharacters {
    Table,
    UserId,
    PersonId,
    CreatedAt,
}
