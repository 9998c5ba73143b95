use sea_orm_migration::{prelude::*, schema::*};

use crate::audit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audit::columns(Table::create().table(State::Table).if_not_exists(), true)
                    .col(string_len(State::Name, 100).not_null())
                    .col(string_len(State::Alias, 50).not_null().unique_key())
                    .col(text_null(State::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_state_name")
                    .table(State::Table)
                    .col(State::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(audit::created_at_index(State::Table, "idx_state_created_at"))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(State::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum State {
    Table,
    Id,
    Name,
    Alias,
    Description,
}
