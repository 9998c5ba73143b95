use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000002_create_addresses::Address;
use crate::audit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audit::columns(Table::create().table(Restaurant::Table).if_not_exists(), true)
                    .col(string_len(Restaurant::Name, 100).not_null())
                    .col(string_len(Restaurant::Website, 200).not_null())
                    .col(text(Restaurant::Description).not_null())
                    .col(string_len_null(Restaurant::City, 255))
                    .col(uuid(Restaurant::AddressId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_address")
                            .from(Restaurant::Table, Restaurant::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(audit::created_at_index(Restaurant::Table, "idx_restaurant_created_at"))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    Table,
    Id,
    Name,
    Website,
    Description,
    City,
    AddressId,
}
