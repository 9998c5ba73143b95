use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000001_create_states::State;
use crate::audit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audit::columns(Table::create().table(Address::Table).if_not_exists(), true)
                    .col(string_len(Address::AddressLine1, 512).not_null())
                    .col(string_len(Address::AddressLine2, 512).not_null().default(""))
                    .col(string_len(Address::City, 256).not_null())
                    .col(uuid(Address::StateId).not_null())
                    .col(string_len(Address::ZipCode, 12).not_null())
                    .col(string_len(Address::Landmark, 100).not_null())
                    .col(decimal_len(Address::Longitude, 9, 6).not_null())
                    .col(decimal_len(Address::Latitude, 9, 6).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_state")
                            .from(Address::Table, Address::StateId)
                            .to(State::Table, State::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_address_zip_code")
                    .table(Address::Table)
                    .col(Address::ZipCode)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(audit::created_at_index(Address::Table, "idx_address_created_at"))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    #[sea_orm(iden = "address_line1")]
    AddressLine1,
    #[sea_orm(iden = "address_line2")]
    AddressLine2,
    City,
    StateId,
    ZipCode,
    Landmark,
    Longitude,
    Latitude,
}
