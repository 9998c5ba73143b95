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
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(uuid(User::Id).primary_key())
                    .col(string_len(User::Username, 150).not_null().unique_key())
                    .col(string_len(User::Password, 255).not_null())
                    .col(string_len(User::FirstName, 150).not_null().default(""))
                    .col(string_len(User::LastName, 150).not_null().default(""))
                    .col(string_len(User::Email, 254).not_null().default(""))
                    .col(boolean(User::IsStaff).not_null().default(false))
                    .col(boolean(User::IsActive).not_null().default(true))
                    .col(boolean(User::IsSuperuser).not_null().default(false))
                    .col(timestamp_with_time_zone_null(User::LastLogin))
                    .col(
                        timestamp_with_time_zone(User::DateJoined)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        small_integer(User::UserType)
                            .not_null()
                            .default(1)
                            .check(audit::one_of(User::UserType, &[1, 2, 3])),
                    )
                    .col(string_len(User::Mobile, 15).not_null())
                    .col(date_null(User::DateOfBirth))
                    .col(
                        small_integer_null(User::Gender)
                            .check(audit::one_of(User::Gender, &[1, 2])),
                    )
                    .col(string_len_null(User::City, 255))
                    .col(uuid(User::AddressId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_address")
                            .from(User::Table, User::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Password,
    FirstName,
    LastName,
    Email,
    IsStaff,
    IsActive,
    IsSuperuser,
    LastLogin,
    DateJoined,
    UserType,
    Mobile,
    DateOfBirth,
    Gender,
    City,
    AddressId,
}
