use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000002_create_addresses::Address;
use super::m20240601_000008_create_orders::Order;
use crate::audit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audit::columns(Table::create().table(Payment::Table).if_not_exists(), true)
                    .col(string_len(Payment::Name, 100).not_null())
                    .col(double(Payment::Amount).not_null())
                    .col(uuid(Payment::AddressId).not_null())
                    .col(uuid(Payment::OrderId).not_null())
                    .col(
                        small_integer(Payment::PaymentStatus)
                            .not_null()
                            .check(audit::one_of(Payment::PaymentStatus, &[1, 2, 3, 4])),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_address")
                            .from(Payment::Table, Payment::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_order")
                            .from(Payment::Table, Payment::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(audit::created_at_index(Payment::Table, "idx_payment_created_at"))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Name,
    Amount,
    AddressId,
    OrderId,
    PaymentStatus,
}
