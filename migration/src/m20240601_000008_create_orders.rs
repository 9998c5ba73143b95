use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000003_create_users::User;
use super::m20240601_000006_create_bills::Bill;
use crate::audit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audit::columns(Table::create().table(Order::Table).if_not_exists(), true)
                    .col(uuid(Order::UserId).not_null())
                    .col(uuid(Order::BillId).not_null())
                    .col(
                        small_integer(Order::Status)
                            .not_null()
                            .check(audit::one_of(Order::Status, &[1, 2, 3, 4, 5, 6])),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_user")
                            .from(Order::Table, Order::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_bill")
                            .from(Order::Table, Order::BillId)
                            .to(Bill::Table, Bill::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(audit::created_at_index(Order::Table, "idx_order_created_at"))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    UserId,
    BillId,
    Status,
}
