use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000003_create_users::User;
use super::m20240601_000008_create_orders::Order;
use crate::audit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audit::columns(Table::create().table(Notification::Table).if_not_exists(), true)
                    .col(
                        small_integer(Notification::Type)
                            .not_null()
                            .check(audit::one_of(Notification::Type, &[1, 2, 3, 4])),
                    )
                    .col(uuid(Notification::UserId).not_null())
                    .col(uuid(Notification::OrderId).not_null())
                    .col(string_len(Notification::Message, 255).not_null())
                    .col(boolean(Notification::IsRead).not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_user")
                            .from(Notification::Table, Notification::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_order")
                            .from(Notification::Table, Notification::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(audit::created_at_index(
                Notification::Table,
                "idx_notification_created_at",
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Type,
    UserId,
    OrderId,
    Message,
    IsRead,
}
