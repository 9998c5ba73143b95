use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000003_create_users::User;
use super::m20240601_000004_create_restaurants::Restaurant;
use super::m20240601_000005_create_menus::Menu;
use crate::audit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audit::columns(Table::create().table(Cart::Table).if_not_exists(), true)
                    .col(uuid(Cart::MenuId).not_null())
                    .col(uuid(Cart::UserId).not_null())
                    .col(uuid(Cart::RestaurantId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_menu")
                            .from(Cart::Table, Cart::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_user")
                            .from(Cart::Table, Cart::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_restaurant")
                            .from(Cart::Table, Cart::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(audit::created_at_index(Cart::Table, "idx_cart_created_at"))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cart {
    Table,
    MenuId,
    UserId,
    RestaurantId,
}
