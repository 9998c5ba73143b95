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
        // Ratings carry no created_by column.
        manager
            .create_table(
                audit::columns(Table::create().table(Rating::Table).if_not_exists(), false)
                    .col(
                        small_integer(Rating::Rating)
                            .not_null()
                            .check(audit::one_of(Rating::Rating, &[1, 2, 3, 4, 5, 6])),
                    )
                    .col(uuid(Rating::UserId).not_null())
                    .col(
                        small_integer(Rating::Type)
                            .not_null()
                            .check(audit::one_of(Rating::Type, &[1, 2, 3, 4, 5])),
                    )
                    .col(uuid_null(Rating::MenuId))
                    .col(uuid_null(Rating::RestaurantId))
                    .col(uuid(Rating::DeliveryBoyId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_user")
                            .from(Rating::Table, Rating::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_menu")
                            .from(Rating::Table, Rating::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_restaurant")
                            .from(Rating::Table, Rating::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_delivery_boy")
                            .from(Rating::Table, Rating::DeliveryBoyId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(audit::created_at_index(Rating::Table, "idx_rating_created_at"))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rating {
    Table,
    Rating,
    UserId,
    Type,
    MenuId,
    RestaurantId,
    DeliveryBoyId,
}
