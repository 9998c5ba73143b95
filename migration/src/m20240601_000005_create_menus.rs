use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000004_create_restaurants::Restaurant;
use crate::audit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audit::columns(Table::create().table(Menu::Table).if_not_exists(), true)
                    .col(string_len(Menu::Name, 100).not_null())
                    .col(
                        small_integer(Menu::Type)
                            .not_null()
                            .check(audit::one_of(Menu::Type, &[1, 2, 3])),
                    )
                    .col(
                        small_integer(Menu::MealType)
                            .not_null()
                            .check(audit::one_of(Menu::MealType, &[1, 2, 3, 4, 5, 6])),
                    )
                    .col(text(Menu::Description).not_null())
                    .col(string_len(Menu::Media, 100).not_null())
                    .col(string_len(Menu::Banner, 100).not_null())
                    .col(double(Menu::Price).not_null())
                    .col(uuid(Menu::RestaurantId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_restaurant")
                            .from(Menu::Table, Menu::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(audit::created_at_index(Menu::Table, "idx_menu_created_at"))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Menu {
    Table,
    Id,
    Name,
    Type,
    MealType,
    Description,
    Media,
    Banner,
    Price,
    RestaurantId,
}
