use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000002_create_addresses::Address;
use super::m20240601_000003_create_users::User;
use super::m20240601_000004_create_restaurants::Restaurant;
use super::m20240601_000006_create_bills::Bill;
use crate::audit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audit::columns(Table::create().table(Delivery::Table).if_not_exists(), true)
                    .col(uuid(Delivery::UserId).not_null())
                    .col(uuid(Delivery::DeliveryBoyId).not_null())
                    .col(uuid(Delivery::UserAddressId).not_null())
                    .col(uuid(Delivery::RestaurantId).not_null())
                    .col(uuid(Delivery::BillId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_user")
                            .from(Delivery::Table, Delivery::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_delivery_boy")
                            .from(Delivery::Table, Delivery::DeliveryBoyId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_user_address")
                            .from(Delivery::Table, Delivery::UserAddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_restaurant")
                            .from(Delivery::Table, Delivery::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_bill")
                            .from(Delivery::Table, Delivery::BillId)
                            .to(Bill::Table, Bill::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(audit::created_at_index(Delivery::Table, "idx_delivery_created_at"))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Delivery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Delivery {
    Table,
    UserId,
    DeliveryBoyId,
    UserAddressId,
    RestaurantId,
    BillId,
}
