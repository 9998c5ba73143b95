use sea_orm_migration::{prelude::*, schema::*};

use crate::audit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audit::columns(Table::create().table(Bill::Table).if_not_exists(), true)
                    .col(double(Bill::TotalCost).not_null())
                    .col(string_len(Bill::CouponCode, 20).not_null())
                    .col(double(Bill::Tax).not_null())
                    .col(double(Bill::Discount).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(audit::created_at_index(Bill::Table, "idx_bill_created_at"))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bill {
    Table,
    Id,
    TotalCost,
    CouponCode,
    Tax,
    Discount,
}
