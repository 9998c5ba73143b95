pub use sea_orm_migration::prelude::*;

mod audit;
mod m20240601_000001_create_states;
mod m20240601_000002_create_addresses;
mod m20240601_000003_create_users;
mod m20240601_000004_create_restaurants;
mod m20240601_000005_create_menus;
mod m20240601_000006_create_bills;
mod m20240601_000007_create_carts;
mod m20240601_000008_create_orders;
mod m20240601_000009_create_deliveries;
mod m20240601_000010_create_payments;
mod m20240601_000011_create_notifications;
mod m20240601_000012_create_ratings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_states::Migration),
            Box::new(m20240601_000002_create_addresses::Migration),
            Box::new(m20240601_000003_create_users::Migration),
            Box::new(m20240601_000004_create_restaurants::Migration),
            Box::new(m20240601_000005_create_menus::Migration),
            Box::new(m20240601_000006_create_bills::Migration),
            Box::new(m20240601_000007_create_carts::Migration),
            Box::new(m20240601_000008_create_orders::Migration),
            Box::new(m20240601_000009_create_deliveries::Migration),
            Box::new(m20240601_000010_create_payments::Migration),
            Box::new(m20240601_000011_create_notifications::Migration),
            Box::new(m20240601_000012_create_ratings::Migration),
        ]
    }
}
