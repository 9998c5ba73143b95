//! Food ordering backend: relational schema for users, restaurants, menus,
//! carts, orders, billing, deliveries, payments, notifications and ratings,
//! served as a JSON CRUD API.

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod utils;

use sea_orm::DatabaseConnection;

pub use config::Config;
pub use error::{AppError, AppResult};

/// Shared handler state: one connection pool and the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}
