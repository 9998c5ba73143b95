//! One sea-orm entity per table.
//!
//! Dependency order, leaves first: state, address, user, restaurant, menu,
//! bill, cart, order, delivery, payment, notification, rating. Migrations
//! create the tables in the same order.

pub mod address;
pub mod audit;
pub mod bill;
pub mod cart;
pub mod delivery;
pub mod menu;
pub mod notification;
pub mod order;
pub mod payment;
pub mod rating;
pub mod restaurant;
pub mod state;
pub mod user;

#[cfg(test)]
mod tests;
