pub mod auth;
pub mod catalog;
pub mod commerce;
pub mod engagement;
pub mod fulfillment;
pub mod geography;
pub mod users;
