use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, catalog, commerce, engagement, fulfillment, geography, users};
use crate::middleware::auth::{auth_middleware, require_staff};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    // Public catalog and geography
    let public_routes = Router::new()
        .route("/states", get(geography::list_states))
        .route("/states/{id}", get(geography::get_state))
        .route("/restaurants", get(catalog::list_restaurants))
        .route("/restaurants/{id}", get(catalog::get_restaurant))
        .route("/restaurants/{id}/menus", get(catalog::restaurant_menus))
        .route("/menus/{id}", get(catalog::get_menu));

    // Any signed-in user
    let user_routes = Router::new()
        .route("/me", get(users::me).put(users::update_me))
        .route("/addresses", post(geography::create_address))
        .route("/addresses/{id}", get(geography::get_address))
        .route("/cart", get(commerce::my_cart).post(commerce::add_to_cart))
        .route("/cart/{id}", delete(commerce::remove_from_cart))
        .route("/orders", get(commerce::my_orders).post(commerce::place_order))
        .route("/orders/{id}", get(commerce::get_order))
        .route("/orders/{id}/payments", get(commerce::order_payments))
        .route("/payments", post(commerce::create_payment))
        .route("/deliveries", get(fulfillment::my_deliveries))
        .route("/notifications", get(engagement::my_notifications))
        .route("/notifications/{id}/read", post(engagement::mark_notification_read))
        .route("/ratings", get(engagement::my_ratings).post(engagement::create_rating))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Staff only
    let admin_routes = Router::new()
        // Geography
        .route("/states", post(geography::create_state))
        .route(
            "/states/{id}",
            put(geography::update_state).delete(geography::delete_state),
        )
        .route("/addresses", get(geography::list_addresses))
        .route("/addresses/{id}", delete(geography::delete_address))
        // Catalog
        .route("/restaurants", post(catalog::create_restaurant))
        .route(
            "/restaurants/{id}",
            put(catalog::update_restaurant).delete(catalog::delete_restaurant),
        )
        .route("/menus", post(catalog::create_menu))
        .route(
            "/menus/{id}",
            put(catalog::update_menu).delete(catalog::delete_menu),
        )
        // Accounts
        .route("/users", get(users::list_users))
        .route("/users/{id}", delete(users::delete_user))
        // Commerce and fulfillment
        .route("/orders", get(commerce::list_orders))
        .route("/orders/{id}", delete(commerce::delete_order))
        .route("/orders/{id}/status", put(commerce::update_order_status))
        .route("/deliveries", post(fulfillment::create_delivery))
        .route("/deliveries/{id}", delete(fulfillment::delete_delivery))
        .route("/notifications", post(engagement::create_notification))
        .layer(middleware::from_fn(require_staff))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api", public_routes.merge(user_routes))
        .nest("/api/admin", admin_routes)
        .with_state(state)
}

#[cfg(test)]
mod tests;
