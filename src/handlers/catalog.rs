use axum::{
    extract::{Path, State},
    Extension, Json,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::menu::{self, MealType, MenuType};
use crate::entities::{address, restaurant};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::AppState;

// ============ Restaurants ============

/// List all restaurants
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<restaurant::Model>>> {
    let restaurants = restaurant::Entity::find()
        .order_by_asc(restaurant::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Json(restaurants))
}

/// Get a restaurant
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<restaurant::Model>> {
    let restaurant = restaurant::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

    Ok(Json(restaurant))
}

#[derive(Debug, Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub website: String,
    pub description: String,
    pub city: Option<String>,
    pub address_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRestaurantRequest {
    pub name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub address_id: Option<Uuid>,
}

async fn ensure_address(state: &AppState, address_id: Uuid) -> AppResult<()> {
    address::Entity::find_by_id(address_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid address".to_string()))?;
    Ok(())
}

/// Create a restaurant (staff)
pub async fn create_restaurant(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateRestaurantRequest>,
) -> AppResult<Json<restaurant::Model>> {
    ensure_address(&state, payload.address_id).await?;

    let restaurant = restaurant::ActiveModel {
        name: Set(payload.name),
        website: Set(payload.website),
        description: Set(payload.description),
        city: Set(payload.city),
        address_id: Set(payload.address_id),
        created_by: Set(Some(claims.sub)),
        updated_by: Set(Some(claims.sub)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(restaurant_id = %restaurant.id, "Restaurant created");
    Ok(Json(restaurant))
}

/// Update a restaurant (staff)
pub async fn update_restaurant(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRestaurantRequest>,
) -> AppResult<Json<restaurant::Model>> {
    let restaurant = restaurant::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

    let mut active: restaurant::ActiveModel = restaurant.into();

    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(website) = payload.website {
        active.website = Set(website);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(city) = payload.city {
        active.city = Set(Some(city));
    }
    if let Some(address_id) = payload.address_id {
        ensure_address(&state, address_id).await?;
        active.address_id = Set(address_id);
    }
    active.updated_by = Set(Some(claims.sub));

    Ok(Json(active.update(&state.db).await?))
}

/// Delete a restaurant (staff). Rejected while menus, carts or deliveries
/// reference it.
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = restaurant::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Restaurant not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Restaurant deleted" })))
}

// ============ Menus ============

/// List the menu items of a restaurant
pub async fn restaurant_menus(
    State(state): State<AppState>,
    Path(restaurant_id): Path<Uuid>,
) -> AppResult<Json<Vec<menu::Model>>> {
    restaurant::Entity::find_by_id(restaurant_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

    let menus = menu::Entity::find()
        .filter(menu::Column::RestaurantId.eq(restaurant_id))
        .order_by_asc(menu::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Json(menus))
}

/// Get a menu item
pub async fn get_menu(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<menu::Model>> {
    let menu = menu::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Menu not found".to_string()))?;

    Ok(Json(menu))
}

#[derive(Debug, Deserialize)]
pub struct CreateMenuRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub menu_type: MenuType,
    pub meal_type: MealType,
    pub description: String,
    pub media: String,
    pub banner: String,
    pub price: f64,
    pub restaurant_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMenuRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub menu_type: Option<MenuType>,
    pub meal_type: Option<MealType>,
    pub description: Option<String>,
    pub media: Option<String>,
    pub banner: Option<String>,
    pub price: Option<f64>,
}

/// Create a menu item (staff)
pub async fn create_menu(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateMenuRequest>,
) -> AppResult<Json<menu::Model>> {
    restaurant::Entity::find_by_id(payload.restaurant_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid restaurant".to_string()))?;

    let menu = menu::ActiveModel {
        name: Set(payload.name),
        menu_type: Set(payload.menu_type),
        meal_type: Set(payload.meal_type),
        description: Set(payload.description),
        media: Set(payload.media),
        banner: Set(payload.banner),
        price: Set(payload.price),
        restaurant_id: Set(payload.restaurant_id),
        created_by: Set(Some(claims.sub)),
        updated_by: Set(Some(claims.sub)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(menu))
}

/// Update a menu item (staff)
pub async fn update_menu(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMenuRequest>,
) -> AppResult<Json<menu::Model>> {
    let menu = menu::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Menu not found".to_string()))?;

    let mut active: menu::ActiveModel = menu.into();

    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(menu_type) = payload.menu_type {
        active.menu_type = Set(menu_type);
    }
    if let Some(meal_type) = payload.meal_type {
        active.meal_type = Set(meal_type);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(media) = payload.media {
        active.media = Set(media);
    }
    if let Some(banner) = payload.banner {
        active.banner = Set(banner);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    active.updated_by = Set(Some(claims.sub));

    Ok(Json(active.update(&state.db).await?))
}

/// Delete a menu item (staff)
pub async fn delete_menu(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = menu::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Menu not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Menu deleted" })))
}
