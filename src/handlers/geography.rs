use axum::{
    extract::{Path, State},
    Extension, Json,
};
use sea_orm::prelude::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{address, state};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::AppState;

// ============ States ============

/// List all states
pub async fn list_states(State(app): State<AppState>) -> AppResult<Json<Vec<state::Model>>> {
    let states = state::Entity::find()
        .order_by_asc(state::Column::Name)
        .all(&app.db)
        .await?;

    Ok(Json(states))
}

/// Get a state
pub async fn get_state(
    State(app): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<state::Model>> {
    let state = state::Entity::find_by_id(id)
        .one(&app.db)
        .await?
        .ok_or_else(|| AppError::NotFound("State not found".to_string()))?;

    Ok(Json(state))
}

#[derive(Debug, Deserialize)]
pub struct CreateStateRequest {
    pub name: String,
    pub alias: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStateRequest {
    pub name: Option<String>,
    pub alias: Option<String>,
    pub description: Option<String>,
}

/// Create a state (staff)
pub async fn create_state(
    State(app): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateStateRequest>,
) -> AppResult<Json<state::Model>> {
    let state = state::ActiveModel {
        name: Set(payload.name),
        alias: Set(payload.alias),
        description: Set(payload.description),
        created_by: Set(Some(claims.sub)),
        updated_by: Set(Some(claims.sub)),
        ..Default::default()
    };

    Ok(Json(state.insert(&app.db).await?))
}

/// Update a state (staff)
pub async fn update_state(
    State(app): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStateRequest>,
) -> AppResult<Json<state::Model>> {
    let state = state::Entity::find_by_id(id)
        .one(&app.db)
        .await?
        .ok_or_else(|| AppError::NotFound("State not found".to_string()))?;

    let mut active: state::ActiveModel = state.into();

    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(alias) = payload.alias {
        active.alias = Set(alias);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    active.updated_by = Set(Some(claims.sub));

    Ok(Json(active.update(&app.db).await?))
}

/// Delete a state (staff). Rejected while any address references it.
pub async fn delete_state(
    State(app): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = state::Entity::delete_by_id(id).exec(&app.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("State not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "State deleted" })))
}

// ============ Addresses ============

#[derive(Debug, Deserialize)]
pub struct CreateAddressRequest {
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    pub city: String,
    pub state_id: Uuid,
    pub zip_code: String,
    pub landmark: String,
    pub longitude: Decimal,
    pub latitude: Decimal,
}

#[derive(Debug, Serialize)]
pub struct AddressResponse {
    #[serde(flatten)]
    pub address: address::Model,
    pub full_address: String,
}

/// Create an address
pub async fn create_address(
    State(app): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateAddressRequest>,
) -> AppResult<Json<AddressResponse>> {
    let state = state::Entity::find_by_id(payload.state_id)
        .one(&app.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid state".to_string()))?;

    let address = address::ActiveModel {
        address_line1: Set(payload.address_line1),
        address_line2: Set(payload.address_line2),
        city: Set(payload.city),
        state_id: Set(state.id),
        zip_code: Set(payload.zip_code),
        landmark: Set(payload.landmark),
        longitude: Set(payload.longitude),
        latitude: Set(payload.latitude),
        created_by: Set(Some(claims.sub)),
        updated_by: Set(Some(claims.sub)),
        ..Default::default()
    }
    .insert(&app.db)
    .await?;

    Ok(Json(AddressResponse {
        full_address: address.format_full_address(&state.name),
        address,
    }))
}

/// Get an address with its formatted full address
pub async fn get_address(
    State(app): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AddressResponse>> {
    let (address, state) = address::Entity::find_by_id(id)
        .find_also_related(state::Entity)
        .one(&app.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Address not found".to_string()))?;

    let state = state.ok_or_else(|| AppError::Internal("Address state not found".to_string()))?;

    Ok(Json(AddressResponse {
        full_address: address.format_full_address(&state.name),
        address,
    }))
}

/// List addresses in their default order (staff)
pub async fn list_addresses(State(app): State<AppState>) -> AppResult<Json<Vec<address::Model>>> {
    let addresses = address::Entity::find_ordered().all(&app.db).await?;
    Ok(Json(addresses))
}

/// Delete an address (staff). Users living at it are deleted with it.
pub async fn delete_address(
    State(app): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = address::Entity::delete_by_id(id).exec(&app.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Address not found".to_string()));
    }

    tracing::info!(address_id = %id, deleted_by = %claims.sub, "Address deleted");
    Ok(Json(serde_json::json!({ "message": "Address deleted" })))
}
