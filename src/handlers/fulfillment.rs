use axum::{
    extract::{Path, State},
    Extension, Json,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::user::{self, UserType};
use crate::entities::{address, bill, delivery, restaurant};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::AppState;

/// Deliveries the current user receives or carries, newest first
pub async fn my_deliveries(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<delivery::Model>>> {
    let deliveries = delivery::Entity::find()
        .filter(
            Condition::any()
                .add(delivery::Column::UserId.eq(claims.sub))
                .add(delivery::Column::DeliveryBoyId.eq(claims.sub)),
        )
        .order_by_desc(delivery::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(deliveries))
}

#[derive(Debug, Deserialize)]
pub struct CreateDeliveryRequest {
    pub user_id: Uuid,
    pub delivery_boy_id: Uuid,
    pub user_address_id: Uuid,
    pub restaurant_id: Uuid,
    pub bill_id: Uuid,
}

/// Record a delivery assignment (staff)
pub async fn create_delivery(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateDeliveryRequest>,
) -> AppResult<Json<delivery::Model>> {
    user::Entity::find_by_id(payload.user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid customer".to_string()))?;

    let agent = user::Entity::find_by_id(payload.delivery_boy_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid delivery agent".to_string()))?;

    if agent.user_type != UserType::DeliveryBoy {
        return Err(AppError::BadRequest("User is not a delivery agent".to_string()));
    }

    address::Entity::find_by_id(payload.user_address_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid address".to_string()))?;

    restaurant::Entity::find_by_id(payload.restaurant_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid restaurant".to_string()))?;

    bill::Entity::find_by_id(payload.bill_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid bill".to_string()))?;

    let delivery = delivery::ActiveModel {
        user_id: Set(payload.user_id),
        delivery_boy_id: Set(agent.id),
        user_address_id: Set(payload.user_address_id),
        restaurant_id: Set(payload.restaurant_id),
        bill_id: Set(payload.bill_id),
        created_by: Set(Some(claims.sub)),
        updated_by: Set(Some(claims.sub)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(
        delivery_id = %delivery.id,
        delivery_boy_id = %delivery.delivery_boy_id,
        "Delivery recorded"
    );
    Ok(Json(delivery))
}

/// Delete a delivery (staff)
pub async fn delete_delivery(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = delivery::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Delivery not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Delivery deleted" })))
}
