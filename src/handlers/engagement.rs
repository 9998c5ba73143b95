use axum::{
    extract::{Path, State},
    Extension, Json,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::notification::{self, NotificationType};
use crate::entities::rating::{self, RatingScore, RatingType};
use crate::entities::user::{self, UserType};
use crate::entities::{menu, order, restaurant};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::AppState;

// ============ Notifications ============

/// The current user's notifications, newest first
pub async fn my_notifications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<notification::Model>>> {
    let notifications = notification::Entity::find()
        .filter(notification::Column::UserId.eq(claims.sub))
        .order_by_desc(notification::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(notifications))
}

/// Mark one of the current user's notifications as read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<notification::Model>> {
    let notification = notification::Entity::find_by_id(id)
        .filter(notification::Column::UserId.eq(claims.sub))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

    if notification.is_read {
        return Ok(Json(notification));
    }

    let mut active: notification::ActiveModel = notification.into();
    active.is_read = Set(true);
    active.updated_by = Set(Some(claims.sub));

    Ok(Json(active.update(&state.db).await?))
}

#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub user_id: Uuid,
    pub order_id: Uuid,
    pub message: String,
}

/// Store a notification for a user (staff). Nothing is sent.
pub async fn create_notification(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateNotificationRequest>,
) -> AppResult<Json<notification::Model>> {
    user::Entity::find_by_id(payload.user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid user".to_string()))?;

    order::Entity::find_by_id(payload.order_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid order".to_string()))?;

    let notification = notification::ActiveModel {
        notification_type: Set(payload.notification_type),
        user_id: Set(payload.user_id),
        order_id: Set(payload.order_id),
        message: Set(payload.message),
        is_read: Set(false),
        created_by: Set(Some(claims.sub)),
        updated_by: Set(Some(claims.sub)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(notification))
}

// ============ Ratings ============

#[derive(Debug, Deserialize)]
pub struct CreateRatingRequest {
    pub rating: RatingType,
    #[serde(rename = "type")]
    pub score: RatingScore,
    pub menu_id: Option<Uuid>,
    pub restaurant_id: Option<Uuid>,
    pub delivery_boy_id: Uuid,
}

/// Rate as the current user
pub async fn create_rating(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateRatingRequest>,
) -> AppResult<Json<rating::Model>> {
    let agent = user::Entity::find_by_id(payload.delivery_boy_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid delivery agent".to_string()))?;

    if agent.user_type != UserType::DeliveryBoy {
        return Err(AppError::BadRequest("User is not a delivery agent".to_string()));
    }

    if let Some(menu_id) = payload.menu_id {
        menu::Entity::find_by_id(menu_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid menu".to_string()))?;
    }

    if let Some(restaurant_id) = payload.restaurant_id {
        restaurant::Entity::find_by_id(restaurant_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid restaurant".to_string()))?;
    }

    let rating = rating::ActiveModel {
        rating: Set(payload.rating),
        user_id: Set(claims.sub),
        score: Set(payload.score),
        menu_id: Set(payload.menu_id),
        restaurant_id: Set(payload.restaurant_id),
        delivery_boy_id: Set(agent.id),
        updated_by: Set(Some(claims.sub)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(rating))
}

/// The current user's ratings
pub async fn my_ratings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<rating::Model>>> {
    let ratings = rating::Entity::find()
        .filter(rating::Column::UserId.eq(claims.sub))
        .order_by_desc(rating::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(ratings))
}
