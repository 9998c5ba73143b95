use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::address;
use crate::entities::user::{self, Gender};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::AppState;

/// Current account
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<user::Model>> {
    let user = user::Entity::find_by_id(claims.sub)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub city: Option<String>,
    pub address_id: Option<Uuid>,
}

/// Update profile fields of the current account
pub async fn update_me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<user::Model>> {
    let user = user::Entity::find_by_id(claims.sub)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let mut active: user::ActiveModel = user.into();

    if let Some(first_name) = payload.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = payload.last_name {
        active.last_name = Set(last_name);
    }
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    if let Some(mobile) = payload.mobile {
        active.mobile = Set(mobile);
    }
    if let Some(date_of_birth) = payload.date_of_birth {
        active.date_of_birth = Set(Some(date_of_birth));
    }
    if let Some(gender) = payload.gender {
        active.gender = Set(Some(gender));
    }
    if let Some(city) = payload.city {
        active.city = Set(Some(city));
    }
    if let Some(address_id) = payload.address_id {
        address::Entity::find_by_id(address_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid address".to_string()))?;
        active.address_id = Set(address_id);
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// List all users (staff)
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<user::Model>>> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Username)
        .all(&state.db)
        .await?;

    Ok(Json(users))
}

/// Delete a user (staff). Rejected while orders, carts or other rows still
/// reference the account.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    if id == claims.sub {
        return Err(AppError::BadRequest("Cannot delete your own account".to_string()));
    }

    let result = user::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    tracing::info!(user_id = %id, deleted_by = %claims.sub, "User deleted");
    Ok(Json(serde_json::json!({ "message": "User deleted" })))
}
