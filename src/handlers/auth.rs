use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::address;
use crate::entities::user::{self, Gender, UserType};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::create_token;
use crate::AppState;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default = "default_user_type")]
    pub user_type: UserType,
    pub mobile: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub city: Option<String>,
    pub address_id: Uuid,
}

fn default_user_type() -> UserType {
    UserType::Customer
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: user::Model,
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Register a new account
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    if payload.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    let existing = user::Entity::find()
        .filter(user::Column::Username.eq(&payload.username))
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(AppError::Conflict("Username already taken".to_string()));
    }

    address::Entity::find_by_id(payload.address_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid address".to_string()))?;

    let new_user = user::ActiveModel {
        username: Set(payload.username),
        password: Set(hash_password(&payload.password)?),
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        email: Set(payload.email),
        is_staff: Set(false),
        is_active: Set(true),
        is_superuser: Set(false),
        last_login: Set(None),
        user_type: Set(payload.user_type),
        mobile: Set(payload.mobile),
        date_of_birth: Set(payload.date_of_birth),
        gender: Set(payload.gender),
        city: Set(payload.city),
        address_id: Set(payload.address_id),
        ..Default::default()
    };

    let user = new_user.insert(&state.db).await?;
    tracing::info!(user_id = %user.id, user_type = %user.user_type, "User registered");

    let token = create_token(&user, &state.config.jwt_secret, state.config.jwt_expiration_hours)?;

    Ok(Json(AuthResponse { token, user }))
}

/// Login with username and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = user::Entity::find()
        .filter(user::Column::Username.eq(&payload.username))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

    let parsed_hash = PasswordHash::new(&user.password)
        .map_err(|e| AppError::Internal(format!("Failed to parse password hash: {}", e)))?;

    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized("Invalid username or password".to_string()))?;

    if !user.is_active {
        return Err(AppError::Forbidden("Account is disabled".to_string()));
    }

    let mut active: user::ActiveModel = user.into();
    active.last_login = Set(Some(Utc::now().into()));
    let user = active.update(&state.db).await?;

    let token = create_token(&user, &state.config.jwt_secret, state.config.jwt_expiration_hours)?;

    Ok(Json(AuthResponse { token, user }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_verifies() {
        let hash = hash_password("correct horse").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();

        assert!(Argon2::default().verify_password(b"correct horse", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"wrong horse", &parsed).is_err());
    }
}
