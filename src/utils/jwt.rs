use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::user::{self, UserType};
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,       // user id
    pub username: String,
    pub user_type: UserType,
    pub is_staff: bool,
    pub exp: i64,        // expiration timestamp
    pub iat: i64,        // issued at timestamp
}

pub fn create_token(user: &user::Model, secret: &str, expiration_hours: i64) -> AppResult<String> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        user_type: user.user_type,
        is_staff: user.is_staff,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
}

pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> user::Model {
        user::Model {
            id: Uuid::new_v4(),
            username: "apu".to_string(),
            password: String::new(),
            first_name: "Apu".to_string(),
            last_name: "Nahasapeemapetilon".to_string(),
            email: "apu@example.com".to_string(),
            is_staff: true,
            is_active: true,
            is_superuser: false,
            last_login: None,
            date_joined: Utc::now().into(),
            user_type: UserType::RestaurantOwner,
            mobile: "5550100".to_string(),
            date_of_birth: None,
            gender: None,
            city: None,
            address_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_token_round_trip_carries_role() {
        let user = sample_user();
        let token = create_token(&user, "secret", 1).unwrap();
        let claims = verify_token(&token, "secret").unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "apu");
        assert_eq!(claims.user_type, UserType::RestaurantOwner);
        assert!(claims.is_staff);
    }

    #[test]
    fn test_token_with_wrong_secret_is_unauthorized() {
        let token = create_token(&sample_user(), "secret", 1).unwrap();
        assert!(matches!(
            verify_token(&token, "other"),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = create_token(&sample_user(), "secret", -2).unwrap();
        assert!(verify_token(&token, "secret").is_err());
    }
}
