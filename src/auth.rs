use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// JWT claims carried by every bearer token.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub exp: usize,
}

/// Signing secret, injected as actix app data.
#[derive(Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
}

const TOKEN_LIFETIME_DAYS: i64 = 1;

pub fn create_token(
    id: i32,
    username: &str,
    role: &str,
    secret: &str,
) -> Result<String, ApiError> {
    let exp = (Utc::now() + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp() as usize;
    let claims = Claims {
        id,
        username: username.to_string(),
        role: role.to_string(),
        exp,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| {
        log::error!("Failed to sign token: {}", err);
        ApiError::Internal
    })
}

/// Decode and validate a bearer token. All failure modes (bad signature,
/// malformed token, expired) collapse to `Unauthorized`.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthorized)
}

pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(bcrypt::verify(password, hash)?)
}

/// The authenticated caller, extracted from the `Authorization` header.
/// Handlers that take an `AuthUser` parameter reject unauthenticated
/// requests with 401 before any query runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl AuthUser {
    fn from_http_request(req: &HttpRequest) -> Result<Self, ApiError> {
        let settings = req
            .app_data::<web::Data<AuthSettings>>()
            .ok_or_else(|| {
                log::error!("AuthSettings app data is not configured");
                ApiError::Internal
            })?;

        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(ApiError::Unauthorized)?;

        let claims = decode_token(token, &settings.jwt_secret)?;

        Ok(AuthUser {
            id: claims.id,
            username: claims.username,
            role: claims.role,
        })
    }
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(AuthUser::from_http_request(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_round_trips_claims() {
        let token = create_token(7, "alice", "admin", SECRET).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();

        assert_eq!(claims.id, 7);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = create_token(7, "alice", "admin", "other-secret").unwrap();
        assert!(matches!(
            decode_token(&token, SECRET),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            decode_token("not.a.token", SECRET),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = Claims {
            id: 7,
            username: "alice".to_string(),
            role: "admin".to_string(),
            exp: (Utc::now() - Duration::hours(2)).timestamp() as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            decode_token(&token, SECRET),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn password_hash_verifies() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }
}
