use axum::http::{HeaderMap, header};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presentation::http::errors::AppError;

/// Claims carried by tokens issued by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// User id
    pub sub: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    pub exp: usize,
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
}

pub fn decode_user_claims(headers: &HeaderMap, secret: &str) -> Option<UserClaims> {
    let token = extract_bearer_token(headers)?;
    decode::<UserClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|d| d.claims)
}

/// Id of the authenticated caller.
///
/// # Errors
///
/// `AppError::Forbidden` when the token is missing, invalid, expired, or its
/// subject is not a UUID.
pub fn require_user_id(headers: &HeaderMap, secret: &str) -> Result<Uuid, AppError> {
    let claims = decode_user_claims(headers, secret)
        .ok_or_else(|| AppError::Forbidden("Missing or invalid bearer token".to_string()))?;
    Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Forbidden(format!("Token subject is not a user id: {}", claims.sub)))
}
