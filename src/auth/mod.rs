use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by tokens from the sign-in service. Only `id` is required;
/// `exp` is checked whenever the issuer set it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Claims that expire `expiry_hours` from now.
    pub fn new(user_id: impl Into<String>, expiry_hours: u64) -> Self {
        let now = Utc::now();
        Self {
            id: user_id.into(),
            exp: Some((now + Duration::hours(expiry_hours as i64)).timestamp()),
            iat: Some(now.timestamp()),
        }
    }

    /// Claims without an expiry, the shape the sign-in service hands out.
    pub fn without_expiry(user_id: impl Into<String>) -> Self {
        Self {
            id: user_id.into(),
            exp: None,
            iat: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT secret not configured")]
    InvalidSecret,

    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT token: {0}")]
    Invalid(String),

    #[error("JWT token carries no user id")]
    MissingUserId,
}

pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Verify signature and time claims of `token` and return its claims. No grace period
/// is applied: `exp` must be in the future, `nbf` and `iat` must not be.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }
    if token.is_empty() {
        return Err(JwtError::Invalid("empty token".to_string()));
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    validation.required_spec_claims.clear();
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.leeway = 0;

    let token_data =
        decode::<Claims>(token, &decoding_key, &validation).map_err(|e| JwtError::Invalid(e.to_string()))?;

    // jsonwebtoken still accepts exp == now and never looks at iat
    let now = Utc::now().timestamp();
    if token_data.claims.exp.is_some_and(|exp| exp <= now) {
        return Err(JwtError::Invalid("token expired".to_string()));
    }
    if token_data.claims.iat.is_some_and(|iat| iat > now) {
        return Err(JwtError::Invalid("token issued in the future".to_string()));
    }

    if token_data.claims.id.is_empty() {
        return Err(JwtError::MissingUserId);
    }

    Ok(token_data.claims)
}
