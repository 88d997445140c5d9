use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod password;

/// Payload of a session token. The administrator identifier is the only
/// identity the token carries; everything else about the admin is resolved
/// from the store on each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Administrator id.
    pub sub: Uuid,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
}

impl Claims {
    pub fn new(admin_id: Uuid, validity: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: admin_id,
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("signing secret is not configured")]
    MissingSecret,
    #[error("token rejected")]
    InvalidToken,
    #[error("token generation failed: {0}")]
    TokenGeneration(String),
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Issues and verifies signed session tokens. Holds the process signing
/// secret and the validity window; stateless beyond that, so verification is
/// pure computation over the token and the secret.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    validity: Duration,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, validity_days: i64) -> Self {
        Self {
            secret: secret.into(),
            validity: Duration::days(validity_days),
        }
    }

    /// Mint a signed token for the given administrator, expiring one
    /// validity window from now.
    pub fn issue(&self, admin_id: Uuid) -> Result<String, AuthError> {
        if self.secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let claims = Claims::new(admin_id, self.validity);
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    /// Verify signature and expiry. Every failure collapses into
    /// `AuthError::InvalidToken` so callers cannot leak which check failed.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        if self.secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The secret stays out of debug output
        f.debug_struct("TokenIssuer")
            .field("validity", &self.validity)
            .finish()
    }
}
