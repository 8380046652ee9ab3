//! Bearer token issuance and validation.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::profile::Profile,
    server::{
        error::{auth::AuthError, internal::InternalError, AppError},
        model::administrator::Administrator,
    },
};

/// How long an issued token stays valid.
pub const TOKEN_TTL_HOURS: i64 = 1;

/// Claims carried by every token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub profile: Profile,
    /// Access claim checked by `AuthGuard`; always equal to `profile`.
    pub role: Profile,
    /// Issued at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Signs and validates HMAC-SHA256 tokens with the server secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service issuing tokens valid for `TOKEN_TTL_HOURS`.
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, Duration::hours(TOKEN_TTL_HOURS))
    }

    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding_key: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            ttl,
        }
    }

    /// Issues a token asserting the administrator's email and profile.
    ///
    /// # Returns
    /// - `Ok(String)` - Compact JWT signed with HS256
    /// - `Err(AppError::InternalErr(TokenEncoding))` - Signing failed
    pub fn issue(&self, administrator: &Administrator) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            email: administrator.email.clone(),
            profile: administrator.profile,
            role: administrator.profile,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(InternalError::TokenEncoding)?;

        Ok(token)
    }

    /// Validates a token's signature and expiry and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired
    /// - `Err(AuthError::TokenExpired)` - Token expired
    /// - `Err(AuthError::InvalidToken)` - Any other validation failure
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e),
            })
    }
}
