use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::{
    model::profile::Profile,
    server::{
        error::{auth::AuthError, AppError},
        service::token::{Claims, TokenService},
    },
};

const BEARER_SCHEME: &str = "Bearer";

pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Requires a valid bearer token whose role is one of `profiles`.
    ///
    /// An empty `profiles` slice admits any authenticated administrator.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Claims of the accepted token
    /// - `Err(AuthError::MissingToken | MalformedHeader | InvalidToken | TokenExpired)` - 401
    /// - `Err(AuthError::AccessDenied)` - Token is valid but its role is not permitted, 403
    pub fn require(&self, profiles: &[Profile]) -> Result<Claims, AppError> {
        let Some(header) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let token = header
            .to_str()
            .ok()
            .and_then(bearer_token)
            .ok_or(AuthError::MalformedHeader)?;

        let claims = self.tokens.validate(token)?;

        if !profiles.is_empty() && !profiles.contains(&claims.role) {
            return Err(AuthError::AccessDenied {
                email: claims.email,
                profile: claims.role,
            }
            .into());
        }

        Ok(claims)
    }
}

/// Extracts the token of a `Bearer <token>` header value. The scheme is
/// matched case-insensitively.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.is_empty()).then_some(token)
}
