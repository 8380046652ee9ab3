use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::model::profile::Profile;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no `Authorization` header.
    #[error("Request is missing the Authorization header")]
    MissingToken,

    /// `Authorization` header is present but not of the form `Bearer <token>`.
    #[error("Authorization header is not a bearer token")]
    MalformedHeader,

    /// Token signature, format or claims could not be validated.
    #[error("Invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token was valid but its expiry has passed.
    #[error("Token has expired")]
    TokenExpired,

    /// Login with an email/password pair matching no administrator.
    ///
    /// Deliberately does not say which of the two fields was wrong.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Valid token whose profile is not allowed on the endpoint.
    #[error("Administrator {email} with profile {profile} is not allowed here")]
    AccessDenied {
        /// Email claim of the rejected token
        email: String,
        /// Profile claim of the rejected token
        profile: Profile,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// Responses carry no body so clients learn nothing about why a credential was
/// rejected. The reason is logged at debug level for diagnostics.
///
/// # Returns
/// - 401 Unauthorized - Missing, malformed, invalid or expired token, bad credentials
/// - 403 Forbidden - Authenticated but the profile is not permitted
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AccessDenied { .. } => StatusCode::FORBIDDEN.into_response(),
            Self::MissingToken
            | Self::MalformedHeader
            | Self::InvalidToken(_)
            | Self::TokenExpired
            | Self::InvalidCredentials => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}
