use thiserror::Error;
use tokio::task::JoinError;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored profile string does not map to a known `Profile`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Stored profile '{value}' is not a known profile")]
    InvalidProfile {
        /// The string value read from the database
        value: String,
    },

    /// Argon2 failed to hash a password.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Failed to sign a token.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    /// A blocking task panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] JoinError),
}
