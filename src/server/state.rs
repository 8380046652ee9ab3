//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::{password::PasswordHasher, token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` keeps its keys behind `Arc`
/// - `PasswordHasher` only holds Argon2 parameters
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and validates bearer tokens.
    pub tokens: TokenService,

    /// Hashes and verifies administrator passwords.
    pub passwords: PasswordHasher,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the server secret
    /// - `passwords` - Password hasher
    pub fn new(db: DatabaseConnection, tokens: TokenService, passwords: PasswordHasher) -> Self {
        Self {
            db,
            tokens,
            passwords,
        }
    }
}
