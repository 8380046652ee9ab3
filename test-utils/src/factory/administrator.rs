//! Administrator factory for creating test administrator entities.
//!
//! Factories insert rows directly, so the stored password is whatever string the
//! factory is given. Tests that need a password that verifies at login should
//! create the administrator through the service instead.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test administrators with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::administrator::AdministratorFactory;
///
/// let editor = AdministratorFactory::new(&db)
///     .email("editor@teste.com")
///     .profile("EDITOR")
///     .build()
///     .await?;
/// ```
pub struct AdministratorFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password: String,
    profile: String,
}

impl<'a> AdministratorFactory<'a> {
    /// Creates a new AdministratorFactory with default values.
    ///
    /// Defaults:
    /// - email: `"admin{id}@teste.com"` where id is auto-incremented
    /// - password: `"not-a-hash"`
    /// - profile: `"ADM"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("admin{}@teste.com", id),
            password: "not-a-hash".to_string(),
            profile: "ADM".to_string(),
        }
    }

    /// Sets the email for the administrator.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the raw stored password value.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the stored profile string (`"ADM"` or `"EDITOR"`).
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Builds and inserts the administrator entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::administrator::Model)` - Created administrator with assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::administrator::Model, DbErr> {
        entity::administrator::ActiveModel {
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            profile: ActiveValue::Set(self.profile),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `ADM` administrator with default values.
pub async fn create_administrator(
    db: &DatabaseConnection,
) -> Result<entity::administrator::Model, DbErr> {
    AdministratorFactory::new(db).build().await
}
