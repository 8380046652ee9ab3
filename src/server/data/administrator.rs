//! Administrator data repository for database operations.
//!
//! This module provides the `AdministratorRepository` for managing administrator records in
//! the database. It handles creation, updates, queries and deletion with proper conversion
//! between entity models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::profile::Profile,
    server::{
        error::AppError,
        model::{
            administrator::{Administrator, NewAdministrator},
            page::{Page, PAGE_SIZE},
        },
    },
};

/// Repository providing database operations for administrator management.
pub struct AdministratorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdministratorRepository<'a> {
    /// Creates a new AdministratorRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new administrator.
    ///
    /// Email uniqueness is not enforced here.
    ///
    /// # Arguments
    /// - `new` - Email, hashed password and profile of the administrator
    ///
    /// # Returns
    /// - `Ok(Administrator)` - The created administrator with its assigned id
    /// - `Err(AppError::DbErr)` - Database error during insert operation
    pub async fn create(&self, new: NewAdministrator) -> Result<Administrator, AppError> {
        let entity = entity::administrator::ActiveModel {
            email: ActiveValue::Set(new.email),
            password: ActiveValue::Set(new.password_hash),
            profile: ActiveValue::Set(new.profile.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Administrator::from_entity(entity)
    }

    /// Finds an administrator by id.
    ///
    /// # Returns
    /// - `Ok(Some(Administrator))` - Administrator found
    /// - `Ok(None)` - No administrator with that id
    /// - `Err(AppError)` - Database error or unreadable stored profile
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Administrator>, AppError> {
        let entity = entity::prelude::Administrator::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Administrator::from_entity).transpose()
    }

    /// Gets one page of administrators ordered by id.
    ///
    /// # Arguments
    /// - `page` - Normalized 1-indexed page; each page holds `PAGE_SIZE` records
    ///
    /// # Returns
    /// - `Ok(Vec<Administrator>)` - Up to `PAGE_SIZE` administrators, empty past the last page
    /// - `Err(AppError)` - Database error or unreadable stored profile
    pub async fn list_page(&self, page: Page) -> Result<Vec<Administrator>, AppError> {
        let entities = entity::prelude::Administrator::find()
            .order_by_asc(entity::administrator::Column::Id)
            .offset(page.offset())
            .limit(PAGE_SIZE)
            .all(self.db)
            .await?;

        entities.into_iter().map(Administrator::from_entity).collect()
    }

    /// Finds every administrator with exactly the given email, ordered by id.
    ///
    /// Used by login, which verifies the password against each candidate in turn.
    pub async fn find_all_by_email(&self, email: &str) -> Result<Vec<Administrator>, AppError> {
        let entities = entity::prelude::Administrator::find()
            .filter(entity::administrator::Column::Email.eq(email))
            .order_by_asc(entity::administrator::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Administrator::from_entity).collect()
    }

    /// Checks whether any administrator holds the given profile.
    pub async fn exists_with_profile(&self, profile: Profile) -> Result<bool, DbErr> {
        let count = entity::prelude::Administrator::find()
            .filter(entity::administrator::Column::Profile.eq(profile.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Persists every field of an existing administrator.
    ///
    /// # Arguments
    /// - `administrator` - Administrator whose `id` selects the row to overwrite
    ///
    /// # Returns
    /// - `Ok(Administrator)` - The stored administrator after the update
    /// - `Err(AppError::DbErr(DbErr::RecordNotFound))` - No administrator exists with that id
    /// - `Err(AppError)` - Other database error during update operation
    pub async fn update(&self, administrator: Administrator) -> Result<Administrator, AppError> {
        let existing = entity::prelude::Administrator::find_by_id(administrator.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Administrator with id {} not found",
                administrator.id
            )))?;

        let mut active_model: entity::administrator::ActiveModel = existing.into();
        active_model.email = ActiveValue::Set(administrator.email);
        active_model.password = ActiveValue::Set(administrator.password_hash);
        active_model.profile = ActiveValue::Set(administrator.profile.to_string());

        let entity = active_model.update(self.db).await?;

        Administrator::from_entity(entity)
    }

    /// Deletes an administrator.
    ///
    /// # Returns
    /// - `Ok(())` - Administrator deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Administrator::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
