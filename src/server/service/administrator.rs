use sea_orm::DatabaseConnection;

use crate::{
    model::profile::Profile,
    server::{
        data::administrator::AdministratorRepository,
        error::AppError,
        model::{
            administrator::{
                Administrator, CreateAdministratorParam, NewAdministrator,
                UpdateAdministratorParam,
            },
            page::Page,
        },
        service::password::PasswordHasher,
    },
};

pub struct AdministratorService<'a> {
    db: &'a DatabaseConnection,
    passwords: &'a PasswordHasher,
}

impl<'a> AdministratorService<'a> {
    pub fn new(db: &'a DatabaseConnection, passwords: &'a PasswordHasher) -> Self {
        Self { db, passwords }
    }

    /// Creates an administrator, storing a hash of the supplied password
    pub async fn create(&self, param: CreateAdministratorParam) -> Result<Administrator, AppError> {
        let repo = AdministratorRepository::new(self.db);

        let password_hash = self.passwords.hash(param.password).await?;

        repo.create(NewAdministrator {
            email: param.email,
            password_hash,
            profile: param.profile,
        })
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Administrator>, AppError> {
        AdministratorRepository::new(self.db).find_by_id(id).await
    }

    pub async fn list_page(&self, page: Page) -> Result<Vec<Administrator>, AppError> {
        AdministratorRepository::new(self.db).list_page(page).await
    }

    /// Replaces every field of an administrator
    /// Returns None if the administrator doesn't exist
    pub async fn update(
        &self,
        param: UpdateAdministratorParam,
    ) -> Result<Option<Administrator>, AppError> {
        let repo = AdministratorRepository::new(self.db);

        if repo.find_by_id(param.id).await?.is_none() {
            return Ok(None);
        }

        let password_hash = self.passwords.hash(param.password).await?;

        let administrator = repo
            .update(Administrator {
                id: param.id,
                email: param.email,
                password_hash,
                profile: param.profile,
            })
            .await?;

        Ok(Some(administrator))
    }

    /// Deletes an administrator
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = AdministratorRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    /// Returns the first administrator (by id) whose email matches exactly and
    /// whose stored hash verifies against `password`
    ///
    /// An unknown email still costs one Argon2 computation.
    pub async fn validate_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Administrator>, AppError> {
        let candidates = AdministratorRepository::new(self.db)
            .find_all_by_email(email)
            .await?;

        if candidates.is_empty() {
            self.passwords
                .verify_without_hash(password.to_string())
                .await?;

            return Ok(None);
        }

        for candidate in candidates {
            if self
                .passwords
                .verify(password.to_string(), candidate.password_hash.clone())
                .await?
            {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    /// Creates an `ADM` administrator from the given credentials when none exists
    /// Returns the created administrator, or None if an `ADM` was already present
    pub async fn bootstrap(
        &self,
        email: String,
        password: String,
    ) -> Result<Option<Administrator>, AppError> {
        let repo = AdministratorRepository::new(self.db);

        if repo.exists_with_profile(Profile::Adm).await? {
            return Ok(None);
        }

        let administrator = self
            .create(CreateAdministratorParam {
                email,
                password,
                profile: Profile::Adm,
            })
            .await?;

        Ok(Some(administrator))
    }
}
