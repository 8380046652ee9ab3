//! Administrator domain models and parameters.
//!
//! Provides the administrator domain model together with the validated parameter
//! types used to create and update administrators.

use crate::{
    model::{
        administrator::{AdministratorDto, CreateAdministratorDto, UpdateAdministratorDto},
        profile::Profile,
    },
    server::{error::AppError, util::parse::parse_profile_from_string},
};

const EMAIL_REQUIRED: &str = "The EMAIL field is required.";
const PASSWORD_REQUIRED: &str = "The PASSWORD field is required.";
const PROFILE_REQUIRED: &str = "The PROFILE field is required.";
const PROFILE_INVALID: &str = "The PROFILE field must be ADM or EDITOR.";

/// Administrator account with login identity and access level.
#[derive(Debug, Clone, PartialEq)]
pub struct Administrator {
    /// Identifier assigned by the database.
    pub id: i32,
    /// Login identifier.
    pub email: String,
    /// Argon2id PHC string of the password.
    pub password_hash: String,
    pub profile: Profile,
}

impl Administrator {
    /// Converts the administrator domain model to a DTO for API responses.
    ///
    /// The password hash is dropped.
    pub fn into_dto(self) -> AdministratorDto {
        AdministratorDto {
            id: self.id,
            email: self.email,
            profile: self.profile,
        }
    }

    /// Converts an entity model to an administrator domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Administrator)` - The converted domain model
    /// - `Err(AppError::InternalErr(InvalidProfile))` - The stored profile is not `ADM` or `EDITOR`
    pub fn from_entity(entity: entity::administrator::Model) -> Result<Self, AppError> {
        let profile = parse_profile_from_string(entity.profile)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password,
            profile,
        })
    }
}

/// Fields of an administrator row about to be inserted, password already hashed.
#[derive(Debug, Clone)]
pub struct NewAdministrator {
    pub email: String,
    pub password_hash: String,
    pub profile: Profile,
}

/// Validated parameters for creating an administrator.
#[derive(Debug, Clone)]
pub struct CreateAdministratorParam {
    pub email: String,
    /// Plaintext password, hashed by the service before storage.
    pub password: String,
    pub profile: Profile,
}

impl CreateAdministratorParam {
    /// Validates a creation payload.
    ///
    /// # Returns
    /// - `Ok(CreateAdministratorParam)` - Every field rule passed
    /// - `Err(AppError::Validation)` - One message per failed rule
    pub fn from_dto(dto: CreateAdministratorDto) -> Result<Self, AppError> {
        let profile = validate_fields(&dto.email, &dto.password, dto.profile.as_deref())?;

        Ok(Self {
            email: dto.email,
            password: dto.password,
            profile,
        })
    }
}

/// Validated parameters for replacing every field of an administrator.
#[derive(Debug, Clone)]
pub struct UpdateAdministratorParam {
    pub id: i32,
    pub email: String,
    /// Plaintext password, hashed by the service before storage.
    pub password: String,
    pub profile: Profile,
}

impl UpdateAdministratorParam {
    /// Validates an update payload for the administrator `id`.
    ///
    /// # Returns
    /// - `Ok(UpdateAdministratorParam)` - Every field rule passed
    /// - `Err(AppError::Validation)` - One message per failed rule
    pub fn from_dto(id: i32, dto: UpdateAdministratorDto) -> Result<Self, AppError> {
        let profile = validate_fields(&dto.email, &dto.password, dto.profile.as_deref())?;

        Ok(Self {
            id,
            email: dto.email,
            password: dto.password,
            profile,
        })
    }
}

fn validate_fields(
    email: &str,
    password: &str,
    profile: Option<&str>,
) -> Result<Profile, AppError> {
    let mut messages = Vec::new();

    if email.is_empty() {
        messages.push(EMAIL_REQUIRED.to_string());
    }
    if password.is_empty() {
        messages.push(PASSWORD_REQUIRED.to_string());
    }
    let profile = match profile {
        None | Some("") => {
            messages.push(PROFILE_REQUIRED.to_string());
            None
        }
        Some(value) => match value.parse::<Profile>() {
            Ok(profile) => Some(profile),
            Err(_) => {
                messages.push(PROFILE_INVALID.to_string());
                None
            }
        },
    };

    match profile {
        Some(profile) if messages.is_empty() => Ok(profile),
        _ => Err(AppError::Validation(messages)),
    }
}
