use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::profile::Profile;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoggedInAdministratorDto {
    pub email: String,
    pub profile: Profile,
    /// Bearer token to send in the `Authorization` header.
    pub token: String,
}

/// Administrator as exposed by the API. The password never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdministratorDto {
    pub id: i32,
    pub email: String,
    pub profile: Profile,
}

/// Missing fields deserialize to empty values and `profile` is kept as text so
/// they are reported by validation rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateAdministratorDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// `ADM` or `EDITOR`; other values are reported by validation.
    #[serde(default)]
    #[schema(value_type = Option<Profile>)]
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAdministratorDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// `ADM` or `EDITOR`; other values are reported by validation.
    #[serde(default)]
    #[schema(value_type = Option<Profile>)]
    pub profile: Option<String>,
}
