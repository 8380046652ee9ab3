use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ADMIN_EMAIL: &str = "admin@teste.com";
const DEFAULT_ADMIN_PASSWORD: &str = "123456";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Symmetric HMAC-SHA256 key used to sign bearer tokens.
    pub jwt_secret: String,

    /// Credentials of the administrator created when the database has no `ADM`.
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            jwt_secret: required("JWT_SECRET")?,
            admin_email: optional("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
            admin_password: optional("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    let value = std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))?;

    if value.trim().is_empty() {
        return Err(ConfigError::EmptyEnvVar(name.to_string()));
    }

    Ok(value)
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
