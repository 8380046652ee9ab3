//! Password hashing using Argon2id.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash as Argon2Hash, PasswordHasher as Argon2Hasher,
        PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes and verifies administrator passwords.
///
/// Hashing is CPU-bound, so both operations run on tokio's blocking pool.
#[derive(Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with Argon2's default (OWASP minimum) parameters.
    pub fn new() -> Self {
        Self {
            params: Params::DEFAULT,
        }
    }

    /// Creates a hasher with custom cost parameters.
    ///
    /// # Arguments
    /// - `memory_cost` - Memory in KiB, at least `8 * parallelism`
    /// - `time_cost` - Number of iterations
    /// - `parallelism` - Degree of parallelism
    pub fn with_params(
        memory_cost: u32,
        time_cost: u32,
        parallelism: u32,
    ) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_cost, time_cost, parallelism, None)?;

        Ok(Self { params })
    }

    /// Hashes a password into a PHC string with a fresh random salt.
    ///
    /// # Returns
    /// - `Ok(String)` - PHC formatted Argon2id hash
    /// - `Err(AppError::InternalErr)` - Hashing failed or the blocking task panicked
    pub async fn hash(&self, password: String) -> Result<String, AppError> {
        let params = self.params.clone();

        let hash = tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
        })
        .await
        .map_err(InternalError::from)?
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        Ok(hash)
    }

    /// Checks a password against a stored PHC string.
    ///
    /// The cost parameters are read from the stored hash, so hashes produced with
    /// other settings still verify. A stored value that is not a PHC string never
    /// matches.
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match or the stored value is unusable
    /// - `Err(AppError::InternalErr)` - The blocking task panicked
    pub async fn verify(&self, password: String, stored_hash: String) -> Result<bool, AppError> {
        let matches = tokio::task::spawn_blocking(move || {
            let Ok(parsed) = Argon2Hash::new(&stored_hash) else {
                tracing::warn!("Stored password is not a valid PHC string");
                return false;
            };

            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .await
        .map_err(InternalError::from)?;

        Ok(matches)
    }

    /// Spends the same Argon2 work as a verification and never matches.
    ///
    /// Used when no stored hash exists for a login, so a failed login takes as long
    /// whether the email or the password was wrong.
    pub async fn verify_without_hash(&self, password: String) -> Result<bool, AppError> {
        self.hash(password).await?;

        Ok(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
