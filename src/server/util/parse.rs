use crate::{
    model::profile::Profile,
    server::error::{internal::InternalError, AppError},
};

/// Parses a stored profile column into a `Profile`.
///
/// # Arguments
/// - `value` - The String read from the `profile` column
///
/// # Returns
/// - `Ok(Profile)` - Successfully parsed `ADM` or `EDITOR`
/// - `Err(AppError::InternalErr(InvalidProfile))` - The column holds anything else
pub fn parse_profile_from_string(value: String) -> Result<Profile, AppError> {
    let profile = value
        .parse::<Profile>()
        .map_err(|_| InternalError::InvalidProfile { value })?;

    Ok(profile)
}
