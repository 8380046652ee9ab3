use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Access level of an administrator account.
///
/// Serialized as `ADM` / `EDITOR` both in JSON and in the `profile` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Profile {
    Adm,
    Editor,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adm => "ADM",
            Self::Editor => "EDITOR",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown profile '{0}'")]
pub struct ParseProfileError(pub String);

impl FromStr for Profile {
    type Err = ParseProfileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADM" => Ok(Self::Adm),
            "EDITOR" => Ok(Self::Editor),
            other => Err(ParseProfileError(other.to_string())),
        }
    }
}
