use std::{fmt, str::FromStr};

use crate::EngineError;

/// Role of whoever drives a [`Gateway`](crate::Gateway).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Reader,
    Editor,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reader => "Reader",
            Self::Editor => "Editor",
            Self::Admin => "Admin",
        }
    }

    /// Editors and admins may add operations; readers may not.
    pub fn can_write(self) -> bool {
        matches!(self, Self::Editor | Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = EngineError;

    /// Case-insensitive: `reader`, `Editor`, `ADMIN` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reader" => Ok(Self::Reader),
            "editor" => Ok(Self::Editor),
            "admin" => Ok(Self::Admin),
            other => Err(EngineError::InvalidRole(format!("unknown role: {other}"))),
        }
    }
}
