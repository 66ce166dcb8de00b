//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] and [`InvalidRate`] when user input is not a decimal.
//! - [`InvalidRole`] when a role name is not recognised.
//! - [`Io`] and [`Json`] when the ledger store cannot be read or written.
//!
//! Denied mutations are not errors: see [`AddOutcome`].
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidRate`]: EngineError::InvalidRate
//!  [`InvalidRole`]: EngineError::InvalidRole
//!  [`Io`]: EngineError::Io
//!  [`Json`]: EngineError::Json
//!  [`AddOutcome`]: crate::AddOutcome
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid rate: {0}")]
    InvalidRate(String),
    #[error("Invalid role: {0}")]
    InvalidRole(String),
    #[error("Invalid operation kind: {0}")]
    InvalidKind(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidRate(a), Self::InvalidRate(b)) => a == b,
            (Self::InvalidRole(a), Self::InvalidRole(b)) => a == b,
            (Self::InvalidKind(a), Self::InvalidKind(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
