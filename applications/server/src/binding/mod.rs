//! Request parameter binding
//!
//! [`FormParams`] is the raw multi-map every strategy starts from. Handlers
//! either read it by hand, ask it for typed values by name, or hand it to a
//! [`FromParams`] implementation through the [`Command`] extractor.

mod command;
mod params;

pub use command::{Command, FromParams};
pub use params::FormParams;

use thiserror::Error;

/// Parameter binding failure; always the client's fault
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("Required parameter '{0}' is not present")]
    Missing(String),

    #[error("Invalid value '{value}' for parameter '{name}': {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

impl BindError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing(name.into())
    }

    pub fn invalid(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::Invalid {
            name: name.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
