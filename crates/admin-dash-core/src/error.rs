//! Error types for admin-dash-core.
//!
//! A missing DOM element is never an error; those commands are skipped by the
//! renderer. The types here cover inputs that can actually be malformed.

use thiserror::Error;

/// Errors raised while loading or validating a [`DashboardConfig`](crate::DashboardConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parse failure.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parse failure.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse failure.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A field holds a value outside its accepted range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised by the user table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Page size must be at least one row.
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    /// The page-size selector produced something that is not a number.
    #[error("page size `{0}` is not a number")]
    UnparsablePageSize(String),
}

/// Errors raised while loading user records from a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture is not a valid JSON array of users.
    #[error("user fixture parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an identifier.
    #[error("duplicate user id {0}")]
    DuplicateId(u32),
}

/// Errors returned by a [`UserActions`](crate::UserActions) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action targets a record the collaborator does not know.
    #[error("user {0} not found")]
    UnknownUser(u32),

    /// The collaborator refused or failed the action.
    #[error("{action} failed: {reason}")]
    Failed {
        /// Action label
        action: String,
        /// Failure description
        reason: String,
    },
}
