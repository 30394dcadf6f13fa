//! Error types for settings resolution.
//!
//! Every fallible operation in this crate returns [`ConfigError`]. The loader
//! never recovers from a missing variable itself; the caller decides whether
//! to abort startup.

use thiserror::Error;

/// Errors raised while resolving or rendering settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent and has no default
    #[error("The environment variable {name} was missing, abort...")]
    Missing { name: String },

    /// A variable is present but its value is not valid unicode
    #[error("The environment variable {name} is not valid unicode, abort...")]
    Unreadable { name: String },

    /// The environment could not be deserialized into a settings section
    #[error("Invalid environment: {0}")]
    Environment(String),

    /// A composite template and its parts disagree on arity
    #[error("Template expects {expected} values, got {actual}")]
    Template { expected: usize, actual: usize },

    /// Lookup of a setting that is not produced by the loader
    #[error("Unknown setting: {0}")]
    UnknownKey(String),

    /// Rendering of resolved settings failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    pub fn missing(name: impl Into<String>) -> Self {
        ConfigError::Missing { name: name.into() }
    }

    pub fn unreadable(name: impl Into<String>) -> Self {
        ConfigError::Unreadable { name: name.into() }
    }

    /// Variable the error is about, if any.
    pub fn variable(&self) -> Option<&str> {
        match self {
            ConfigError::Missing { name } | ConfigError::Unreadable { name } => Some(name),
            _ => None,
        }
    }

    /// Name of the missing variable, if this is a missing-variable error.
    pub fn missing_name(&self) -> Option<&str> {
        match self {
            ConfigError::Missing { name } => Some(name),
            _ => None,
        }
    }

    /// Convert an `envy` error raised for a prefixed section.
    ///
    /// `envy` reports the lowercased field name without its prefix, so the
    /// full variable name is rebuilt here (`POSTGRES_` + `user` -> `POSTGRES_USER`).
    pub fn from_envy(prefix: &str, err: envy::Error) -> Self {
        match err {
            envy::Error::MissingValue(field) => {
                ConfigError::missing(format!("{}{}", prefix, field.to_uppercase()))
            }
            other => ConfigError::Environment(format!("{prefix}*: {other}")),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}
