//! Logging of failed resolutions.
//!
//! Sections call [`ResultExt::log`] on their `envy` result so the variable at
//! fault and the call site reach the logs before the error is propagated.

use tracing::error;

use crate::error::{ConfigError, ConfigResult};

/// Extension trait for logging resolution errors with context.
pub trait ResultExt<T> {
    /// Log the error with context if this is an `Err` variant.
    ///
    /// The `variable` field carries the name of the missing or unreadable
    /// variable, or `-` for errors that are not about a single variable.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use superset_config::result_ext::ResultExt;
    ///
    /// let postgres = env
    ///     .section::<PostgresConfig>("POSTGRES_")
    ///     .log("Provide missing PostgreSQL environment variables")?;
    /// ```
    fn log<S: ToString>(self, context: S) -> ConfigResult<T>;
}

impl<T> ResultExt<T> for ConfigResult<T> {
    #[track_caller]
    fn log<S: ToString>(self, context: S) -> ConfigResult<T> {
        if let Err(ref e) = self {
            let location = std::panic::Location::caller();
            error!(
                target: "superset_config",
                variable = e.variable().unwrap_or("-"),
                kind = kind(e),
                error = %e,
                file = %format!("{}:{}", location.file(), location.line()),
                context = %context.to_string(),
                "Settings resolution failed"
            );
        }
        self
    }
}

fn kind(err: &ConfigError) -> &'static str {
    match err {
        ConfigError::Missing { .. } => "missing",
        ConfigError::Unreadable { .. } => "unreadable",
        ConfigError::Environment(_) => "environment",
        ConfigError::Template { .. } => "template",
        ConfigError::UnknownKey(_) => "unknown_key",
        ConfigError::Serialization(_) => "serialization",
    }
}
