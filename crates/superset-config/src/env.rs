//! Environment snapshot and single-variable resolution.
//!
//! Settings are never read from the live process environment piecemeal.
//! A snapshot is taken once ([`Environment::from_process`]) and every section
//! resolves against it, so a load is deterministic for a fixed snapshot.

use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};

/// Immutable set of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
    /// Names of variables whose value is not valid unicode.
    unreadable: BTreeSet<String>,
}

impl Environment {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self::from_os_pairs(std::env::vars_os())
    }

    /// Build a snapshot from raw OS strings.
    ///
    /// A variable whose value is not valid unicode is remembered by name so
    /// that resolving it reports [`ConfigError::Unreadable`] instead of a
    /// missing variable.
    pub fn from_os_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut env = Self::default();
        for (key, value) in pairs {
            let key = key.to_string_lossy().into_owned();
            match value.into_string() {
                Ok(value) => {
                    env.vars.insert(key, value);
                }
                Err(_) => {
                    env.unreadable.insert(key);
                }
            }
        }
        env
    }

    /// Build a snapshot from explicit pairs (useful for tests and fixtures).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            vars,
            unreadable: BTreeSet::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Value of `name`, or `ConfigError::Missing` naming it.
    ///
    /// A variable that is present but empty resolves to the empty string.
    pub fn resolve_required(&self, name: &str) -> ConfigResult<String> {
        if self.unreadable.contains(name) {
            return Err(ConfigError::unreadable(name));
        }
        self.get(name)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::missing(name))
    }

    /// Value of `name`, or `default` when it is absent. Never fails.
    ///
    /// An unreadable value is treated as absent and logged.
    pub fn resolve_with_default(&self, name: &str, default: &str) -> String {
        if self.unreadable.contains(name) {
            warn!(variable = %name, "Value is not valid unicode, using default");
        }
        self.get(name).unwrap_or(default).to_string()
    }

    /// Deserialize the variables of one section into `T` with `envy`.
    ///
    /// Only names spelled `PREFIX` + uppercase suffix take part, so matching
    /// is exact (`POSTGRES_user` never stands in for `POSTGRES_USER`).
    /// Fields without `#[serde(default)]` are required.
    pub fn section<T: DeserializeOwned>(&self, prefix: &str) -> ConfigResult<T> {
        if let Some(name) = self
            .unreadable
            .iter()
            .find(|name| is_section_key(name, prefix))
        {
            return Err(ConfigError::unreadable(name.as_str()));
        }

        let pairs = self
            .vars
            .iter()
            .filter(|(key, _)| is_section_key(key, prefix))
            .map(|(key, value)| (key.clone(), value.clone()));

        envy::prefixed(prefix)
            .from_iter(pairs)
            .map_err(|e| ConfigError::from_envy(prefix, e))
    }
}

fn is_section_key(key: &str, prefix: &str) -> bool {
    key.strip_prefix(prefix)
        .is_some_and(|suffix| !suffix.chars().any(char::is_lowercase))
}
