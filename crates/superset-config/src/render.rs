//! Rendering of resolved settings for the host runtime.
//!
//! Settings are exposed under the attribute names the web application reads
//! at startup. Nested mappings are addressed with `__` between keys
//! (`CACHE_CONFIG__CACHE_REDIS_URL`).

use clap::ValueEnum;
use serde_json::Value;

use crate::config::SupersetConfig;
use crate::error::{ConfigError, ConfigResult};

/// Separator between the keys of a nested setting.
pub const KEY_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    #[value(alias = "yml")]
    Yaml,
    /// `KEY=VALUE` lines, nested mappings flattened.
    Env,
}

/// Render every setting in `format`.
pub fn render(config: &SupersetConfig, format: OutputFormat) -> ConfigResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(config)?),
        OutputFormat::Env => {
            let lines = env_lines(config)?;
            Ok(lines
                .into_iter()
                .map(|(key, value)| format!("{key}={}\n", quote_env_value(&value)))
                .collect())
        }
    }
}

/// Flatten the settings into `(KEY, value)` pairs, sorted by key.
pub fn env_lines(config: &SupersetConfig) -> ConfigResult<Vec<(String, String)>> {
    let value = serde_json::to_value(config)?;
    let mut lines = Vec::new();
    flatten("", &value, &mut lines);
    lines.sort();
    Ok(lines)
}

/// Look up one setting by attribute name, `__` descending into mappings.
pub fn lookup(config: &SupersetConfig, key: &str) -> ConfigResult<Value> {
    let root = serde_json::to_value(config)?;
    let mut current = &root;
    for segment in key.split(KEY_SEPARATOR) {
        current = current
            .get(segment)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
    }
    Ok(current.clone())
}

/// Plain-text form of a setting: strings unquoted, lists comma-joined,
/// mappings as compact JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
        other => other.to_string(),
    }
}

/// Quote a value for a dotenv file when it would not read back verbatim.
///
/// Quoted values use double quotes with `\\`, `\"`, `\$` and `\n` escapes.
pub fn quote_env_value(value: &str) -> String {
    let plain = !value.is_empty()
        && value.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ',' | ':' | '/' | '@' | '+' | '=' | '*' | '%')
        });
    if plain {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let name = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}{KEY_SEPARATOR}{key}")
                };
                flatten(&name, nested, out);
            }
        }
        other => out.push((prefix.to_string(), scalar_text(other))),
    }
}
