//! Deployment mode (community vs. enterprise).

use serde::Serialize;
use std::fmt;

use crate::env::Environment;

/// Variable selecting the deployment mode.
pub const MODE_VAR: &str = "MODE";
pub const COMMUNITY: &str = "Community";
pub const ENTERPRISE: &str = "Enterprise";

/// Deployment mode. Only the exact value `Enterprise` selects enterprise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Mode {
    #[default]
    Community,
    Enterprise,
}

impl Mode {
    /// Case-sensitive comparison against `Enterprise`.
    pub fn parse(value: &str) -> Self {
        if value == ENTERPRISE {
            Mode::Enterprise
        } else {
            Mode::Community
        }
    }

    /// Resolve `MODE`, defaulting to `Community`.
    pub fn from_env(env: &Environment) -> Self {
        Self::parse(&env.resolve_with_default(MODE_VAR, COMMUNITY))
    }

    pub fn is_enterprise(self) -> bool {
        self == Mode::Enterprise
    }

    /// Pick the literal associated with this mode.
    pub fn select<'a>(self, enterprise: &'a str, community: &'a str) -> &'a str {
        match self {
            Mode::Enterprise => enterprise,
            Mode::Community => community,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Community => COMMUNITY,
            Mode::Enterprise => ENTERPRISE,
        })
    }
}

/// Resolve `MODE` and return `enterprise_literal` or `community_literal`.
pub fn select_mode_prefix(
    env: &Environment,
    enterprise_literal: &str,
    community_literal: &str,
) -> String {
    Mode::from_env(env)
        .select(enterprise_literal, community_literal)
        .to_string()
}
