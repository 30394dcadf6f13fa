//! Secondary database (gitbase) settings.

use serde::Deserialize;
use tracing::debug;

use crate::compose::database_uri;
use crate::env::Environment;
use crate::error::ConfigResult;
use crate::mode::Mode;
use crate::result_ext::ResultExt;

pub const GITBASE_PREFIX: &str = "GITBASE_";
/// Scheme used when the enterprise mode is active.
pub const ENTERPRISE_SCHEME: &str = "sparksql";
pub const COMMUNITY_SCHEME: &str = "mysql";

/// Gitbase configuration loaded from environment variables.
///
/// Environment variables are prefixed with `GITBASE_`:
/// - `GITBASE_USER`: Database user
/// - `GITBASE_PASSWORD`: Database password (default: "")
/// - `GITBASE_HOST`: Database host
/// - `GITBASE_PORT`: Database port
/// - `GITBASE_DB`: Database name
///
/// An absent password and an empty one produce the same URI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitbaseConfig {
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub host: String,
    pub port: String,
    pub db: String,
}

impl GitbaseConfig {
    pub fn from_env(env: &Environment) -> ConfigResult<Self> {
        let config = env
            .section::<GitbaseConfig>(GITBASE_PREFIX)
            .log("Provide missing gitbase environment variables")?;
        debug!(host = %config.host, port = %config.port, db = %config.db, "Gitbase settings resolved");
        Ok(config)
    }

    pub fn scheme(mode: Mode) -> &'static str {
        mode.select(ENTERPRISE_SCHEME, COMMUNITY_SCHEME)
    }

    /// `{sparksql|mysql}://user:password@host:port/db`
    pub fn database_uri(&self, mode: Mode) -> ConfigResult<String> {
        database_uri(
            Self::scheme(mode),
            &self.user,
            &self.password,
            &self.host,
            &self.port,
            &self.db,
        )
    }
}
