//! bblfsh-web, the UAST parsing service.

use serde::Deserialize;
use tracing::debug;

use crate::compose::{build_composite, HTTP_ADDRESS_TEMPLATE};
use crate::env::Environment;
use crate::error::ConfigResult;
use crate::result_ext::ResultExt;

pub const BBLFSH_WEB_PREFIX: &str = "BBLFSH_WEB_";

/// `BBLFSH_WEB_HOST` and `BBLFSH_WEB_PORT`, both required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BblfshWebConfig {
    pub host: String,
    pub port: String,
}

impl BblfshWebConfig {
    pub fn from_env(env: &Environment) -> ConfigResult<Self> {
        let config = env
            .section::<BblfshWebConfig>(BBLFSH_WEB_PREFIX)
            .log("Provide missing bblfsh-web environment variables")?;
        debug!(host = %config.host, port = %config.port, "bblfsh-web settings resolved");
        Ok(config)
    }

    pub fn address(&self) -> ConfigResult<String> {
        build_composite(HTTP_ADDRESS_TEMPLATE, &[self.host.as_str(), self.port.as_str()])
    }
}
