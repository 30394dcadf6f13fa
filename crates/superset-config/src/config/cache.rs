//! Redis-backed cache and SQL Lab results backend.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compose::{build_composite, REDIS_URL_TEMPLATE};
use crate::env::Environment;
use crate::error::ConfigResult;
use crate::result_ext::ResultExt;

pub const REDIS_PREFIX: &str = "REDIS_";

pub const CACHE_TYPE: &str = "redis";
/// One day, in seconds.
pub const CACHE_DEFAULT_TIMEOUT_SECS: u64 = 60 * 60 * 24;
pub const CACHE_KEY_PREFIX: &str = "superset_results";

/// Redis database index used by the cache and the task broker.
pub const CACHE_REDIS_DB: u8 = 0;
/// Redis database index used for task results.
pub const RESULT_REDIS_DB: u8 = 1;

/// Redis connection settings (`REDIS_HOST`, `REDIS_PORT`, both required).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedisConfig {
    pub host: String,
    pub port: String,
}

impl RedisConfig {
    pub fn from_env(env: &Environment) -> ConfigResult<Self> {
        let config = env
            .section::<RedisConfig>(REDIS_PREFIX)
            .log("Provide missing Redis environment variables")?;
        debug!(host = %config.host, port = %config.port, "Redis settings resolved");
        Ok(config)
    }

    /// `redis://host:port/db`
    pub fn url(&self, db: u8) -> ConfigResult<String> {
        let db = db.to_string();
        build_composite(
            REDIS_URL_TEMPLATE,
            &[self.host.as_str(), self.port.as_str(), db.as_str()],
        )
    }
}

/// Options mapping handed to the web framework's cache extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CacheConfig {
    pub cache_type: String,
    pub cache_default_timeout: u64,
    pub cache_key_prefix: String,
    pub cache_redis_url: String,
}

impl CacheConfig {
    pub fn from_redis(redis: &RedisConfig) -> ConfigResult<Self> {
        Ok(Self {
            cache_type: CACHE_TYPE.to_string(),
            cache_default_timeout: CACHE_DEFAULT_TIMEOUT_SECS,
            cache_key_prefix: CACHE_KEY_PREFIX.to_string(),
            cache_redis_url: redis.url(CACHE_REDIS_DB)?,
        })
    }
}

/// Redis cache holding asynchronous SQL Lab query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsBackend {
    pub host: String,
    pub port: String,
    pub key_prefix: String,
}

impl ResultsBackend {
    pub fn from_redis(redis: &RedisConfig) -> Self {
        Self {
            host: redis.host.clone(),
            port: redis.port.clone(),
            key_prefix: CACHE_KEY_PREFIX.to_string(),
        }
    }
}
