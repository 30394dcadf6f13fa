//! Task queue (Celery) configuration.
//!
//! The broker and the result backend share the Redis instance used by the
//! cache, on separate database indexes.

use serde::Serialize;
use std::collections::BTreeMap;

use super::cache::{RedisConfig, CACHE_REDIS_DB, RESULT_REDIS_DB};
use crate::error::ConfigResult;

pub const CELERY_IMPORTS: [&str; 2] = ["superset.sql_lab", "superset.tasks"];
pub const CELERYD_LOG_LEVEL: &str = "INFO";
pub const CELERYD_PREFETCH_MULTIPLIER: u32 = 1;

/// Task whose execution rate is limited.
pub const SQL_RESULTS_TASK: &str = "sql_lab.get_sql_results";
pub const SQL_RESULTS_RATE_LIMIT: &str = "100/s";

/// Per-task options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskAnnotation {
    pub rate_limit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CeleryConfig {
    pub broker_url: String,
    pub celery_imports: Vec<String>,
    pub celery_result_backend: String,
    pub celeryd_log_level: String,
    pub celeryd_prefetch_multiplier: u32,
    pub celery_acks_late: bool,
    pub celery_annotations: BTreeMap<String, TaskAnnotation>,
}

impl CeleryConfig {
    pub fn from_redis(redis: &RedisConfig) -> ConfigResult<Self> {
        let mut annotations = BTreeMap::new();
        annotations.insert(
            SQL_RESULTS_TASK.to_string(),
            TaskAnnotation {
                rate_limit: SQL_RESULTS_RATE_LIMIT.to_string(),
            },
        );

        Ok(Self {
            broker_url: redis.url(CACHE_REDIS_DB)?,
            celery_imports: CELERY_IMPORTS.iter().map(|s| s.to_string()).collect(),
            celery_result_backend: redis.url(RESULT_REDIS_DB)?,
            celeryd_log_level: CELERYD_LOG_LEVEL.to_string(),
            celeryd_prefetch_multiplier: CELERYD_PREFETCH_MULTIPLIER,
            celery_acks_late: true,
            celery_annotations: annotations,
        })
    }
}
