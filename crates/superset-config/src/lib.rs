//! Superset settings loader
//!
//! Resolves the deployment settings of the source{d} Superset stack from the
//! process environment:
//!
//! - **Metadata database**: PostgreSQL connection URI
//! - **Cache**: Redis cache options and the SQL Lab results backend
//! - **Task queue**: Celery broker and result backend on the same Redis
//! - **gitbase**: secondary database URI, `mysql` or `sparksql` by mode
//! - **bblfsh-web**: base address of the UAST parsing service
//!
//! ## Modules
//!
//! - [`env`]: Environment snapshot and single-variable resolution
//! - [`compose`]: Composite URI construction
//! - [`mode`]: Community/enterprise mode flag
//! - [`config`]: Per-prefix sections and the resolved [`SupersetConfig`]
//! - [`render`]: JSON/YAML/env output for the host runtime
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```ignore
//! use superset_config::{Environment, SupersetConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = SupersetConfig::load(&Environment::from_process())?;
//!     println!("{}", config.sqlalchemy_database_uri);
//!     Ok(())
//! }
//! ```

pub mod compose;
pub mod config;
pub mod env;
pub mod error;
pub mod mode;
pub mod render;
pub mod result_ext;

pub use compose::{build_composite, redact_uri};
pub use config::SupersetConfig;
pub use env::Environment;
pub use error::{ConfigError, ConfigResult};
pub use mode::{select_mode_prefix, Mode};
pub use render::OutputFormat;
pub use result_ext::ResultExt;
