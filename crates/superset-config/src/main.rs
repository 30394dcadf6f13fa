//! Superset settings command line
//!
//! Resolves the settings once at startup and either validates them or hands
//! them to the host runtime on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use superset_config::{
    compose::redact_uri,
    render::{self, scalar_text},
    Environment, OutputFormat, SupersetConfig,
};

/// Switches the log formatter to JSON lines when set to `json`.
const LOG_FORMAT_VAR: &str = "SUPERSET_CONFIG_LOG_FORMAT";

#[derive(Parser)]
#[command(name = "superset-config")]
#[command(version, about = "Resolve Superset settings from the environment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load variables from this dotenv file instead of ./.env
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every setting and report the first missing variable (default)
    Check,
    /// Print every resolved setting
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print one setting, e.g. SQLALCHEMY_DATABASE_URI or CACHE_CONFIG__CACHE_REDIS_URL
    Get {
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,superset_config=debug".into());
    let json = std::env::var(LOG_FORMAT_VAR)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_dotenv(env_file: Option<&PathBuf>) -> Result<()> {
    match env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file '{}'", path.display()))?;
            tracing::debug!(path = %path.display(), "Loaded env file");
        }
        None => {
            if let Ok(path) = dotenvy::dotenv() {
                tracing::debug!(path = %path.display(), "Loaded .env");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();
    load_dotenv(cli.env_file.as_ref())?;

    let env = Environment::from_process();
    let config = SupersetConfig::load(&env).context("Failed to resolve Superset settings")?;

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => {
            tracing::info!(
                database = %redact_uri(&config.sqlalchemy_database_uri),
                cache = %config.cache_config.cache_redis_url,
                broker = %config.celery_config.broker_url,
                result_backend = %config.celery_config.celery_result_backend,
                gitbase = %redact_uri(&config.gitbase_database_uri),
                bblfsh_web = %config.bblfsh_web_address,
                "Settings are complete"
            );
        }
        Commands::Show { format } => {
            print!("{}", render::render(&config, format)?);
        }
        Commands::Get { key } => {
            let value = render::lookup(&config, &key)?;
            println!("{}", scalar_text(&value));
        }
    }

    Ok(())
}
