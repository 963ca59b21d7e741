//! Assistant Bot - main entry point
//!
//! Runs one interactive contact-manager session over stdin/stdout.

use anyhow::Result;
use assistant_bot::{CommandTable, Config, Session};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr; stdout is the interactive session
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut session = Session::new(&config, CommandTable::new());
    let outcome = session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    info!(?outcome, "Assistant session finished");
    Ok(())
}
