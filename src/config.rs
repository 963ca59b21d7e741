//! Configuration management for the assistant bot.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. `dotenvy` never writes to stdout, which matters because stdout
//! carries the interactive session.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing::level_filters::LevelFilter;

const DEFAULT_PROMPT: &str = "Enter a command: ";
const DEFAULT_GREETING: &str = "Welcome to the assistant bot!";
const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for one assistant session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Text written before every read (default: "Enter a command: ")
    pub prompt: String,

    /// Banner printed once at startup
    pub greeting: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: prompt text, must not be empty
    /// - `ASSISTANT_GREETING`: startup banner
    /// - `LOG_LEVEL`: one of off/error/warn/info/debug/trace
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        if prompt.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let greeting =
            env::var("ASSISTANT_GREETING").unwrap_or_else(|_| DEFAULT_GREETING.to_string());

        let log_level = Self::parse_log_level("LOG_LEVEL")?;

        Ok(Config {
            prompt,
            greeting,
            log_level,
        })
    }

    /// Read a log level variable, rejecting anything tracing cannot parse.
    fn parse_log_level(var_name: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => match val.parse::<LevelFilter>() {
                Ok(_) => Ok(val.to_lowercase()),
                Err(_) => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Unknown log level: {}", val),
                }),
            },
            Err(_) => Ok(DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
