use std::{env, path::PathBuf, time::Duration};

use clap::Parser;
use thiserror::Error;

use crate::constants;

// Command-line argument parser.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct Args {
    /// Exchange-qualified ticker to fetch.
    #[arg(long, default_value = constants::DEFAULT_SYMBOL)]
    pub symbol: String,
    /// Backend base URL; falls back to $quote_api_base_url.
    #[arg(long)]
    pub base_url: Option<String>,
    /// Give up on the request after this many seconds. Waits forever if unset.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    /// Write the page here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid base url '{0}': {1}")]
    InvalidBaseUrl(String, url::ParseError),
    #[error("base url '{0}' must be http or https")]
    UnsupportedScheme(String),
    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

/// Everything the renderer needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub symbol: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let base_url = args
            .base_url
            .clone()
            .or_else(|| env::var(constants::BASE_URL_ENV).ok())
            .unwrap_or_else(|| constants::DEFAULT_BASE_URL.to_string());
        Self::new(&args.symbol, &base_url, args.timeout_secs)
    }

    pub fn new(
        symbol: &str,
        base_url: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let parsed = url::Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(base_url.to_string(), e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base_url.to_string()));
        }

        let timeout = match timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Config {
            symbol: symbol.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }
}
