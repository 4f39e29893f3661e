//! xkcd-bot: a Discord bot for the xkcd webcomic
//!
//! This crate fetches comics from xkcd.com, keeps a title → number index built
//! from the archive page, and serves them through the `/xkcd` slash command with
//! optional navigation buttons.

pub mod bot;
pub mod commands;
pub mod config;
pub mod navigator;
pub mod refresh;
pub mod xkcd;

use thiserror::Error;

/// Main error type for xkcd-bot operations
#[derive(Debug, Error)]
pub enum XkcdError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status_code} for {url}")]
    Status { url: String, status_code: u16 },

    #[error("Comic unavailable at {url} (HTTP {status_code})")]
    ComicUnavailable { url: String, status_code: u16 },

    #[error("Latest comic number could not be determined")]
    UnknownLatest,

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("No bot token configured (set [discord] token or the TOKEN environment variable)")]
    MissingToken,
}

/// Errors raised while decoding slash command arguments
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown subcommand: {0}")]
    UnknownSubcommand(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

/// Result type alias for xkcd-bot operations
pub type Result<T> = std::result::Result<T, XkcdError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use commands::{CommandRouter, Responder, XkcdCommand};
pub use config::Config;
pub use navigator::{NavAction, NavStep, Navigator, NavigatorRegistry};
pub use xkcd::{Comic, ComicFetcher, FetchResult, NameIndex, ParsedComic};
