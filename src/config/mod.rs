//! Configuration module for xkcd-bot
//!
//! This module handles loading, parsing, and validating the TOML configuration
//! file, and applying the environment overrides (`TOKEN`, `TEST_SERVER`,
//! `STATUS`) used by container deployments.
//!
//! # Example
//!
//! ```no_run
//! use xkcd_bot::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Some(Path::new("xkcd-bot.toml"))).unwrap();
//! println!("Comics come from: {}", config.xkcd.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CommandsConfig, Config, DiscordConfig, IndexConfig, NavigatorConfig, UserAgentConfig,
    XkcdConfig,
};

// Re-export parser functions
pub use parser::{apply_env_overrides, load_config, parse_config};
pub use validation::validate;
