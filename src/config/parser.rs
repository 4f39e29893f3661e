use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Environment variable holding the bot token
const TOKEN_VAR: &str = "TOKEN";
/// Environment variable holding the test guild id
const GUILD_VAR: &str = "TEST_SERVER";
/// Environment variable holding the presence text
const STATUS_VAR: &str = "STATUS";

/// Loads the configuration, applies environment overrides, and validates it
///
/// # Arguments
///
/// * `path` - Optional path to a TOML configuration file; without one the
///   built-in defaults are used
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use xkcd_bot::config::load_config;
///
/// let config = load_config(Some(Path::new("xkcd-bot.toml"))).unwrap();
/// println!("Max range: {}", config.commands.max_range);
/// ```
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            parse_config(&content)?
        }
        None => Config::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate(&config)?;

    Ok(config)
}

/// Parses TOML content into a configuration without validating it
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Overrides Discord settings from the environment
///
/// `lookup` resolves a variable name to its value; empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(token) = lookup(TOKEN_VAR) {
        config.discord.token = token;
    }

    if let Some(guild) = lookup(GUILD_VAR) {
        config.discord.default_guild = Some(guild);
    }

    if let Some(status) = lookup(STATUS_VAR) {
        config.discord.status = status;
    }
}
