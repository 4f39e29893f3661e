use crate::config::types::{
    CommandsConfig, Config, DiscordConfig, IndexConfig, NavigatorConfig, UserAgentConfig,
    XkcdConfig,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_discord_config(&config.discord)?;
    validate_xkcd_config(&config.xkcd)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_index_config(&config.index)?;
    validate_navigator_config(&config.navigator)?;
    validate_commands_config(&config.commands)?;
    Ok(())
}

fn validate_discord_config(config: &DiscordConfig) -> Result<(), ConfigError> {
    if config.token.trim().is_empty() {
        return Err(ConfigError::MissingToken);
    }

    // An unparsable default guild is not an error: commands go global instead.
    Ok(())
}

/// Validates the scraping targets
fn validate_xkcd_config(config: &XkcdConfig) -> Result<(), ConfigError> {
    validate_http_url("base-url", &config.base_url)?;
    validate_http_url("explain-url", &config.explain_url)?;
    validate_http_url("unavailable-image", &config.unavailable_image)?;

    if !config.archive_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "archive-path must start with '/', got '{}'",
            config.archive_path
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "request-timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if let Some(contact) = config.contact_url.as_deref().filter(|url| !url.is_empty()) {
        Url::parse(contact)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    Ok(())
}

fn validate_index_config(config: &IndexConfig) -> Result<(), ConfigError> {
    if config.refresh_interval_hours < 1 {
        return Err(ConfigError::Validation(
            "refresh-interval-hours must be >= 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_navigator_config(config: &NavigatorConfig) -> Result<(), ConfigError> {
    if config.max_active < 1 {
        return Err(ConfigError::Validation(
            "navigator max-active must be >= 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_commands_config(config: &CommandsConfig) -> Result<(), ConfigError> {
    if config.max_range < 1 {
        return Err(ConfigError::Validation(format!(
            "max-range must be >= 1, got {}",
            config.max_range
        )));
    }
    Ok(())
}

/// Checks that `value` is an absolute http(s) URL
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}
