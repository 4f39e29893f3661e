use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for xkcd-bot
///
/// Every section is optional; missing sections fall back to the defaults
/// below, which point at the live xkcd.com site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub discord: DiscordConfig,
    pub xkcd: XkcdConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub index: IndexConfig,
    pub navigator: NavigatorConfig,
    pub commands: CommandsConfig,
}

impl Config {
    /// Parses the configured default guild, if any
    ///
    /// An absent or unparsable value means commands are registered globally.
    pub fn default_guild_id(&self) -> Option<u64> {
        self.discord
            .default_guild
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|id| *id != 0)
    }

    /// The raw default guild when it is set but not a usable guild id
    ///
    /// Blank values count as unset.
    pub fn invalid_default_guild(&self) -> Option<&str> {
        let raw = self.discord.default_guild.as_deref()?.trim();
        if raw.is_empty() || self.default_guild_id().is_some() {
            return None;
        }
        Some(raw)
    }
}

/// Discord connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DiscordConfig {
    /// Bot authentication token
    pub token: String,

    /// Guild to register commands in while testing
    pub default_guild: Option<String>,

    /// Text shown as "Watching <status>" in the bot's presence
    pub status: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            default_guild: None,
            status: "xkcd".to_string(),
        }
    }
}

/// Where comics are scraped from and how pages are read
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct XkcdConfig {
    /// Comic site root; comic `n` lives at `{base_url}/{n}`
    pub base_url: String,

    /// Explainer site root used for the "explain" link-out
    pub explain_url: String,

    /// Path of the archive listing, relative to `base_url`
    pub archive_path: String,

    /// Image shown when a page has no comic image
    pub unavailable_image: String,

    /// Zero-based position of the `meta` tag carrying the canonical comic URL
    pub canonical_meta_position: usize,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for XkcdConfig {
    fn default() -> Self {
        Self {
            base_url: "https://xkcd.com".to_string(),
            explain_url: "https://www.explainxkcd.com".to_string(),
            archive_path: "/archive/".to_string(),
            unavailable_image: "https://imgs.xkcd.com/comics/not_available.png".to_string(),
            canonical_meta_position: 3,
            request_timeout_secs: 30,
        }
    }
}

impl XkcdConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// User agent identification for outbound requests
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UserAgentConfig {
    pub name: String,
    pub version: String,
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "xkcd-bot".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Format: Name/Version (+ContactURL)
    pub fn header_value(&self) -> String {
        match self.contact_url.as_deref().filter(|url| !url.is_empty()) {
            Some(contact) => format!("{}/{} (+{})", self.name, self.version, contact),
            None => format!("{}/{}", self.name, self.version),
        }
    }
}

/// Name index refresh settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IndexConfig {
    pub refresh_interval_hours: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            refresh_interval_hours: 12,
        }
    }
}

impl IndexConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_hours.saturating_mul(60 * 60))
    }
}

/// Limits on live navigation controls
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NavigatorConfig {
    /// Maximum number of messages with live buttons
    pub max_active: usize,

    /// Buttons untouched for this long stop responding
    pub idle_timeout_minutes: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            max_active: 500,
            idle_timeout_minutes: 24 * 60,
        }
    }
}

impl NavigatorConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_minutes.saturating_mul(60))
    }
}

/// Slash command limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CommandsConfig {
    /// Largest allowed `abs(last - first)` for `/xkcd range`
    pub max_range: u32,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self { max_range: 10 }
    }
}
