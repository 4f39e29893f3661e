use crate::bot::handler::Handler;
use crate::commands::CommandRouter;
use crate::config::Config;
use crate::navigator::NavigatorRegistry;
use crate::refresh::spawn_index_refresh;
use crate::xkcd::{ComicFetcher, NameIndex};
use crate::XkcdError;
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

/// Starts the bot and runs until the gateway connection ends
///
/// This will:
/// 1. Build the comic fetcher, name index and navigator registry
/// 2. Spawn the index refresh task (first rebuild runs immediately)
/// 3. Connect to Discord and serve `/xkcd`
pub async fn start_bot(config: Config) -> Result<(), XkcdError> {
    let fetcher = Arc::new(ComicFetcher::from_config(&config)?);
    let index = Arc::new(NameIndex::new());
    let registry = Arc::new(NavigatorRegistry::from_config(&config.navigator));
    let router = CommandRouter::new(fetcher.clone(), index.clone(), config.commands.max_range);

    let default_guild = config.default_guild_id();
    if let Some(raw) = config.invalid_default_guild() {
        tracing::warn!(
            "Ignoring invalid default guild {:?}; commands will be registered globally",
            raw
        );
    }

    let refresh = spawn_index_refresh(index, fetcher, config.index.refresh_interval());

    let handler = Handler::new(
        router,
        registry,
        default_guild,
        config.discord.status.clone(),
    );

    let mut client = Client::builder(&config.discord.token, GatewayIntents::GUILDS)
        .event_handler(handler)
        .await?;

    let result = client.start().await;
    refresh.abort();

    result.map_err(XkcdError::from)
}
