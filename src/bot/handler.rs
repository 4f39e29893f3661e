use crate::bot::components::handle_navigation;
use crate::bot::options::decode;
use crate::bot::register::{register_commands, COMMAND_NAME};
use crate::bot::responder::SerenityResponder;
use crate::commands::{CommandRouter, XkcdCommand};
use crate::navigator::NavigatorRegistry;
use serenity::all::{
    ActivityData, CommandInteraction, Context, CreateInteractionResponseFollowup, EventHandler,
    Interaction, OnlineStatus, Permissions, Ready,
};
use serenity::async_trait;
use std::sync::Arc;

const MISSING_PERMISSION: &str = "I need the Embed Links permission in this channel to post comics.";
const GENERIC_FAILURE: &str = "Something went wrong while running that command.";

/// Discord bot event handler
pub struct Handler {
    router: CommandRouter,
    registry: Arc<NavigatorRegistry>,
    default_guild: Option<u64>,
    status: String,
}

impl Handler {
    pub fn new(
        router: CommandRouter,
        registry: Arc<NavigatorRegistry>,
        default_guild: Option<u64>,
        status: String,
    ) -> Self {
        Self {
            router,
            registry,
            default_guild,
            status,
        }
    }

    /// Runs one `/xkcd` invocation; this is the command-error boundary
    async fn handle_command(&self, ctx: &Context, command: &CommandInteraction) {
        let decoded = decode(command).and_then(|(name, args)| XkcdCommand::parse(&name, &args));
        let ephemeral = decoded.as_ref().map_or(true, XkcdCommand::is_ephemeral);

        let deferred = if ephemeral {
            command.defer_ephemeral(&ctx.http).await
        } else {
            command.defer(&ctx.http).await
        };
        if let Err(e) = deferred {
            tracing::error!("Failed to defer /{} from {}: {}", COMMAND_NAME, command.user.name, e);
            return;
        }

        let parsed = match decoded {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Rejected /{} from {}: {}", COMMAND_NAME, command.user.name, e);
                self.reply_ephemeral(ctx, command, &format!("Invalid command: {}", e))
                    .await;
                return;
            }
        };

        if !can_embed(command) {
            self.reply_ephemeral(ctx, command, MISSING_PERMISSION).await;
            return;
        }

        tracing::info!("/{} {} from {}", COMMAND_NAME, parsed.name(), command.user.name);

        let mut responder = SerenityResponder::new(
            ctx,
            command,
            self.router.fetcher(),
            &self.registry,
            ephemeral,
        );

        if let Err(e) = self.router.execute(&parsed, &mut responder).await {
            tracing::error!("/{} {} failed: {}", COMMAND_NAME, parsed.name(), e);
            self.reply_ephemeral(ctx, command, GENERIC_FAILURE).await;
        }
    }

    async fn reply_ephemeral(&self, ctx: &Context, command: &CommandInteraction, content: &str) {
        let followup = CreateInteractionResponseFollowup::new()
            .content(content)
            .ephemeral(true);

        if let Err(e) = command.create_followup(&ctx.http, followup).await {
            tracing::error!("Failed to send reply: {}", e);
        }
    }
}

/// Whether the bot may post embeds where the command was used
///
/// Discord omits the permissions in some contexts (e.g. DMs); embeds are
/// allowed there.
fn can_embed(command: &CommandInteraction) -> bool {
    command
        .app_permissions
        .map_or(true, |permissions| permissions.contains(Permissions::EMBED_LINKS))
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        if !self.status.is_empty() {
            ctx.set_presence(
                Some(ActivityData::watching(self.status.as_str())),
                OnlineStatus::Online,
            );
        }

        if let Err(e) = register_commands(&ctx, self.default_guild).await {
            tracing::error!("Failed to register commands: {}", e);
        }
    }

    /// Called for slash commands and button clicks
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) if command.data.name == COMMAND_NAME => {
                self.handle_command(&ctx, &command).await;
            }
            Interaction::Component(component) => {
                handle_navigation(&ctx, &component, self.router.fetcher(), &self.registry).await;
            }
            _ => {}
        }
    }
}
