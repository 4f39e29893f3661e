use crate::bot::render::{comic_embed, help_message, navigation_rows};
use crate::commands::{HelpPage, Responder};
use crate::navigator::{Navigator, NavigatorRegistry};
use crate::xkcd::{Comic, ComicFetcher};
use crate::XkcdError;
use async_trait::async_trait;
use serenity::all::{CommandInteraction, Context, CreateInteractionResponseFollowup};

/// Posts router replies as followups to a deferred slash command
///
/// Comics posted with navigation get a navigator registered under the id of
/// the message that carries them.
pub struct SerenityResponder<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
    fetcher: &'a ComicFetcher,
    registry: &'a NavigatorRegistry,
    ephemeral: bool,
}

impl<'a> SerenityResponder<'a> {
    pub fn new(
        ctx: &'a Context,
        command: &'a CommandInteraction,
        fetcher: &'a ComicFetcher,
        registry: &'a NavigatorRegistry,
        ephemeral: bool,
    ) -> Self {
        Self {
            ctx,
            command,
            fetcher,
            registry,
            ephemeral,
        }
    }

    fn followup(&self) -> CreateInteractionResponseFollowup {
        CreateInteractionResponseFollowup::new().ephemeral(self.ephemeral)
    }
}

#[async_trait]
impl Responder for SerenityResponder<'_> {
    async fn send_text(&mut self, content: &str) -> Result<(), XkcdError> {
        self.command
            .create_followup(&self.ctx.http, self.followup().content(content))
            .await?;
        Ok(())
    }

    async fn send_comic(&mut self, comic: &Comic, navigation: bool) -> Result<(), XkcdError> {
        let mut builder = self.followup().embed(comic_embed(comic));
        if navigation {
            builder = builder.components(navigation_rows(comic.number, self.fetcher));
        }

        let message = self.command.create_followup(&self.ctx.http, builder).await?;

        if navigation {
            tracing::debug!(
                "Attaching navigator at comic {} to message {}",
                comic.number,
                message.id
            );
            self.registry
                .register(message.id.get(), Navigator::new(comic.number));
        }

        Ok(())
    }

    async fn send_help(&mut self, help: &HelpPage) -> Result<(), XkcdError> {
        let (embed, links) = help_message(help);
        self.command
            .create_followup(&self.ctx.http, self.followup().embed(embed).components(links))
            .await?;
        Ok(())
    }
}
