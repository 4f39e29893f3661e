use crate::bot::render::{comic_embed, navigation_rows};
use crate::navigator::{NavAction, NavStep, NavigatorRegistry};
use crate::xkcd::ComicFetcher;
use crate::XkcdError;
use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    EditInteractionResponse,
};

const EXPIRED: &str = "These buttons have expired. Run the command again to get new ones.";
const NO_EARLIER: &str = "There is no earlier comic.";
const NO_LATER: &str = "This is already the latest comic.";
const FAILED: &str = "Something went wrong while loading that comic.";

/// Handles a click on one of the navigation buttons
///
/// Clicks on components this bot does not own are ignored.
pub async fn handle_navigation(
    ctx: &Context,
    component: &ComponentInteraction,
    fetcher: &ComicFetcher,
    registry: &NavigatorRegistry,
) {
    let Some(action) = NavAction::from_custom_id(&component.data.custom_id) else {
        return;
    };

    if let Err(e) = navigate(ctx, component, action, fetcher, registry).await {
        tracing::error!(
            "Navigation {:?} on message {} failed: {}",
            action,
            component.message.id,
            e
        );
        if let Err(e) = notify(ctx, component, FAILED).await {
            tracing::error!("Failed to report navigation error: {}", e);
        }
    }
}

/// Steps the message's navigator and rewrites the message in full
async fn navigate(
    ctx: &Context,
    component: &ComponentInteraction,
    action: NavAction,
    fetcher: &ComicFetcher,
    registry: &NavigatorRegistry,
) -> Result<(), XkcdError> {
    // Fetching can exceed the interaction deadline, so acknowledge first
    component
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;

    let message_id = component.message.id.get();
    let Some(mut navigator) = registry.get(message_id) else {
        return notify(ctx, component, EXPIRED).await;
    };

    match navigator.step(action, fetcher).await? {
        NavStep::Show(comic) => {
            registry.update(message_id, navigator);
            tracing::debug!("Applying comic {} to message {}", comic.number, message_id);

            let edit = EditInteractionResponse::new()
                .content("")
                .embeds(vec![comic_embed(&comic)])
                .components(navigation_rows(navigator.current(), fetcher));
            component.edit_response(&ctx.http, edit).await?;
        }
        NavStep::Missing(number) => {
            registry.update(message_id, navigator);

            let edit = EditInteractionResponse::new()
                .content(format!("Could not find comic #{}", number))
                .embeds(Vec::new())
                .components(navigation_rows(number, fetcher));
            component.edit_response(&ctx.http, edit).await?;
        }
        NavStep::NoEarlier => notify(ctx, component, NO_EARLIER).await?,
        NavStep::NoLater => notify(ctx, component, NO_LATER).await?,
    }

    Ok(())
}

/// Sends an ephemeral notice to the user who clicked
async fn notify(
    ctx: &Context,
    component: &ComponentInteraction,
    content: &str,
) -> Result<(), XkcdError> {
    component
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(true),
        )
        .await?;
    Ok(())
}
