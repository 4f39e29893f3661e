use crate::commands::HelpPage;
use crate::navigator::NavAction;
use crate::xkcd::{Comic, ComicFetcher};
use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter};

// Discord embed limits
const TITLE_LIMIT: usize = 256;
const FOOTER_LIMIT: usize = 2048;

/// Embed for a single comic
pub fn comic_embed(comic: &Comic) -> CreateEmbed {
    CreateEmbed::new()
        .title(truncate(&comic.title, TITLE_LIMIT))
        .description(comic.description())
        .image(&comic.image_url)
        .footer(CreateEmbedFooter::new(truncate(&comic.alt_text, FOOTER_LIMIT)))
}

/// Navigation controls for a message currently showing comic `number`
///
/// The link-outs depend on `number`, so the row is rebuilt on every step.
pub fn navigation_rows(number: i32, fetcher: &ComicFetcher) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(NavAction::Previous.custom_id())
            .label("Previous")
            .style(ButtonStyle::Primary),
        CreateButton::new(NavAction::Random.custom_id())
            .label("\u{1F3B2}") // dice
            .style(ButtonStyle::Secondary),
        CreateButton::new(NavAction::Next.custom_id())
            .label("Next")
            .style(ButtonStyle::Primary),
        CreateButton::new_link(fetcher.comic_url(number)).label("xkcd.com"),
        CreateButton::new_link(fetcher.explain_url(number)).label("explain"),
    ])]
}

/// Embed and link buttons for the help page
pub fn help_message(help: &HelpPage) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = help
        .fields
        .iter()
        .fold(CreateEmbed::new().title(&help.title), |embed, (name, value)| {
            embed.field(name, value, false)
        });

    let links = help
        .links
        .iter()
        .map(|(label, url)| CreateButton::new_link(url).label(label))
        .collect();

    (embed, vec![CreateActionRow::Buttons(links)])
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit - 1).collect();
    truncated.push('…');
    truncated
}
