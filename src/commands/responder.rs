use crate::commands::help::HelpPage;
use crate::xkcd::Comic;
use crate::XkcdError;
use async_trait::async_trait;

/// Destination for command replies
///
/// The router calls these in order; each call is one posted message. The
/// Discord implementation lives in `crate::bot`, tests use a recording one.
#[async_trait]
pub trait Responder: Send {
    /// Posts a plain-text message
    async fn send_text(&mut self, content: &str) -> Result<(), XkcdError>;

    /// Posts a comic embed, with navigation buttons when `navigation` is set
    async fn send_comic(&mut self, comic: &Comic, navigation: bool) -> Result<(), XkcdError>;

    /// Posts the help embed
    async fn send_help(&mut self, help: &HelpPage) -> Result<(), XkcdError>;
}
