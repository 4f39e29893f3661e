use crate::commands::args::XkcdCommand;
use crate::commands::help::HelpPage;
use crate::commands::responder::Responder;
use crate::xkcd::{random_number, ComicFetcher, FetchResult, NameIndex};
use crate::XkcdError;
use std::sync::Arc;

/// Runs `/xkcd` subcommands against the fetcher and name index
///
/// The router is stateless across invocations; it only reads from the
/// fetcher and the current index snapshot.
#[derive(Debug, Clone)]
pub struct CommandRouter {
    fetcher: Arc<ComicFetcher>,
    index: Arc<NameIndex>,
    max_range: u32,
}

impl CommandRouter {
    /// Creates a new router
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Comic fetcher shared with the navigator
    /// * `index` - Name index kept fresh by the refresh task
    /// * `max_range` - Largest allowed `abs(last - first)` for `range`
    pub fn new(fetcher: Arc<ComicFetcher>, index: Arc<NameIndex>, max_range: u32) -> Self {
        Self {
            fetcher,
            index,
            max_range,
        }
    }

    pub fn fetcher(&self) -> &Arc<ComicFetcher> {
        &self.fetcher
    }

    pub fn index(&self) -> &Arc<NameIndex> {
        &self.index
    }

    /// Executes `command`, posting every reply through `responder`
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The command completed, including user-facing "not found" and
    ///   validation replies
    /// * `Err(XkcdError)` - An unexpected failure the caller should report
    pub async fn execute<R>(&self, command: &XkcdCommand, responder: &mut R) -> Result<(), XkcdError>
    where
        R: Responder + ?Sized,
    {
        tracing::debug!("Running /xkcd {}", command.name());

        match command {
            XkcdCommand::Latest => self.latest(responder).await,
            XkcdCommand::Random => self.random(responder).await,
            XkcdCommand::Range {
                first,
                last,
                buttons,
            } => self.range(*first, *last, *buttons, responder).await,
            XkcdCommand::Get { num, buttons } => self.get(*num, *buttons, responder).await,
            XkcdCommand::Lookup { name, buttons } => self.lookup(name, *buttons, responder).await,
            XkcdCommand::Help => self.help(responder).await,
        }
    }

    async fn latest<R>(&self, responder: &mut R) -> Result<(), XkcdError>
    where
        R: Responder + ?Sized,
    {
        let comic = match self.fetcher.fetch_latest().await? {
            FetchResult::Success(parsed) => parsed.into_comic(),
            FetchResult::Failure { url, status_code } => {
                return Err(XkcdError::ComicUnavailable { url, status_code });
            }
        };

        // Buttons need a number to step from
        let navigation = comic.number >= 1;
        if !navigation {
            tracing::warn!("Front page comic has no number, posting it without buttons");
        }
        responder.send_comic(&comic, navigation).await
    }

    async fn random<R>(&self, responder: &mut R) -> Result<(), XkcdError>
    where
        R: Responder + ?Sized,
    {
        let latest = self.fetcher.latest_comic().await?;
        let number = random_number(latest.number);

        match self.fetcher.fetch_by_number(number).await? {
            FetchResult::Success(parsed) => responder.send_comic(parsed.comic(), true).await,
            FetchResult::Failure { url, status_code } => {
                Err(XkcdError::ComicUnavailable { url, status_code })
            }
        }
    }

    async fn range<R>(
        &self,
        first: i32,
        last: i32,
        buttons: bool,
        responder: &mut R,
    ) -> Result<(), XkcdError>
    where
        R: Responder + ?Sized,
    {
        let span = (i64::from(last) - i64::from(first)).abs();
        if span > i64::from(self.max_range) {
            return responder
                .send_text(&format!(
                    "Cannot get more than {} comics at once!",
                    self.max_range
                ))
                .await;
        }

        let mut posted = 0usize;
        for number in first.min(last)..=first.max(last) {
            let Some(comic) = self.fetcher.fetch_by_number(number).await?.comic() else {
                continue;
            };
            responder.send_comic(&comic, buttons).await?;
            posted += 1;
        }

        if posted == 0 {
            responder
                .send_text("Could not find any comics in that range")
                .await?;
        }

        Ok(())
    }

    async fn get<R>(&self, num: i32, buttons: bool, responder: &mut R) -> Result<(), XkcdError>
    where
        R: Responder + ?Sized,
    {
        match self.fetcher.fetch_by_number(num).await?.comic() {
            Some(comic) => responder.send_comic(&comic, buttons).await,
            None => {
                responder
                    .send_text(&format!("Could not find comic #{}", num))
                    .await
            }
        }
    }

    async fn lookup<R>(&self, name: &str, buttons: bool, responder: &mut R) -> Result<(), XkcdError>
    where
        R: Responder + ?Sized,
    {
        let comic = match self.index.lookup(name) {
            Some(number) => self.fetcher.fetch_by_number(number).await?.comic(),
            None => {
                tracing::debug!("No comic named '{}' in the index", name);
                None
            }
        };

        match comic {
            Some(comic) => responder.send_comic(&comic, buttons).await,
            None => responder.send_text("Could not find comic!").await,
        }
    }

    async fn help<R>(&self, responder: &mut R) -> Result<(), XkcdError>
    where
        R: Responder + ?Sized,
    {
        let help = HelpPage::new(
            env!("CARGO_PKG_VERSION"),
            &self.fetcher.latest_url(),
            &self.fetcher.explain_home(),
        );
        responder.send_help(&help).await
    }
}
