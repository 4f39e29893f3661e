use crate::xkcd::{random_number, Comic, ComicFetcher, FetchResult};
use crate::XkcdError;

/// A navigation button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Previous,
    Next,
    Random,
}

impl NavAction {
    /// Button custom id carried by Discord component interactions
    pub fn custom_id(&self) -> &'static str {
        match self {
            NavAction::Previous => "xkcd:previous",
            NavAction::Next => "xkcd:next",
            NavAction::Random => "xkcd:random",
        }
    }

    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            "xkcd:previous" => Some(NavAction::Previous),
            "xkcd:next" => Some(NavAction::Next),
            "xkcd:random" => Some(NavAction::Random),
            _ => None,
        }
    }
}

/// Outcome of a navigation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavStep {
    /// The cursor moved and this comic should be displayed
    Show(Comic),

    /// Already at the first comic; cursor unchanged
    NoEarlier,

    /// Already at the latest comic; cursor unchanged
    NoLater,

    /// The cursor moved to a number whose page could not be fetched
    Missing(i32),
}

/// Cursor over the comic sequence for one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: i32,
}

impl Navigator {
    pub fn new(start: i32) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    /// Applies `action` and fetches the comic to display
    ///
    /// # State Transitions
    ///
    /// | Action | Target | On fetch failure |
    /// |--------|--------|------------------|
    /// | Previous | `current - 1`, or `NoEarlier` at 1 | `Missing(target)` |
    /// | Next | `current + 1` | `NoLater` past the latest comic, else `Missing(target)` |
    /// | Random | uniform in `[1, latest]` | `Missing(target)` |
    ///
    /// The cursor only stays put for `NoEarlier` and `NoLater`.
    pub async fn step(
        &mut self,
        action: NavAction,
        fetcher: &ComicFetcher,
    ) -> Result<NavStep, XkcdError> {
        let target = match action {
            NavAction::Previous => {
                if self.current <= 1 {
                    return Ok(NavStep::NoEarlier);
                }
                self.current - 1
            }
            NavAction::Next => self.current.saturating_add(1).max(1),
            NavAction::Random => {
                let latest = fetcher.latest_comic().await?;
                random_number(latest.number)
            }
        };

        tracing::debug!("Navigating {:?} from {} to {}", action, self.current, target);

        match fetcher.fetch_by_number(target).await? {
            FetchResult::Success(parsed) => {
                self.current = target;
                Ok(NavStep::Show(parsed.into_comic()))
            }
            FetchResult::Failure { .. } => {
                if action == NavAction::Next {
                    let latest = fetcher.latest_comic().await?;
                    if target > latest.number {
                        return Ok(NavStep::NoLater);
                    }
                }
                self.current = target;
                Ok(NavStep::Missing(target))
            }
        }
    }
}
