use rand::Rng;
use std::fmt;

/// Number used when a page does not reveal which comic it is
pub const UNKNOWN_NUMBER: i32 = -1;

/// Title used when the comic image carries no `alt` attribute
pub const NO_TITLE: &str = "no comic title found";

/// Alt text used when the comic image carries no `title` attribute
pub const NO_ALT_TEXT: &str = "no alt text found";

/// A single xkcd strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comic {
    /// Sequential comic number
    pub number: i32,

    /// Display title
    pub title: String,

    /// Hover text, shown as the embed footer
    pub alt_text: String,

    /// Absolute URL of the comic image
    pub image_url: String,
}

impl Comic {
    /// The embed description, e.g. `xkcd #353`
    pub fn description(&self) -> String {
        format!("xkcd #{}", self.number)
    }
}

/// Picks a comic number uniformly from `[1, latest]`
pub fn random_number(latest: i32) -> i32 {
    rand::thread_rng().gen_range(1..=latest.max(1))
}

/// Something the page parser had to paper over with a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAnomaly {
    /// No `img` inside `#comic`
    MissingImage,

    /// The comic image has no `alt` attribute
    MissingTitle,

    /// The comic image has no `title` attribute
    MissingAltText,

    /// Fewer `meta` tags than the configured canonical position
    MissingCanonicalMeta { position: usize },

    /// The canonical `meta` tag does not end in `/<number>/`
    MalformedCanonicalUrl { content: String },
}

impl fmt::Display for ParseAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAnomaly::MissingImage => write!(f, "no image inside #comic"),
            ParseAnomaly::MissingTitle => write!(f, "comic image has no alt attribute"),
            ParseAnomaly::MissingAltText => write!(f, "comic image has no title attribute"),
            ParseAnomaly::MissingCanonicalMeta { position } => {
                write!(f, "no meta tag at position {}", position)
            }
            ParseAnomaly::MalformedCanonicalUrl { content } => {
                write!(f, "meta content '{}' is not a comic URL", content)
            }
        }
    }
}

/// Result of parsing a comic page
///
/// Parsing never fails outright: missing elements degrade to placeholders.
/// `Anomaly` keeps track of which fields were substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedComic {
    /// Every field was read from the page
    Complete(Comic),

    /// At least one field is a placeholder
    Anomaly {
        comic: Comic,
        anomalies: Vec<ParseAnomaly>,
    },
}

impl ParsedComic {
    pub(crate) fn from_parts(comic: Comic, anomalies: Vec<ParseAnomaly>) -> Self {
        if anomalies.is_empty() {
            ParsedComic::Complete(comic)
        } else {
            ParsedComic::Anomaly { comic, anomalies }
        }
    }

    /// Uses `number` when the page did not identify itself
    ///
    /// The anomaly stays recorded.
    pub(crate) fn or_number(mut self, number: i32) -> Self {
        let comic = match &mut self {
            ParsedComic::Complete(comic) => comic,
            ParsedComic::Anomaly { comic, .. } => comic,
        };
        if comic.number == UNKNOWN_NUMBER {
            comic.number = number;
        }
        self
    }

    pub fn comic(&self) -> &Comic {
        match self {
            ParsedComic::Complete(comic) => comic,
            ParsedComic::Anomaly { comic, .. } => comic,
        }
    }

    pub fn into_comic(self) -> Comic {
        match self {
            ParsedComic::Complete(comic) => comic,
            ParsedComic::Anomaly { comic, .. } => comic,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ParsedComic::Complete(_))
    }

    pub fn anomalies(&self) -> &[ParseAnomaly] {
        match self {
            ParsedComic::Complete(_) => &[],
            ParsedComic::Anomaly { anomalies, .. } => anomalies,
        }
    }
}
