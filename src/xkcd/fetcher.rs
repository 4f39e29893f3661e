//! HTTP fetcher for comic pages
//!
//! This module handles all requests to the comic site:
//! - Building the HTTP client with a proper user agent string
//! - GET requests for single comic pages, the front page and the archive
//! - Mapping non-success statuses to `FetchResult::Failure`
//!
//! There is no caching and no retry: every call is exactly one request.

use crate::config::{Config, UserAgentConfig, XkcdConfig};
use crate::xkcd::comic::{Comic, ParsedComic, UNKNOWN_NUMBER};
use crate::xkcd::parser::{parse_comic_page, PageLayout};
use crate::XkcdError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of fetching a comic page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The page was fetched and parsed (possibly with placeholders)
    Success(ParsedComic),

    /// The server answered with a non-success status
    Failure {
        /// The requested URL
        url: String,
        /// The HTTP status code
        status_code: u16,
    },
}

impl FetchResult {
    /// Returns the comic, discarding the failure details
    pub fn comic(self) -> Option<Comic> {
        match self {
            FetchResult::Success(parsed) => Some(parsed.into_comic()),
            FetchResult::Failure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Total time allowed per request
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use xkcd_bot::config::UserAgentConfig;
/// use xkcd_bot::xkcd::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches and parses comics from the configured site
#[derive(Debug, Clone)]
pub struct ComicFetcher {
    client: Client,
    base_url: String,
    explain_url: String,
    archive_path: String,
    layout: PageLayout,
}

impl ComicFetcher {
    /// Creates a fetcher using an existing client
    pub fn new(client: Client, config: &XkcdConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            explain_url: config.explain_url.trim_end_matches('/').to_string(),
            archive_path: config.archive_path.clone(),
            layout: PageLayout {
                canonical_meta_position: config.canonical_meta_position,
                unavailable_image: config.unavailable_image.clone(),
            },
        }
    }

    /// Builds the HTTP client and fetcher from the full configuration
    pub fn from_config(config: &Config) -> Result<Self, XkcdError> {
        let client = build_http_client(&config.user_agent, config.xkcd.request_timeout())?;
        Ok(Self::new(client, &config.xkcd))
    }

    /// Public page of comic `number`
    pub fn comic_url(&self, number: i32) -> String {
        format!("{}/{}", self.base_url, number)
    }

    /// Explainer page of comic `number`
    pub fn explain_url(&self, number: i32) -> String {
        format!("{}/{}", self.explain_url, number)
    }

    /// Front page, which always shows the latest comic
    pub fn latest_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Explainer site front page
    pub fn explain_home(&self) -> String {
        format!("{}/", self.explain_url)
    }

    pub fn archive_url(&self) -> String {
        format!("{}{}", self.base_url, self.archive_path)
    }

    /// Fetches and parses the comic page at `url`
    ///
    /// # Returns
    ///
    /// * `Ok(FetchResult::Success)` - The page was fetched; anomalies are logged
    /// * `Ok(FetchResult::Failure)` - The server returned a non-success status
    /// * `Err(XkcdError)` - The request itself failed (connection, timeout, body)
    pub async fn fetch_by_url(&self, url: &str) -> Result<FetchResult, XkcdError> {
        tracing::debug!("Attempting to get xkcd comic from {}", url);

        let page_url = Url::parse(url)?;
        let response = self
            .client
            .get(page_url.clone())
            .send()
            .await
            .map_err(|source| XkcdError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Couldn't get comic from {}: HTTP {}", url, status.as_u16());
            return Ok(FetchResult::Failure {
                url: url.to_string(),
                status_code: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| XkcdError::Http {
            url: url.to_string(),
            source,
        })?;

        let parsed = parse_comic_page(&body, &page_url, &self.layout);
        for anomaly in parsed.anomalies() {
            tracing::warn!("Comic page {} parsed with placeholder: {}", url, anomaly);
        }

        Ok(FetchResult::Success(parsed))
    }

    /// Fetches comic `number`
    ///
    /// A page that does not identify itself is taken to be comic `number`.
    pub async fn fetch_by_number(&self, number: i32) -> Result<FetchResult, XkcdError> {
        match self.fetch_by_url(&self.comic_url(number)).await? {
            FetchResult::Success(parsed) => {
                let parsed_number = parsed.comic().number;
                if parsed_number != number && parsed_number != UNKNOWN_NUMBER {
                    tracing::warn!(
                        "Requested comic #{} but the page identifies itself as #{}",
                        number,
                        parsed_number
                    );
                }
                Ok(FetchResult::Success(parsed.or_number(number)))
            }
            failure => Ok(failure),
        }
    }

    /// Fetches the front page comic
    pub async fn fetch_latest(&self) -> Result<FetchResult, XkcdError> {
        self.fetch_by_url(&self.latest_url()).await
    }

    /// Fetches the latest comic, treating any failure as an error
    ///
    /// Used where the latest number bounds a choice (random, the navigator's
    /// random button).
    pub async fn latest_comic(&self) -> Result<Comic, XkcdError> {
        match self.fetch_latest().await? {
            FetchResult::Success(parsed) => {
                let comic = parsed.into_comic();
                if comic.number < 1 {
                    return Err(XkcdError::UnknownLatest);
                }
                Ok(comic)
            }
            FetchResult::Failure { url, status_code } => {
                Err(XkcdError::ComicUnavailable { url, status_code })
            }
        }
    }

    /// Fetches the raw archive listing HTML
    pub async fn fetch_archive(&self) -> Result<String, XkcdError> {
        let url = self.archive_url();
        tracing::debug!("Fetching archive listing from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| XkcdError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(XkcdError::Status {
                url,
                status_code: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| XkcdError::Http { url, source })
    }
}
