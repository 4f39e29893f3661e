//! Shared fixtures: fake comic pages, mock mounting, and a recording responder

use async_trait::async_trait;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xkcd_bot::commands::{HelpPage, Responder};
use xkcd_bot::config::XkcdConfig;
use xkcd_bot::xkcd::{Comic, ComicFetcher};
use xkcd_bot::XkcdError;

/// Title used for comic `number` in fixtures
pub fn title_of(number: i32) -> String {
    format!("Comic {}", number)
}

/// A comic page shaped like xkcd.com's: the canonical URL is in the 4th meta tag
pub fn comic_page(number: i32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta http-equiv="X-UA-Compatible" content="IE=edge">
<meta property="og:site_name" content="xkcd">
<meta property="og:title" content="{title}">
<meta property="og:url" content="https://xkcd.com/{number}/">
<title>xkcd: {title}</title>
</head>
<body>
<div id="topContainer"><img src="/s/logo.png" alt="xkcd.com logo"></div>
<div id="comic">
<img src="//imgs.xkcd.com/comics/comic_{number}.png" title="Alt text for {number}" alt="{title}">
</div>
</body>
</html>"#,
        title = title_of(number),
        number = number
    )
}

/// An archive listing with the given (number, title) links
pub fn archive_page(entries: &[(i32, &str)]) -> String {
    let links: String = entries
        .iter()
        .map(|(number, title)| format!("<a href=\"/{}/\" title=\"2020-1-1\">{}</a><br/>\n", number, title))
        .collect();

    format!(
        r#"<html><body>
<div id="topContainer"><a href="/">xkcd</a> <a href="/archive/">Archive</a> <a href="https://what-if.xkcd.com">What If?</a></div>
<div id="middleContainer">
{}
</div>
</body></html>"#,
        links
    )
}

pub fn fetcher_for(server: &MockServer) -> ComicFetcher {
    let config = XkcdConfig {
        base_url: server.uri(),
        explain_url: "https://explain.example.com".to_string(),
        ..XkcdConfig::default()
    };
    ComicFetcher::new(reqwest::Client::new(), &config)
}

/// Serves comic `number` at `/{number}`
pub async fn mount_comic(server: &MockServer, number: i32) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", number)))
        .respond_with(ResponseTemplate::new(200).set_body_string(comic_page(number)))
        .mount(server)
        .await;
}

/// Serves comic `number` as the front page
pub async fn mount_latest(server: &MockServer, number: i32) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(comic_page(number)))
        .mount(server)
        .await;
}

pub async fn mount_archive(server: &MockServer, entries: &[(i32, &str)]) {
    Mock::given(method("GET"))
        .and(path("/archive/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(archive_page(entries)))
        .mount(server)
        .await;
}

/// Paths of every request the server received, in order
pub async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}

/// A reply captured by `RecordingResponder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Comic { comic: Comic, navigation: bool },
    Help(HelpPage),
}

/// Responder that records replies instead of posting them
#[derive(Debug, Default)]
pub struct RecordingResponder {
    pub replies: Vec<Reply>,
}

impl RecordingResponder {
    pub fn comic_numbers(&self) -> Vec<i32> {
        self.replies
            .iter()
            .filter_map(|reply| match reply {
                Reply::Comic { comic, .. } => Some(comic.number),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn send_text(&mut self, content: &str) -> Result<(), XkcdError> {
        self.replies.push(Reply::Text(content.to_string()));
        Ok(())
    }

    async fn send_comic(&mut self, comic: &Comic, navigation: bool) -> Result<(), XkcdError> {
        self.replies.push(Reply::Comic {
            comic: comic.clone(),
            navigation,
        });
        Ok(())
    }

    async fn send_help(&mut self, help: &HelpPage) -> Result<(), XkcdError> {
        self.replies.push(Reply::Help(help.clone()));
        Ok(())
    }
}
