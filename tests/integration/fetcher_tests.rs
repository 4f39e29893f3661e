use crate::common::{fetcher_for, mount_comic, mount_latest, requested_paths, title_of};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xkcd_bot::config::XkcdConfig;
use xkcd_bot::xkcd::{ComicFetcher, FetchResult, ParseAnomaly, UNKNOWN_NUMBER};
use xkcd_bot::XkcdError;

#[tokio::test]
async fn test_fetch_by_number_reads_number_from_page() {
    let server = MockServer::start().await;
    for number in [1, 353, 2000] {
        mount_comic(&server, number).await;
    }
    let fetcher = fetcher_for(&server);

    for number in [1, 353, 2000] {
        let result = fetcher.fetch_by_number(number).await.expect("request failed");
        let FetchResult::Success(parsed) = result else {
            panic!("expected comic {} to be found", number);
        };
        assert!(parsed.is_complete(), "anomalies: {:?}", parsed.anomalies());

        let comic = parsed.comic();
        assert_eq!(comic.number, number);
        assert_eq!(comic.title, title_of(number));
        assert_eq!(comic.alt_text, format!("Alt text for {}", number));
        assert_eq!(
            comic.image_url,
            format!("https://imgs.xkcd.com/comics/comic_{}.png", number)
        );
    }

    assert_eq!(requested_paths(&server).await, vec!["/1", "/353", "/2000"]);
}

#[tokio::test]
async fn test_non_success_status_is_a_failure_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/500"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let fetcher = fetcher_for(&server);

    // Nothing mounted at /404: wiremock answers 404
    let missing = fetcher.fetch_by_number(404).await.expect("request failed");
    assert_eq!(
        missing,
        FetchResult::Failure {
            url: format!("{}/404", server.uri()),
            status_code: 404
        }
    );

    let broken = fetcher.fetch_by_number(500).await.expect("request failed");
    assert!(matches!(broken, FetchResult::Failure { status_code: 500, .. }));
    assert!(broken.comic().is_none());
}

#[tokio::test]
async fn test_front_page_is_latest_comic() {
    let server = MockServer::start().await;
    mount_latest(&server, 3000).await;
    let fetcher = fetcher_for(&server);

    let latest = fetcher.latest_comic().await.expect("latest comic");
    assert_eq!(latest.number, 3000);
    assert_eq!(requested_paths(&server).await, vec!["/"]);
}

#[tokio::test]
async fn test_latest_comic_failure_is_an_error() {
    let server = MockServer::start().await;
    let fetcher = fetcher_for(&server);

    let result = fetcher.latest_comic().await;
    assert!(matches!(
        result,
        Err(XkcdError::ComicUnavailable { status_code: 404, .. })
    ));
}

#[tokio::test]
async fn test_latest_without_number_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><div id=\"comic\"></div></body></html>"),
        )
        .mount(&server)
        .await;
    let fetcher = fetcher_for(&server);

    assert!(matches!(
        fetcher.latest_comic().await,
        Err(XkcdError::UnknownLatest)
    ));
}

#[tokio::test]
async fn test_malformed_page_degrades_to_placeholders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1608"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>Hoverboard</title></head><body><div id=\"comic\"><canvas></canvas></div></body></html>",
        ))
        .mount(&server)
        .await;
    let fetcher = fetcher_for(&server);

    let result = fetcher.fetch_by_number(1608).await.expect("request failed");
    let FetchResult::Success(parsed) = result else {
        panic!("a 200 page is always a success");
    };

    assert!(!parsed.is_complete());
    assert!(parsed.anomalies().contains(&ParseAnomaly::MissingImage));
    assert!(parsed
        .anomalies()
        .contains(&ParseAnomaly::MissingCanonicalMeta { position: 3 }));
    // The page never said which comic it is; the requested number stands in
    assert_eq!(parsed.comic().number, 1608);
    assert_eq!(
        parsed.comic().image_url,
        XkcdConfig::default().unavailable_image
    );
}

#[tokio::test]
async fn test_archive_status_error() {
    let server = MockServer::start().await;
    let fetcher = fetcher_for(&server);

    assert!(matches!(
        fetcher.fetch_archive().await,
        Err(XkcdError::Status { status_code: 404, .. })
    ));
}

#[tokio::test]
async fn test_connection_failure_is_an_error() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    drop(server);

    let config = XkcdConfig {
        base_url,
        ..XkcdConfig::default()
    };
    let fetcher = ComicFetcher::new(reqwest::Client::new(), &config);

    assert!(matches!(
        fetcher.fetch_by_number(1).await,
        Err(XkcdError::Http { .. })
    ));
}

#[tokio::test]
async fn test_front_page_without_number_keeps_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FRONT_PAGE_WITHOUT_META))
        .mount(&server)
        .await;
    let fetcher = fetcher_for(&server);

    let result = fetcher.fetch_latest().await.expect("request failed");
    let FetchResult::Success(parsed) = result else {
        panic!("a 200 page is always a success");
    };
    assert_eq!(parsed.comic().number, UNKNOWN_NUMBER);
    assert_eq!(parsed.comic().title, "Hoverboard");
}

const FRONT_PAGE_WITHOUT_META: &str = r#"<html><head><meta charset="utf-8"></head><body>
<div id="comic"><img src="//imgs.xkcd.com/comics/hoverboard.png" title="Hover" alt="Hoverboard"></div>
</body></html>"#;
