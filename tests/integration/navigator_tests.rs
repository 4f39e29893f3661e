use crate::common::{fetcher_for, mount_comic, mount_latest, requested_paths};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xkcd_bot::navigator::{NavAction, NavStep, Navigator, NavigatorRegistry};

fn shown_number(step: &NavStep) -> i32 {
    match step {
        NavStep::Show(comic) => comic.number,
        other => panic!("expected a comic, got {:?}", other),
    }
}

#[tokio::test]
async fn test_next_then_previous_returns_to_start() {
    let server = MockServer::start().await;
    mount_comic(&server, 100).await;
    mount_comic(&server, 101).await;
    let fetcher = fetcher_for(&server);

    let mut navigator = Navigator::new(100);

    let step = navigator.step(NavAction::Next, &fetcher).await.expect("next");
    assert_eq!(shown_number(&step), 101);
    assert_eq!(navigator.current(), 101);

    let step = navigator
        .step(NavAction::Previous, &fetcher)
        .await
        .expect("previous");
    assert_eq!(shown_number(&step), 100);
    assert_eq!(navigator.current(), 100);
}

#[tokio::test]
async fn test_next_past_latest_is_no_later() {
    let server = MockServer::start().await;
    mount_latest(&server, 3000).await;
    let fetcher = fetcher_for(&server);

    let mut navigator = Navigator::new(3000);
    let step = navigator.step(NavAction::Next, &fetcher).await.expect("next");

    assert_eq!(step, NavStep::NoLater);
    assert_eq!(navigator.current(), 3000);
    assert_eq!(requested_paths(&server).await, vec!["/3001", "/"]);
}

#[tokio::test]
async fn test_gap_is_reported_and_skipped_over() {
    let server = MockServer::start().await;
    mount_latest(&server, 3000).await;
    mount_comic(&server, 403).await;
    mount_comic(&server, 405).await;
    let fetcher = fetcher_for(&server);

    let mut navigator = Navigator::new(403);

    let step = navigator.step(NavAction::Next, &fetcher).await.expect("next");
    assert_eq!(step, NavStep::Missing(404));
    assert_eq!(navigator.current(), 404);

    let step = navigator.step(NavAction::Next, &fetcher).await.expect("next");
    assert_eq!(shown_number(&step), 405);

    navigator.step(NavAction::Previous, &fetcher).await.expect("previous");
    let step = navigator
        .step(NavAction::Previous, &fetcher)
        .await
        .expect("previous");
    assert_eq!(shown_number(&step), 403);
}

#[tokio::test]
async fn test_random_stays_within_published_comics() {
    let server = MockServer::start().await;
    mount_latest(&server, 5).await;
    for number in 1..=5 {
        mount_comic(&server, number).await;
    }
    let fetcher = fetcher_for(&server);

    let mut navigator = Navigator::new(3);
    for _ in 0..10 {
        let step = navigator
            .step(NavAction::Random, &fetcher)
            .await
            .expect("random");
        let number = shown_number(&step);
        assert!((1..=5).contains(&number), "random picked {}", number);
        assert_eq!(navigator.current(), number);
    }
}

#[tokio::test]
async fn test_registry_tracks_navigation_per_message() {
    let server = MockServer::start().await;
    mount_comic(&server, 11).await;
    let fetcher = fetcher_for(&server);

    let registry = NavigatorRegistry::new(10, Duration::from_secs(60));
    registry.register(1, Navigator::new(10));
    registry.register(2, Navigator::new(500));

    let mut navigator = registry.get(1).expect("registered");
    navigator.step(NavAction::Next, &fetcher).await.expect("next");
    registry.update(1, navigator);

    assert_eq!(registry.get(1).map(|n| n.current()), Some(11));
    assert_eq!(registry.get(2).map(|n| n.current()), Some(500));
    assert!(registry.get(3).is_none());
}

#[tokio::test]
async fn test_step_onto_unidentified_page_keeps_target_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1609"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body><div id=\"comic\"><img src=\"//imgs.xkcd.com/comics/food.png\" alt=\"Food\" title=\"Hover\"></div></body></html>",
        ))
        .mount(&server)
        .await;
    let fetcher = fetcher_for(&server);

    let mut navigator = Navigator::new(1608);
    let step = navigator.step(NavAction::Next, &fetcher).await.expect("next");

    assert_eq!(shown_number(&step), 1609);
    assert_eq!(navigator.current(), 1609);
}
