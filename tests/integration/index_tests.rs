use crate::common::{archive_page, fetcher_for, mount_archive};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xkcd_bot::refresh::refresh_once;
use xkcd_bot::xkcd::{ArchiveEntry, NameIndex};

#[tokio::test]
async fn test_rebuild_then_lookup() {
    let server = MockServer::start().await;
    mount_archive(
        &server,
        &[(3000, "Latest One"), (353, "Python"), (10, "Duplicate"), (5, "Duplicate")],
    )
    .await;
    let fetcher = fetcher_for(&server);
    let index = NameIndex::new();

    let count = index.rebuild(&fetcher).await.expect("rebuild failed");

    assert_eq!(count, 3);
    assert_eq!(index.lookup("python"), Some(353));
    assert_eq!(index.lookup("PYTHON"), Some(353));
    assert_eq!(index.lookup("latest one"), Some(3000));
    // Last archive entry with the same title wins
    assert_eq!(index.lookup("duplicate"), Some(5));
    assert_eq!(index.lookup("not a comic"), None);
    // Navigation links are not comics
    assert_eq!(index.lookup("archive"), None);
}

#[tokio::test]
async fn test_rebuild_replaces_previous_entries() {
    let server = MockServer::start().await;
    mount_archive(&server, &[(2, "New")]).await;
    let fetcher = fetcher_for(&server);

    let index = NameIndex::new();
    index.replace(vec![ArchiveEntry {
        title: "old".to_string(),
        number: 1,
    }]);

    index.rebuild(&fetcher).await.expect("rebuild failed");

    assert_eq!(index.lookup("old"), None);
    assert_eq!(index.lookup("new"), Some(2));
}

#[tokio::test]
async fn test_failed_refresh_keeps_existing_index() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/archive/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let fetcher = fetcher_for(&server);

    let index = NameIndex::new();
    index.replace(vec![ArchiveEntry {
        title: "python".to_string(),
        number: 353,
    }]);

    assert!(index.rebuild(&fetcher).await.is_err());
    refresh_once(&index, &fetcher).await;

    assert_eq!(index.lookup("python"), Some(353));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_lookup_never_sees_empty_index_during_rebuild() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/archive/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(archive_page(&[(353, "Python"), (1, "Barrel - Part 1")]))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    let fetcher = Arc::new(fetcher_for(&server));

    let index = Arc::new(NameIndex::new());
    index.replace(vec![ArchiveEntry {
        title: "python".to_string(),
        number: 353,
    }]);

    let rebuild = {
        let index = index.clone();
        let fetcher = fetcher.clone();
        tokio::spawn(async move { index.rebuild(&fetcher).await })
    };

    let mut observations = 0;
    while !rebuild.is_finished() {
        assert!(!index.is_empty(), "index was empty during rebuild");
        assert_eq!(index.lookup("python"), Some(353));
        observations += 1;
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let count = rebuild.await.expect("task panicked").expect("rebuild failed");
    assert_eq!(count, 2);
    assert!(observations > 0);
    assert_eq!(index.lookup("barrel - part 1"), Some(1));
    assert_eq!(index.lookup("python"), Some(353));
}
