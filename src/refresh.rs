//! Periodic name index refresh
//!
//! The index is rebuilt once at startup and then on a fixed interval
//! (12 hours by default). A failed rebuild keeps the previous index.

use crate::xkcd::{ComicFetcher, NameIndex};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Spawns the background task that keeps `index` fresh
///
/// The first rebuild runs immediately. The task runs until the returned
/// handle is aborted or the runtime shuts down.
pub fn spawn_index_refresh(
    index: Arc<NameIndex>,
    fetcher: Arc<ComicFetcher>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            refresh_once(&index, &fetcher).await;
        }
    })
}

/// Runs a single rebuild, logging instead of propagating failures
pub async fn refresh_once(index: &NameIndex, fetcher: &ComicFetcher) {
    if let Err(e) = index.rebuild(fetcher).await {
        tracing::warn!(
            "Failed to update comic name map, keeping {} existing entries: {}",
            index.len(),
            e
        );
    }
}
