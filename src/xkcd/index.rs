//! Title → number index built from the archive listing
//!
//! The index is swap-on-write: a rebuild parses the archive into a private
//! map and replaces the shared snapshot in one step. Readers clone an `Arc`
//! to the current snapshot and never see a half-built map.

use crate::xkcd::fetcher::ComicFetcher;
use crate::xkcd::parser::{parse_archive, ArchiveEntry};
use crate::XkcdError;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// An immutable generation of the name index
#[derive(Debug, Clone, Default)]
pub struct IndexSnapshot {
    entries: HashMap<String, i32>,
    rebuilt_at: Option<DateTime<Utc>>,
}

impl IndexSnapshot {
    /// Builds a snapshot; later entries with the same title win
    pub fn from_entries(entries: impl IntoIterator<Item = ArchiveEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.title.to_lowercase(), entry.number))
            .collect();

        Self {
            entries,
            rebuilt_at: Some(Utc::now()),
        }
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.entries.get(&name.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When this snapshot was built, `None` for the initial empty index
    pub fn rebuilt_at(&self) -> Option<DateTime<Utc>> {
        self.rebuilt_at
    }
}

/// Shared, swap-on-write name index
#[derive(Debug, Default)]
pub struct NameIndex {
    current: RwLock<Arc<IndexSnapshot>>,
}

impl NameIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Case-insensitive exact title lookup
    pub fn lookup(&self, name: &str) -> Option<i32> {
        self.snapshot().get(name)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Replaces the whole index with `entries`
    ///
    /// # Returns
    ///
    /// The number of distinct titles in the new index
    pub fn replace(&self, entries: impl IntoIterator<Item = ArchiveEntry>) -> usize {
        let snapshot = Arc::new(IndexSnapshot::from_entries(entries));
        let count = snapshot.len();

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = snapshot;

        count
    }

    /// Rebuilds the index from the archive listing
    ///
    /// On failure the previous snapshot stays in place.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of titles in the rebuilt index
    /// * `Err(XkcdError)` - The archive could not be fetched
    pub async fn rebuild(&self, fetcher: &ComicFetcher) -> Result<usize, XkcdError> {
        tracing::debug!("Updating comic name map");

        let html = fetcher.fetch_archive().await?;
        let entries = parse_archive(&html);
        let count = self.replace(entries);

        tracing::info!("Finished updating comic name map ({} comics)", count);
        Ok(count)
    }
}
