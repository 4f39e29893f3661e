use crate::config::NavigatorConfig;
use crate::navigator::state::Navigator;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Entry {
    navigator: Navigator,
    last_used: Instant,
}

/// Live navigators keyed by Discord message id
///
/// # Eviction
///
/// - Entries untouched for longer than `idle_timeout` are dropped whenever a
///   new navigator is registered (or `evict_idle` is called)
/// - When `max_active` entries are live, registering another drops the least
///   recently used one
///
/// The map lock is never held across an await.
#[derive(Debug)]
pub struct NavigatorRegistry {
    entries: Mutex<HashMap<u64, Entry>>,
    max_active: usize,
    idle_timeout: Duration,
}

impl NavigatorRegistry {
    pub fn new(max_active: usize, idle_timeout: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_active: max_active.max(1),
            idle_timeout,
        }
    }

    pub fn from_config(config: &NavigatorConfig) -> Self {
        Self::new(config.max_active, config.idle_timeout())
    }

    /// Starts tracking `navigator` for `message_id`
    pub fn register(&self, message_id: u64, navigator: Navigator) {
        self.register_at(message_id, navigator, Instant::now());
    }

    /// Returns the navigator for `message_id`, marking it as used
    pub fn get(&self, message_id: u64) -> Option<Navigator> {
        self.get_at(message_id, Instant::now())
    }

    /// Stores the cursor after a step; no-op if the entry was evicted meanwhile
    pub fn update(&self, message_id: u64, navigator: Navigator) {
        let mut entries = self.lock();
        if let Some(entry) = entries.get_mut(&message_id) {
            entry.navigator = navigator;
            entry.last_used = Instant::now();
        }
    }

    pub fn remove(&self, message_id: u64) -> Option<Navigator> {
        self.lock().remove(&message_id).map(|entry| entry.navigator)
    }

    /// Drops every entry idle longer than the timeout
    ///
    /// # Returns
    ///
    /// The number of evicted entries
    pub fn evict_idle(&self) -> usize {
        self.evict_idle_at(Instant::now())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn register_at(&self, message_id: u64, navigator: Navigator, now: Instant) {
        let mut entries = self.lock();

        let idle = Self::drop_idle(&mut entries, self.idle_timeout, now);
        if idle > 0 {
            tracing::debug!("Evicted {} idle navigators", idle);
        }

        if !entries.contains_key(&message_id) && entries.len() >= self.max_active {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(id, _)| *id);

            if let Some(oldest) = oldest {
                tracing::debug!("Navigator limit reached, evicting message {}", oldest);
                entries.remove(&oldest);
            }
        }

        entries.insert(
            message_id,
            Entry {
                navigator,
                last_used: now,
            },
        );
    }

    fn get_at(&self, message_id: u64, now: Instant) -> Option<Navigator> {
        let mut entries = self.lock();
        let entry = entries.get_mut(&message_id)?;

        if now.saturating_duration_since(entry.last_used) > self.idle_timeout {
            entries.remove(&message_id);
            return None;
        }

        entry.last_used = now;
        Some(entry.navigator)
    }

    fn evict_idle_at(&self, now: Instant) -> usize {
        Self::drop_idle(&mut self.lock(), self.idle_timeout, now)
    }

    fn drop_idle(entries: &mut HashMap<u64, Entry>, idle_timeout: Duration, now: Instant) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| now.saturating_duration_since(entry.last_used) <= idle_timeout);
        before - entries.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<u64, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
