use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

pub const MAX_SPENDS_PER_MINUTE: i64 = 5;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Per-card admission counter for spend operations.
///
/// The window is a coarse fixed bucket: a background sweeper wipes the whole
/// map once per minute, aligned to service start rather than to per-key
/// activity. A card spending at second 59 and again at second 61 lands in
/// two different buckets.
pub struct SpendRateLimiter {
    counters: DashMap<String, AtomicI64>,
}

impl SpendRateLimiter {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Atomically increments the counter for `key` and reports whether the
    /// attempt is admitted. The increment sticks even when the attempt is
    /// rejected.
    pub fn allow(&self, key: &str) -> bool {
        let counter = self
            .counters
            .entry(key.to_string())
            .or_insert_with(|| AtomicI64::new(0));
        let count = counter.fetch_add(1, Ordering::SeqCst) + 1;
        count <= MAX_SPENDS_PER_MINUTE
    }

    /// Returns one admission for `key`, so that failed attempts do not eat
    /// into the budget of the current window.
    pub fn rollback(&self, key: &str) {
        if let Some(counter) = self.counters.get(key) {
            counter.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Bulk reset of every counter.
    pub fn clear(&self) {
        self.counters.clear();
    }

    /// Spawns the background sweep that clears all counters once per
    /// interval. The returned handle aborts the task when stopped or
    /// dropped.
    pub fn start_sweeper(self: &Arc<Self>) -> SweeperHandle {
        let limiter = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
            // the first tick resolves immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                debug!("clearing spend counters");
                limiter.clear();
            }
        });

        SweeperHandle { handle }
    }
}

impl Default for SpendRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SweeperHandle {
    handle: JoinHandle<()>,
}

impl SweeperHandle {
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
