//! Dashboard stats refresh loop.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard shows four counters rendered server-side. While the
//! dashboard is mounted, the poller re-fetches `GET /api/stats` on a fixed
//! interval and rewrites the counters.
//!
//! TRADE-OFFS
//! ==========
//! Each tick is spawned as its own task so a slow reply never delays the
//! schedule. Overlapping ticks are not sequenced: whichever reply resolves
//! last is what the counters show. Failed ticks are logged and dropped.

#[cfg(test)]
#[path = "stats_poller_test.rs"]
mod stats_poller_test;

use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::task::LocalSpawn;

use super::transport::{Transport, TransportError};
use super::types::StatsSnapshot;
use crate::config::UiConfig;
use crate::state::stats::StatsBoard;
use crate::state::store::Store;
use crate::util::clock::{Clock, spawn_detached};

/// Whether `path` is the dashboard view the poller belongs to.
pub fn is_dashboard_path(path: &str) -> bool {
    matches!(path.trim_end_matches('/'), "" | "/dashboard")
}

/// Liveness flag shared between a running poll loop and its owning view.
#[derive(Clone, Debug)]
pub struct PollHandle(Arc<AtomicBool>);

impl PollHandle {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn stop(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for PollHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// What one tick did to the counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Updated,
    /// Fetched, but the view had fewer than four slots.
    Skipped,
    /// Fetched after the view was torn down.
    Detached,
    Failed(TransportError),
}

pub struct StatsPoller<T: ?Sized, C: ?Sized, S> {
    transport: Rc<T>,
    clock: Rc<C>,
    store: S,
    endpoint: String,
    interval_ms: u32,
}

impl<T: ?Sized, C: ?Sized, S: Clone> Clone for StatsPoller<T, C, S> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            clock: Rc::clone(&self.clock),
            store: self.store.clone(),
            endpoint: self.endpoint.clone(),
            interval_ms: self.interval_ms,
        }
    }
}

impl<T, C, S> StatsPoller<T, C, S>
where
    T: Transport + ?Sized + 'static,
    C: Clock + ?Sized + 'static,
    S: Store<StatsBoard>,
{
    pub fn new(transport: Rc<T>, clock: Rc<C>, store: S, config: &UiConfig) -> Self {
        Self {
            transport,
            clock,
            store,
            endpoint: config.stats_endpoint.clone(),
            interval_ms: config.stats_poll_ms,
        }
    }

    /// Fetch one snapshot; non-2xx replies and missing fields are errors.
    ///
    /// # Errors
    ///
    /// Returns the [`TransportError`] of the failed request or decode.
    pub async fn fetch_snapshot(&self) -> Result<StatsSnapshot, TransportError> {
        self.transport.get(&self.endpoint).await?.json_ok()
    }

    /// Fetch and write one snapshot. Never propagates errors.
    pub async fn tick(&self) -> TickOutcome {
        match self.fetch_snapshot().await {
            Ok(snapshot) => match self.store.mutate(|board| board.apply(&snapshot)) {
                Some(true) => TickOutcome::Updated,
                Some(false) => {
                    log::debug!("stats update skipped: stat slots missing");
                    TickOutcome::Skipped
                }
                None => {
                    log::debug!("stats update dropped: dashboard no longer mounted");
                    TickOutcome::Detached
                }
            },
            Err(e) => {
                log::warn!("stats refresh failed: {e}");
                TickOutcome::Failed(e)
            }
        }
    }

    /// Spawn a tick every interval until `alive` turns false.
    pub async fn run<Sp>(self, spawner: Sp, alive: impl Fn() -> bool)
    where
        Sp: LocalSpawn,
    {
        loop {
            self.clock.sleep(self.interval_ms).await;
            if !alive() {
                break;
            }
            let poller = self.clone();
            spawn_detached(&spawner, "stats tick", async move {
                poller.tick().await;
            });
        }
    }
}
