//! Timer and task-spawning seams.
//!
//! DESIGN
//! ======
//! Auto-dismiss and polling only need "sleep", "now" and "spawn a local
//! task". Keeping those behind [`Clock`] and [`futures::task::LocalSpawn`]
//! lets tests drive every delay instantly from a `LocalPool`, while the
//! browser build uses `gloo-timers` and `wasm-bindgen-futures`.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use futures::task::{LocalSpawn, LocalSpawnExt};
use std::future::Future;

/// Source of delays and wall-clock time.
#[async_trait::async_trait(?Send)]
pub trait Clock {
    /// Resolve after `ms` milliseconds.
    async fn sleep(&self, ms: u32);

    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;
}

/// Spawn `fut` on `spawner`, logging instead of failing when the executor
/// has shut down.
pub fn spawn_detached<Sp, F>(spawner: &Sp, what: &str, fut: F)
where
    Sp: LocalSpawn + ?Sized,
    F: Future<Output = ()> + 'static,
{
    if let Err(e) = spawner.spawn_local(fut) {
        log::warn!("failed to spawn {what}: {e}");
    }
}

/// Browser clock backed by `setTimeout` and `Date.now()`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Clock for BrowserClock {
    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// Spawner that hands futures to the browser microtask queue.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSpawner;

#[cfg(feature = "hydrate")]
impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(
        &self,
        future: futures::task::LocalFutureObj<'static, ()>,
    ) -> Result<(), futures::task::SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
