//! Dashboard page with live stat counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. While it is mounted, a `StatsPoller` refreshes
//! the counters from `/api/stats`; unmounting stops the loop.

use leptos::prelude::*;

use crate::components::stat_cards::StatCards;
use crate::state::stats::StatsBoard;

/// Dashboard page: greeting plus the four stat cards.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let board = RwSignal::new(StatsBoard::default());

    #[cfg(feature = "hydrate")]
    start_polling(board);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <a class="btn btn--primary" href="/upload">
                    "Upload Media"
                </a>
            </header>
            <StatCards board=board/>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn start_polling(board: RwSignal<StatsBoard>) {
    use std::rc::Rc;

    use crate::config::UiConfig;
    use crate::net::stats_poller::{PollHandle, StatsPoller, is_dashboard_path};
    use crate::net::transport::BrowserTransport;
    use crate::util::clock::{BrowserClock, BrowserSpawner};

    // `window.location` still holds the previous path during client-side navigation.
    let path = leptos_router::hooks::use_location().pathname.get_untracked();
    if !is_dashboard_path(&path) {
        log::debug!("stats polling not started on {path}");
        return;
    }

    let config = expect_context::<UiConfig>();
    let poller = StatsPoller::new(Rc::new(BrowserTransport), Rc::new(BrowserClock), board, &config);
    let handle = PollHandle::new();
    let alive = handle.clone();
    leptos::task::spawn_local(async move {
        // Fill the counters right away instead of waiting a full interval.
        poller.tick().await;
        poller.run(BrowserSpawner, move || alive.is_alive()).await;
    });
    on_cleanup(move || handle.stop());
}
