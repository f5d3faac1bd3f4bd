//! One-click buttons for the toggle-style action endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Approve/reject/toggle/delete post JSON straight from a button instead of a
//! form. The button disables itself while the request is in flight and shows
//! the reply on the shared banner; `on_done` sees the outcome afterwards.

use leptos::prelude::*;

use crate::net::actions::ActionRequest;
use crate::net::submit::{LOADING_LABEL, SubmitOutcome};
use crate::state::banner::BannerState;

/// Button that sends `request` when clicked.
#[component]
pub fn ActionButton(
    #[prop(into)] label: String,
    #[prop(into)] request: Signal<ActionRequest>,
    #[prop(optional)] on_done: Option<Callback<SubmitOutcome>>,
    #[prop(default = "btn")] class: &'static str,
) -> impl IntoView {
    let banner = expect_context::<RwSignal<BannerState>>();
    let config = expect_context::<crate::config::UiConfig>();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        send_in_background(request.get_untracked(), busy, banner, &config, on_done);
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, banner, &config, on_done);
    };

    view! {
        <button type="button" class=class disabled=move || busy.get() on:click=on_click>
            {move || if busy.get() { LOADING_LABEL.to_owned() } else { label.clone() }}
        </button>
    }
}

#[cfg(feature = "hydrate")]
fn send_in_background(
    request: ActionRequest,
    busy: RwSignal<bool>,
    banner: RwSignal<BannerState>,
    config: &crate::config::UiConfig,
    on_done: Option<Callback<SubmitOutcome>>,
) {
    use crate::components::message_banner::page_banner;
    use crate::net::actions::perform;
    use crate::net::transport::BrowserTransport;

    let banner = page_banner(banner, config);
    busy.set(true);
    leptos::task::spawn_local(async move {
        let outcome = perform(&BrowserTransport, &request).await;
        let _ = busy.try_set(false);
        let (kind, text) = outcome.banner_text();
        banner.show(text, kind);
        if let Some(cb) = on_done {
            cb.run(outcome);
        }
    });
}
