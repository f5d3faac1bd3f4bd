//! Flash message container.
//!
//! Renders the shared `BannerState` into `#flash-messages`. Fading messages
//! get `opacity: 0` so the CSS transition runs before removal.

#[cfg(test)]
#[path = "message_banner_test.rs"]
mod message_banner_test;

use leptos::prelude::*;

use crate::state::banner::{BannerState, Message};
#[cfg(feature = "hydrate")]
use crate::{
    config::UiConfig,
    state::banner::{DismissTiming, MessageBanner},
    util::clock::{BrowserClock, BrowserSpawner},
};
use crate::util::dom::MESSAGE_CONTAINER_ID;

/// Banner handle used by browser components.
#[cfg(feature = "hydrate")]
pub type PageBanner = MessageBanner<RwSignal<BannerState>, BrowserClock, BrowserSpawner>;

/// Build a banner handle over the shared banner signal.
#[cfg(feature = "hydrate")]
pub fn page_banner(store: RwSignal<BannerState>, config: &UiConfig) -> PageBanner {
    MessageBanner::new(store, std::rc::Rc::new(BrowserClock), BrowserSpawner, DismissTiming::from(config))
}

fn message_style(message: &Message, fade_ms: u32) -> String {
    let opacity = if message.fading { 0 } else { 1 };
    format!("opacity: {opacity}; transition: opacity {fade_ms}ms;")
}

/// Dedicated single-slot message area.
#[component]
pub fn MessageBannerView() -> impl IntoView {
    let banner = expect_context::<RwSignal<BannerState>>();
    let fade_ms = expect_context::<crate::config::UiConfig>().message_fade_ms;

    view! {
        <div id=MESSAGE_CONTAINER_ID class="flash-messages" role="status">
            {move || {
                banner
                    .get()
                    .messages()
                    .iter()
                    .map(|m| {
                        let class = format!("alert alert-{}", m.kind.css_modifier());
                        view! {
                            <div class=class style=message_style(m, fade_ms)>
                                {m.text.clone()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
