//! Root application component with routing and context providers.
//!
//! The shell always renders the dedicated `#flash-messages` container, so the
//! banner runs in single-slot mode here. Stacked mode is for hosts that mount
//! the banner into the generic `.main-content` region instead.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::message_banner::MessageBannerView;
use crate::components::sidebar::{Sidebar, SidebarToggle};
use crate::config::UiConfig;
use crate::pages::{
    brand_asset::BrandAssetPage, campaign::CampaignPage, dashboard::DashboardPage, post_review::PostReviewPage,
    upload::UploadPage,
};
use crate::state::banner::{BannerState, SlotMode};
use crate::state::sidebar::SidebarState;

/// Route segments that mount the dashboard.
pub(crate) const DASHBOARD_SEGMENTS: [&str; 2] = ["", "dashboard"];

/// Banner state for the first render. It must match what SSR produced, so
/// flashed messages are added only after hydration.
pub(crate) fn shell_banner() -> BannerState {
    BannerState::new(SlotMode::Single)
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared config, banner and sidebar contexts, shows any
/// server-flashed messages, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = UiConfig::from_page();
    let banner = RwSignal::new(shell_banner());
    let sidebar = RwSignal::new(SidebarState::new(config.sidebar_breakpoint_px));

    #[cfg(feature = "hydrate")]
    seed_flashed_after_hydration(banner, config.clone());

    provide_context(config);
    provide_context(banner);
    provide_context(sidebar);

    view! {
        <Stylesheet id="leptos" href="/pkg/socialmagic-ui.css"/>
        <Title text="SocialMagic"/>

        <Router>
            <div class="app-layout">
                <Sidebar/>
                <main class=crate::util::dom::CONTENT_REGION_CLASS>
                    <header class="top-bar">
                        <SidebarToggle/>
                        <span class="top-bar__brand">"SocialMagic"</span>
                    </header>
                    <MessageBannerView/>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment(DASHBOARD_SEGMENTS[0]) view=DashboardPage/>
                        <Route path=StaticSegment(DASHBOARD_SEGMENTS[1]) view=DashboardPage/>
                        <Route path=StaticSegment("upload") view=UploadPage/>
                        <Route
                            path=(StaticSegment("posts"), ParamSegment("id"), StaticSegment("review"))
                            view=PostReviewPage
                        />
                        <Route path=(StaticSegment("campaigns"), ParamSegment("id")) view=CampaignPage/>
                        <Route path=(StaticSegment("brand-assets"), ParamSegment("id")) view=BrandAssetPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
fn seed_flashed_after_hydration(banner: RwSignal<BannerState>, config: UiConfig) {
    use crate::components::message_banner::page_banner;
    use crate::util::dom::{FLASHED_MESSAGES_ID, element_text};

    // Effects first run after hydration, so the first render stays empty.
    let mut pending = element_text(FLASHED_MESSAGES_ID);
    Effect::new(move || {
        if let Some(raw) = pending.take() {
            let shown = page_banner(banner, &config).seed_flashed(&raw);
            log::debug!("seeded {shown} flashed message(s)");
        }
    });
}
