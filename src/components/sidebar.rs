//! Navigation sidebar and its toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar is always rendered; the `sidebar--open` modifier slides it in
//! on narrow viewports. A window click listener closes it when the click
//! lands outside both the sidebar and the toggle.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::state::sidebar::SidebarState;
use crate::util::dom::{SIDEBAR_ID, SIDEBAR_TOGGLE_CLASS};

const NAV_LINKS: [(&str, &str); 2] = [("/dashboard", "Dashboard"), ("/upload", "Upload Media")];

fn sidebar_class(open: bool) -> &'static str {
    if open { "sidebar sidebar--open" } else { "sidebar" }
}

/// Sidebar region with primary navigation.
#[component]
pub fn Sidebar() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();

    #[cfg(feature = "hydrate")]
    install_outside_click(sidebar);

    view! {
        <aside id=SIDEBAR_ID class=move || sidebar_class(sidebar.get().is_open())>
            <nav class="sidebar__nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="sidebar__link" href=*href>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Hamburger button that flips the sidebar.
#[component]
pub fn SidebarToggle() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();

    view! {
        <button
            class=SIDEBAR_TOGGLE_CLASS
            aria-controls=SIDEBAR_ID
            aria-expanded=move || sidebar.get().is_open().to_string()
            title="Toggle navigation"
            on:click=move |_| sidebar.update(SidebarState::toggle)
        >
            "☰"
        </button>
    }
}

// The listener stays installed for the lifetime of the page.
#[cfg(feature = "hydrate")]
fn install_outside_click(sidebar: RwSignal<SidebarState>) {
    use crate::state::sidebar::ClickContext;
    use crate::util::dom::{event_within, viewport_width};

    let sidebar_selector = format!("#{SIDEBAR_ID}");
    let toggle_selector = format!(".{SIDEBAR_TOGGLE_CLASS}");
    let _ = window_event_listener(leptos::ev::click, move |ev| {
        let Some(width) = viewport_width() else {
            return;
        };
        let click = ClickContext {
            viewport_width: width,
            inside_sidebar: event_within(&ev, &sidebar_selector),
            on_toggle: event_within(&ev, &toggle_selector),
        };
        if !sidebar.get_untracked().is_open() {
            return;
        }
        sidebar.update(|s| {
            if s.handle_click(click) {
                log::debug!("sidebar closed by outside click");
            }
        });
    });
}
