//! DOM contract shared with server-rendered templates, plus browser-only
//! lookups behind the `hydrate` feature.

/// Sidebar region (`#sidebar`).
pub const SIDEBAR_ID: &str = "sidebar";
/// Sidebar open/close button class.
pub const SIDEBAR_TOGGLE_CLASS: &str = "sidebar-toggle";
/// Dedicated single-slot message container (`#flash-messages`).
pub const MESSAGE_CONTAINER_ID: &str = "flash-messages";
/// Generic content region used when the dedicated container is missing.
pub const CONTENT_REGION_CLASS: &str = "main-content";
/// Class shared by the four dashboard counters, in left-to-right order.
pub const STAT_VALUE_CLASS: &str = "stat-value";
/// JSON blob with server-flashed messages.
pub const FLASHED_MESSAGES_ID: &str = "flashed-messages";

/// Whether the event's target sits inside an element matching `selector`.
#[cfg(feature = "hydrate")]
pub fn event_within(ev: &web_sys::Event, selector: &str) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Current `window.innerWidth`, if available.
#[cfg(feature = "hydrate")]
pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// Text content of the element with `id`, if present.
#[cfg(feature = "hydrate")]
pub fn element_text(id: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.text_content())
}
