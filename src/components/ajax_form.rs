//! Form wrapper that submits over fetch instead of navigating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server-rendered forms post multipart data and expect a full page reload.
//! `AjaxForm` intercepts the submit, sends the same `FormData` to the form's
//! action, disables the submit button while in flight, and reports the JSON
//! reply on the shared message banner (or to the caller's callbacks).

use leptos::prelude::*;

use crate::net::submit::SubmitOutcome;
use crate::state::banner::BannerState;

/// Form submitted asynchronously to `action`.
///
/// `on_success`/`on_error` replace the default banner message for that
/// branch. At most one of them runs per submission.
#[component]
pub fn AjaxForm(
    #[prop(into)] action: String,
    #[prop(optional)] on_success: Option<Callback<SubmitOutcome>>,
    #[prop(optional)] on_error: Option<Callback<SubmitOutcome>>,
    children: Children,
) -> impl IntoView {
    let banner = expect_context::<RwSignal<BannerState>>();
    let config = expect_context::<crate::config::UiConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        submit_in_background(&ev, banner, &config, on_success, on_error);
        #[cfg(not(feature = "hydrate"))]
        let _ = (banner, &config, on_success, on_error);
    };

    view! {
        <form class="ajax-form" action=action method="post" enctype="multipart/form-data" on:submit=on_submit>
            {children()}
        </form>
    }
}

#[cfg(feature = "hydrate")]
fn submit_in_background(
    ev: &web_sys::Event,
    banner: RwSignal<BannerState>,
    config: &crate::config::UiConfig,
    on_success: Option<Callback<SubmitOutcome>>,
    on_error: Option<Callback<SubmitOutcome>>,
) {
    use wasm_bindgen::JsCast;

    use crate::components::message_banner::page_banner;
    use crate::net::submit::{ButtonControl, SubmitHandlers, submit_and_report};
    use crate::net::transport::BrowserTransport;

    let Some(form) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok()) else {
        return;
    };
    let data = match web_sys::FormData::new_with_form(&form) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("form data unavailable: {e:?}");
            return;
        }
    };
    let action = form.action();
    let control = ButtonControl::find(&form);
    let banner = page_banner(banner, config);

    let mut handlers = SubmitHandlers::new();
    if let Some(cb) = on_success {
        handlers = handlers.on_success(move |outcome| cb.run(outcome.clone()));
    }
    if let Some(cb) = on_error {
        handlers = handlers.on_error(move |outcome| cb.run(outcome.clone()));
    }

    leptos::task::spawn_local(async move {
        let outcome = submit_and_report(&BrowserTransport, control.as_ref(), &action, data, handlers, &banner).await;
        log::debug!("form submit to {action}: accepted={}", outcome.is_accepted());
    });
}
