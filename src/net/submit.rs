//! Ajax form submission with optimistic submit-button feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms across the app post to endpoints that answer with a JSON envelope
//! (`success` plus optional `message`/`error`). [`submit_form`] performs one
//! such POST and returns a [`SubmitOutcome`]; [`SubmitHandlers`] layers the
//! success/error callbacks and banner fallbacks on top of that outcome.
//!
//! ERROR HANDLING
//! ==============
//! Network failures and unreadable bodies become [`SubmitOutcome::Failed`]
//! and are reported like a rejection with a generic message. The submit
//! control is restored by a drop guard, so every exit path (including a
//! dropped future) re-enables it exactly once.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use futures::task::LocalSpawn;

use super::transport::{Transport, TransportError};
use super::types::SubmitResponse;
use crate::state::banner::{BannerState, MessageBanner, MessageKind};
use crate::state::store::Store;
use crate::util::clock::Clock;

pub const LOADING_LABEL: &str = "Processing...";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully";
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// The button (or input) that submits a form.
pub trait SubmitControl {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
}

/// Disables a control for the guard's lifetime and restores it on drop.
pub struct ControlGuard<'a, C: SubmitControl + ?Sized> {
    control: &'a C,
    original_label: String,
}

impl<'a, C: SubmitControl + ?Sized> ControlGuard<'a, C> {
    pub fn engage(control: &'a C) -> Self {
        let original_label = control.label();
        control.set_disabled(true);
        control.set_label(LOADING_LABEL);
        Self { control, original_label }
    }
}

impl<C: SubmitControl + ?Sized> Drop for ControlGuard<'_, C> {
    fn drop(&mut self) {
        self.control.set_disabled(false);
        self.control.set_label(&self.original_label);
    }
}

/// Result of one submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The server answered with a truthy `success`.
    Accepted(SubmitResponse),
    /// The server answered, but without a truthy `success`.
    Rejected(SubmitResponse),
    /// The request failed or the reply could not be read.
    Failed(TransportError),
}

impl SubmitOutcome {
    /// Classify a raw reply body. Any JSON object counts as an answer, even
    /// with a non-2xx status, so server error texts reach the user.
    pub fn from_reply(reply: Result<super::transport::RawResponse, TransportError>) -> Self {
        let parsed = reply.and_then(|raw| SubmitResponse::parse(&raw.body));
        match parsed {
            Ok(resp) if resp.is_success() => Self::Accepted(resp),
            Ok(resp) => Self::Rejected(resp),
            Err(e) => Self::Failed(e),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The text and kind the banner shows when no callback handles this outcome.
    pub fn banner_text(&self) -> (MessageKind, String) {
        match self {
            Self::Accepted(resp) => {
                (MessageKind::Success, resp.message().unwrap_or(DEFAULT_SUCCESS_MESSAGE).to_owned())
            }
            Self::Rejected(resp) => (MessageKind::Error, resp.error().unwrap_or(DEFAULT_ERROR_MESSAGE).to_owned()),
            Self::Failed(_) => (MessageKind::Error, NETWORK_ERROR_MESSAGE.to_owned()),
        }
    }
}

/// POST `form` to `action`, holding `control` disabled until the reply settles.
pub async fn submit_form<T, C>(transport: &T, control: Option<&C>, action: &str, form: T::Form) -> SubmitOutcome
where
    T: Transport + ?Sized,
    C: SubmitControl + ?Sized,
{
    let _guard = control.map(ControlGuard::engage);
    SubmitOutcome::from_reply(transport.post_form(action, form).await)
}

type Callback<'a> = Box<dyn FnOnce(&SubmitOutcome) + 'a>;

/// Optional per-form callbacks. A missing callback falls back to the banner.
#[derive(Default)]
pub struct SubmitHandlers<'a> {
    on_success: Option<Callback<'a>>,
    on_error: Option<Callback<'a>>,
}

impl<'a> SubmitHandlers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_success(mut self, f: impl FnOnce(&SubmitOutcome) + 'a) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_error(mut self, f: impl FnOnce(&SubmitOutcome) + 'a) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Route `outcome` to the matching callback, or show it on `banner`.
    pub fn dispatch<S, C, Sp>(self, outcome: &SubmitOutcome, banner: &MessageBanner<S, C, Sp>)
    where
        S: Store<BannerState>,
        C: Clock + ?Sized + 'static,
        Sp: LocalSpawn,
    {
        let handler = if outcome.is_accepted() { self.on_success } else { self.on_error };
        match handler {
            Some(f) => f(outcome),
            None => {
                let (kind, text) = outcome.banner_text();
                banner.show(text, kind);
            }
        }
    }
}

/// Submit and dispatch in one step; returns the outcome for further matching.
pub async fn submit_and_report<T, C, S, K, Sp>(
    transport: &T,
    control: Option<&C>,
    action: &str,
    form: T::Form,
    handlers: SubmitHandlers<'_>,
    banner: &MessageBanner<S, K, Sp>,
) -> SubmitOutcome
where
    T: Transport + ?Sized,
    C: SubmitControl + ?Sized,
    S: Store<BannerState>,
    K: Clock + ?Sized + 'static,
    Sp: LocalSpawn,
{
    let outcome = submit_form(transport, control, action, form).await;
    handlers.dispatch(&outcome, banner);
    outcome
}

/// `SubmitControl` over a form's submit button.
#[cfg(feature = "hydrate")]
pub struct ButtonControl(pub web_sys::HtmlElement);

#[cfg(feature = "hydrate")]
impl ButtonControl {
    /// Find the submit control of `form`, if it has one.
    pub fn find(form: &web_sys::HtmlFormElement) -> Option<Self> {
        use wasm_bindgen::JsCast;

        form.query_selector("[type=submit]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map(Self)
    }

    fn is_input(&self) -> bool {
        self.0.tag_name().eq_ignore_ascii_case("input")
    }
}

#[cfg(feature = "hydrate")]
impl SubmitControl for ButtonControl {
    fn label(&self) -> String {
        if self.is_input() {
            self.0.get_attribute("value").unwrap_or_default()
        } else {
            self.0.inner_html()
        }
    }

    fn set_label(&self, label: &str) {
        if self.is_input() {
            let _ = self.0.set_attribute("value", label);
        } else {
            self.0.set_inner_html(label);
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if disabled {
            let _ = self.0.set_attribute("disabled", "");
        } else {
            let _ = self.0.remove_attribute("disabled");
        }
    }
}
