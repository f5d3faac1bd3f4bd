//! Fakes shared by unit tests: manual clock, scripted transport, and a
//! recording submit control.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::channel::oneshot;

use crate::net::submit::SubmitControl;
use crate::net::transport::{RawResponse, Transport, TransportError};
use crate::util::clock::Clock;

// =============================================================
// ManualClock
// =============================================================

/// Clock whose sleeps resolve immediately and advance `now` by the delay.
pub struct ManualClock {
    now: Cell<f64>,
    sleeps: RefCell<Vec<u32>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: Cell::new(start_ms), sleeps: RefCell::new(Vec::new()) }
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.sleeps.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Clock for ManualClock {
    async fn sleep(&self, ms: u32) {
        self.sleeps.borrow_mut().push(ms);
        self.now.set(self.now.get() + f64::from(ms));
    }

    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

// =============================================================
// ScriptedTransport
// =============================================================

type Reply = Result<RawResponse, TransportError>;

enum Scripted {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

/// A request observed by [`ScriptedTransport`].
#[derive(Clone, Debug, PartialEq)]
pub enum Recorded {
    Form { url: String, fields: Vec<(String, String)> },
    Json { url: String, body: serde_json::Value },
    Get { url: String },
}

/// Transport that replays queued replies in order and records requests.
///
/// An exhausted script answers with a network error.
#[derive(Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<Recorded>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, reply: Reply) -> &Self {
        self.script.borrow_mut().push_back(Scripted::Ready(reply));
        self
    }

    pub fn reply_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.reply(Ok(RawResponse { status, body: body.to_string() }))
    }

    /// Queue a reply that resolves only when the returned sender fires.
    pub fn reply_later(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Scripted::Gated(rx));
        tx
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    async fn next_reply(&self) -> Reply {
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Network("reply dropped".into()))),
            None => Err(TransportError::Network("script exhausted".into())),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    type Form = Vec<(String, String)>;

    async fn post_form(&self, url: &str, form: Self::Form) -> Reply {
        self.requests.borrow_mut().push(Recorded::Form { url: url.to_owned(), fields: form });
        self.next_reply().await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Reply {
        self.requests.borrow_mut().push(Recorded::Json { url: url.to_owned(), body: body.clone() });
        self.next_reply().await
    }

    async fn get(&self, url: &str) -> Reply {
        self.requests.borrow_mut().push(Recorded::Get { url: url.to_owned() });
        self.next_reply().await
    }
}

// =============================================================
// FakeControl
// =============================================================

/// Submit control that counts disable/enable transitions.
pub struct FakeControl {
    label: RefCell<String>,
    disabled: Cell<bool>,
    disables: Cell<u32>,
    enables: Cell<u32>,
}

impl FakeControl {
    pub fn new(label: &str) -> Self {
        Self {
            label: RefCell::new(label.to_owned()),
            disabled: Cell::new(false),
            disables: Cell::new(0),
            enables: Cell::new(0),
        }
    }

    pub fn current_label(&self) -> String {
        self.label.borrow().clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    pub fn disables(&self) -> u32 {
        self.disables.get()
    }

    pub fn enables(&self) -> u32 {
        self.enables.get()
    }
}

impl SubmitControl for FakeControl {
    fn label(&self) -> String {
        self.current_label()
    }

    fn set_label(&self, label: &str) {
        *self.label.borrow_mut() = label.to_owned();
    }

    fn set_disabled(&self, disabled: bool) {
        if disabled {
            self.disables.set(self.disables.get() + 1);
        } else {
            self.enables.set(self.enables.get() + 1);
        }
        self.disabled.set(disabled);
    }
}
