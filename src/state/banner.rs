//! Transient, auto-dismissing notifications.
//!
//! DESIGN
//! ======
//! [`BannerState`] is the container model: a single slot (newest replaces
//! everything) or a stack (newest on top, older ones expire on their own).
//! [`MessageBanner`] wraps a store of that state and schedules each message's
//! fade and removal on the injected clock and spawner.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use std::rc::Rc;

use futures::task::LocalSpawn;
use serde::Deserialize;

use super::store::Store;
use crate::config::UiConfig;
use crate::util::clock::{Clock, spawn_detached};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MessageId(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Info,
    Success,
    Error,
}

impl MessageKind {
    /// Map a server flash category onto a kind.
    pub fn from_category(category: &str) -> Self {
        match category {
            "success" => Self::Success,
            "error" | "danger" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub kind: MessageKind,
    pub created_at_ms: f64,
    /// Set once the fade-out transition has started.
    pub fading: bool,
}

/// How the container treats a new message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlotMode {
    /// Dedicated area holding at most one message.
    #[default]
    Single,
    /// Generic content area; newest first, older ones kept until they expire.
    Stacked,
}

#[derive(Clone, Debug, Default)]
pub struct BannerState {
    mode: SlotMode,
    messages: Vec<Message>,
    next_id: u64,
}

impl BannerState {
    pub fn new(mode: SlotMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn mode(&self) -> SlotMode {
        self.mode
    }

    /// Messages top to bottom.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Insert a message according to the slot mode.
    pub fn push(&mut self, text: String, kind: MessageKind, now_ms: f64) -> MessageId {
        self.next_id += 1;
        let id = MessageId(self.next_id);
        let message = Message { id, text, kind, created_at_ms: now_ms, fading: false };
        if self.mode == SlotMode::Single {
            self.messages.clear();
        }
        self.messages.insert(0, message);
        id
    }

    /// Start the fade for `id`. Returns `false` if it is no longer shown.
    pub fn begin_fade(&mut self, id: MessageId) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.fading = true;
                true
            }
            None => false,
        }
    }

    /// Remove `id`. Removing a message that is already gone is a no-op.
    pub fn remove(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissTiming {
    pub display_ms: u32,
    pub fade_ms: u32,
}

impl From<&UiConfig> for DismissTiming {
    fn from(config: &UiConfig) -> Self {
        Self { display_ms: config.message_dismiss_ms, fade_ms: config.message_fade_ms }
    }
}

/// Wait out the display time, fade, then remove `id`.
pub async fn dismiss_after<S, C>(store: S, clock: Rc<C>, id: MessageId, timing: DismissTiming)
where
    S: Store<BannerState>,
    C: Clock + ?Sized,
{
    clock.sleep(timing.display_ms).await;
    let still_shown = store.mutate(|b| b.begin_fade(id)).unwrap_or(false);
    if !still_shown {
        return;
    }
    clock.sleep(timing.fade_ms).await;
    store.mutate(|b| b.remove(id));
}

/// Notification surface handle: shows messages and schedules their removal.
pub struct MessageBanner<S, C: ?Sized, Sp> {
    store: S,
    clock: Rc<C>,
    spawner: Sp,
    timing: DismissTiming,
}

impl<S: Clone, C: ?Sized, Sp: Clone> Clone for MessageBanner<S, C, Sp> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            clock: Rc::clone(&self.clock),
            spawner: self.spawner.clone(),
            timing: self.timing,
        }
    }
}

impl<S, C, Sp> MessageBanner<S, C, Sp>
where
    S: Store<BannerState>,
    C: Clock + ?Sized + 'static,
    Sp: LocalSpawn,
{
    pub fn new(store: S, clock: Rc<C>, spawner: Sp, timing: DismissTiming) -> Self {
        Self { store, clock, spawner, timing }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Show `text` and schedule its automatic dismissal.
    pub fn show(&self, text: impl Into<String>, kind: MessageKind) -> Option<MessageId> {
        let now = self.clock.now_ms();
        let text = text.into();
        let id = self.store.mutate(|b| b.push(text, kind, now))?;
        let fut = dismiss_after(self.store.clone(), Rc::clone(&self.clock), id, self.timing);
        spawn_detached(&self.spawner, "message dismissal", fut);
        Some(id)
    }

    /// Show each server-flashed message from a `[[category, text], ...]` blob.
    ///
    /// A malformed blob is logged and ignored.
    pub fn seed_flashed(&self, raw: &str) -> usize {
        match parse_flashed(raw) {
            Ok(flashed) => {
                let count = flashed.len();
                for (kind, text) in flashed {
                    self.show(text, kind);
                }
                count
            }
            Err(e) => {
                log::warn!("ignoring flashed messages: {e}");
                0
            }
        }
    }
}

#[derive(Deserialize)]
struct Flashed(String, String);

/// Parse flashed messages into `(kind, text)` pairs, preserving order.
///
/// # Errors
///
/// Returns the JSON error if `raw` is not a list of `[category, text]` pairs.
pub fn parse_flashed(raw: &str) -> Result<Vec<(MessageKind, String)>, serde_json::Error> {
    let flashed: Vec<Flashed> = serde_json::from_str(raw)?;
    Ok(flashed
        .into_iter()
        .map(|Flashed(category, text)| (MessageKind::from_category(&category), text))
        .collect())
}
