//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, task
//! spawning, DOM hit tests) and pure formatting from component logic so the
//! state machines stay testable off-browser.

pub mod clock;
pub mod dom;
pub mod format;
