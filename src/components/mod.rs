//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and widgets while reading/writing shared
//! state from Leptos context providers.

pub mod action_button;
pub mod ajax_form;
pub mod file_picker;
pub mod message_banner;
pub mod sidebar;
pub mod stat_cards;
