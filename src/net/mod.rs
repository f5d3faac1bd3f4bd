//! Networking modules for the SocialMagic HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the injectable HTTP seam, `types` the shared JSON schema,
//! `submit` the ajax form flow, `actions` the toggle-style POST endpoints, and
//! `stats_poller` the dashboard refresh loop.

pub mod actions;
pub mod stats_poller;
pub mod submit;
pub mod transport;
pub mod types;
