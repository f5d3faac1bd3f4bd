//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each page widget owns a small plain-Rust state machine (`banner`,
//! `sidebar`, `files`, `stats`). Views hold them in `RwSignal`s; tests hold
//! them in `Rc<RefCell<_>>`. `store` abstracts over both.

pub mod banner;
pub mod files;
pub mod sidebar;
pub mod stats;
pub mod store;
