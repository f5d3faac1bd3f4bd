//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (polling, form wiring) and
//! delegates rendering details to `components`.

pub mod brand_asset;
pub mod campaign;
pub mod dashboard;
pub mod post_review;
pub mod upload;
