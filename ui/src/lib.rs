//! Shared UI crate for Adpulse. The filter-aggregate pipeline and all
//! dashboard views live here; `web` and `desktop` only wrap them in a router.

pub mod core;
pub mod dashboard;
pub mod views;

mod navbar;
pub mod components {
    pub use super::navbar::AppNavbar;
}
