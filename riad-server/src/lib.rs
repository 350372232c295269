//! riad-server: RiadConnect back office
//!
//! Long-running service that:
//! - Accepts public inquiry forms for ten request kinds
//! - Lists, patches and deletes requests for the admin triage views
//! - Guards the admin section with a signed, sliding session cookie
//! - Serves site content, dashboard counters and CSV exports

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod util;

pub use config::Config;
pub use state::AppState;
