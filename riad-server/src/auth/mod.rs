//! Admin authentication: session cookie guards and login rate limiting

pub mod rate_limit;
pub mod session;

pub use session::{AdminSession, require_admin_api, require_admin_page};
