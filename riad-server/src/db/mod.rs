//! Database access layer

pub mod content;
pub mod requests;
