//! Data models
//!
//! Shared between riad-server and riad-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY AUTOINCREMENT), one id
//! space per kind.

pub mod fields;
pub mod kind;
pub mod patch;
pub mod record;
pub mod status;

pub mod booking;
pub mod business;
pub mod contact;
pub mod content;
pub mod food_experience;
pub mod general_service;
pub mod survey;
pub mod tour;
pub mod transport;
pub mod waitlist;
pub mod wellness;

// Re-exports
pub use booking::BookingRequest;
pub use business::BusinessCollaboration;
pub use contact::ContactMessage;
pub use content::{ContentUpdate, SiteContent};
pub use fields::{ColumnValue, FieldSpec, FieldType, parse_submission};
pub use food_experience::FoodExperience;
pub use general_service::GeneralServiceRequest;
pub use kind::{Kind, KindStats};
pub use patch::{RequestPatch, parse_id};
pub use record::{RequestMeta, ServiceRecord};
pub use status::{RequestStatus, UnknownStatus};
pub use survey::SurveyResponse;
pub use tour::TourBooking;
pub use transport::TransportRequest;
pub use waitlist::WaitlistEntry;
pub use wellness::WellnessRequest;
