//! Riad stay booking requests

use serde::{Deserialize, Serialize};

use super::fields::{CONTACT_FIELDS, FieldSpec};
use super::kind::Kind;
use super::record::{RequestMeta, ServiceRecord, or_na};

pub const FIELDS: &[FieldSpec] = &[
    CONTACT_FIELDS[0],
    CONTACT_FIELDS[1],
    FieldSpec::text("phone", "phone").required(),
    FieldSpec::text("checkIn", "check_in").required(),
    FieldSpec::text("checkOut", "check_out").required(),
    FieldSpec::integer("adults", "adults").required(),
    FieldSpec::integer("children", "children").default_int(0),
    FieldSpec::text("roomPreferences", "room_preferences"),
    FieldSpec::text("specialRequests", "special_requests"),
    FieldSpec::text("budgetRange", "budget_range"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BookingRequest {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: RequestMeta,
    pub phone: Option<String>,
    pub check_in: String,
    pub check_out: String,
    pub adults: i64,
    #[serde(default)]
    pub children: Option<i64>,
    pub room_preferences: Option<String>,
    pub special_requests: Option<String>,
    pub budget_range: Option<String>,
}

impl ServiceRecord for BookingRequest {
    const KIND: Kind = Kind::Booking;

    fn meta(&self) -> &RequestMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RequestMeta {
        &mut self.meta
    }

    fn csv_extra_header() -> &'static [&'static str] {
        &["Phone", "Check-in", "Check-out", "Adults", "Children"]
    }

    fn csv_extra_values(&self) -> Vec<String> {
        vec![
            or_na(&self.phone),
            self.check_in.clone(),
            self.check_out.clone(),
            self.adults.to_string(),
            self.children.unwrap_or(0).to_string(),
        ]
    }
}
