//! Guided tour bookings

use serde::{Deserialize, Serialize};

use super::fields::{CONTACT_FIELDS, FieldSpec};
use super::kind::Kind;
use super::record::{RequestMeta, ServiceRecord, or_na};

pub const FIELDS: &[FieldSpec] = &[
    CONTACT_FIELDS[0],
    CONTACT_FIELDS[1],
    FieldSpec::text("phone", "phone").required(),
    FieldSpec::text("tourType", "tour_type").required(),
    FieldSpec::text("preferredDate", "preferred_date").required(),
    FieldSpec::integer("participants", "participants").required(),
    FieldSpec::text("preferredTime", "preferred_time"),
    FieldSpec::text("languagePreference", "language_preference"),
    FieldSpec::text("accessibilityRequirements", "accessibility_requirements"),
    FieldSpec::text("dietaryRestrictions", "dietary_restrictions"),
    FieldSpec::text("specialInterests", "special_interests"),
    FieldSpec::text("budgetRange", "budget_range"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TourBooking {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: RequestMeta,
    pub phone: Option<String>,
    pub tour_type: String,
    pub preferred_date: String,
    pub participants: i64,
    pub preferred_time: Option<String>,
    pub language_preference: Option<String>,
    pub accessibility_requirements: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub special_interests: Option<String>,
    pub budget_range: Option<String>,
}

impl ServiceRecord for TourBooking {
    const KIND: Kind = Kind::Tour;

    fn meta(&self) -> &RequestMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RequestMeta {
        &mut self.meta
    }

    fn search_extras(&self) -> Vec<&str> {
        vec![self.tour_type.as_str()]
    }

    fn csv_extra_header() -> &'static [&'static str] {
        &["Phone", "Tour Type", "Date", "Participants", "Language"]
    }

    fn csv_extra_values(&self) -> Vec<String> {
        vec![
            or_na(&self.phone),
            self.tour_type.clone(),
            self.preferred_date.clone(),
            self.participants.to_string(),
            or_na(&self.language_preference),
        ]
    }
}
