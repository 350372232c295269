//! Hammam, spa and massage bookings

use serde::{Deserialize, Serialize};

use super::fields::{CONTACT_FIELDS, FieldSpec};
use super::kind::Kind;
use super::record::{RequestMeta, ServiceRecord, or_na};

pub const FIELDS: &[FieldSpec] = &[
    CONTACT_FIELDS[0],
    CONTACT_FIELDS[1],
    FieldSpec::text("phone", "phone").required(),
    FieldSpec::text("serviceType", "service_type").required(),
    FieldSpec::text("preferredDate", "preferred_date").required(),
    FieldSpec::integer("numberOfPeople", "number_of_people").required(),
    FieldSpec::text("preferredTime", "preferred_time"),
    FieldSpec::text("treatmentPreferences", "treatment_preferences"),
    FieldSpec::text("healthConsiderations", "health_considerations"),
    FieldSpec::text("durationPreference", "duration_preference"),
    FieldSpec::text("specialRequests", "special_requests"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WellnessRequest {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: RequestMeta,
    pub phone: Option<String>,
    pub service_type: String,
    pub preferred_date: String,
    pub number_of_people: i64,
    pub preferred_time: Option<String>,
    pub treatment_preferences: Option<String>,
    pub health_considerations: Option<String>,
    pub duration_preference: Option<String>,
    pub special_requests: Option<String>,
}

impl ServiceRecord for WellnessRequest {
    const KIND: Kind = Kind::Wellness;

    fn meta(&self) -> &RequestMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RequestMeta {
        &mut self.meta
    }

    fn search_extras(&self) -> Vec<&str> {
        vec![self.service_type.as_str()]
    }

    fn csv_extra_header() -> &'static [&'static str] {
        &["Phone", "Service Type", "Date", "People", "Duration"]
    }

    fn csv_extra_values(&self) -> Vec<String> {
        vec![
            or_na(&self.phone),
            self.service_type.clone(),
            self.preferred_date.clone(),
            self.number_of_people.to_string(),
            or_na(&self.duration_preference),
        ]
    }
}
