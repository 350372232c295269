//! Cooking classes, rooftop dinners and other food experiences

use serde::{Deserialize, Serialize};

use super::fields::{CONTACT_FIELDS, FieldSpec};
use super::kind::Kind;
use super::record::{RequestMeta, ServiceRecord, or_na};

pub const FIELDS: &[FieldSpec] = &[
    CONTACT_FIELDS[0],
    CONTACT_FIELDS[1],
    FieldSpec::text("phone", "phone").required(),
    FieldSpec::text("experienceType", "experience_type").required(),
    FieldSpec::text("preferredDate", "preferred_date").required(),
    FieldSpec::integer("guests", "guests").required(),
    FieldSpec::text("preferredTime", "preferred_time"),
    FieldSpec::text("dietaryRestrictions", "dietary_restrictions"),
    FieldSpec::text("cuisinePreferences", "cuisine_preferences"),
    FieldSpec::text("specialOccasion", "special_occasion"),
    FieldSpec::text("specialRequests", "special_requests"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FoodExperience {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: RequestMeta,
    pub phone: Option<String>,
    pub experience_type: String,
    pub preferred_date: String,
    pub guests: i64,
    pub preferred_time: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub cuisine_preferences: Option<String>,
    pub special_occasion: Option<String>,
    pub special_requests: Option<String>,
}

impl ServiceRecord for FoodExperience {
    const KIND: Kind = Kind::FoodExperience;

    fn meta(&self) -> &RequestMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RequestMeta {
        &mut self.meta
    }

    fn search_extras(&self) -> Vec<&str> {
        vec![self.experience_type.as_str()]
    }

    fn csv_extra_header() -> &'static [&'static str] {
        &["Phone", "Experience", "Date", "Guests", "Dietary"]
    }

    fn csv_extra_values(&self) -> Vec<String> {
        vec![
            or_na(&self.phone),
            self.experience_type.clone(),
            self.preferred_date.clone(),
            self.guests.to_string(),
            or_na(&self.dietary_restrictions),
        ]
    }
}
