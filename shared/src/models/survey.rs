//! Riad-owner market survey responses

use serde::{Deserialize, Serialize};

use super::fields::{CONTACT_FIELDS, FieldSpec};
use super::kind::Kind;
use super::record::{RequestMeta, ServiceRecord, or_na};

pub const FIELDS: &[FieldSpec] = &[
    CONTACT_FIELDS[0],
    CONTACT_FIELDS[1],
    FieldSpec::text("riadName", "riad_name").required(),
    FieldSpec::text("phone", "phone"),
    FieldSpec::text("location", "location"),
    FieldSpec::text("currentChallenges", "current_challenges"),
    FieldSpec::text("digitalTools", "digital_tools"),
    FieldSpec::text("budget", "budget"),
    FieldSpec::text("priorities", "priorities"),
    FieldSpec::text("additionalComments", "additional_comments"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SurveyResponse {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: RequestMeta,
    pub riad_name: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub current_challenges: Option<String>,
    pub digital_tools: Option<String>,
    pub budget: Option<String>,
    pub priorities: Option<String>,
    pub additional_comments: Option<String>,
}

impl ServiceRecord for SurveyResponse {
    const KIND: Kind = Kind::Survey;

    fn meta(&self) -> &RequestMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RequestMeta {
        &mut self.meta
    }

    fn search_extras(&self) -> Vec<&str> {
        vec![self.riad_name.as_str()]
    }

    fn csv_extra_header() -> &'static [&'static str] {
        &[
            "Phone",
            "Riad Name",
            "Location",
            "Challenges",
            "Digital Tools",
            "Budget",
            "Priorities",
        ]
    }

    fn csv_extra_values(&self) -> Vec<String> {
        vec![
            or_na(&self.phone),
            self.riad_name.clone(),
            or_na(&self.location),
            or_na(&self.current_challenges),
            or_na(&self.digital_tools),
            or_na(&self.budget),
            or_na(&self.priorities),
        ]
    }

    fn csv_date_header() -> &'static str {
        "Date"
    }
}
