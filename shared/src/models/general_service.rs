//! Free-form service requests that fit no other kind

use serde::{Deserialize, Serialize};

use super::fields::{CONTACT_FIELDS, FieldSpec};
use super::kind::Kind;
use super::record::{RequestMeta, ServiceRecord, or_na};

pub const FIELDS: &[FieldSpec] = &[
    CONTACT_FIELDS[0],
    CONTACT_FIELDS[1],
    FieldSpec::text("phone", "phone").required(),
    FieldSpec::text("serviceType", "service_type").required(),
    FieldSpec::text("description", "description").required(),
    FieldSpec::text("preferredDate", "preferred_date"),
    FieldSpec::text("preferredTime", "preferred_time"),
    FieldSpec::text("budgetRange", "budget_range"),
    FieldSpec::text("specialRequirements", "special_requirements"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GeneralServiceRequest {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: RequestMeta,
    pub phone: Option<String>,
    pub service_type: String,
    pub description: String,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub budget_range: Option<String>,
    pub special_requirements: Option<String>,
}

impl ServiceRecord for GeneralServiceRequest {
    const KIND: Kind = Kind::GeneralService;

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
        &["Phone", "Service Type", "Date", "Budget"]
    }

    fn csv_extra_values(&self) -> Vec<String> {
        vec![
            or_na(&self.phone),
            self.service_type.clone(),
            or_na(&self.preferred_date),
            or_na(&self.budget_range),
        ]
    }
}
