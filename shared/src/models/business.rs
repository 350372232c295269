//! Partnership and collaboration proposals

use serde::{Deserialize, Serialize};

use super::fields::{CONTACT_FIELDS, FieldSpec};
use super::kind::Kind;
use super::record::{RequestMeta, ServiceRecord, or_na};

pub const FIELDS: &[FieldSpec] = &[
    CONTACT_FIELDS[0],
    CONTACT_FIELDS[1],
    FieldSpec::text("phone", "phone").required(),
    FieldSpec::text("companyName", "company_name").required(),
    FieldSpec::text("businessType", "business_type").required(),
    FieldSpec::text("collaborationInterest", "collaboration_interest").required(),
    FieldSpec::text("proposalDetails", "proposal_details").required(),
    FieldSpec::text("expectedTimeline", "expected_timeline"),
    FieldSpec::text("website", "website"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BusinessCollaboration {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: RequestMeta,
    pub phone: Option<String>,
    pub company_name: String,
    pub business_type: String,
    /// Comma-joined when the form sends several interests
    pub collaboration_interest: String,
    pub proposal_details: String,
    pub expected_timeline: Option<String>,
    pub website: Option<String>,
}

impl ServiceRecord for BusinessCollaboration {
    const KIND: Kind = Kind::Business;

    fn meta(&self) -> &RequestMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RequestMeta {
        &mut self.meta
    }

    fn search_extras(&self) -> Vec<&str> {
        vec![self.company_name.as_str()]
    }

    fn csv_extra_header() -> &'static [&'static str] {
        &["Phone", "Company", "Business Type", "Interest", "Website"]
    }

    fn csv_extra_values(&self) -> Vec<String> {
        vec![
            or_na(&self.phone),
            self.company_name.clone(),
            self.business_type.clone(),
            self.collaboration_interest.clone(),
            or_na(&self.website),
        ]
    }
}
