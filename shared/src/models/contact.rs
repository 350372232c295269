//! Contact-form messages

use serde::{Deserialize, Serialize};

use super::fields::{CONTACT_FIELDS, FieldSpec};
use super::kind::Kind;
use super::record::{RequestMeta, ServiceRecord, or_na};

pub const FIELDS: &[FieldSpec] = &[
    CONTACT_FIELDS[0],
    CONTACT_FIELDS[1],
    FieldSpec::text("message", "message").required(),
    FieldSpec::text("phone", "phone"),
    FieldSpec::text("riadName", "riad_name"),
    FieldSpec::text("subject", "subject"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContactMessage {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: RequestMeta,
    pub message: String,
    pub phone: Option<String>,
    pub riad_name: Option<String>,
    pub subject: Option<String>,
}

impl ServiceRecord for ContactMessage {
    const KIND: Kind = Kind::Contact;

    fn meta(&self) -> &RequestMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RequestMeta {
        &mut self.meta
    }

    fn search_extras(&self) -> Vec<&str> {
        [self.subject.as_deref(), self.riad_name.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn csv_extra_header() -> &'static [&'static str] {
        &["Phone", "Riad Name", "Subject", "Message"]
    }

    fn csv_extra_values(&self) -> Vec<String> {
        vec![
            or_na(&self.phone),
            or_na(&self.riad_name),
            or_na(&self.subject),
            self.message.clone(),
        ]
    }
}
