//! Early-access waitlist entries
//!
//! The only kind without a phone column.

use serde::{Deserialize, Serialize};

use super::fields::{CONTACT_FIELDS, FieldSpec};
use super::kind::Kind;
use super::record::{RequestMeta, ServiceRecord, or_na};

pub const FIELDS: &[FieldSpec] = &[
    CONTACT_FIELDS[0],
    CONTACT_FIELDS[1],
    FieldSpec::text("riadName", "riad_name"),
    FieldSpec::text("role", "role"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WaitlistEntry {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: RequestMeta,
    pub riad_name: Option<String>,
    pub role: Option<String>,
}

impl ServiceRecord for WaitlistEntry {
    const KIND: Kind = Kind::Waitlist;

    fn meta(&self) -> &RequestMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RequestMeta {
        &mut self.meta
    }

    fn search_extras(&self) -> Vec<&str> {
        [self.riad_name.as_deref(), self.role.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn csv_extra_header() -> &'static [&'static str] {
        &["Riad Name", "Location"]
    }

    fn csv_extra_values(&self) -> Vec<String> {
        vec![or_na(&self.riad_name), or_na(&self.role)]
    }

    fn csv_date_header() -> &'static str {
        "Date"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_without_optional_columns() {
        let entry: WaitlistEntry = serde_json::from_value(json!({
            "id": 3,
            "name": "Youssef",
            "email": "y@riad.ma",
            "createdAt": 10,
            "updatedAt": 10
        }))
        .unwrap();
        assert_eq!(entry.meta.status, None);
        assert_eq!(entry.riad_name, None);
        assert!(entry.search_extras().is_empty());
        assert_eq!(entry.csv_extra_values(), vec!["N/A", "N/A"]);
    }
}
