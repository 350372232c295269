//! Triage helpers shared by the admin API and the triage client
//!
//! Filtering is a pure function of (records, search term, status filter);
//! CSV rendering and `mailto:` links derive from the same record trait so
//! server export and client export agree byte for byte.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Kind, RequestStatus, ServiceRecord};
use crate::util::format_date;

/// Subject line used for bulk waitlist mail
pub const BULK_MAIL_SUBJECT: &str = "RiadConnect Update";

/// Status filter of a list view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "status")]
pub enum StatusFilter {
    #[default]
    All,
    Only(RequestStatus),
}

impl StatusFilter {
    /// Exact match on effective status; a record without status is pending
    pub fn matches<R: ServiceRecord>(&self, record: &R) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.effective_status() == *status,
        }
    }
}

/// Case-insensitive substring match over name, email and the kind's extra
/// search fields. An empty term matches everything.
pub fn matches_search<R: ServiceRecord>(record: &R, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    let meta = record.meta();
    [meta.name.as_str(), meta.email.as_str()]
        .into_iter()
        .chain(record.search_extras())
        .any(|field| field.to_lowercase().contains(&term))
}

/// Records passing both the search term and the status filter, order kept
pub fn filter_records<'a, R: ServiceRecord>(
    records: &'a [R],
    search: &str,
    filter: StatusFilter,
) -> Vec<&'a R> {
    records
        .iter()
        .filter(|r| filter.matches(*r) && matches_search(*r, search))
        .collect()
}

/// Render records as CSV: `ID, Name, Email, <kind columns>, Status, <date>`.
///
/// Status is the effective status and the date is the creation day (UTC).
pub fn to_csv<'a, R, I>(records: I) -> Result<String, AppError>
where
    R: ServiceRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["ID", "Name", "Email"];
    header.extend_from_slice(R::csv_extra_header());
    header.push("Status");
    header.push(R::csv_date_header());
    writer.write_record(&header).map_err(csv_error)?;

    for record in records {
        let meta = record.meta();
        let mut row = vec![meta.id.to_string(), meta.name.clone(), meta.email.clone()];
        row.extend(record.csv_extra_values());
        row.push(record.effective_status().to_string());
        row.push(format_date(meta.created_at));
        writer.write_record(&row).map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("CSV flush failed: {}", e.error())))?;
    String::from_utf8(bytes).map_err(|e| AppError::internal(format!("CSV encoding failed: {}", e)))
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::internal(format!("CSV write failed: {}", e))
}

/// Download name of an export: `<kind>-YYYY-MM-DD.csv`
pub fn export_filename(kind: Kind, now_millis: i64) -> String {
    format!("{}-{}.csv", kind.slug(), format_date(now_millis))
}

/// Reply link for a single requester
pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email)
}

/// BCC link addressing every given email, `None` when there is nobody to mail
pub fn bulk_mailto<'a>(emails: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let recipients: Vec<&str> = emails.into_iter().filter(|e| !e.is_empty()).collect();
    if recipients.is_empty() {
        return None;
    }
    Some(format!(
        "mailto:?bcc={}&subject={}",
        recipients.join(","),
        BULK_MAIL_SUBJECT.replace(' ', "%20")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactMessage, RequestMeta, WaitlistEntry};

    fn meta(id: i64, name: &str, email: &str, status: Option<RequestStatus>) -> RequestMeta {
        RequestMeta {
            id,
            name: name.into(),
            email: email.into(),
            status,
            priority: None,
            notes: None,
            created_at: 1_748_779_200_000,
            updated_at: 1_748_779_200_000,
        }
    }

    fn contact(id: i64, name: &str, subject: &str, status: Option<RequestStatus>) -> ContactMessage {
        ContactMessage {
            meta: meta(id, name, &format!("{}@mail.com", name.to_lowercase()), status),
            message: "Hello".into(),
            phone: None,
            riad_name: Some("Dar Zitoun".into()),
            subject: Some(subject.into()),
        }
    }

    #[test]
    fn search_is_case_insensitive_over_extras() {
        let record = contact(1, "Amina", "Rooftop dinner", None);
        assert!(matches_search(&record, "ROOFTOP"));
        assert!(matches_search(&record, "zitoun"));
        assert!(matches_search(&record, "amina@"));
        assert!(matches_search(&record, ""));
        assert!(!matches_search(&record, "hammam"));
    }

    #[test]
    fn absent_status_counts_as_pending() {
        let records = vec![
            contact(1, "A", "x", None),
            contact(2, "B", "x", Some(RequestStatus::Read)),
            contact(3, "C", "x", Some(RequestStatus::Pending)),
        ];
        let pending = filter_records(&records, "", StatusFilter::Only(RequestStatus::Pending));
        let ids: Vec<i64> = pending.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(filter_records(&records, "", StatusFilter::All).len(), 3);
    }

    #[test]
    fn search_and_filter_combine() {
        let records = vec![
            contact(1, "Amina", "Spa", Some(RequestStatus::Read)),
            contact(2, "Omar", "Spa", None),
        ];
        let hits = filter_records(&records, "spa", StatusFilter::Only(RequestStatus::Read));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), 1);
    }

    #[test]
    fn csv_quotes_and_uses_effective_status() {
        let mut record = contact(5, "Doe, Jane", "Hi \"there\"", None);
        record.phone = Some("+212 600".into());
        let csv = to_csv([&record]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Name,Email,Phone,Riad Name,Subject,Message,Status,Created")
        );
        assert_eq!(
            lines.next(),
            Some(
                "5,\"Doe, Jane\",\"doe, jane@mail.com\",+212 600,Dar Zitoun,\"Hi \"\"there\"\"\",Hello,pending,2025-06-01"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn waitlist_csv_header() {
        let records: Vec<WaitlistEntry> = Vec::new();
        let csv = to_csv(&records).unwrap();
        assert_eq!(csv.trim_end(), "ID,Name,Email,Riad Name,Location,Status,Date");
    }

    #[test]
    fn mail_links() {
        assert_eq!(mailto_link("a@b.ma"), "mailto:a@b.ma");
        assert_eq!(
            bulk_mailto(["a@b.ma", "", "c@d.ma"]).as_deref(),
            Some("mailto:?bcc=a@b.ma,c@d.ma&subject=RiadConnect%20Update")
        );
        assert_eq!(bulk_mailto(std::iter::empty()), None);
    }

    #[test]
    fn export_filename_uses_slug_and_day() {
        assert_eq!(
            export_filename(Kind::FoodExperience, 1_748_779_200_000),
            "food-experiences-2025-06-01.csv"
        );
    }
}
