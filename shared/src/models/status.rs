//! Request status

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Triage status of a service request.
///
/// Each [`super::Kind`] allows a subset of these; a stored `NULL` status is
/// read as [`RequestStatus::Pending`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum RequestStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Unread,
    Read,
    Reviewed,
    Contacted,
    Approved,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 9] = [
        Self::Pending,
        Self::Confirmed,
        Self::Completed,
        Self::Cancelled,
        Self::Unread,
        Self::Read,
        Self::Reviewed,
        Self::Contacted,
        Self::Approved,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Unread => "unread",
            Self::Read => "read",
            Self::Reviewed => "reviewed",
            Self::Contacted => "contacted",
            Self::Approved => "approved",
        }
    }

    /// Read a stored status, treating absence as pending
    pub fn effective(status: Option<Self>) -> Self {
        status.unwrap_or(Self::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized status string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for RequestStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_and_unknown() {
        assert_eq!("confirmed".parse(), Ok(RequestStatus::Confirmed));
        assert_eq!("unread".parse(), Ok(RequestStatus::Unread));
        assert!("banana".parse::<RequestStatus>().is_err());
        // case-sensitive, matching what the admin UI sends
        assert!("Pending".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn absent_status_is_pending() {
        assert_eq!(RequestStatus::effective(None), RequestStatus::Pending);
        assert_eq!(
            RequestStatus::effective(Some(RequestStatus::Read)),
            RequestStatus::Read
        );
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        let status: RequestStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(status, RequestStatus::Approved);
    }
}
