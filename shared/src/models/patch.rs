//! Triage patch: partial update of status, priority and notes

use serde::Serialize;
use serde_json::{Map, Value};

use super::kind::Kind;
use super::status::RequestStatus;
use crate::error::{AppError, ErrorCode};

/// PATCH body. Outer `None` means "leave untouched", `Some(None)` clears the
/// column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestPatch {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Option<RequestStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Option<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl RequestPatch {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = Some(Some(status));
        self
    }

    pub fn priority(mut self, priority: bool) -> Self {
        self.priority = Some(Some(priority));
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(Some(notes.into()));
        self
    }

    /// True when only `updatedAt` would change
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.notes.is_none()
    }

    /// Parse a raw PATCH body for `kind`.
    ///
    /// `id` may be a number or a numeric string. A non-null `status` must be
    /// one of the kind's allowed statuses.
    pub fn from_body(kind: Kind, body: &Map<String, Value>) -> Result<Self, AppError> {
        let id = match body.get("id") {
            None | Some(Value::Null) => return Err(AppError::missing_fields(&["id"])),
            Some(value) => parse_id(value)
                .ok_or_else(|| AppError::validation("Invalid id").with_detail("field", "id"))?,
        };

        let status = match body.get("status") {
            None => None,
            Some(Value::Null) => Some(None),
            Some(Value::String(s)) => {
                let status: RequestStatus = s.parse().map_err(|_| invalid_status(kind, s))?;
                if !kind.allows(status) {
                    return Err(invalid_status(kind, s));
                }
                Some(Some(status))
            }
            Some(other) => return Err(invalid_status(kind, &other.to_string())),
        };

        let priority = match body.get("priority") {
            None => None,
            Some(Value::Null) => Some(None),
            Some(Value::Bool(b)) => Some(Some(*b)),
            Some(_) => {
                return Err(AppError::validation("priority must be a boolean")
                    .with_detail("field", "priority"));
            }
        };

        let notes = match body.get("notes") {
            None => None,
            Some(Value::Null) => Some(None),
            Some(Value::String(s)) => Some(Some(s.clone())),
            Some(_) => {
                return Err(
                    AppError::validation("notes must be a string").with_detail("field", "notes")
                );
            }
        };

        Ok(Self {
            id,
            status,
            priority,
            notes,
        })
    }
}

/// Record id from a JSON number or a numeric string
pub fn parse_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn invalid_status(kind: Kind, value: &str) -> AppError {
    let allowed: Vec<&str> = kind.statuses().iter().map(RequestStatus::as_str).collect();
    AppError::with_message(
        ErrorCode::InvalidStatus,
        format!("Invalid status '{}' for {}", value, kind.label()),
    )
    .with_detail("allowed", allowed)
}
