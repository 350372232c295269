//! Submission field tables and presence validation
//!
//! Every request kind declares its form fields once as a `&[FieldSpec]`.
//! [`parse_submission`] applies the same policy to all kinds: collect every
//! required field that is missing or falsy, reject before touching storage,
//! then coerce values into column bindings.

use serde_json::{Map, Value};

use crate::error::AppError;
use crate::util::parse_leading_int;

/// Column storage type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    /// Best-effort integer; `default` applies when the field is absent or unparsable
    Integer { default: Option<i64> },
}

/// One form field: JSON key, table column, type and whether it is required
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub column: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

impl FieldSpec {
    pub const fn text(key: &'static str, column: &'static str) -> Self {
        Self {
            key,
            column,
            ty: FieldType::Text,
            required: false,
        }
    }

    pub const fn integer(key: &'static str, column: &'static str) -> Self {
        Self {
            key,
            column,
            ty: FieldType::Integer { default: None },
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn default_int(mut self, value: i64) -> Self {
        self.ty = FieldType::Integer {
            default: Some(value),
        };
        self
    }
}

/// `name` and `email`, required on every kind
pub const CONTACT_FIELDS: [FieldSpec; 2] = [
    FieldSpec::text("name", "name").required(),
    FieldSpec::text("email", "email").required(),
];

/// A value ready to be bound to an INSERT
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Text(Option<String>),
    Integer(Option<i64>),
}

/// Missing-or-falsy check: absent, `null`, `false`, `""` and `0` all count as missing.
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

/// Coerce a JSON value into text. Arrays of strings (checkbox groups) are
/// joined with `", "`; other structured values are stored as JSON.
pub fn coerce_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) if items.iter().all(Value::is_string) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Some(other.to_string()),
    }
}

/// Coerce a JSON value into an integer: numbers are truncated, strings go
/// through [`parse_leading_int`].
pub fn coerce_int(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

/// Validate a submission body against a field table and produce column bindings.
pub fn parse_submission(
    fields: &[FieldSpec],
    body: &Map<String, Value>,
) -> Result<Vec<(&'static str, ColumnValue)>, AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|f| f.required && is_falsy(body.get(f.key)))
        .map(|f| f.key)
        .collect();
    if !missing.is_empty() {
        return Err(AppError::missing_fields(&missing));
    }

    let mut invalid = Vec::new();
    let mut columns = Vec::with_capacity(fields.len());
    for field in fields {
        let raw = body.get(field.key);
        let value = match field.ty {
            FieldType::Text => ColumnValue::Text(coerce_text(raw)),
            FieldType::Integer { default } => match coerce_int(raw) {
                Some(n) => ColumnValue::Integer(Some(n)),
                None if field.required => {
                    invalid.push(field.key);
                    continue;
                }
                None => ColumnValue::Integer(default),
            },
        };
        columns.push((field.column, value));
    }

    if !invalid.is_empty() {
        return Err(
            AppError::validation(format!("Invalid number for fields: {}", invalid.join(", ")))
                .with_detail("fields", invalid),
        );
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    const FIELDS: &[FieldSpec] = &[
        CONTACT_FIELDS[0],
        CONTACT_FIELDS[1],
        FieldSpec::integer("adults", "adults").required(),
        FieldSpec::integer("children", "children").default_int(0),
        FieldSpec::text("notes", "special_requests"),
    ];

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn falsy_values() {
        assert!(is_falsy(None));
        assert!(is_falsy(Some(&json!(null))));
        assert!(is_falsy(Some(&json!(""))));
        assert!(is_falsy(Some(&json!(0))));
        assert!(is_falsy(Some(&json!(false))));
        assert!(!is_falsy(Some(&json!("0"))));
        assert!(!is_falsy(Some(&json!(" "))));
        assert!(!is_falsy(Some(&json!(["a"]))));
    }

    #[test]
    fn every_missing_field_is_named() {
        let err = parse_submission(FIELDS, &body(json!({"email": "", "adults": 0}))).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "Missing required fields: name, email, adults");
    }

    #[test]
    fn integers_are_coerced_and_defaulted() {
        let columns = parse_submission(
            FIELDS,
            &body(json!({"name": "Fatima", "email": "f@x.com", "adults": "2"})),
        )
        .unwrap();
        assert_eq!(
            columns,
            vec![
                ("name", ColumnValue::Text(Some("Fatima".into()))),
                ("email", ColumnValue::Text(Some("f@x.com".into()))),
                ("adults", ColumnValue::Integer(Some(2))),
                ("children", ColumnValue::Integer(Some(0))),
                ("special_requests", ColumnValue::Text(None)),
            ]
        );
    }

    #[test]
    fn float_is_truncated() {
        assert_eq!(coerce_int(Some(&json!(3.7))), Some(3));
    }

    #[test]
    fn unparsable_required_integer_is_rejected() {
        let err = parse_submission(
            FIELDS,
            &body(json!({"name": "A", "email": "a@x", "adults": "two"})),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("adults"));
    }

    #[test]
    fn text_coercion() {
        assert_eq!(coerce_text(Some(&json!(123))), Some("123".into()));
        assert_eq!(
            coerce_text(Some(&json!(["Marketing", "Bookings"]))),
            Some("Marketing, Bookings".into())
        );
        assert_eq!(coerce_text(Some(&json!(null))), None);
    }
}
