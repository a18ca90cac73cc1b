//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("missing required field: {name}")).with_details(json!({
        "field": name,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Return the value when it holds something other than whitespace.
pub(crate) fn require_text(field: FieldName, value: Option<String>) -> Result<String, Error> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))
}

/// Parse a numeric path identifier.
///
/// Identifiers arrive as strings so that a malformed value produces the
/// standard error envelope with field context.
pub(crate) fn parse_id<T: From<u64>>(raw: &str) -> Result<T, Error> {
    raw.parse::<u64>().map(T::from).map_err(|_| {
        Error::invalid_request("invalid id").with_details(json!({
            "field": "id",
            "value": raw,
            "code": ErrorCode::InvalidId.as_str(),
        }))
    })
}
