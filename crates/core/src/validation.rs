//! Field-level validation errors.
//!
//! A [`ValidationError`] carries every offending field of a request at once,
//! so clients can fix a payload in a single round trip. Each entry is a
//! [`FieldError`] serialized as `{ "loc": [...], "msg": ..., "type": ... }`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error type codes reported in [`FieldError::kind`].
pub mod codes {
    pub const MISSING: &str = "value_error.missing";
    pub const NONE_NOT_ALLOWED: &str = "type_error.none.not_allowed";
    pub const STR_EXPECTED: &str = "type_error.str";
    pub const MIN_LENGTH: &str = "value_error.any_str.min_length";
    pub const DICT_EXPECTED: &str = "type_error.dict";
}

/// Location used for errors about the request body as a whole.
pub const ROOT_LOC: &str = "__root__";

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path to the offending value, outermost first.
    pub loc: Vec<String>,
    /// Human-readable reason.
    pub msg: String,
    /// Machine-readable error code, see [`codes`].
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(field: &str, kind: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec![field.to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, codes::MISSING, "field required")
    }

    pub fn none_not_allowed(field: &str) -> Self {
        Self::new(field, codes::NONE_NOT_ALLOWED, "none is not an allowed value")
    }

    pub fn str_expected(field: &str) -> Self {
        Self::new(field, codes::STR_EXPECTED, "str type expected")
    }

    pub fn dict_expected() -> Self {
        Self::new(ROOT_LOC, codes::DICT_EXPECTED, "value is not a valid dict")
    }

    /// The top-level field this error refers to.
    pub fn field(&self) -> &str {
        self.loc.first().map(String::as_str).unwrap_or(ROOT_LOC)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}

/// An ordered, non-empty-when-returned list of [`FieldError`]s.
///
/// Serializes transparently as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Whether any error already refers to `field`.
    pub fn contains_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }

    /// Stable-sort errors by the position of their field in `fields`.
    /// Fields not listed sort last.
    pub fn sort_by_fields(&mut self, fields: &[&str]) {
        self.errors.sort_by_key(|e| {
            fields
                .iter()
                .position(|f| *f == e.field())
                .unwrap_or(fields.len())
        });
    }

    /// `Ok(value)` if no errors were collected, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(invalid: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = invalid
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs.clone()))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let errors = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.into_iter().map(move |err| {
                    let msg = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", err.code));
                    FieldError::new(&field, &err.code, msg)
                })
            })
            .collect();

        Self { errors }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.errors.len() == 1 { "error" } else { "errors" };
        write!(f, "{} validation {noun}", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Extract a required string field from a JSON object.
///
/// Records a missing, null or wrong-typed value in `errors` and returns `None`.
pub fn required_str(
    body: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationError,
) -> Option<String> {
    match body.get(field) {
        None => {
            errors.push(FieldError::missing(field));
            None
        }
        Some(Value::Null) => {
            errors.push(FieldError::none_not_allowed(field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::str_expected(field));
            None
        }
    }
}

/// Extract an optional string field. Absent and `null` both yield `None`;
/// only a wrong-typed value is recorded as an error.
pub fn optional_str(
    body: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationError,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::str_expected(field));
            None
        }
    }
}
