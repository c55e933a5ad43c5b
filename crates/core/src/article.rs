//! Typed request schema for creating an article.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::validation::{optional_str, required_str, FieldError, ValidationError};

/// Input for a new article.
///
/// `author` and `title` must be non-empty; `content` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateArticle {
    #[validate(length(
        min = 1,
        code = "value_error.any_str.min_length",
        message = "ensure this value has at least 1 characters"
    ))]
    pub author: String,
    #[validate(length(
        min = 1,
        code = "value_error.any_str.min_length",
        message = "ensure this value has at least 1 characters"
    ))]
    pub title: String,
    pub content: Option<String>,
}

impl CreateArticle {
    /// Field names in declaration order, used to order reported errors.
    pub const FIELDS: [&'static str; 3] = ["author", "title", "content"];

    /// Parse an untyped JSON body, reporting every offending field at once.
    ///
    /// Unknown keys are ignored.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let Some(map) = body.as_object() else {
            return Err(FieldError::dict_expected().into());
        };

        let mut errors = ValidationError::new();
        let author = required_str(map, "author", &mut errors);
        let title = required_str(map, "title", &mut errors);
        let content = optional_str(map, "content", &mut errors);

        let candidate = Self {
            author: author.unwrap_or_default(),
            title: title.unwrap_or_default(),
            content,
        };

        // Length rules only apply to fields that passed the type checks.
        if let Err(invalid) = candidate.check() {
            for error in invalid.into_errors() {
                if !errors.contains_field(error.field()) {
                    errors.push(error);
                }
            }
        }

        errors.sort_by_fields(&Self::FIELDS);
        errors.into_result(candidate)
    }

    /// Run the field rules on an already-typed value, reporting errors in
    /// declaration order.
    pub fn check(&self) -> Result<(), ValidationError> {
        self.validate().map_err(|invalid| {
            let mut errors = ValidationError::from(invalid);
            errors.sort_by_fields(&Self::FIELDS);
            errors
        })
    }
}
