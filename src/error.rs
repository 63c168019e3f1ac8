//! Error types raised while building domain entities.
//!
//! Construction is the only fallible step in the model: queries never fail and
//! signal "no result" with `None`. Two kinds of failure exist:
//!
//! - [`AppError::Validation`] - a field is present but outside its bounds
//! - [`AppError::MissingValue`] - a required field was not supplied at all

use serde::Serialize;
use serde_json::{Value, json};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Serializable envelope around [`ErrorInfo`].
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

/// Machine-readable view of an [`AppError`].
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        field: String,
        message: String,
        details: Value,
    },
    #[error("{message}")]
    MissingValue { field: String, message: String },
}

impl AppError {
    /// Builds a validation error for `field` holding the rejected `value`.
    ///
    /// The message reads `Invalid <field label>: <value>`.
    pub fn invalid(field: impl Into<String>, value: impl std::fmt::Display, details: Value) -> Self {
        let field = field.into();
        Self::Validation {
            message: format!("Invalid {}: {}", field_label(&field), value),
            field,
            details,
        }
    }

    /// Builds a missing-value error for a required `field`.
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::MissingValue {
            message: format!("Invalid {}: null", field_label(&field)),
            field,
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            AppError::Validation { field, .. } | AppError::MissingValue { field, .. } => field,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::MissingValue { .. } => "missing_value",
        }
    }

    pub fn is_missing_value(&self) -> bool {
        matches!(self, AppError::MissingValue { .. })
    }

    /// Converts `validator` output into a single [`AppError`].
    ///
    /// `field_order` lists the input fields in declaration order; the first
    /// listed field with a violation wins, so the reported field is stable
    /// regardless of hash map ordering. A `required` violation becomes
    /// [`AppError::MissingValue`].
    pub fn from_validation(errors: &ValidationErrors, field_order: &[&'static str]) -> Self {
        let field_errors = errors.field_errors();

        let first = field_order
            .iter()
            .find_map(|name| field_errors.get(*name).map(|errs| (Cow::Borrowed(*name), *errs)))
            .or_else(|| {
                let mut remaining: Vec<_> = field_errors.iter().collect();
                remaining.sort_by(|a, b| a.0.cmp(b.0));
                remaining
                    .into_iter()
                    .next()
                    .map(|(name, errs)| (Cow::Owned(name.to_string()), *errs))
            });

        let Some((field, errs)) = first else {
            return AppError::invalid("input", "unknown", json!({}));
        };

        if errs.iter().any(|e| e.code == "required") {
            return AppError::missing(field.into_owned());
        }

        match errs.first() {
            Some(error) => from_field_error(field.into_owned(), error),
            None => AppError::invalid(field.into_owned(), "unknown", json!({})),
        }
    }
}

impl From<&AppError> for ErrorInfo {
    fn from(error: &AppError) -> Self {
        let details = match error {
            AppError::Validation { details, .. } => details.clone(),
            AppError::MissingValue { field, .. } => json!({ "field": field }),
        };

        ErrorInfo {
            code: error.code(),
            message: error.to_string(),
            details,
        }
    }
}

impl From<&AppError> for ErrorBody {
    fn from(error: &AppError) -> Self {
        ErrorBody {
            error: ErrorInfo::from(error),
        }
    }
}

fn from_field_error(field: String, error: &ValidationError) -> AppError {
    let value = error
        .params
        .get("value")
        .map(display_param)
        .unwrap_or_else(|| "unknown".to_string());

    let mut details = json!({
        "field": field,
        "rule": error.code,
    });
    for bound in ["min", "max", "equal", "allowed"] {
        if let Some(limit) = error.params.get(bound) {
            details[bound] = limit.clone();
        }
    }

    AppError::invalid(field, value, details)
}

/// Renders a rejected value the way a caller typed it: strings unquoted.
fn display_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Human-readable name used in error messages.
fn field_label(field: &str) -> Cow<'_, str> {
    match field {
        "price_usd" => Cow::Borrowed("price"),
        "bedrooms" => Cow::Borrowed("number of bedrooms"),
        "id" => Cow::Borrowed("property id"),
        "city_name" => Cow::Borrowed("city"),
        other => Cow::Owned(other.replace('_', " ")),
    }
}
