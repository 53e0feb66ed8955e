//! Field-level validation errors.
//!
//! Input DTOs derive [`validator::Validate`]; this module flattens the
//! resulting `ValidationErrors` into a stable, serializable list that the
//! API layer returns in 422 responses.

use serde::Serialize;

/// A single failed constraint on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Flatten `validator` output into one entry per failed constraint,
    /// sorted by field name so responses are deterministic.
    pub fn from_validation_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
        let mut out: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} failed '{}' check", e.code));
                    FieldError::new(field.clone(), message)
                })
            })
            .collect();
        out.sort_by(|a, b| a.field.cmp(&b.field));
        out
    }
}
