//! Required-field validation for entities.

use thiserror::Error;

/// A required field was empty. Reports the entity kind and the first failing field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{entity} {field} must not be empty")]
pub struct ValidationError {
    entity: &'static str,
    field: &'static str,
}

impl ValidationError {
    pub fn empty(entity: &'static str, field: &'static str) -> Self {
        ValidationError { entity, field }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }
}

pub struct FieldValidator;

impl FieldValidator {
    /// Check fields in the given order and fail on the first empty one.
    /// Whitespace counts as content; values are not trimmed.
    pub fn require_non_empty(
        entity: &'static str,
        fields: &[(&'static str, &str)],
    ) -> Result<(), ValidationError> {
        for &(name, value) in fields {
            if value.is_empty() {
                return Err(ValidationError::empty(entity, name));
            }
        }
        Ok(())
    }
}
