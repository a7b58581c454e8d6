//! Error types for request validation.
//!
//! Every engine rejects its whole request on the first structural violation;
//! the error message names the offending field, index or item id so the
//! caller can correct the input. There is no retry path: the computations
//! are pure, so resubmitting an invalid payload cannot succeed.

/// Result type for engine validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A structural violation in a request payload.
///
/// Variants carry exactly the information their message needs; the rendered
/// text is the user-visible error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The named field was absent or not a JSON array.
    #[error("Field '{0}' must be a list.")]
    ExpectedList(&'static str),

    /// A list entry was not a JSON object.
    #[error("Item at index {0} must be an object.")]
    ExpectedObject(usize),

    /// Required keys absent from a list entry.
    #[error("Item at index {index} missing field(s): {fields}")]
    MissingItemFields { index: usize, fields: String },

    /// A field of an entry failed to parse, qualified by the entry's id.
    #[error("Item {id} has invalid {field}.")]
    InvalidItemField { id: String, field: String },

    /// A field failed to parse on an entry whose id is itself unusable.
    #[error("Item at index {index} has invalid {field}.")]
    InvalidFieldAtIndex { index: usize, field: String },
}

impl ValidationError {
    /// Invalid-field error for the entry with the given id.
    pub fn invalid_field(id: impl Into<String>, field: impl Into<String>) -> Self {
        ValidationError::InvalidItemField {
            id: id.into(),
            field: field.into(),
        }
    }

    /// Missing-fields error for the entry at `index`.
    pub fn missing_fields(index: usize, missing: &[&str]) -> Self {
        ValidationError::MissingItemFields {
            index,
            fields: missing.join(", "),
        }
    }

    /// Invalid-field error for the entry at `index` (id unusable).
    pub fn invalid_at_index(index: usize, field: impl Into<String>) -> Self {
        ValidationError::InvalidFieldAtIndex {
            index,
            field: field.into(),
        }
    }
}
