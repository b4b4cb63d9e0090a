use crate::types::InputTypeHint;
use thiserror::Error;

/// Errors raised while constructing the task identity annotations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Invalid name '{0}'")]
    InvalidName(String),

    #[error("Friendly name must be <= {max} chars, got {actual}: '{value}'")]
    FriendlyNameTooLong {
        value: String,
        actual: usize,
        max: usize,
    },

    #[error("Invalid version '{0}'")]
    InvalidVersion(String),

    #[error("Invalid task id '{value}': {reason}")]
    InvalidId { value: String, reason: String },

    #[error("Type {ty} is missing the required task annotation '{annotation}'")]
    MissingAnnotation { ty: String, annotation: &'static str },

    #[error("Type {0} is not marked as a task")]
    NotATask(String),
}

/// Errors raised while turning input fields into entities
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntrospectionError {
    #[error("Input type '{hint}' not allowed for field {field} of type {declared}")]
    IncompatibleInputType {
        hint: InputTypeHint,
        field: String,
        declared: String,
    },

    #[error("Field {field} has unsupported type {declared}; inputs must be String, Boolean or an enumeration")]
    UnsupportedField { field: String, declared: String },
}

/// Any failure that prevents a manifest from being produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Introspection(#[from] IntrospectionError),
}
