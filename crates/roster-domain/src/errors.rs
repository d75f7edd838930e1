//! Domain errors for the student roster

use thiserror::Error;

use crate::entities::RecordKind;

/// Errors returned by roster operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("Student with ID {id} already exists")]
    DuplicateId { id: String },

    #[error("Student with ID {id} not found")]
    NotFound { id: String },

    #[error("{field} cannot be set on {kind} student {id}")]
    VariantMismatch {
        id: String,
        kind: RecordKind,
        field: &'static str,
    },
}

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
