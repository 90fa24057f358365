//! Errors surfaced by mapping calls.
//!
//! Nothing here is caught or retried internally: a mismatch anywhere in a
//! batch aborts the whole call, and assignments already made stay applied
//! (fail-fast, not transactional).

use crate::ValueKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    /// A source value's runtime kind is incompatible with the field's
    /// declared kind. Carries enough context to locate the offending
    /// column without re-running the mapping. `actual` is the value's kind
    /// name, or the literal token `NULL` for a null/missing value.
    #[error("{record_type}.{field} is a {declared} but the value in the row source is a {actual}. {value}")]
    FieldTypeMismatch {
        record_type: &'static str,
        field: &'static str,
        declared: ValueKind,
        actual: &'static str,
        value: String,
    },

    /// A cached mapping was requested for a type that was never registered.
    #[error("no binding table registered for type `{0}`")]
    UnregisteredType(&'static str),

    /// The same type was registered twice. The first registration stays in
    /// place.
    #[error("type `{0}` is already registered")]
    DuplicateRegistration(&'static str),

    /// The source presented two columns with the same name; matching would
    /// be ambiguous, so this is rejected at mapping time.
    #[error("duplicate column `{0}` in row source")]
    DuplicateColumn(String),

    /// A row pushed into an in-memory table does not line up with its
    /// declared columns.
    #[error("row has {got} values but the table declares {expected} columns")]
    RowWidthMismatch { expected: usize, got: usize },
}
