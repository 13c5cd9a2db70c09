//! Errors for query translation.
//!
//! These describe clause documents whose shape breaks an assumption no translator
//! checks for explicitly. Unsupported but well-formed clauses are not errors: they
//! become untranslatable predicates instead.

/// A structural fault in a clause document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{context} must be an object, got {found}")]
    NotAnObject {
        context: &'static str,
        found: &'static str,
    },
    #[error("{clause} is missing '{key}'")]
    MissingKey {
        clause: &'static str,
        key: &'static str,
    },
    #[error("'{key}' of {clause} must be {expected}, got {found}")]
    UnexpectedType {
        clause: &'static str,
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}
