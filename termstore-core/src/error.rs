//! Error types for termstore-core
//!
//! Two layers:
//!
//! - [`Error`] is the crate-wide boundary error: malformed input, wrong-type
//!   access, unknown closed-namespace suffixes. Returned by constructors and
//!   accessors that promise well-formedness.
//! - Small dedicated enums ([`CastError`], [`NumericError`], [`ScopeError`])
//!   for expected dynamic conditions on hot paths, so callers can branch
//!   without going through the crate-wide type.

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed lexical form for a known datatype
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// `.value::<T>()` called with a datatype that does not match the literal
    #[error("type mismatch: literal is {actual}, requested {requested}")]
    TypeMismatch {
        /// Datatype IRI of the literal
        actual: String,
        /// Datatype IRI of the requested type
        requested: String,
    },

    /// Suffix not present in a closed namespace
    #[error("unknown term in closed namespace {namespace}: {suffix}")]
    UnknownNamespaceTerm {
        /// Namespace prefix IRI
        namespace: String,
        /// The suffix that was looked up
        suffix: String,
    },

    /// Blank node scope is no longer alive
    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// Handles from different storage backends combined without re-interning
    #[error("terms belong to different node storages (ids {0} and {1})")]
    StorageMismatch(u16, u16),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a type-mismatch error
    pub fn type_mismatch(actual: impl Into<String>, requested: impl Into<String>) -> Self {
        Error::TypeMismatch {
            actual: actual.into(),
            requested: requested.into(),
        }
    }

    /// Create an unknown-namespace-term error
    pub fn unknown_namespace_term(
        namespace: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Error::UnknownNamespaceTerm {
            namespace: namespace.into(),
            suffix: suffix.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Malformed lexical form for a known datatype.
///
/// Carries the datatype IRI and the offending input so parsers can report
/// and skip the record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid lexical form {lexical:?} for datatype {datatype}")]
pub struct ParseError {
    /// Datatype IRI the lexical form was parsed as
    pub datatype: &'static str,
    /// The offending input
    pub lexical: String,
}

impl ParseError {
    /// Create a parse error for the given datatype and input
    pub fn new(datatype: &'static str, lexical: impl Into<String>) -> Self {
        Self {
            datatype,
            lexical: lexical.into(),
        }
    }
}

/// Subtype downcast failure: the value is outside the narrower type's range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("value {value} is not valid for {target}")]
pub struct CastError {
    /// Target datatype IRI
    pub target: &'static str,
    /// Display form of the offending value
    pub value: String,
}

/// Errors from checked numeric operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// Division by zero
    #[error("division by zero")]
    DivideByZero,
    /// Result does not fit the operand type (machine-int overflow)
    #[error("numeric overflow")]
    Overflow,
    /// Operand datatype has no numeric capability
    #[error("datatype {0} is not numeric")]
    NotNumeric(&'static str),
}

/// Errors from blank node scope operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// Weak reference upgrade failed: the scope has been dropped
    #[error("node scope is no longer alive")]
    Dead,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("http://www.w3.org/2001/XMLSchema#boolean", "5");
        assert_eq!(
            err.to_string(),
            "invalid lexical form \"5\" for datatype http://www.w3.org/2001/XMLSchema#boolean"
        );
    }

    #[test]
    fn test_parse_error_converts_to_crate_error() {
        let err: Error = ParseError::new("x", "y").into();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_numeric_error_distinguishes_divide_by_zero() {
        assert_ne!(NumericError::DivideByZero, NumericError::Overflow);
        assert_eq!(NumericError::DivideByZero.to_string(), "division by zero");
    }
}
