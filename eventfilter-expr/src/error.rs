//! Error types for filter compilation and evaluation

use crate::value::ValueType;
use thiserror::Error;

/// Error type returned by function implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Filter compilation and evaluation errors
#[derive(Error, Debug)]
pub enum ExprError {
    /// A function with this name is already registered
    #[error("Function already registered: {0}")]
    DuplicateFunction(String),

    /// Call to a function the registry does not know
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments in a call
    #[error("{function} expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// Operand or argument of the wrong type
    #[error("Type mismatch in {context}: expected {expected}, got {actual}")]
    TypeMismatch {
        context: String,
        expected: ValueType,
        actual: ValueType,
    },

    /// Filter root does not produce a boolean
    #[error("Filter must evaluate to Boolean, got {0}")]
    NotBoolean(ValueType),

    /// Event lacks an attribute the filter references
    #[error("Missing event attribute: {0}")]
    MissingAttribute(String),

    /// A registered function failed for this event
    #[error("{name} failed: {source}")]
    FunctionFailed {
        name: String,
        #[source]
        source: BoxError,
    },
}

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, ExprError>;
