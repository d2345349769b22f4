//! Error types for Quickbeam object operations

use thiserror::Error;

use crate::object::Kind;

/// Main error type for Quickbeam object operations.
///
/// These are the recoverable errors of the object model: bad input reported
/// back to the caller. Handing a wrong-kind operand to a kind-specific
/// operation (a non-string to [`Object::string_concat`] and the like) is a
/// defect in the embedding, not an input error, and panics instead.
///
/// [`Object::string_concat`]: crate::object::Object::string_concat
#[derive(Error, Debug)]
pub enum QuickbeamError {
    /// A value of a kind other than integer or string was used as a
    /// dictionary key.
    #[error("cannot add type {0} as dictionary key")]
    InvalidDictKey(Kind),

    /// A dictionary gained a new key while an iterator over it was live.
    #[error("dictionary changed while iterating")]
    DictModified,

    /// A built-in function received an operand of the wrong kind.
    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        /// Name of the expected kind
        expected: &'static str,
        /// Kind actually received
        got: Kind,
    },

    /// A built-in function's named argument was not bound by the caller.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// The output sink failed while printing.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for Quickbeam object operations
pub type Result<T> = std::result::Result<T, QuickbeamError>;
