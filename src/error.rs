//! Error types for collection operations.
//!
//! Absence is never an error: lookups return `None` and removals of missing
//! keys are no-ops. The only failure the container reports is an argument
//! that cannot be used by the requested operation.

use std::fmt;

/// Represents errors that can occur when operating on a [`Collection`].
///
/// [`Collection`]: crate::collection::Collection
///
/// # Examples
///
/// ```rust
/// use ordmap_collection::error::CollectionError;
///
/// let error = CollectionError::InvalidArgument {
///     operation: "every",
///     reason: "predicate is not callable",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "invalid argument to every: predicate is not callable"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An argument handed to an operation was unusable.
    InvalidArgument {
        /// The name of the operation that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },
}

impl CollectionError {
    /// Shorthand for the error raised when a predicate could not be resolved.
    pub(crate) const fn not_callable(operation: &'static str) -> Self {
        Self::InvalidArgument {
            operation,
            reason: "predicate is not callable",
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { operation, reason } => {
                write!(formatter, "invalid argument to {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for CollectionError {}
