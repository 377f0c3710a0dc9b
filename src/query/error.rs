use crate::shape::EntityType;

/// Error returned by the intersection dispatcher.
///
/// A query between two entities either succeeds with a (possibly empty)
/// result, or fails with one of these errors. "No intersection" is never an
/// error.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query is not implemented between entities of these two types.
    ///
    /// The types are given in the order the dispatcher handles them, i.e.,
    /// lowest rank first.
    #[error("intersection not supported between {first} and {second}.")]
    Unsupported {
        /// The type of the first entity.
        first: EntityType,
        /// The type of the second entity.
        second: EntityType,
    },
    /// A configuration the algorithm assumes impossible was reached.
    ///
    /// This signals an inconsistency in the tolerances rather than a user
    /// error, and should be reported as a bug.
    #[error("Internal error: {0}")]
    InvariantViolation(&'static str),
}

impl QueryError {
    /// The `Unsupported` error for the given pair of entity types.
    pub fn unsupported(first: EntityType, second: EntityType) -> Self {
        QueryError::Unsupported { first, second }
    }
}
