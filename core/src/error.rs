//! Per-type error kinds.

use thiserror::Error;

/// A configuration conflict fatal for one type's resolution.
///
/// The offending type is skipped and reported; the run continues with the
/// remaining types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A property claims both sides of a bidirectional relation.
    #[error("property `{property}` sets both `mapped_by` and `inversed_by`")]
    ConflictingRelationSides {
        /// Name of the offending property.
        property: String,
    },
    /// The configured parent override names a type outside the configured
    /// (and included) set.
    #[error("parent `{parent}` is not a configured type")]
    UnknownParent {
        /// The unknown parent name.
        parent: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = TypeError::ConflictingRelationSides {
            property: "orders".to_string(),
        };
        assert!(err.to_string().contains("orders"));

        let err = TypeError::UnknownParent {
            parent: "Machine".to_string(),
        };
        assert!(err.to_string().contains("Machine"));
    }
}
