//! Error types for the rankbase library.

use std::fmt;

use super::{EntityId, Scope};

/// All errors that can occur in the rankbase library.
#[derive(Debug)]
pub enum RankError {
    /// An outbound cross-reference points at an id missing from the record set.
    DanglingReference { source: EntityId, target: EntityId },

    /// A record with this id is already in the store.
    DuplicateEntity(EntityId),

    /// No entity with this id exists in the record set.
    EntityNotFound(EntityId),

    /// The entity exists but is not a member of the requested scope.
    NotInScope { id: EntityId, scope: Scope },

    /// The requested scope contains no entities.
    EmptyScope(Scope),
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankError::DanglingReference { source, target } => write!(
                f,
                "Broken cross-reference in '{source}': no entity '{target}' found"
            ),
            RankError::DuplicateEntity(id) => write!(f, "Entity '{id}' already exists"),
            RankError::EntityNotFound(id) => write!(f, "Entity '{id}' not found"),
            RankError::NotInScope { id, scope } => {
                write!(f, "Entity '{id}' is not in scope '{scope}'")
            }
            RankError::EmptyScope(scope) => write!(f, "No entities in scope '{scope}'"),
        }
    }
}

impl std::error::Error for RankError {}

/// Convenience result type for rankbase operations.
pub type RankResult<T> = Result<T, RankError>;
