//! Error types for world construction.

use thiserror::Error;

/// Errors that can occur when assembling a world state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// A stack or the arm references an identifier with no attribute record.
    #[error("unknown object identifier {0:?}")]
    UnknownObject(String),

    /// An identifier appears in more than one place.
    #[error("object {0:?} placed more than once")]
    DuplicateObject(String),

    /// An attribute-table identifier appears in no stack and is not held.
    #[error("object {0:?} is neither stacked nor held")]
    UnplacedObject(String),

    /// The arm column index is outside the stack row.
    #[error("arm column {arm} out of range for {stacks} stacks")]
    ArmOutOfRange { arm: usize, stacks: usize },

    /// The floor sentinel cannot be stacked or held.
    #[error("the floor cannot be placed")]
    FloorPlaced,
}
