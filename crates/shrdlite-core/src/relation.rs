//! Spatial-relation vocabulary.
//!
//! This module defines the closed, finite set of relations that can appear
//! in goal literals and location clauses. The external parser emits these
//! directly; no text parsing happens here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A spatial relation between two objects, or the unary `holding`.
///
/// `Holding` only ever appears in goal literals (the arm holds an object);
/// the parser never produces it inside a location clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// In a stack strictly left of the other object's stack.
    LeftOf,
    /// In a stack strictly right of the other object's stack.
    RightOf,
    /// Strictly above the other object, in the same stack.
    Above,
    /// Strictly below the other object, in the same stack.
    Under,
    /// Directly on top of the other object (or on the floor).
    OnTop,
    /// Directly on top of a box, seen from the inside.
    Inside,
    /// In a stack immediately adjacent to the other object's stack.
    Beside,
    /// Held by the arm.
    Holding,
}

impl Relation {
    /// Whether this relation places one object directly onto another.
    ///
    /// These are the relations the drop action can establish, and the ones
    /// the stacking laws constrain.
    #[inline]
    pub fn is_support(self) -> bool {
        matches!(self, Relation::OnTop | Relation::Inside)
    }

    /// Whether this relation only constrains the columns of its operands.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Relation::LeftOf | Relation::RightOf | Relation::Beside)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Relation::LeftOf => "leftof",
            Relation::RightOf => "rightof",
            Relation::Above => "above",
            Relation::Under => "under",
            Relation::OnTop => "ontop",
            Relation::Inside => "inside",
            Relation::Beside => "beside",
            Relation::Holding => "holding",
        };
        f.write_str(name)
    }
}
