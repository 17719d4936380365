//! Command AST delivered by the external parser.
//!
//! The grammar and tokenization live outside this crate; parses arrive as
//! data. Descriptions are read-only once a command has been taken in.

use serde::{Deserialize, Serialize};

use crate::object::ObjectDesc;
use crate::relation::Relation;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    /// Pick up the referenced object.
    Take { entity: Entity },
    /// Move the referenced object to the given location.
    Move { entity: Entity, location: Location },
    /// Put whatever the arm is holding at the given location.
    Put { location: Location },
}

/// A quantified referring expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub quantifier: Quantifier,
    pub object: ObjectRef,
}

impl Entity {
    pub fn new(quantifier: Quantifier, object: ObjectRef) -> Self {
        Self { quantifier, object }
    }
}

/// Determiner of a referring expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantifier {
    /// Unique referent ("the").
    The,
    /// Existential ("a", "any").
    Any,
    /// Universal ("all", "every").
    All,
}

/// What an entity describes: a bare description, or a description further
/// constrained by the spatial context of the referent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectRef {
    Relative {
        object: ObjectDesc,
        location: Box<Location>,
    },
    Simple(ObjectDesc),
}

impl ObjectRef {
    /// The description part, ignoring any location constraint.
    pub fn description(&self) -> &ObjectDesc {
        match self {
            ObjectRef::Simple(desc) => desc,
            ObjectRef::Relative { object, .. } => object,
        }
    }
}

/// A spatial anchor: a relation to another entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub relation: Relation,
    pub entity: Entity,
}

impl Location {
    pub fn new(relation: Relation, entity: Entity) -> Self {
        Self { relation, entity }
    }
}
