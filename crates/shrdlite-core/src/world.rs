//! World state: stacks, arm, and the shared attribute table.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::WorldError;
use crate::object::{ObjectDesc, FLOOR_DESC};

/// Identifier of the floor sentinel; stands for "any floor cell" in goals.
pub const FLOOR: &str = "floor";

/// One snapshot of the blocks world.
///
/// The attribute table is shared behind an [`Arc`], so cloning a state copies
/// the stacks, arm column, and held object but not the table. Equality and
/// hashing cover exactly the mutable part: `(arm, holding, stacks)`.
///
/// Invariants, enforced by [`WorldState::new`]:
/// - every identifier of the table appears in exactly one stack or is held,
///   never both;
/// - `arm` is a valid column index;
/// - the floor sentinel never appears in a stack and is never held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Attribute records by identifier, shared read-only between clones.
    pub objects: Arc<HashMap<String, ObjectDesc>>,
    /// Columns of identifiers, bottom-first.
    pub stacks: Vec<Vec<String>>,
    /// Column the arm currently hovers over.
    pub arm: usize,
    /// Identifier held by the arm, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holding: Option<String>,
}

impl WorldState {
    /// Assemble a world state, validating the placement invariants.
    pub fn new(
        objects: HashMap<String, ObjectDesc>,
        stacks: Vec<Vec<String>>,
        arm: usize,
        holding: Option<String>,
    ) -> Result<Self, WorldError> {
        if arm >= stacks.len() {
            return Err(WorldError::ArmOutOfRange {
                arm,
                stacks: stacks.len(),
            });
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for id in stacks.iter().flatten().chain(holding.iter()) {
            if id == FLOOR {
                return Err(WorldError::FloorPlaced);
            }
            if !objects.contains_key(id) {
                return Err(WorldError::UnknownObject(id.clone()));
            }
            if !seen.insert(id.as_str()) {
                return Err(WorldError::DuplicateObject(id.clone()));
            }
        }
        for id in objects.keys() {
            if !seen.contains(id.as_str()) {
                return Err(WorldError::UnplacedObject(id.clone()));
            }
        }

        Ok(Self {
            objects: Arc::new(objects),
            stacks,
            arm,
            holding,
        })
    }

    /// Attribute record for an identifier; the floor sentinel resolves to
    /// [`FLOOR_DESC`].
    pub fn attributes(&self, id: &str) -> Option<&ObjectDesc> {
        if id == FLOOR {
            Some(&FLOOR_DESC)
        } else {
            self.objects.get(id)
        }
    }

    /// `(column, height)` of a stacked identifier; `None` for held objects,
    /// the floor, and unknown identifiers.
    pub fn position(&self, id: &str) -> Option<(usize, usize)> {
        self.stacks.iter().enumerate().find_map(|(col, stack)| {
            stack
                .iter()
                .position(|other| other == id)
                .map(|row| (col, row))
        })
    }

    /// Column of a stacked identifier.
    pub fn column(&self, id: &str) -> Option<usize> {
        self.position(id).map(|(col, _)| col)
    }

    /// Whether the arm holds `id`.
    pub fn is_held(&self, id: &str) -> bool {
        self.holding.as_deref() == Some(id)
    }

    /// Identifiers of every stacked object, left-to-right, bottom-up.
    pub fn stacked_ids(&self) -> impl Iterator<Item = &String> {
        self.stacks.iter().flatten()
    }

    /// Deterministic string identity: `"(arm,holding,stack0|stack1|…)"`.
    ///
    /// Stacks are joined bottom-up; an empty arm renders as `-`. Two states
    /// are equal exactly when their keys are equal.
    pub fn key(&self) -> String {
        let stacks = self
            .stacks
            .iter()
            .map(|stack| stack.join(","))
            .collect::<Vec<_>>()
            .join("|");
        format!(
            "({},{},{})",
            self.arm,
            self.holding.as_deref().unwrap_or("-"),
            stacks
        )
    }
}

impl PartialEq for WorldState {
    fn eq(&self, other: &Self) -> bool {
        self.arm == other.arm && self.holding == other.holding && self.stacks == other.stacks
    }
}

impl Eq for WorldState {}

impl Hash for WorldState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.arm.hash(state);
        self.holding.hash(state);
        self.stacks.hash(state);
    }
}

impl fmt::Display for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
