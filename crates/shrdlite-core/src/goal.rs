//! The DNF goal language and its evaluator.
//!
//! A goal is a disjunction of conjunctions of literals. The planner wins as
//! soon as one conjunction holds in the current world.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::relation::Relation;
use crate::world::{WorldState, FLOOR};

/// A signed atomic relation over one or two identifiers.
///
/// `second` is absent exactly for `holding`. The identifier `"floor"` as a
/// destination stands for any floor cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub polarity: bool,
    pub relation: Relation,
    pub first: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<String>,
}

impl Literal {
    /// Positive `holding(target)` literal.
    pub fn holding(target: impl Into<String>) -> Self {
        Self {
            polarity: true,
            relation: Relation::Holding,
            first: target.into(),
            second: None,
        }
    }

    /// Positive binary literal.
    pub fn binary(relation: Relation, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            polarity: true,
            relation,
            first: first.into(),
            second: Some(second.into()),
        }
    }

    /// Flip the sign of this literal.
    pub fn negated(mut self) -> Self {
        self.polarity = !self.polarity;
        self
    }

    /// Whether this literal holds in `world`.
    ///
    /// A binary relation is not observable while the arm holds either
    /// argument; the object must be put down first.
    pub fn holds(&self, world: &WorldState) -> bool {
        self.check(world) == self.polarity
    }

    fn check(&self, world: &WorldState) -> bool {
        let a = self.first.as_str();
        let Some(b) = self.second.as_deref() else {
            return self.relation == Relation::Holding && world.is_held(a);
        };
        if world.is_held(a) || world.is_held(b) {
            return false;
        }
        match self.relation {
            Relation::Holding => false,
            Relation::OnTop | Relation::Inside => {
                if b == FLOOR {
                    world.position(a).is_some_and(|(_, row)| row == 0)
                } else {
                    match (world.position(a), world.position(b)) {
                        (Some((ca, ra)), Some((cb, rb))) => ca == cb && ra == rb + 1,
                        _ => false,
                    }
                }
            }
            Relation::Above | Relation::Under => {
                let (above, below) = if self.relation == Relation::Above {
                    (a, b)
                } else {
                    (b, a)
                };
                match (world.position(above), world.position(below)) {
                    (Some((ca, ra)), Some((cb, rb))) => ca == cb && ra > rb,
                    _ => false,
                }
            }
            Relation::LeftOf | Relation::RightOf => {
                let (left, right) = if self.relation == Relation::LeftOf {
                    (a, b)
                } else {
                    (b, a)
                };
                match (world.column(left), world.column(right)) {
                    (Some(cl), Some(cr)) => cl < cr,
                    _ => false,
                }
            }
            Relation::Beside => match (world.column(a), world.column(b)) {
                (Some(ca), Some(cb)) => ca.abs_diff(cb) == 1,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            f.write_str("-")?;
        }
        write!(f, "{}({}", self.relation, self.first)?;
        if let Some(second) = &self.second {
            write!(f, ",{second}")?;
        }
        f.write_str(")")
    }
}

/// One conjunction of a DNF formula.
pub type Conjunction = Vec<Literal>;

/// A goal in disjunctive normal form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnfFormula {
    conjunctions: Vec<Conjunction>,
}

impl DnfFormula {
    /// Build a formula, dropping duplicate conjunctions.
    ///
    /// Conjunctions are compared structurally as ordered sequences; the
    /// first occurrence wins and order is otherwise preserved.
    pub fn new(conjunctions: Vec<Conjunction>) -> Self {
        let mut unique: Vec<Conjunction> = Vec::with_capacity(conjunctions.len());
        for conjunction in conjunctions {
            if !unique.contains(&conjunction) {
                unique.push(conjunction);
            }
        }
        Self { conjunctions: unique }
    }

    /// The disjuncts of this formula.
    pub fn conjunctions(&self) -> &[Conjunction] {
        &self.conjunctions
    }

    /// Whether some conjunction holds entirely in `world`.
    pub fn satisfied_in(&self, world: &WorldState) -> bool {
        self.conjunctions
            .iter()
            .any(|conjunction| conjunction.iter().all(|literal| literal.holds(world)))
    }
}

impl fmt::Display for DnfFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conjunction) in self.conjunctions.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            for (j, literal) in conjunction.iter().enumerate() {
                if j > 0 {
                    f.write_str(" & ")?;
                }
                write!(f, "{literal}")?;
            }
        }
        Ok(())
    }
}
