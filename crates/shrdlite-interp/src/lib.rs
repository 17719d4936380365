//! Shrdlite interpreter: from parsed commands to DNF goals.
//!
//! Given a parse of the user's utterance and the current world, the
//! interpreter resolves every referring expression, prunes physically
//! impossible readings, and emits a [`DnfFormula`] describing all goal
//! configurations the command could plausibly intend.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use shrdlite_core::{
//!     Color, Command, Entity, Form, ObjectDesc, ObjectRef, Quantifier, Size, WorldState,
//! };
//! use shrdlite_interp::{interpret, ParseResult};
//!
//! let objects: HashMap<String, ObjectDesc> = [
//!     ("b".to_string(), ObjectDesc::new(Form::Ball, Size::Small, Color::Black)),
//! ]
//! .into();
//! let world = WorldState::new(objects, vec![vec!["b".into()]], 0, None).unwrap();
//!
//! let parse = ParseResult {
//!     command: Command::Take {
//!         entity: Entity::new(
//!             Quantifier::The,
//!             ObjectRef::Simple(ObjectDesc::of_form(Form::Ball)),
//!         ),
//!     },
//! };
//! let interpretation = interpret(&parse, &world).unwrap();
//! assert_eq!(interpretation.formula.to_string(), "holding(b)");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use shrdlite_core::{Command, DnfFormula, WorldState};

mod build;
mod error;
mod resolve;

pub use error::InterpretError;

/// One parse of the user's utterance, as delivered by the external parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub command: Command,
}

/// A command together with the goal formula it lowers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub command: Command,
    pub formula: DnfFormula,
}

/// Interpret a single parse against the world.
pub fn interpret(
    parse: &ParseResult,
    world: &WorldState,
) -> Result<Interpretation, InterpretError> {
    let formula = build::lower(&parse.command, world)?;
    debug!(goal = %formula, "interpreted parse");
    Ok(Interpretation {
        command: parse.command.clone(),
        formula,
    })
}

/// Interpret every parse of an utterance.
///
/// Per-parse errors are suppressed as long as at least one parse succeeds;
/// if all fail, the first error is returned. Ambiguity errors are an
/// exception: the user benefits from the clarification, so they surface
/// even when another parse succeeded.
pub fn interpret_all(
    parses: &[ParseResult],
    world: &WorldState,
) -> Result<Vec<Interpretation>, InterpretError> {
    let mut interpretations = Vec::new();
    let mut errors = Vec::new();
    for parse in parses {
        match interpret(parse, world) {
            Ok(interpretation) => interpretations.push(interpretation),
            Err(err) => errors.push(err),
        }
    }
    debug!(
        interpretations = interpretations.len(),
        errors = errors.len(),
        "interpretation finished"
    );

    if let Some(ambiguity) = errors.iter().find(|err| err.is_ambiguity()) {
        return Err(ambiguity.clone());
    }
    if interpretations.is_empty() {
        return Err(errors
            .into_iter()
            .next()
            .unwrap_or(InterpretError::NoMatchingObject));
    }
    Ok(interpretations)
}
