//! Shrdlite planner: from DNF goals to primitive arm actions.
//!
//! The planner wraps the current world in a start node, searches the
//! implicit state graph with A* under an admissible blocker-count
//! heuristic, and renders the resulting state path as the one-letter
//! primitive actions `l`, `r`, `p`, `d`. A goal that already holds yields
//! the single utterance [`ALREADY_TRUE`].
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use std::time::Duration;
//! use shrdlite_core::{Color, DnfFormula, Form, Literal, ObjectDesc, Size, WorldState};
//! use shrdlite_plan::plan;
//!
//! let objects: HashMap<String, ObjectDesc> = [
//!     ("b".to_string(), ObjectDesc::new(Form::Ball, Size::Small, Color::Black)),
//! ]
//! .into();
//! let world = WorldState::new(objects, vec![vec!["b".into()]], 0, None).unwrap();
//!
//! let goal = DnfFormula::new(vec![vec![Literal::holding("b")]]);
//! let actions = plan(&goal, &world, Duration::from_secs(10)).unwrap();
//! assert_eq!(actions, vec!["p".to_string()]);
//! ```

use std::time::Duration;

use tracing::info;

use shrdlite_core::{DnfFormula, WorldState};
use shrdlite_interp::Interpretation;

mod error;
mod graph;
mod heuristic;
mod search;

pub use error::{PlanError, SearchError};
pub use graph::{Action, StateGraph, ACTIONS};
pub use heuristic::estimate;
pub use search::{a_star, Edge, SearchGraph, SearchResult};

/// Utterance emitted when the goal already holds in the current world.
pub const ALREADY_TRUE: &str = "That is already true!";

/// Default wall-clock budget for one search.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// An interpretation paired with the plan that achieves it.
#[derive(Debug, Clone)]
pub struct PlannerResult {
    pub interpretation: Interpretation,
    /// Primitive action symbols, or a single human-readable utterance.
    pub plan: Vec<String>,
}

/// Find a cheapest action sequence satisfying `formula` from `world`.
pub fn plan(
    formula: &DnfFormula,
    world: &WorldState,
    timeout: Duration,
) -> Result<Vec<String>, PlanError> {
    if formula.satisfied_in(world) {
        return Ok(vec![ALREADY_TRUE.to_string()]);
    }
    let result = a_star(
        &StateGraph,
        world.clone(),
        |state| formula.satisfied_in(state),
        |state| heuristic::estimate(formula, state),
        timeout,
    )?;
    let actions = actions_along(&result.path)?;
    info!(goal = %formula, actions = actions.len(), "plan found");
    Ok(actions)
}

/// Plan every interpretation of an utterance.
///
/// Mirrors the interpreter's policy: per-interpretation errors are
/// suppressed as long as one plan is found; if all fail, the first error is
/// returned.
pub fn plan_all(
    interpretations: Vec<Interpretation>,
    world: &WorldState,
    timeout: Duration,
) -> Result<Vec<PlannerResult>, PlanError> {
    let mut results = Vec::new();
    let mut errors = Vec::new();
    for interpretation in interpretations {
        match plan(&interpretation.formula, world, timeout) {
            Ok(actions) => results.push(PlannerResult {
                interpretation,
                plan: actions,
            }),
            Err(err) => errors.push(err),
        }
    }
    match (results.is_empty(), errors.into_iter().next()) {
        (true, Some(err)) => Err(err),
        _ => Ok(results),
    }
}

/// Render a state path as action symbols by probing the four primitives
/// between each consecutive pair.
fn actions_along(path: &[WorldState]) -> Result<Vec<String>, PlanError> {
    let mut out = Vec::with_capacity(path.len().saturating_sub(1));
    for pair in path.windows(2) {
        let action = ACTIONS
            .iter()
            .copied()
            .find(|action| {
                action
                    .apply(&pair[0])
                    .is_some_and(|next| next == pair[1])
            })
            .ok_or(PlanError::Reconstruction)?;
        out.push(action.to_string());
    }
    Ok(out)
}
