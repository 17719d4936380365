//! The blocks-world state graph.
//!
//! Nodes are world states; edges are the four primitive arm actions, each
//! of unit cost. Successor generation works on a clone and never mutates
//! its input, so tentative successors of one state are independent. Drop
//! legality defers to the shared physical-law predicate, keeping the graph
//! and the interpreter in agreement about what is possible.

use std::fmt;

use shrdlite_core::{is_valid, Form, Relation, WorldState, FLOOR};

use crate::search::{Edge, SearchGraph};

/// A primitive arm action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the arm one column left.
    Left,
    /// Move the arm one column right.
    Right,
    /// Pick up the top of the current column.
    Pick,
    /// Drop the held object onto the current column.
    Drop,
}

/// The four actions in the order successors are probed.
pub const ACTIONS: [Action; 4] = [Action::Left, Action::Right, Action::Pick, Action::Drop];

impl Action {
    /// Apply this action to `state`, if legal.
    ///
    /// Returns the successor state; the input is left untouched.
    pub fn apply(self, state: &WorldState) -> Option<WorldState> {
        let mut next = state.clone();
        match self {
            Action::Left => {
                if next.arm == 0 {
                    return None;
                }
                next.arm -= 1;
            }
            Action::Right => {
                if next.arm + 1 >= next.stacks.len() {
                    return None;
                }
                next.arm += 1;
            }
            Action::Pick => {
                if next.holding.is_some() {
                    return None;
                }
                let picked = next.stacks[next.arm].pop()?;
                next.holding = Some(picked);
            }
            Action::Drop => {
                let held = next.holding.take()?;
                let column = &next.stacks[next.arm];
                let dest = column.last().map_or(FLOOR, String::as_str);
                let relation = match next.attributes(dest).map(|attrs| attrs.form) {
                    Some(Form::Box) => Relation::Inside,
                    _ => Relation::OnTop,
                };
                if !is_valid(&next, relation, &held, dest) {
                    return None;
                }
                next.stacks[next.arm].push(held);
            }
        }
        Some(next)
    }

    /// Parse a one-letter action symbol.
    pub fn from_symbol(symbol: &str) -> Option<Action> {
        match symbol {
            "l" => Some(Action::Left),
            "r" => Some(Action::Right),
            "p" => Some(Action::Pick),
            "d" => Some(Action::Drop),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Left => "l",
            Action::Right => "r",
            Action::Pick => "p",
            Action::Drop => "d",
        })
    }
}

/// The implicit graph of world states under the primitive actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateGraph;

impl StateGraph {
    /// All legal `(action, successor)` pairs of a state.
    pub fn successors(state: &WorldState) -> Vec<(Action, WorldState)> {
        ACTIONS
            .iter()
            .filter_map(|&action| action.apply(state).map(|next| (action, next)))
            .collect()
    }

    /// Replay a sequence of action symbols onto a state.
    ///
    /// `None` if a symbol is unknown or an action is illegal at its step.
    pub fn replay<'a, I>(state: &WorldState, actions: I) -> Option<WorldState>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = state.clone();
        for symbol in actions {
            current = Action::from_symbol(symbol)?.apply(&current)?;
        }
        Some(current)
    }
}

impl SearchGraph for StateGraph {
    type Node = WorldState;

    fn edges(&self, node: &WorldState) -> Vec<Edge<WorldState>> {
        Self::successors(node)
            .into_iter()
            .map(|(_, to)| Edge { to, cost: 1 })
            .collect()
    }

    fn key(&self, node: &WorldState) -> String {
        node.key()
    }
}
