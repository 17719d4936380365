//! Goal-distance heuristic for the state graph.
//!
//! For each conjunction the heuristic sums, per literal, the number of
//! objects blocking the move; the formula's estimate is the minimum over
//! conjunctions, since satisfying any one of them suffices. Every counted
//! blocker must be picked up and dropped somewhere (at least two actions)
//! before the relation can be established, and only one is charged per
//! blocker, so the estimate never exceeds the true remaining cost.

use shrdlite_core::{Conjunction, DnfFormula, Literal, Relation, WorldState, FLOOR};

/// Lower bound on the number of actions needed to satisfy `formula`.
pub fn estimate(formula: &DnfFormula, world: &WorldState) -> usize {
    formula
        .conjunctions()
        .iter()
        .map(|conjunction| conjunction_cost(conjunction, world))
        .min()
        .unwrap_or(0)
}

fn conjunction_cost(conjunction: &Conjunction, world: &WorldState) -> usize {
    conjunction
        .iter()
        .map(|literal| literal_cost(literal, world))
        .sum()
}

fn literal_cost(literal: &Literal, world: &WorldState) -> usize {
    if literal.holds(world) {
        return 0;
    }
    // A negative literal that fails can be fixed by a single pick-up; no
    // blocker count gives a sound bound, so charge nothing.
    if !literal.polarity {
        return 0;
    }

    let first = literal.first.as_str();
    let Some(second) = literal.second.as_deref() else {
        return clear_cost(world, first);
    };
    match literal.relation {
        Relation::OnTop | Relation::Inside => clear_cost(world, first) + clear_cost(world, second),
        Relation::Above => clear_cost(world, first),
        Relation::Under => clear_cost(world, second),
        Relation::LeftOf | Relation::RightOf | Relation::Beside => {
            clear_cost(world, first).min(clear_cost(world, second))
        }
        Relation::Holding => 0,
    }
}

/// Objects that must be moved before `id` can be manipulated or covered.
///
/// A held operand is already exposed. The floor sentinel charges the height
/// of the shortest stack, the cheapest column to clear down to the floor.
fn clear_cost(world: &WorldState, id: &str) -> usize {
    if id == FLOOR {
        return world
            .stacks
            .iter()
            .map(Vec::len)
            .min()
            .unwrap_or(0);
    }
    if world.is_held(id) {
        return 0;
    }
    match world.position(id) {
        Some((col, row)) => world.stacks[col].len() - row - 1,
        None => 0,
    }
}
