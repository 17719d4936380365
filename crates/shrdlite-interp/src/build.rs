//! Command lowering: from a resolved command to a DNF goal formula.
//!
//! The shape of the formula is dictated by the two quantifiers and the
//! relation. The rules are checked in order; the first that applies decides
//! the construction.

use shrdlite_core::{
    is_valid, Command, DnfFormula, Entity, Literal, ObjectRef, Quantifier, Relation, WorldState,
    FLOOR,
};

use crate::error::InterpretError;
use crate::resolve::resolve_entity;

type Pair = (String, String);

/// Lower one command against the world.
pub(crate) fn lower(command: &Command, world: &WorldState) -> Result<DnfFormula, InterpretError> {
    match command {
        Command::Take { entity } => lower_take(entity, world),
        Command::Move { entity, location } => {
            let sources = candidates(entity, world)?;
            let destinations = candidates(&location.entity, world)?;
            build_pairs(
                entity.quantifier,
                &sources,
                location.entity.quantifier,
                &destinations,
                location.relation,
                world,
            )
        }
        Command::Put { location } => {
            let held = world
                .holding
                .clone()
                .ok_or(InterpretError::NoMatchingObject)?;
            let destinations = candidates(&location.entity, world)?;
            build_pairs(
                Quantifier::The,
                &[held],
                location.entity.quantifier,
                &destinations,
                location.relation,
                world,
            )
        }
    }
}

fn lower_take(entity: &Entity, world: &WorldState) -> Result<DnfFormula, InterpretError> {
    let mut ids = candidates(entity, world)?;
    // The arm cannot hold the floor.
    ids.retain(|id| id != FLOOR);
    if ids.is_empty() {
        return Err(InterpretError::NoMatchingObject);
    }
    if entity.quantifier == Quantifier::The && ids.len() > 1 {
        return Err(ambiguous(&ids, world));
    }
    Ok(DnfFormula::new(
        ids.into_iter()
            .map(|id| vec![Literal::holding(id)])
            .collect(),
    ))
}

/// Referents of an entity, including the held object when its attributes
/// match a flat description. A held object has no spatial context, so
/// nested descriptions resolve against the stacks only.
fn candidates(entity: &Entity, world: &WorldState) -> Result<Vec<String>, InterpretError> {
    let mut ids = resolve_entity(entity, world);
    if let (Some(held), ObjectRef::Simple(desc)) = (world.holding.as_deref(), &entity.object) {
        let held_matches = world
            .attributes(held)
            .is_some_and(|attrs| desc.matches(attrs));
        if held_matches && !ids.iter().any(|id| id == held) {
            ids.push(held.to_string());
        }
    }
    if ids.is_empty() {
        return Err(InterpretError::NoMatchingObject);
    }
    Ok(ids)
}

fn build_pairs(
    squant: Quantifier,
    sources: &[String],
    dquant: Quantifier,
    destinations: &[String],
    relation: Relation,
    world: &WorldState,
) -> Result<DnfFormula, InterpretError> {
    use Quantifier::{All, Any, The};

    let pairs: Vec<Pair> = sources
        .iter()
        .flat_map(|s| destinations.iter().map(move |d| (s.clone(), d.clone())))
        .filter(|(s, d)| s != d && is_valid(world, relation, s, d))
        .collect();
    if pairs.is_empty() {
        return Err(InterpretError::NoValidInterpretation);
    }

    let support = relation.is_support();

    // "all ... inside/ontop all ..." asks several objects to occupy the
    // same cell; there is no legal reading.
    if squant == All && dquant == All && support {
        return Err(InterpretError::NoValidInterpretation);
    }

    // Each source independently picks one destination: the formula is the
    // cartesian product of the per-source pair groups.
    if (squant == Any && dquant == All && destinations.len() > 1 && support)
        || (squant == All && dquant == Any && sources.len() > 1)
    {
        let groups = group_by_source(&pairs);
        let conjunctions = cartesian(&groups)
            .into_iter()
            .map(|combo| to_conjunction(&combo, relation))
            .collect();
        return Ok(DnfFormula::new(conjunctions));
    }

    // Each source is paired with one destination without all sources
    // sharing it: near-equal consecutive slices of the pair list.
    if squant == Any && dquant == All {
        let conjunctions = near_equal_slices(&pairs, sources.len())
            .into_iter()
            .map(|slice| to_conjunction(&slice, relation))
            .collect();
        return Ok(DnfFormula::new(conjunctions));
    }

    if (squant == The && dquant == All) || (squant == All && dquant == The) {
        if support && destinations.first().map(String::as_str) != Some(FLOOR) {
            return Err(InterpretError::NoValidInterpretation);
        }
        if squant == The && sources.len() > 1 {
            return Err(ambiguous(sources, world));
        }
        if dquant == The && destinations.len() > 1 {
            return Err(ambiguous(destinations, world));
        }
        return Ok(DnfFormula::new(vec![to_conjunction(&pairs, relation)]));
    }

    if (squant == All && sources.len() > 1) || dquant == All {
        return Ok(DnfFormula::new(vec![to_conjunction(&pairs, relation)]));
    }

    // Existential reading: every valid pair is its own disjunct.
    let formula = DnfFormula::new(
        pairs
            .iter()
            .map(|pair| to_conjunction(std::slice::from_ref(pair), relation))
            .collect(),
    );
    if formula.conjunctions().len() > 1 {
        if squant == The && sources.len() > 1 {
            return Err(ambiguous(sources, world));
        }
        if dquant == The && destinations.len() > 1 {
            return Err(ambiguous(destinations, world));
        }
    }
    Ok(formula)
}

fn to_conjunction(pairs: &[Pair], relation: Relation) -> Vec<Literal> {
    pairs
        .iter()
        .map(|(s, d)| Literal::binary(relation, s.clone(), d.clone()))
        .collect()
}

/// Group pairs by source identifier, preserving first-appearance order.
fn group_by_source(pairs: &[Pair]) -> Vec<Vec<Pair>> {
    let mut order: Vec<&str> = Vec::new();
    for (source, _) in pairs {
        if !order.contains(&source.as_str()) {
            order.push(source);
        }
    }
    order
        .into_iter()
        .map(|source| {
            pairs
                .iter()
                .filter(|(s, _)| s == source)
                .cloned()
                .collect()
        })
        .collect()
}

/// All ways of picking one element from every group.
fn cartesian(groups: &[Vec<Pair>]) -> Vec<Vec<Pair>> {
    let mut combos: Vec<Vec<Pair>> = vec![Vec::new()];
    for group in groups {
        let mut extended = Vec::with_capacity(combos.len() * group.len());
        for combo in &combos {
            for pair in group {
                let mut next = combo.clone();
                next.push(pair.clone());
                extended.push(next);
            }
        }
        combos = extended;
    }
    combos
}

/// Split a list into `parts` near-equal consecutive slices, dropping empty
/// ones when there are fewer items than parts.
fn near_equal_slices(pairs: &[Pair], parts: usize) -> Vec<Vec<Pair>> {
    let parts = parts.max(1);
    let base = pairs.len() / parts;
    let remainder = pairs.len() % parts;
    let mut slices = Vec::new();
    let mut start = 0;
    for i in 0..parts {
        let len = base + usize::from(i < remainder);
        if len > 0 {
            slices.push(pairs[start..start + len].to_vec());
            start += len;
        }
    }
    slices
}

/// Clarification error enumerating each candidate with its attributes and
/// 1-based stack index.
fn ambiguous(ids: &[String], world: &WorldState) -> InterpretError {
    let listing = ids
        .iter()
        .map(|id| describe(id, world))
        .collect::<Vec<_>>()
        .join(" or ");
    InterpretError::AmbiguousThe(listing)
}

fn describe(id: &str, world: &WorldState) -> String {
    let Some(attrs) = world.attributes(id) else {
        return format!("the object {id}");
    };
    let mut out = String::from("the");
    if let Some(size) = attrs.size {
        out.push_str(&format!(" {size}"));
    }
    if let Some(color) = attrs.color {
        out.push_str(&format!(" {color}"));
    }
    out.push_str(&format!(" {}", attrs.form));
    if world.is_held(id) {
        out.push_str(" in the arm");
    } else if let Some((col, _)) = world.position(id) {
        out.push_str(&format!(" in stack {}", col + 1));
    }
    out
}
