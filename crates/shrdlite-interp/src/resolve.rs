//! Referring-expression resolution.
//!
//! `filter` finds the stacked objects matching a description; a nested
//! location clause routes through `filter_relations`, which in turn resolves
//! the inner entity. The two are mutually recursive, with recursion depth
//! bounded by the syntactic nesting of the utterance. The world is only
//! ever read.

use shrdlite_core::{Entity, Form, Location, ObjectRef, Relation, WorldState, FLOOR};

/// Identifiers a quantified entity can refer to, in stack order.
///
/// An entity whose description names the floor resolves to the floor
/// sentinel; everything else resolves against the stacked objects.
pub(crate) fn resolve_entity(entity: &Entity, world: &WorldState) -> Vec<String> {
    if entity.object.description().form == Form::Floor {
        return vec![FLOOR.to_string()];
    }
    filter(&entity.object, world)
}

/// Stacked identifiers matching an object reference.
pub(crate) fn filter(object: &ObjectRef, world: &WorldState) -> Vec<String> {
    match object {
        ObjectRef::Simple(desc) => world
            .stacked_ids()
            .filter(|id| {
                world
                    .attributes(id)
                    .is_some_and(|attrs| desc.matches(attrs))
            })
            .cloned()
            .collect(),
        ObjectRef::Relative { object, location } => filter_relations(location, world)
            .into_iter()
            .filter(|id| {
                world
                    .attributes(id)
                    .is_some_and(|attrs| object.matches(attrs))
            })
            .collect(),
    }
}

/// Identifiers standing in the located relation to some referent of the
/// location's entity.
pub(crate) fn filter_relations(location: &Location, world: &WorldState) -> Vec<String> {
    let delimiters = resolve_entity(&location.entity, world);
    let mut out: Vec<String> = Vec::new();
    for delimiter in &delimiters {
        for id in related_to(world, location.relation, delimiter) {
            if !out.contains(&id) {
                out.push(id);
            }
        }
    }
    out
}

/// Everything standing in `relation` to the single delimiter `to`.
fn related_to(world: &WorldState, relation: Relation, to: &str) -> Vec<String> {
    if to == FLOOR {
        // Only the vertical relations have a floor reading: the objects
        // directly above the floor are the stack bottoms.
        return match relation {
            Relation::Above | Relation::OnTop => world
                .stacks
                .iter()
                .filter_map(|stack| stack.first().cloned())
                .collect(),
            _ => Vec::new(),
        };
    }
    let Some((col, row)) = world.position(to) else {
        // A held delimiter stands in no spatial relation.
        return Vec::new();
    };
    let is_box = world
        .attributes(to)
        .is_some_and(|attrs| attrs.form == Form::Box);

    match relation {
        Relation::LeftOf => world.stacks[..col].iter().flatten().cloned().collect(),
        Relation::RightOf => world.stacks[col + 1..].iter().flatten().cloned().collect(),
        Relation::Above => world.stacks[col][row + 1..].to_vec(),
        Relation::Under => world.stacks[col][..row].to_vec(),
        Relation::Inside if is_box => world.stacks[col].get(row + 1).cloned().into_iter().collect(),
        Relation::OnTop if !is_box => world.stacks[col].get(row + 1).cloned().into_iter().collect(),
        Relation::Inside | Relation::OnTop => Vec::new(),
        Relation::Beside => {
            let mut out = Vec::new();
            if col > 0 {
                out.extend(world.stacks[col - 1].iter().cloned());
            }
            if col + 1 < world.stacks.len() {
                out.extend(world.stacks[col + 1].iter().cloned());
            }
            out
        }
        Relation::Holding => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shrdlite_core::{Color, ObjectDesc, Quantifier, Size};
    use std::collections::HashMap;

    // stack0=[e], stack1=[l,g,m], stack2=[k], stack3=[], stack4=[f]
    fn world() -> WorldState {
        let objects: HashMap<String, ObjectDesc> = [
            ("e".to_string(), ObjectDesc::new(Form::Ball, Size::Large, Color::White)),
            ("f".to_string(), ObjectDesc::new(Form::Ball, Size::Small, Color::Black)),
            ("g".to_string(), ObjectDesc::new(Form::Table, Size::Large, Color::Blue)),
            ("k".to_string(), ObjectDesc::new(Form::Box, Size::Large, Color::Yellow)),
            ("l".to_string(), ObjectDesc::new(Form::Box, Size::Large, Color::Red)),
            ("m".to_string(), ObjectDesc::new(Form::Box, Size::Small, Color::Red)),
        ]
        .into();
        let stacks = vec![
            vec!["e".into()],
            vec!["l".into(), "g".into(), "m".into()],
            vec!["k".into()],
            vec![],
            vec!["f".into()],
        ];
        WorldState::new(objects, stacks, 0, None).unwrap()
    }

    fn simple(form: Form) -> ObjectRef {
        ObjectRef::Simple(ObjectDesc::of_form(form))
    }

    fn the(object: ObjectRef) -> Entity {
        Entity::new(Quantifier::The, object)
    }

    #[test]
    fn test_filter_by_attributes() {
        let w = world();
        assert_eq!(filter(&simple(Form::Ball), &w), vec!["e", "f"]);
        assert_eq!(filter(&simple(Form::Box), &w), vec!["l", "m", "k"]);
        let blue = ObjectRef::Simple(ObjectDesc {
            form: Form::AnyForm,
            size: None,
            color: Some(Color::Blue),
        });
        assert_eq!(filter(&blue, &w), vec!["g"]);
        assert!(filter(&simple(Form::Plank), &w).is_empty());
    }

    #[test]
    fn test_left_and_right_of() {
        let w = world();
        let left_of_k = Location::new(Relation::LeftOf, the(simple(Form::Box)));
        // Left of any box: union over l, m (stack 1) and k (stack 2).
        assert_eq!(filter_relations(&left_of_k, &w), vec!["e", "l", "g", "m"]);
        let right_of_table = Location::new(Relation::RightOf, the(simple(Form::Table)));
        assert_eq!(filter_relations(&right_of_table, &w), vec!["k", "f"]);
    }

    #[test]
    fn test_above_and_under() {
        let w = world();
        let above_l = Location::new(
            Relation::Above,
            the(ObjectRef::Simple(ObjectDesc {
                form: Form::Box,
                size: Some(Size::Large),
                color: Some(Color::Red),
            })),
        );
        assert_eq!(filter_relations(&above_l, &w), vec!["g", "m"]);
        let under_m = Location::new(
            Relation::Under,
            the(ObjectRef::Simple(ObjectDesc {
                form: Form::Box,
                size: Some(Size::Small),
                color: None,
            })),
        );
        assert_eq!(filter_relations(&under_m, &w), vec!["l", "g"]);
    }

    #[test]
    fn test_above_floor_is_stack_bottoms() {
        let w = world();
        let above_floor = Location::new(Relation::Above, the(simple(Form::Floor)));
        assert_eq!(filter_relations(&above_floor, &w), vec!["e", "l", "k", "f"]);
    }

    #[test]
    fn test_inside_requires_a_box() {
        let w = world();
        let inside_l = Location::new(
            Relation::Inside,
            the(ObjectRef::Simple(ObjectDesc {
                form: Form::Box,
                size: None,
                color: Some(Color::Red),
            })),
        );
        // Directly atop l (a box) is g; m is a box but has nothing atop it.
        assert_eq!(filter_relations(&inside_l, &w), vec!["g"]);
        let inside_table = Location::new(Relation::Inside, the(simple(Form::Table)));
        assert!(filter_relations(&inside_table, &w).is_empty());
    }

    #[test]
    fn test_ontop_excludes_boxes() {
        let w = world();
        let ontop_table = Location::new(Relation::OnTop, the(simple(Form::Table)));
        assert_eq!(filter_relations(&ontop_table, &w), vec!["m"]);
        let ontop_box = Location::new(Relation::OnTop, the(simple(Form::Box)));
        assert!(filter_relations(&ontop_box, &w).is_empty());
        let ontop_floor = Location::new(Relation::OnTop, the(simple(Form::Floor)));
        assert_eq!(filter_relations(&ontop_floor, &w), vec!["e", "l", "k", "f"]);
    }

    #[test]
    fn test_beside() {
        let w = world();
        let beside_k = Location::new(
            Relation::Beside,
            the(ObjectRef::Simple(ObjectDesc {
                form: Form::Box,
                size: Some(Size::Large),
                color: Some(Color::Yellow),
            })),
        );
        assert_eq!(filter_relations(&beside_k, &w), vec!["l", "g", "m"]);
    }

    #[test]
    fn test_nested_reference() {
        let w = world();
        // "a box on top of a table" -> m
        let boxes_on_tables = ObjectRef::Relative {
            object: ObjectDesc::of_form(Form::Box),
            location: Box::new(Location::new(
                Relation::OnTop,
                Entity::new(Quantifier::Any, simple(Form::Table)),
            )),
        };
        assert_eq!(filter(&boxes_on_tables, &w), vec!["m"]);
    }

    #[test]
    fn test_held_delimiter_relates_to_nothing() {
        let objects = world().objects.as_ref().clone();
        let stacks = vec![
            vec!["e".into()],
            vec!["l".into(), "g".into()],
            vec!["k".into()],
            vec![],
            vec!["f".into()],
        ];
        let w = WorldState::new(objects, stacks, 1, Some("m".into())).unwrap();
        let beside_m = Location::new(
            Relation::Beside,
            the(ObjectRef::Simple(ObjectDesc {
                form: Form::Box,
                size: Some(Size::Small),
                color: None,
            })),
        );
        assert!(filter_relations(&beside_m, &w).is_empty());
    }
}
