//! Golden interpretation scenarios on a small world.
//!
//! The world, left to right: stack0=[e], stack1=[l,g,m], stack2=[k],
//! stack3=[], stack4=[f]. e is a large white ball, f a small black ball,
//! g a large blue table, k a large yellow box, l a large red box, m a small
//! red box. The arm is at column 0 and holds nothing.
//!
//! Disjunct sets are compared up to order: the slice-based constructions
//! depend on iteration order, the set of readings does not.

use std::collections::HashMap;

use shrdlite_core::{
    Color, Command, Entity, Form, Location, ObjectDesc, ObjectRef, Quantifier, Relation, Size,
    WorldState,
};
use shrdlite_interp::{interpret, InterpretError, ParseResult};

fn small_world() -> WorldState {
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

fn entity(quantifier: Quantifier, desc: ObjectDesc) -> Entity {
    Entity::new(quantifier, ObjectRef::Simple(desc))
}

fn move_cmd(
    squant: Quantifier,
    source: ObjectDesc,
    relation: Relation,
    dquant: Quantifier,
    dest: ObjectDesc,
) -> ParseResult {
    ParseResult {
        command: Command::Move {
            entity: entity(squant, source),
            location: Location::new(relation, entity(dquant, dest)),
        },
    }
}

/// Disjuncts of a goal formula, one string per conjunction, sorted.
fn disjuncts(parse: &ParseResult, world: &WorldState) -> Vec<String> {
    let interpretation = interpret(parse, world).expect("interpretation should succeed");
    let mut out: Vec<String> = interpretation
        .formula
        .conjunctions()
        .iter()
        .map(|conjunction| {
            conjunction
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" & ")
        })
        .collect();
    out.sort();
    out
}

fn sorted(expected: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = expected.iter().map(ToString::to_string).collect();
    out.sort();
    out
}

#[test]
fn test_take_a_blue_object() {
    let world = small_world();
    let parse = ParseResult {
        command: Command::Take {
            entity: entity(
                Quantifier::Any,
                ObjectDesc {
                    form: Form::AnyForm,
                    size: None,
                    color: Some(Color::Blue),
                },
            ),
        },
    };
    assert_eq!(disjuncts(&parse, &world), sorted(&["holding(g)"]));

    // "a red object" matches both red boxes.
    let parse = ParseResult {
        command: Command::Take {
            entity: entity(
                Quantifier::Any,
                ObjectDesc {
                    form: Form::AnyForm,
                    size: None,
                    color: Some(Color::Red),
                },
            ),
        },
    };
    assert_eq!(
        disjuncts(&parse, &world),
        sorted(&["holding(l)", "holding(m)"])
    );
}

#[test]
fn test_put_a_ball_in_a_box() {
    let world = small_world();
    let parse = move_cmd(
        Quantifier::Any,
        ObjectDesc::of_form(Form::Ball),
        Relation::Inside,
        Quantifier::Any,
        ObjectDesc::of_form(Form::Box),
    );
    assert_eq!(
        disjuncts(&parse, &world),
        sorted(&[
            "inside(e,k)",
            "inside(e,l)",
            "inside(f,k)",
            "inside(f,l)",
            "inside(f,m)",
        ])
    );
}

#[test]
fn test_balls_never_on_tables() {
    let world = small_world();
    let parse = move_cmd(
        Quantifier::Any,
        ObjectDesc::of_form(Form::Ball),
        Relation::OnTop,
        Quantifier::Any,
        ObjectDesc::of_form(Form::Table),
    );
    assert_eq!(
        interpret(&parse, &world),
        Err(InterpretError::NoValidInterpretation)
    );
}

#[test]
fn test_big_ball_never_in_small_box() {
    let world = small_world();
    let parse = move_cmd(
        Quantifier::Any,
        ObjectDesc {
            form: Form::Ball,
            size: Some(Size::Large),
            color: None,
        },
        Relation::Inside,
        Quantifier::Any,
        ObjectDesc {
            form: Form::Box,
            size: Some(Size::Small),
            color: None,
        },
    );
    assert_eq!(
        interpret(&parse, &world),
        Err(InterpretError::NoValidInterpretation)
    );
}

#[test]
fn test_put_all_balls_on_the_floor() {
    let world = small_world();
    let parse = move_cmd(
        Quantifier::All,
        ObjectDesc::of_form(Form::Ball),
        Relation::OnTop,
        Quantifier::The,
        ObjectDesc::of_form(Form::Floor),
    );
    assert_eq!(
        disjuncts(&parse, &world),
        sorted(&["ontop(e,floor) & ontop(f,floor)"])
    );
}

#[test]
fn test_put_a_ball_in_every_large_box() {
    let world = small_world();
    let parse = move_cmd(
        Quantifier::Any,
        ObjectDesc::of_form(Form::Ball),
        Relation::Inside,
        Quantifier::All,
        ObjectDesc {
            form: Form::Box,
            size: Some(Size::Large),
            color: None,
        },
    );
    assert_eq!(
        disjuncts(&parse, &world),
        sorted(&[
            "inside(e,k) & inside(f,k)",
            "inside(e,k) & inside(f,l)",
            "inside(e,l) & inside(f,k)",
            "inside(e,l) & inside(f,l)",
        ])
    );
}

#[test]
fn test_take_the_ball_is_ambiguous() {
    let world = small_world();
    let parse = ParseResult {
        command: Command::Take {
            entity: entity(Quantifier::The, ObjectDesc::of_form(Form::Ball)),
        },
    };
    match interpret(&parse, &world).unwrap_err() {
        InterpretError::AmbiguousThe(listing) => {
            assert!(listing.contains("the large white ball in stack 1"), "{listing}");
            assert!(listing.contains("the small black ball in stack 5"), "{listing}");
        }
        other => panic!("expected an ambiguity error, got {other:?}"),
    }
}

#[test]
fn test_all_inside_all_is_illegal() {
    let world = small_world();
    let parse = move_cmd(
        Quantifier::All,
        ObjectDesc::of_form(Form::Ball),
        Relation::Inside,
        Quantifier::All,
        ObjectDesc::of_form(Form::Box),
    );
    assert_eq!(
        interpret(&parse, &world),
        Err(InterpretError::NoValidInterpretation)
    );
}

#[test]
fn test_all_balls_left_of_a_box() {
    // "put all balls left of a box": every valid pair in one reading,
    // grouped per source with one destination picked for each.
    let world = small_world();
    let parse = move_cmd(
        Quantifier::All,
        ObjectDesc::of_form(Form::Ball),
        Relation::LeftOf,
        Quantifier::Any,
        ObjectDesc::of_form(Form::Box),
    );
    let got = disjuncts(&parse, &world);
    // Two sources, three destinations each: nine combined readings.
    assert_eq!(got.len(), 9);
    assert!(got.contains(&"leftof(e,l) & leftof(f,l)".to_string()));
    assert!(got.contains(&"leftof(e,k) & leftof(f,m)".to_string()));
}

#[test]
fn test_nested_source_reference() {
    // "take the box on top of the table" -> m, uniquely.
    let world = small_world();
    let parse = ParseResult {
        command: Command::Take {
            entity: Entity::new(
                Quantifier::The,
                ObjectRef::Relative {
                    object: ObjectDesc::of_form(Form::Box),
                    location: Box::new(Location::new(
                        Relation::OnTop,
                        entity(Quantifier::The, ObjectDesc::of_form(Form::Table)),
                    )),
                },
            ),
        },
    };
    assert_eq!(disjuncts(&parse, &world), sorted(&["holding(m)"]));
}

#[test]
fn test_held_object_counts_as_candidate() {
    // Same world but with the small ball already in the arm.
    let objects = small_world().objects.as_ref().clone();
    let stacks = vec![
        vec!["e".into()],
        vec!["l".into(), "g".into(), "m".into()],
        vec!["k".into()],
        vec![],
        vec![],
    ];
    let world = WorldState::new(objects, stacks, 4, Some("f".into())).unwrap();

    let parse = ParseResult {
        command: Command::Take {
            entity: entity(
                Quantifier::Any,
                ObjectDesc {
                    form: Form::Ball,
                    size: Some(Size::Small),
                    color: None,
                },
            ),
        },
    };
    assert_eq!(disjuncts(&parse, &world), sorted(&["holding(f)"]));
}

#[test]
fn test_put_with_empty_arm_fails() {
    let world = small_world();
    let parse = ParseResult {
        command: Command::Put {
            location: Location::new(
                Relation::Inside,
                entity(Quantifier::Any, ObjectDesc::of_form(Form::Box)),
            ),
        },
    };
    assert_eq!(
        interpret(&parse, &world),
        Err(InterpretError::NoMatchingObject)
    );
}
