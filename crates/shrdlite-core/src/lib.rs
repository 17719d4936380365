//! Shrdlite core: the blocks-world data model.
//!
//! A world is a row of stacks of shaped, sized, colored objects, plus one
//! overhead arm that can hold a single object. This crate defines:
//!
//! - the object vocabulary and description matching ([`object`]),
//! - the spatial-relation vocabulary ([`relation`]),
//! - validated world states with cheap semi-deep clones ([`world`]),
//! - the physical stacking laws ([`laws`]),
//! - the parser-facing command AST ([`command`]),
//! - the DNF goal language and its evaluator ([`goal`]).
//!
//! The interpreter and planner crates build on these types; everything here
//! is synchronous, deterministic, and free of I/O.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use shrdlite_core::{
//!     is_valid, Color, DnfFormula, Form, Literal, ObjectDesc, Relation, Size, WorldState,
//! };
//!
//! let objects: HashMap<String, ObjectDesc> = [
//!     ("b".to_string(), ObjectDesc::new(Form::Ball, Size::Small, Color::Black)),
//!     ("k".to_string(), ObjectDesc::new(Form::Box, Size::Large, Color::Yellow)),
//! ]
//! .into();
//! let world = WorldState::new(objects, vec![vec!["k".into(), "b".into()], vec![]], 0, None)?;
//!
//! // The ball sits directly atop the box, which reads as "inside".
//! assert!(is_valid(&world, Relation::Inside, "b", "k"));
//! let goal = DnfFormula::new(vec![vec![Literal::binary(Relation::Inside, "b", "k")]]);
//! assert!(goal.satisfied_in(&world));
//! assert_eq!(goal.to_string(), "inside(b,k)");
//! # Ok::<(), shrdlite_core::WorldError>(())
//! ```

pub mod command;
pub mod error;
pub mod goal;
pub mod laws;
pub mod object;
pub mod relation;
pub mod world;

pub use command::{Command, Entity, Location, ObjectRef, Quantifier};
pub use error::WorldError;
pub use goal::{Conjunction, DnfFormula, Literal};
pub use laws::is_valid;
pub use object::{Color, Form, ObjectDesc, Size, FLOOR_DESC};
pub use relation::Relation;
pub use world::{WorldState, FLOOR};
