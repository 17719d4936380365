//! Physical laws of the blocks world.
//!
//! [`is_valid`] is the single authority on whether one object may stand in a
//! relation to another. The interpreter uses it to prune goal candidates and
//! the state graph uses it to gate the drop action, so the two subsystems
//! can never disagree about what is physically possible.

use crate::object::{Form, ObjectDesc, Size};
use crate::relation::Relation;
use crate::world::WorldState;

/// Whether `mover` may legally stand in `relation` to `dest`.
///
/// Pure over the two attribute records plus the identifiers; identifiers
/// that resolve to no object (and are not the floor sentinel) are invalid.
pub fn is_valid(world: &WorldState, relation: Relation, mover: &str, dest: &str) -> bool {
    let (Some(m), Some(d)) = (world.attributes(mover), world.attributes(dest)) else {
        return false;
    };
    // An object cannot be placed relative to itself.
    if relation.is_horizontal() && mover == dest {
        return false;
    }
    allows(m, d, relation)
}

/// The stacking laws over bare attribute records.
fn allows(m: &ObjectDesc, d: &ObjectDesc, relation: Relation) -> bool {
    let support = relation.is_support();

    // Small objects cannot support large objects.
    if m.size == Some(Size::Large) && d.size == Some(Size::Small) && support {
        return false;
    }
    // Balls must be in boxes or on the floor, and support nothing.
    if m.form == Form::Ball && relation == Relation::Under {
        return false;
    }
    if m.form == Form::Ball && !matches!(d.form, Form::Box | Form::Floor) && support {
        return false;
    }
    // A box is entered, not climbed; everything else is the reverse.
    if d.form == Form::Box && relation == Relation::OnTop {
        return false;
    }
    if d.form != Form::Box && relation == Relation::Inside {
        return false;
    }
    // Balls support nothing at all.
    if d.form == Form::Ball && support {
        return false;
    }
    if d.form == Form::Ball
        && d.size == Some(Size::Small)
        && m.size == Some(Size::Large)
        && relation == Relation::Under
    {
        return false;
    }
    // Boxes cannot contain pyramids, planks, or boxes of the same size.
    if d.form == Form::Box
        && relation == Relation::Inside
        && (matches!(m.form, Form::Pyramid | Form::Plank)
            || (m.form == Form::Box && m.size == d.size))
    {
        return false;
    }
    // Small boxes cannot sit on small bricks or pyramids.
    if m.form == Form::Box
        && m.size == Some(Size::Small)
        && d.size == Some(Size::Small)
        && relation == Relation::OnTop
        && matches!(d.form, Form::Pyramid | Form::Brick)
    {
        return false;
    }
    // Large boxes cannot sit on pyramids.
    if m.form == Form::Box && m.size == Some(Size::Large) && d.form == Form::Pyramid {
        return false;
    }

    true
}
