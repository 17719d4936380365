//! Object attributes and description matching.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The shape of an object.
///
/// `Floor` is the sentinel form of the floor pseudo-object; `AnyForm` is the
/// wildcard used by descriptions such as "an object" or "it".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Brick,
    Plank,
    Ball,
    Pyramid,
    Box,
    Table,
    Floor,
    #[serde(rename = "anyform")]
    AnyForm,
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Form::Brick => "brick",
            Form::Plank => "plank",
            Form::Ball => "ball",
            Form::Pyramid => "pyramid",
            Form::Box => "box",
            Form::Table => "table",
            Form::Floor => "floor",
            Form::AnyForm => "object",
        };
        f.write_str(name)
    }
}

/// Object size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Size::Small => "small",
            Size::Large => "large",
        })
    }
}

/// Object color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Blue,
    Green,
    Yellow,
    White,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Red => "red",
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::White => "white",
        })
    }
}

/// Attribute record of an object, also used as a description pattern.
///
/// As an attribute record, `form` is a concrete form and absent fields mean
/// the attribute does not apply (the floor has neither size nor color). As a
/// pattern, an absent field matches anything and so does `AnyForm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectDesc {
    pub form: Form,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Attributes of the floor sentinel.
pub const FLOOR_DESC: ObjectDesc = ObjectDesc {
    form: Form::Floor,
    size: None,
    color: None,
};

impl ObjectDesc {
    /// A description with only a form constraint.
    pub fn of_form(form: Form) -> Self {
        Self {
            form,
            size: None,
            color: None,
        }
    }

    /// Attribute record with all fields present.
    pub fn new(form: Form, size: Size, color: Color) -> Self {
        Self {
            form,
            size: Some(size),
            color: Some(color),
        }
    }

    /// Match this description pattern against an attribute record.
    ///
    /// Field-by-field: an absent pattern field matches anything, and the
    /// pseudo-form `AnyForm` matches any form.
    pub fn matches(&self, attrs: &ObjectDesc) -> bool {
        let form_ok = self.form == Form::AnyForm || self.form == attrs.form;
        let size_ok = self.size.is_none() || self.size == attrs.size;
        let color_ok = self.color.is_none() || self.color == attrs.color;
        form_ok && size_ok && color_ok
    }
}
