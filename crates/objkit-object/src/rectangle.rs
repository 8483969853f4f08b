//! The rectangle value
//!
//! [`Rectangle`] is the typed form. [`RectanglePrototype`] is the same
//! behavior for fields bound by [`from_json`](crate::from_json), where
//! nothing guarantees the fields exist.

use serde::{Deserialize, Serialize};

use crate::json::{Object, Prototype, serialize_number};

/// A rectangle with a width and a height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    #[serde(serialize_with = "serialize_number")]
    pub width: f64,
    /// Vertical extent.
    #[serde(serialize_with = "serialize_number")]
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`.
    #[must_use]
    pub fn get_area(&self) -> f64 {
        self.width * self.height
    }

    /// The prototype to bind parsed rectangle fields to.
    #[must_use]
    pub const fn prototype() -> RectanglePrototype {
        RectanglePrototype
    }
}

/// Rectangle behavior for parsed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectanglePrototype;

impl Prototype for RectanglePrototype {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn expected_fields(&self) -> &'static [&'static str] {
        &["width", "height"]
    }
}

impl Object<RectanglePrototype> {
    /// `width * height`, `NaN` if either side is missing or not a number.
    #[must_use]
    pub fn get_area(&self) -> f64 {
        self.number("width") * self.number("height")
    }
}
