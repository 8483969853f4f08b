//! Plain objects for the objkit crates.
//!
//! - **Rectangle** - a width/height pair with an area accessor
//! - **JSON helpers** - [`to_json`] encodes any serializable value;
//!   [`from_json`] parses text into plain data and binds it to a
//!   [`Prototype`], the set of behavior the parsed fields are used with
//!
//! ```
//! use objkit_object::{Rectangle, from_json, to_json};
//!
//! let json = to_json(&Rectangle::new(10.0, 20.0))?;
//! assert_eq!(json, r#"{"width":10,"height":20}"#);
//!
//! let r = from_json(Rectangle::prototype(), r#"{"width":10, "height":20}"#)?;
//! assert_eq!(r.get_area(), 200.0);
//! # Ok::<(), objkit_object::JsonError>(())
//! ```

/// JSON encoding and prototype binding.
pub mod json;
/// The rectangle value and its prototype.
pub mod rectangle;

pub use json::{
    JsonError, Object, Prototype, from_json, from_json_typed, serialize_number, to_json,
};
pub use rectangle::{Rectangle, RectanglePrototype};
