//! Tests for JSON encoding and prototype binding.

use std::collections::BTreeMap;

use objkit_common::warning::has_warned;
use objkit_object::{
    JsonError, Object, Prototype, Rectangle, RectanglePrototype, from_json, from_json_typed,
    to_json,
};
use quickcheck_macros::quickcheck;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Circle;

impl Prototype for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn expected_fields(&self) -> &'static [&'static str] {
        &["radius"]
    }
}

trait Diameter {
    fn diameter(&self) -> f64;
}

impl Diameter for Object<Circle> {
    fn diameter(&self) -> f64 {
        self.number("radius") * 2.0
    }
}

#[derive(Serialize)]
struct Record {
    name: String,
    count: i64,
    enabled: bool,
    note: Option<String>,
    tags: Vec<String>,
}

// ========== to_json ==========

#[test]
fn test_array_to_json() {
    assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
}

#[test]
fn test_object_keys_keep_insertion_order() {
    let value = json!({ "width": 10, "height": 20, "a": null });
    assert_eq!(to_json(&value).unwrap(), r#"{"width":10,"height":20,"a":null}"#);
}

#[test]
fn test_struct_to_json() {
    let json = to_json(&Rectangle::new(1.5, 2.0)).unwrap();
    assert_eq!(json, r#"{"width":1.5,"height":2}"#);
}

#[test]
fn test_integral_sides_print_without_fraction() {
    let json = to_json(&Rectangle::new(10.0, 20.0)).unwrap();
    assert_eq!(json, r#"{"width":10,"height":20}"#);

    let back: Rectangle = from_json_typed(&json).unwrap();
    assert_eq!(back, Rectangle::new(10.0, 20.0));
}

#[test]
fn test_non_string_keys_fail() {
    let mut map = BTreeMap::new();
    let _ = map.insert((1, 2), "pair");
    assert!(matches!(to_json(&map), Err(JsonError::Serialize(_))));
}

// ========== from_json ==========

#[test]
fn test_invalid_json_is_parse_error() {
    let err = from_json(Rectangle::prototype(), "{width: 10}").unwrap_err();
    assert!(matches!(err, JsonError::Parse(_)));
    assert!(err.to_string().starts_with("Failed to parse JSON"));
}

#[test]
fn test_missing_expected_field_warns() {
    let circle = from_json(Circle, r#"{"r": 1}"#).unwrap();
    assert!(circle.diameter().is_nan());
    assert!(has_warned("JSON", "Circle object has no 'radius' field"));
}

#[test]
fn test_set_prototype_overwrites_behavior() {
    let shape = from_json(Circle, r#"{"radius": 3, "width": 2, "height": 4}"#).unwrap();
    assert_eq!(shape.diameter().to_bits(), 6.0_f64.to_bits());

    let rect: Object<RectanglePrototype> = shape.set_prototype(RectanglePrototype);
    assert_eq!(rect.get_area().to_bits(), 8.0_f64.to_bits());
    assert_eq!(rect["radius"], 3);
}

#[test]
fn test_bound_object_serializes_as_fields() {
    let text = r#"{"height":20,"width":10}"#;
    let r = from_json(Rectangle::prototype(), text).unwrap();
    assert_eq!(to_json(&r).unwrap(), text);
    assert_eq!(r.into_value(), json!({ "height": 20, "width": 10 }));
}

#[quickcheck]
fn plain_data_round_trips(
    name: String,
    count: i64,
    enabled: bool,
    note: Option<String>,
    tags: Vec<String>,
) -> bool {
    let record = Record {
        name,
        count,
        enabled,
        note,
        tags,
    };
    let Ok(text) = to_json(&record) else {
        return false;
    };
    let Ok(expected) = serde_json::to_value(&record) else {
        return false;
    };
    from_json(Circle, &text).is_ok_and(|object| *object.fields() == expected)
}
