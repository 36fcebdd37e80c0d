#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn kind_names() {
    assert_eq!(Value::from("x").kind(), ValueKind::String);
    assert_eq!(Value::from(1).kind(), ValueKind::Integer);
    assert_eq!(Value::from(1.5).kind(), ValueKind::Float);
    assert_eq!(Value::from(true).kind(), ValueKind::Boolean);
    assert_eq!(Value::empty_map().kind(), ValueKind::Map);
    assert_eq!(ValueKind::Opaque.to_string(), "opaque");
}

#[test]
fn float_text_keeps_fraction() {
    assert_eq!(Value::Float(1.0).to_string(), "1.0");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::Float(1e21).to_string(), "1000000000000000000000.0");
}

#[test]
fn list_and_map_text() {
    let list = Value::List(vec![Value::Float(1.0), Value::from("a")]);
    assert_eq!(list.to_string(), "[1.0,a]");

    let mut map = Map::new();
    map.insert("HOST".to_owned(), Value::from("localhost"));
    map.insert("PORT".to_owned(), Value::Integer(5432));
    assert_eq!(Value::Map(map).to_string(), "{HOST=localhost,PORT=5432}");
}

#[test]
fn accessors_match_variant() {
    let v = Value::Integer(7);
    assert_eq!(v.as_integer(), Some(7));
    assert_eq!(v.as_float(), None);
    assert_eq!(v.as_str(), None);
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert_eq!(Value::from(false).as_bool(), Some(false));
    assert!(Value::empty_map().as_map().is_some_and(Map::is_empty));
}

#[test]
fn json_conversion() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"b": 1, "a": [1.5, "x", null], "c": null, "d": true}"#)
            .unwrap();
    let value = Value::from_json(&json).unwrap();

    let mut expected = Map::new();
    expected.insert("b".to_owned(), Value::Integer(1));
    expected.insert(
        "a".to_owned(),
        Value::List(vec![Value::Float(1.5), Value::from("x")]),
    );
    expected.insert("d".to_owned(), Value::Boolean(true));
    assert_eq!(value, Value::Map(expected));

    assert_eq!(
        Value::from_json(&value.to_json()).as_ref(),
        Some(&value),
        "JSON conversion preserves non-null values"
    );
}

#[test]
fn opaque_to_json_is_raw_text() {
    let v = Value::Opaque("{a=1}".to_owned());
    assert_eq!(v.to_json(), serde_json::Value::String("{a=1}".to_owned()));
}
