//! Sample nested structures shared by the integration tests.
#![allow(dead_code)]

use datadig::document::{Record, Value};

/// A structured object reachable only through attribute lookup.
pub fn some_object() -> Value {
    Value::from(
        Record::new("SomeObject")
            .with(
                "nested_dict",
                Value::dict([("nested_array", Value::list([9, 8, 7]))]),
            )
            .with("nested_string", "This is a string inside object"),
    )
}

/// Dict with all sorts of nested data: lists, tuples, dicts, strings and objects.
pub fn dict_example() -> Value {
    Value::dict([
        ("string_item", Value::from("This is a string")),
        ("object_item", some_object()),
        (
            "nested_dict",
            Value::dict([
                ("sub_item_array", Value::list([1, 2, 3])),
                ("sub_item_string", Value::from("Another string")),
                ("sub_item_dict", Value::dict([("a", 0), ("b", 1)])),
                ("sub_item_tuple", Value::tuple(["x", "y", "z"])),
                ("sub_item_object", some_object()),
            ]),
        ),
        ("keys", Value::list(["The key 1", "The key 2"])),
    ])
}

fn sequence_items(text: &str) -> Vec<Value> {
    vec![
        Value::from(text),
        Value::list(["a", "b", "c"]),
        Value::tuple(["x", "y", "z"]),
        some_object(),
        Value::dict([("foo", 0), ("bar", 1)]),
    ]
}

/// Tuple with some nested data.
pub fn tuple_example() -> Value {
    Value::Tuple(sequence_items("This is a string inside tuple"))
}

/// List with some nested data.
pub fn array_example() -> Value {
    Value::List(sequence_items("This is a string inside array"))
}
