// tests/seek_tests.rs
mod common;

use common::{array_example, dict_example, some_object, tuple_example};
use datadig::document::{Record, Value};
use datadig::{path, seek, Cause, FallbackPolicy, Indexable, SeekOptions};

fn objects() -> SeekOptions {
    SeekOptions::new().attribute_lookup(true)
}

// ============================================================================
// Dict Input
// ============================================================================

#[test]
fn test_dict_nested_strings() {
    let data = dict_example();

    assert_eq!(*seek(&data, &path!["string_item"]).unwrap(), Value::from("This is a string"));
    assert_eq!(
        *seek(&data, &path!["nested_dict", "sub_item_string"]).unwrap(),
        Value::from("Another string")
    );
    assert_eq!(
        *seek(&data, &path!["nested_dict", "sub_item_string", 0]).unwrap(),
        Value::from("A")
    );
    assert_eq!(
        *seek(&data, &path!["nested_dict", "sub_item_string", -1]).unwrap(),
        Value::from("g")
    );
}

#[test]
fn test_dict_nested_arrays_and_tuples() {
    let data = dict_example();

    assert_eq!(*seek(&data, &path!["nested_dict", "sub_item_array", 0]).unwrap(), Value::Int(1));
    assert_eq!(*seek(&data, &path!["nested_dict", "sub_item_array", -1]).unwrap(), Value::Int(3));
    assert_eq!(*seek(&data, &path!["nested_dict", "sub_item_tuple", 0]).unwrap(), Value::from("x"));
    assert_eq!(*seek(&data, &path!["nested_dict", "sub_item_tuple", -1]).unwrap(), Value::from("z"));
}

#[test]
fn test_dict_nested_objects_with_attribute_lookup() {
    let data = dict_example();

    let nested = objects().seek(&data, &path!["object_item", "nested_dict"]).unwrap();
    assert_eq!(nested.type_name(), "dict");

    let result = objects()
        .seek(
            &data,
            &path!["nested_dict", "sub_item_object", "nested_dict", "nested_array", 0],
        )
        .unwrap();
    assert_eq!(*result, Value::Int(9));
}

#[test]
fn test_dict_key_wins_over_fields_when_lookup_enabled() {
    let data = dict_example();
    let expected = Value::list(["The key 1", "The key 2"]);

    assert_eq!(*seek(&data, &path!["keys"]).unwrap(), expected);
    assert_eq!(*objects().seek(&data, &path!["keys"]).unwrap(), expected);
}

#[test]
fn test_dict_key_error() {
    let data = dict_example();

    let err = seek(&data, &path!["unknow_key"]).unwrap_err();
    assert_eq!(err.cause(), Cause::KeyNotFound);
    assert!(err.to_string().contains("Path traveled: dict -> unknow_key"));
}

#[test]
fn test_dict_nested_key_error() {
    let data = dict_example();

    let err = seek(&data, &path!["nested_dict", "sub_item_dict", "unknow_key"]).unwrap_err();
    assert_eq!(err.cause(), Cause::KeyNotFound);
    assert_eq!(err.step(), 2);
    assert_eq!(
        err.to_string(),
        "cannot seek any further: KeyNotFound\n\
         Path traveled: dict -> nested_dict -> sub_item_dict -> unknow_key"
    );
}

#[test]
fn test_dict_missing_key_never_falls_back_to_fields() {
    let data = dict_example();

    let err = objects().seek(&data, &path!["items"]).unwrap_err();
    assert_eq!(err.cause(), Cause::KeyNotFound);
}

// ============================================================================
// Tuple and List Input
// ============================================================================

#[test]
fn test_sequences_nested_strings() {
    let tuple = tuple_example();
    assert_eq!(*seek(&tuple, &path![0, 0]).unwrap(), Value::from("T"));
    assert_eq!(*seek(&tuple, &path![0, -1]).unwrap(), Value::from("e"));

    let array = array_example();
    assert_eq!(*seek(&array, &path![0, 0]).unwrap(), Value::from("T"));
    assert_eq!(*seek(&array, &path![0, -1]).unwrap(), Value::from("y"));
}

#[test]
fn test_sequences_nested_containers() {
    for data in [tuple_example(), array_example()] {
        assert_eq!(*seek(&data, &path![1]).unwrap(), Value::list(["a", "b", "c"]));
        assert_eq!(*seek(&data, &path![1, -1]).unwrap(), Value::from("c"));
        assert_eq!(*seek(&data, &path![2]).unwrap(), Value::tuple(["x", "y", "z"]));
        assert_eq!(*seek(&data, &path![2, 0]).unwrap(), Value::from("x"));
        assert_eq!(*seek(&data, &path![-1]).unwrap(), Value::dict([("foo", 0), ("bar", 1)]));
        assert_eq!(*seek(&data, &path![-1, "bar"]).unwrap(), Value::Int(1));
    }
}

#[test]
fn test_sequences_nested_objects_with_attribute_lookup() {
    for data in [tuple_example(), array_example()] {
        assert_eq!(*objects().seek(&data, &path![3]).unwrap(), some_object());
        assert_eq!(
            *objects().seek(&data, &path![3, "nested_dict", "nested_array"]).unwrap(),
            Value::list([9, 8, 7])
        );
        assert_eq!(
            *objects().seek(&data, &path![3, "nested_dict", "nested_array", -1]).unwrap(),
            Value::Int(7)
        );
    }
}

#[test]
fn test_tuple_trail_uses_tuple_type_name() {
    let data = tuple_example();
    let err = seek(&data, &path![1, "first"]).unwrap_err();
    assert_eq!(err.cause(), Cause::TypeMismatch);
    assert_eq!(err.trail(), "tuple -> 1 -> first");
}

// ============================================================================
// Object Input
// ============================================================================

#[test]
fn test_object_nested_values() {
    let data = some_object();

    assert_eq!(
        *objects().seek(&data, &path!["nested_string"]).unwrap(),
        Value::from("This is a string inside object")
    );
    assert_eq!(*objects().seek(&data, &path!["nested_string", -1]).unwrap(), Value::from("t"));
    assert_eq!(
        *objects().seek(&data, &path!["nested_dict", "nested_array"]).unwrap(),
        Value::list([9, 8, 7])
    );
}

#[test]
fn test_object_attribute_gating() {
    let data = some_object();

    let err = seek(&data, &path!["nested_string"]).unwrap_err();
    assert_eq!(err.cause(), Cause::TypeMismatch);
    assert_eq!(err.trail(), "SomeObject -> nested_string");

    let err = objects().seek(&data, &path!["age"]).unwrap_err();
    assert_eq!(err.cause(), Cause::AttributeNotFound);
}

// ============================================================================
// String Input
// ============================================================================

#[test]
fn test_string_root() {
    let text = Value::from("Lorem ipsum dolor sit amet");
    assert_eq!(*seek(&text, &path![]).unwrap(), text);
    assert_eq!(*seek(&text, &path![6]).unwrap(), Value::from("i"));
}

#[test]
fn test_string_index_error() {
    let text = Value::from("Lorem ipsum dolor sit amet");

    let err = seek(&text, &path![1000]).unwrap_err();
    assert_eq!(err.cause(), Cause::IndexOutOfRange);
    assert!(err.to_string().contains("Path traveled: str -> 1000"));
}

#[test]
fn test_string_index_error_on_substring() {
    let text = Value::from("Lorem ipsum dolor sit amet");

    let err = seek(&text, &path![0, 1]).unwrap_err();
    assert_eq!(err.cause(), Cause::IndexOutOfRange);
    assert!(err.to_string().contains("Path traveled: str -> 0 -> 1"));
}

#[test]
fn test_string_indices_must_be_integers() {
    let text = Value::from("Lorem ipsum dolor sit amet");

    let err = seek(&text, &path!["islower"]).unwrap_err();
    assert_eq!(err.cause(), Cause::TypeMismatch);
    assert!(err.to_string().contains("Path traveled: str -> islower"));
}

#[test]
fn test_string_attribute_error_with_lookup_enabled() {
    let text = Value::from("Lorem ipsum dolor sit amet");

    let err = objects().seek(&text, &path!["_islower2"]).unwrap_err();
    assert_eq!(err.cause(), Cause::AttributeNotFound);
    assert!(err.to_string().contains("Path traveled: str -> _islower2"));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_seek_is_deterministic() {
    let data = dict_example();
    let accessors = path!["nested_dict", "sub_item_dict", "c"];

    assert_eq!(seek(&data, &accessors), seek(&data, &accessors));

    let accessors = path!["nested_dict", "sub_item_array", 1];
    assert_eq!(seek(&data, &accessors), seek(&data, &accessors));
}

#[test]
fn test_empty_path_is_identity() {
    for data in [dict_example(), tuple_example(), some_object(), Value::Null] {
        assert_eq!(*seek(&data, &path![]).unwrap(), data);
        assert_eq!(*objects().seek(&data, &path![]).unwrap(), data);
    }
}

#[test]
fn test_negative_indexing() {
    let data = Value::list(["a", "b", "c", "d"]);
    let n = 4i64;

    assert_eq!(seek(&data, &path![-1]), seek(&data, &path![n - 1]));
    assert_eq!(seek(&data, &path![-n]), seek(&data, &path![0]));

    let err = seek(&data, &path![-(n + 1)]).unwrap_err();
    assert_eq!(err.cause(), Cause::IndexOutOfRange);
    let err = seek(&data, &path![n]).unwrap_err();
    assert_eq!(err.cause(), Cause::IndexOutOfRange);
}

#[test]
fn test_multi_step_diagnostics() {
    let data = Value::dict([("a", Value::dict([("b", Value::Dict(Default::default()))]))]);

    let err = seek(&data, &path!["a", "b", "c"]).unwrap_err();
    assert_eq!(err.trail(), "dict -> a -> b -> c");
    assert_eq!(err.root_type(), "dict");
    assert_eq!(err.cause(), Cause::KeyNotFound);
}

#[test]
fn test_any_failure_policy_reaches_fields_behind_missing_keys() {
    let data = Value::list([Value::from(Record::new("Point").with("x", 1))]);
    let any = objects().fallback(FallbackPolicy::AnyFailure);

    // Records are never subscriptable, so both policies reach the field.
    assert_eq!(*objects().seek(&data, &path![0, "x"]).unwrap(), Value::Int(1));
    assert_eq!(*any.seek(&data, &path![0, "x"]).unwrap(), Value::Int(1));

    let dict = Value::dict([("x", 1)]);
    assert_eq!(any.seek(&dict, &path!["y"]).unwrap_err().cause(), Cause::AttributeNotFound);
    assert_eq!(objects().seek(&dict, &path!["y"]).unwrap_err().cause(), Cause::KeyNotFound);
}
