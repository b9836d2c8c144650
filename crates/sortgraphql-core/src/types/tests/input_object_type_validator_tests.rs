use crate::schema::TypeValidationError;
use crate::types::tests::test_utils;

#[test]
fn non_null_cycle_is_reported_once() {
    let (_, errors) = test_utils::build_types_map(concat!(
        "input B { a: A! }\n",
        "input A { b: B! }",
    ));

    assert_eq!(errors, vec![TypeValidationError::CircularInputFieldChain {
        circular_field_path: vec!["A.b".to_string(), "B.a".to_string(), "A".to_string()],
    }]);
}

#[test]
fn self_reference_is_reported() {
    let (_, errors) = test_utils::build_types_map("input A { self: A! }");

    assert_eq!(errors, vec![TypeValidationError::CircularInputFieldChain {
        circular_field_path: vec!["A.self".to_string(), "A".to_string()],
    }]);
}

#[test]
fn nullable_field_breaks_cycle() {
    let (_, errors) = test_utils::build_types_map(concat!(
        "input A { b: B! }\n",
        "input B { a: A }",
    ));

    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn list_field_breaks_cycle() {
    let (_, errors) = test_utils::build_types_map(concat!(
        "input A { b: B! }\n",
        "input B { a: [A!]! }",
    ));

    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn output_type_field_is_reported() {
    let (_, errors) = test_utils::build_types_map(concat!(
        "type User { name: String }\n",
        "input Filter { user: User }",
    ));

    assert_eq!(errors, vec![TypeValidationError::InvalidInputFieldWithOutputType {
        def_location: test_utils::file_location(2, 16),
        field_name: "user".to_string(),
        invalid_type_name: "User".to_string(),
        parent_type_name: "Filter".to_string(),
    }]);
}

#[test]
fn undefined_field_type_is_reported() {
    let (_, errors) = test_utils::build_types_map("input Filter { user: User }");

    assert_eq!(errors, vec![TypeValidationError::UndefinedTypeName {
        ref_location: test_utils::file_location(1, 16),
        undefined_type_name: "User".to_string(),
    }]);
}

#[test]
fn extension_fields_are_validated() {
    let (types, errors) = test_utils::build_types_map(concat!(
        "input Filter { a: Int }\n",
        "extend input Filter { b: String = \"x\" }",
    ));

    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    let inputobj_type = types["Filter"].as_input_object().expect("Filter is an input type");
    assert_eq!(
        inputobj_type.fields().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
        vec!["a", "b"],
    );
    assert_eq!(
        inputobj_type.fields()["b"].default_value().map(|value| value.to_string()),
        Some("\"x\"".to_string()),
    );
}
