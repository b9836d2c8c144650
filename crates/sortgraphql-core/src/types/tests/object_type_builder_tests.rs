use crate::ast;
use crate::schema::TypeValidationError;
use crate::types::DeprecationState;
use crate::types::ObjectTypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::tests::test_utils;

type Result<T> = std::result::Result<T, TypeValidationError>;

fn as_object_def(def: &ast::schema::TypeDefinition) -> &ast::schema::ObjectType {
    match def {
        ast::schema::TypeDefinition::Object(def) => def,
        _ => panic!("expected an object type def"),
    }
}

#[test]
fn visit_object_keeps_fields_and_parameters() -> Result<()> {
    let registry = test_utils::parse_registry(concat!(
        "type Query {\n",
        "  zeta: Int\n",
        "  alpha(b: String = \"x\", a: [Int!]!): Boolean!\n",
        "}",
    ));
    let (source, def) = test_utils::type_def(&registry, "Query");

    let mut types_map_builder = TypesMapBuilder::new();
    ObjectTypeBuilder::new().visit_type_def(
        &mut types_map_builder,
        source,
        as_object_def(def),
    )?;
    let obj_type = test_utils::get_object_type(&mut types_map_builder, "Query");

    assert_eq!(
        obj_type.fields().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
        vec!["zeta", "alpha"],
    );
    let alpha = &obj_type.fields()["alpha"];
    assert_eq!(alpha.def_location(), &test_utils::file_location(3, 3));
    assert_eq!(alpha.type_annotation().to_string(), "Boolean!");
    assert_eq!(
        alpha.parameters().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
        vec!["b", "a"],
    );
    assert_eq!(alpha.parameters()["a"].type_annotation().to_string(), "[Int!]!");
    assert_eq!(
        alpha.parameters()["b"].default_value().map(|value| value.to_string()),
        Some("\"x\"".to_string()),
    );

    Ok(())
}

#[test]
fn deprecation_state_reads_reason() -> Result<()> {
    let registry = test_utils::parse_registry(concat!(
        "type Query {\n",
        "  old: Int @deprecated(reason: \"Use new\")\n",
        "  bare: Int @deprecated\n",
        "  new: Int\n",
        "}",
    ));
    let (source, def) = test_utils::type_def(&registry, "Query");

    let mut types_map_builder = TypesMapBuilder::new();
    ObjectTypeBuilder::new().visit_type_def(
        &mut types_map_builder,
        source,
        as_object_def(def),
    )?;
    let obj_type = test_utils::get_object_type(&mut types_map_builder, "Query");

    assert_eq!(
        obj_type.fields()["old"].deprecation_state(),
        DeprecationState::Deprecated(Some("Use new")),
    );
    assert_eq!(obj_type.fields()["bare"].deprecation_state(), DeprecationState::Deprecated(None));
    assert_eq!(obj_type.fields()["new"].deprecation_state(), DeprecationState::NotDeprecated);

    Ok(())
}

#[test]
fn duplicate_field_is_reported() {
    let (_, errors) = test_utils::build_types_map("type Query {\n  a: Int\n  a: String\n}");

    assert_eq!(errors, vec![TypeValidationError::DuplicateFieldNameDefinition {
        def1: test_utils::file_location(2, 3),
        def2: test_utils::file_location(3, 3),
        field_name: "a".to_string(),
        type_name: "Query".to_string(),
    }]);
}

#[test]
fn dunder_prefixed_names_are_reported() {
    let (_, errors) = test_utils::build_types_map("type __Query { a(__b: Int): Int, __c: Int }");

    assert_eq!(errors.len(), 3, "unexpected errors: {errors:?}");
    assert!(errors.iter().any(|err| matches!(
        err,
        TypeValidationError::InvalidDunderPrefixedTypeName { type_name, .. }
            if type_name == "__Query",
    )));
    assert!(errors.iter().any(|err| matches!(
        err,
        TypeValidationError::InvalidDunderPrefixedFieldName { field_name, .. }
            if field_name == "__c",
    )));
    assert!(errors.iter().any(|err| matches!(
        err,
        TypeValidationError::InvalidDunderPrefixedParamName { param_name, .. }
            if param_name == "__b",
    )));
}

#[test]
fn redefinition_of_builtin_type_is_reported() {
    let (_, errors) = test_utils::build_types_map("type String { a: Int }");

    assert_eq!(errors, vec![TypeValidationError::RedefinitionOfBuiltinType {
        location: test_utils::file_location(1, 1),
        type_name: "String".to_string(),
    }]);
}

#[test]
fn extension_merges_fields_and_interfaces() {
    let (types, errors) = test_utils::build_types_map(concat!(
        "interface Node { id: ID! }\n",
        "type User { name: String }\n",
        "extend type User implements Node { id: ID! }",
    ));

    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    let obj_type = types["User"].as_object().expect("User is an object type");
    assert_eq!(
        obj_type.fields().keys().map(|name| name.as_str()).collect::<Vec<_>>(),
        vec!["name", "id"],
    );
    assert_eq!(obj_type.interface_names(), vec!["Node"]);
    assert_eq!(obj_type.extensions().len(), 1);
}

#[test]
fn extension_duplicating_field_is_reported() {
    let (_, errors) = test_utils::build_types_map(concat!(
        "type User { name: String }\n",
        "extend type User { name: String }",
    ));

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        TypeValidationError::DuplicateFieldNameDefinition { field_name, type_name, .. }
            if field_name == "name" && type_name == "User",
    ));
}

#[test]
fn missing_interface_field_is_reported() {
    let (_, errors) = test_utils::build_types_map(concat!(
        "interface Node { id: ID! }\n",
        "type User implements Node { name: String }",
    ));

    assert_eq!(errors, vec![TypeValidationError::MissingInterfaceSpecifiedField {
        def_location: test_utils::file_location(2, 1),
        field_name: "id".to_string(),
        interface_name: "Node".to_string(),
        type_name: "User".to_string(),
    }]);
}

#[test]
fn implementing_field_may_narrow_its_type() {
    let (_, errors) = test_utils::build_types_map(concat!(
        "interface Node { id: ID }\n",
        "interface Named { friend: Node }\n",
        "type User implements Node & Named { id: ID! friend: User }",
    ));

    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn incompatible_field_type_is_reported() {
    let (_, errors) = test_utils::build_types_map(concat!(
        "interface Node { id: ID! }\n",
        "type User implements Node { id: ID }",
    ));

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        TypeValidationError::InvalidInterfaceSpecifiedFieldType { field_name, .. }
            if field_name == "id",
    ));
}

#[test]
fn transitive_interface_must_be_declared() {
    let (_, errors) = test_utils::build_types_map(concat!(
        "interface Node { id: ID! }\n",
        "interface Resource implements Node { id: ID! }\n",
        "type User implements Resource { id: ID! }",
    ));

    assert_eq!(errors, vec![TypeValidationError::MissingRecursiveInterfaceImplementation {
        def_location: test_utils::file_location(3, 1),
        inheritance_path: vec!["Resource".to_string()],
        missing_recursive_interface_name: "Node".to_string(),
        type_name: "User".to_string(),
    }]);
}

#[test]
fn implementing_non_interface_is_reported() {
    let (_, errors) = test_utils::build_types_map(concat!(
        "type Node { id: ID! }\n",
        "type User implements Node { id: ID! }",
    ));

    assert_eq!(errors, vec![TypeValidationError::ImplementsNonInterfaceType {
        location: test_utils::file_location(2, 1),
        non_interface_type_name: "Node".to_string(),
        type_name: "User".to_string(),
    }]);
}

#[test]
fn input_type_in_output_field_is_reported() {
    let (_, errors) = test_utils::build_types_map(concat!(
        "input Filter { a: Int }\n",
        "type Query { a: Filter, b(f: Query): Int }",
    ));

    assert_eq!(errors.len(), 2, "unexpected errors: {errors:?}");
    assert!(matches!(
        &errors[0],
        TypeValidationError::InvalidOutputFieldWithInputType { field_name, .. }
            if field_name == "a",
    ));
    assert!(matches!(
        &errors[1],
        TypeValidationError::InvalidParameterWithOutputOnlyType { parameter_name, .. }
            if parameter_name == "f",
    ));
}
