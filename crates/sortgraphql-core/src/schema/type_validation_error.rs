use crate::loc;
use crate::schema::OperationKind;
use crate::types::DirectiveLocation;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use thiserror::Error;

/// A structural problem found while building the [`Schema`](crate::Schema).
///
/// Validation collects every problem it finds rather than stopping at the
/// first one, so these are always reported as a list.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of types \
        that cannot be broken with at least one nullable field. Unbroken \
        input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error(
        "The `@{directive_name}` directive is not declared as `repeatable` but \
        is applied more than once at {location}"
    )]
    DuplicateDirectiveAnnotation {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}.{value_name}` enum value is defined more than once: \
        at {def1} and at {def2}"
    )]
    DuplicateEnumValueDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        type_name: String,
        value_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field is defined more than once: at \
        {def1} and at {def2}"
    )]
    DuplicateFieldNameDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("The `{type_name}` type is defined more than once: at {def1} and at {def2}")]
    DuplicateTypeDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once ({location})"
    )]
    DuplicateInterfaceImplementsDeclaration {
        duplicated_interface_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The `{param_name}` parameter is declared more than once on \
        `{owner_name}` ({location})"
    )]
    DuplicateParameterDefinition {
        location: loc::SourceLocation,
        owner_name: String,
        param_name: String,
    },

    #[error(
        "The `{type_name}` union specifies `{member_name}` as a member more \
        than once ({location})"
    )]
    DuplicateUnionMember {
        location: loc::SourceLocation,
        member_name: String,
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` type at {location}, but no type \
        with that name is defined"
    )]
    ExtensionOfUndefinedType {
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements `{non_interface_type_name}`, which \
        is not an interface type ({location})"
    )]
    ImplementsNonInterfaceType {
        location: loc::SourceLocation,
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements `{undefined_interface_name}`, but \
        no type with that name is defined ({location})"
    )]
    ImplementsUndefinedInterface {
        location: loc::SourceLocation,
        type_name: String,
        undefined_interface_name: String,
    },

    #[error(
        "The `@{directive_name}` directive may not be applied at the \
        {directive_location} location ({location})"
    )]
    InvalidDirectiveLocation {
        directive_location: DirectiveLocation,
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Directive names must not start with `__`: `@{directive_name}` ({location})")]
    InvalidDunderPrefixedDirectiveName {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Field names must not start with `__`: `{type_name}.{field_name}` \
        ({location})"
    )]
    InvalidDunderPrefixedFieldName {
        field_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Parameter names must not start with `__`: `{param_name}` on \
        `{owner_name}` ({location})"
    )]
    InvalidDunderPrefixedParamName {
        location: loc::SourceLocation,
        owner_name: String,
        param_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}` ({location})")]
    InvalidDunderPrefixedTypeName {
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the {} type `{type_name}` with an extension of a \
        different kind at {location}",
        type_kind.name(),
    )]
    InvalidExtensionType {
        location: loc::SourceLocation,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SourceLocation,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Invalid parameter type: The `{type_name}.{field_name}` field \
        defines the `{parameter_name}` parameter with a type of \
        `{invalid_parameter_type}`, but `{interface_name}.{field_name}` \
        defines this parameter with type `{expected_parameter_type}`"
    )]
    InvalidInterfaceSpecifiedFieldParameterType {
        def_location: loc::SourceLocation,
        expected_parameter_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        invalid_parameter_type: TypeAnnotation,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "Invalid interface-specified field type: The \
        `{type_name}.{field_name}` field's type is defined as \
        `{invalid_field_type}` which is incompatible with \
        `{interface_name}.{field_name}` whose type is defined as \
        `{expected_field_type}`."
    )]
    InvalidInterfaceSpecifiedFieldType {
        expected_field_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        invalid_field_type: TypeAnnotation,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SourceLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter was declared with the \
        `{outputonly_type_name}` type, which is not an input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        def_location: loc::SourceLocation,
        outputonly_type_name: String,
        parameter_name: String,
    },

    #[error(
        "Additional parameters defined on interface-specified fields must not \
        be required: `{type_name}.{field_name}` declares the required \
        `{parameter_name}` parameter, which `{interface_name}.{field_name}` \
        does not declare"
    )]
    InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
        field_name: String,
        interface_name: String,
        location: loc::SourceLocation,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type must be an object type, but \
        `{type_name}` is a {} type",
        type_kind.name(),
    )]
    InvalidRootOperationType {
        operation: OperationKind,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that ({location})"
    )]
    InvalidSelfImplementingInterface {
        interface_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{member_type_name}`, but this type is a {} type and \
        union members can only be object types.",
        member_type_kind.name(),
    )]
    InvalidUnionMemberTypeKind {
        location: loc::SourceLocation,
        member_type_kind: GraphQLTypeKind,
        member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "The `@{directive_name}` directive requires the `{argument_name}` \
        argument, but it was not provided ({location})"
    )]
    MissingDirectiveArgument {
        argument_name: String,
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface, \
        but does not define a field named `{field_name}`"
    )]
    MissingInterfaceSpecifiedField {
        def_location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface \
        which defines a `{missing_parameter_name}` parameter on the \
        `{field_name}` field, but `{type_name}` has no \
        `{missing_parameter_name}` parameter defined on \
        `{type_name}.{field_name}`"
    )]
    MissingInterfaceSpecifiedFieldParameter {
        def_location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        missing_parameter_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements {}, therefore \
        `{type_name}` must also implement \
        `{missing_recursive_interface_name}`",
        inheritance_path.iter()
            .map(|iface_name| format!("the `{iface_name}` interface"))
            .collect::<Vec<_>>()
            .join(" which implements "),
    )]
    MissingRecursiveInterfaceImplementation {
        def_location: loc::SourceLocation,
        inheritance_path: Vec<String>,
        missing_recursive_interface_name: String,
        type_name: String,
    },

    #[error(
        "The {operation1} and {operation2} root operations are both defined \
        with the `{type_name}` type, but all root operations must be defined \
        with different types"
    )]
    NonUniqueRootOperationTypes {
        operation1: OperationKind,
        operation2: OperationKind,
        type_name: String,
    },

    #[error("The built-in `{type_name}` type may not be redefined ({location})")]
    RedefinitionOfBuiltinType {
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The `{scalar_name}` scalar has no binding to build it with \
        ({location})"
    )]
    UnboundCustomScalar {
        location: loc::SourceLocation,
        scalar_name: String,
    },

    #[error(
        "The `@{directive_name}` directive is applied at {location}, but no \
        directive with that name is defined"
    )]
    UndefinedDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "The {operation} root operation is declared with the \
        `{type_name}` type, but no type with that name is defined"
    )]
    UndefinedRootOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error("There is no type defined with the name `{undefined_type_name}` ({ref_location})")]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        undefined_type_name: String,
    },

    #[error(
        "The `@{directive_name}` directive does not define an argument named \
        `{argument_name}` ({location})"
    )]
    UnknownDirectiveArgument {
        argument_name: String,
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "The `@{directive_name}` directive is declared with the unknown \
        `{location_name}` location ({location})"
    )]
    UnknownDirectiveLocation {
        directive_name: String,
        location: loc::SourceLocation,
        location_name: String,
    },
}
