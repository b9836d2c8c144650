use crate::DirectiveAnnotation;
use crate::Documentation;
use crate::loc;
use crate::Schema;
use crate::schema::OperationKind;
use crate::sort::ChildKind;
use crate::sort::DirectiveDefinitionFilter;
use crate::sort::ParentKind;
use crate::sort::PrintOptions;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::ObjectOrInterfaceType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::value::escape_string;
use indexmap::IndexMap;

/// Which elements of a [`Schema`] get printed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PrintScope {
    /// Everything, as one combined document.
    Whole,

    /// Only what the given source contributed (plus built-in elements), so
    /// that a schema merged from several documents can be printed back one
    /// document at a time.
    Source(loc::SourceId),
}
impl PrintScope {
    pub fn includes(&self, location: &loc::SourceLocation) -> bool {
        match location {
            loc::SourceLocation::GraphQLBuiltIn => true,
            loc::SourceLocation::Synthetic => false,
            loc::SourceLocation::Schema(file_position) => match self {
                Self::Whole => true,
                Self::Source(source_id) => &file_position.source == source_id,
            },
        }
    }
}

/// How a type shows up in a [`PrintScope`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Rendering {
    Definition,
    /// Only `extend` blocks of the type lie in scope.
    Extension,
}

/// Prints a [`Schema`] as canonical SDL text.
///
/// Output starts with the `schema` block (when needed), then the directive
/// definitions, then the root operation types followed by every other type
/// grouped by kind: scalars, interfaces, unions, input objects, objects and
/// finally enums.
pub struct SchemaPrinter<'a> {
    options: &'a PrintOptions,
}
impl<'a> SchemaPrinter<'a> {
    pub fn new(options: &'a PrintOptions) -> Self {
        Self {
            options,
        }
    }

    pub fn print(&self, schema: &Schema, scope: &PrintScope) -> String {
        let mut out = String::new();
        self.print_schema_definition(&mut out, schema, scope);
        self.print_directive_definitions(&mut out, schema, scope);

        let mut remaining =
            schema.types()
                .values()
                .filter(|type_| !type_.is_builtin() && !type_.name().starts_with("__"))
                .collect::<Vec<_>>();
        self.options.comparators.sort(
            ParentKind::Schema,
            ChildKind::Type,
            &mut remaining,
            |type_| type_.name(),
        );

        for operation in [OperationKind::Query, OperationKind::Mutation, OperationKind::Subscription] {
            let Some(root_type_name) = schema.root_type_name(operation) else {
                continue;
            };
            let root_types = take_matching(
                &mut remaining,
                |type_| type_.name() == root_type_name,
            );
            for type_ in root_types {
                self.print_type(&mut out, schema, type_, scope);
            }
        }

        let categories: [fn(&GraphQLType) -> bool; 6] = [
            |type_| matches!(type_, GraphQLType::Scalar(_)),
            |type_| matches!(type_, GraphQLType::Interface(_)),
            |type_| matches!(type_, GraphQLType::Union(_)),
            |type_| matches!(type_, GraphQLType::InputObject(_)),
            |type_| matches!(type_, GraphQLType::Object(_)),
            |type_| matches!(type_, GraphQLType::Enum(_)),
        ];
        for matches_category in categories {
            for type_ in take_matching(&mut remaining, matches_category) {
                self.print_type(&mut out, schema, type_, scope);
            }
        }

        if out.ends_with("\n\n") {
            out.pop();
        }
        out
    }

    fn arguments_string(
        &self,
        schema: &Schema,
        parent: ParentKind,
        params: &IndexMap<String, Parameter>,
        scope: &PrintScope,
        indent: &str,
    ) -> String {
        let mut params =
            params.values()
                .filter(|param| scope.includes(param.def_location()))
                .collect::<Vec<_>>();
        if params.is_empty() {
            return String::new();
        }
        self.options.comparators.sort(
            parent,
            ChildKind::Argument,
            &mut params,
            |param| param.name(),
        );

        // Documented arguments go one per line.
        let multiline = params.iter().any(|param| !param.documentation().is_empty());
        let param_indent =
            if multiline {
                format!("{indent}  ")
            } else {
                String::new()
            };

        let mut out = String::from("(");
        for (idx, param) in params.iter().enumerate() {
            if idx > 0 {
                out.push_str(if multiline { "," } else { ", " });
            }
            if multiline {
                out.push('\n');
                self.print_documentation(&mut out, param.documentation(), &param_indent);
            }
            out.push_str(&format!(
                "{param_indent}{}: {}",
                param.name(),
                param.type_annotation(),
            ));
            if let Some(default_value) = param.default_value() {
                out.push_str(&format!(" = {default_value}"));
            }
            for directive in self.directive_strings(
                schema,
                ParentKind::Parameter,
                param.directives(),
                scope,
                false,
            ) {
                out.push(' ');
                out.push_str(&directive);
            }
        }
        if multiline {
            out.push('\n');
            out.push_str(indent);
        }
        out.push(')');
        out
    }

    fn directive_string(
        &self,
        schema: &Schema,
        annotation: &DirectiveAnnotation,
    ) -> String {
        let directive_def = schema.get_directive(annotation.directive_name());

        // Arguments that restate the definition's default are left out.
        let mut args =
            annotation.arguments()
                .iter()
                .filter(|(arg_name, value)| {
                    let default_value =
                        directive_def
                            .and_then(|def| def.arguments().get(arg_name.as_str()))
                            .and_then(|param| param.default_value());
                    default_value != Some(*value)
                })
                .collect::<Vec<_>>();
        self.options.comparators.sort(
            ParentKind::Directive,
            ChildKind::Argument,
            &mut args,
            |(arg_name, _)| arg_name.as_str(),
        );

        if args.is_empty() {
            return format!("@{}", annotation.directive_name());
        }
        format!(
            "@{}({})",
            annotation.directive_name(),
            args.iter()
                .map(|(arg_name, value)| format!("{arg_name}: {value}"))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// Renders the in-scope directives of an element in comparator order.
    /// With `ensure_deprecated` set, a bare `@deprecated` is added unless
    /// one is already applied.
    fn directive_strings(
        &self,
        schema: &Schema,
        parent: ParentKind,
        annotations: &[DirectiveAnnotation],
        scope: &PrintScope,
        ensure_deprecated: bool,
    ) -> Vec<String> {
        let mut rendered =
            annotations.iter()
                .filter(|annotation| scope.includes(annotation.location()))
                .map(|annotation| (
                    annotation.directive_name().to_string(),
                    self.directive_string(schema, annotation),
                ))
                .collect::<Vec<_>>();

        let has_deprecated = rendered.iter().any(|(name, _)| name == "deprecated");
        if ensure_deprecated && !has_deprecated {
            rendered.push(("deprecated".to_string(), "@deprecated".to_string()));
        }

        self.options.comparators.sort(
            parent,
            ChildKind::DirectiveAnnotation,
            &mut rendered,
            |(name, _)| name.as_str(),
        );
        rendered.into_iter().map(|(_, directive)| directive).collect()
    }

    fn print_directive_definitions(
        &self,
        out: &mut String,
        schema: &Schema,
        scope: &PrintScope,
    ) {
        let filter = self.options.directive_definitions;
        let mut directives =
            schema.directive_defs()
                .values()
                .filter(|directive| match filter {
                    // Built-in names print into every document so that the
                    // documents still merge once they all declare them.
                    DirectiveDefinitionFilter::All =>
                        Directive::is_builtin_name(directive.name())
                            || scope.includes(directive.def_location()),
                    DirectiveDefinitionFilter::None => false,
                    DirectiveDefinitionFilter::UserDefined =>
                        !directive.is_builtin()
                            && scope.includes(directive.def_location()),
                })
                .collect::<Vec<_>>();
        if directives.is_empty() {
            return;
        }
        self.options.comparators.sort(
            ParentKind::Schema,
            ChildKind::DirectiveDefinition,
            &mut directives,
            |directive| directive.name(),
        );

        for directive in directives {
            self.print_documentation(out, directive.documentation(), "");
            out.push_str(&format!(
                "directive @{}{}",
                directive.name(),
                self.arguments_string(
                    schema,
                    ParentKind::Directive,
                    directive.arguments(),
                    scope,
                    "",
                ),
            ));
            if directive.repeatable() {
                out.push_str(" repeatable");
            }
            out.push_str(" on ");
            out.push_str(
                &directive.locations()
                    .iter()
                    .map(|location| location.as_str())
                    .collect::<Vec<_>>()
                    .join(" | "),
            );
            out.push('\n');
        }
        out.push('\n');
    }

    /// Comments always print as `#` lines; the description follows, either
    /// as `#` lines or as a string literal.
    fn print_documentation(
        &self,
        out: &mut String,
        documentation: &Documentation,
        prefix: &str,
    ) {
        for comment in documentation.comments() {
            out.push_str(&format!("{prefix}#{comment}\n"));
        }

        let Some(description) = documentation.description() else {
            return;
        };
        let lines = description_lines(description);
        if self.options.descriptions_as_hash_comments {
            for line in lines.iter().filter(|line| !line.is_empty()) {
                out.push_str(&format!("{prefix}#{line}\n"));
            }
        } else if let [line] = lines.as_slice() {
            out.push_str(&format!("{prefix}\"{}\"\n", escape_string(line)));
        } else {
            out.push_str(&format!("{prefix}\"\"\"\n"));
            for line in lines {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(&format!(
                        "{prefix}{}\n",
                        line.replace("\"\"\"", "\\\"\"\""),
                    ));
                }
            }
            out.push_str(&format!("{prefix}\"\"\"\n"));
        }
    }

    fn print_enum(
        &self,
        out: &mut String,
        schema: &Schema,
        enum_type: &EnumType,
        scope: &PrintScope,
    ) {
        let Some(rendering) = rendering_in(scope, enum_type.def_location(), enum_type.extensions()) else {
            return;
        };
        self.print_type_header(out, rendering, enum_type.documentation(), "enum", enum_type.name());
        self.print_inline_directives(out, schema, ParentKind::Enum, enum_type.directives(), scope);

        let mut values =
            enum_type.values()
                .values()
                .filter(|value| scope.includes(value.def_location()))
                .collect::<Vec<_>>();
        self.options.comparators.sort(
            ParentKind::Enum,
            ChildKind::EnumValue,
            &mut values,
            |value| value.name(),
        );
        if !values.is_empty() {
            out.push_str(" {\n");
            for value in values {
                self.print_documentation(out, value.documentation(), "  ");
                out.push_str("  ");
                out.push_str(value.name());
                for directive in self.directive_strings(
                    schema,
                    ParentKind::EnumValue,
                    value.directives(),
                    scope,
                    value.deprecation_state().is_deprecated(),
                ) {
                    out.push(' ');
                    out.push_str(&directive);
                }
                out.push('\n');
            }
            out.push('}');
        }
        out.push_str("\n\n");
    }

    fn print_field(
        &self,
        out: &mut String,
        schema: &Schema,
        field: &Field,
        scope: &PrintScope,
    ) {
        self.print_documentation(out, field.documentation(), "  ");
        out.push_str(&format!(
            "  {}{}: {}",
            field.name(),
            self.arguments_string(
                schema,
                ParentKind::FieldDefinition,
                field.parameters(),
                scope,
                "  ",
            ),
            field.type_annotation(),
        ));
        for directive in self.directive_strings(
            schema,
            ParentKind::FieldDefinition,
            field.directives(),
            scope,
            field.deprecation_state().is_deprecated(),
        ) {
            out.push(' ');
            out.push_str(&directive);
        }
        out.push('\n');
    }

    fn print_inline_directives(
        &self,
        out: &mut String,
        schema: &Schema,
        parent: ParentKind,
        annotations: &[DirectiveAnnotation],
        scope: &PrintScope,
    ) {
        for directive in self.directive_strings(schema, parent, annotations, scope, false) {
            out.push(' ');
            out.push_str(&directive);
        }
    }

    fn print_input_object(
        &self,
        out: &mut String,
        schema: &Schema,
        inputobj_type: &InputObjectType,
        scope: &PrintScope,
    ) {
        let Some(rendering) = rendering_in(scope, inputobj_type.def_location(), inputobj_type.extensions()) else {
            return;
        };
        self.print_type_header(out, rendering, inputobj_type.documentation(), "input", inputobj_type.name());
        self.print_inline_directives(
            out,
            schema,
            ParentKind::InputObject,
            inputobj_type.directives(),
            scope,
        );

        let mut fields =
            inputobj_type.fields()
                .values()
                .filter(|field| scope.includes(field.def_location()))
                .collect::<Vec<_>>();
        self.options.comparators.sort(
            ParentKind::InputObject,
            ChildKind::InputField,
            &mut fields,
            |field| field.name(),
        );
        if !fields.is_empty() {
            out.push_str(" {\n");
            for field in fields {
                self.print_documentation(out, field.documentation(), "  ");
                out.push_str(&format!("  {}: {}", field.name(), field.type_annotation()));
                if let Some(default_value) = field.default_value() {
                    out.push_str(&format!(" = {default_value}"));
                }
                self.print_inline_directives(
                    out,
                    schema,
                    ParentKind::InputField,
                    field.directives(),
                    scope,
                );
                out.push('\n');
            }
            out.push('}');
        }
        out.push_str("\n\n");
    }

    /// Object and interface directives go one per line between the header
    /// and the opening brace.
    fn print_object_or_interface(
        &self,
        out: &mut String,
        schema: &Schema,
        keyword: &str,
        parent: ParentKind,
        type_: &impl ObjectOrInterfaceType,
        scope: &PrintScope,
    ) {
        let Some(rendering) = rendering_in(scope, type_.def_location(), type_.extensions()) else {
            return;
        };
        self.print_type_header(out, rendering, type_.documentation(), keyword, type_.name());

        let mut interfaces =
            type_.interfaces()
                .iter()
                .filter(|(_, location)| scope.includes(location))
                .map(|(iface_name, _)| iface_name)
                .collect::<Vec<_>>();
        self.options.comparators.sort(
            parent,
            ChildKind::ImplementedInterface,
            &mut interfaces,
            |iface_name| iface_name.as_str(),
        );
        if !interfaces.is_empty() {
            out.push_str(" implements ");
            out.push_str(
                &interfaces.iter()
                    .map(|iface_name| iface_name.as_str())
                    .collect::<Vec<_>>()
                    .join(" & "),
            );
        }

        let directives =
            self.directive_strings(schema, parent, type_.directives(), scope, false);
        for directive in &directives {
            out.push('\n');
            out.push_str(directive);
        }

        let mut fields =
            type_.fields()
                .values()
                .filter(|field| scope.includes(field.def_location()))
                .collect::<Vec<_>>();
        self.options.comparators.sort(
            parent,
            ChildKind::Field,
            &mut fields,
            |field| field.name(),
        );
        if !fields.is_empty() {
            out.push_str(if directives.is_empty() { " {\n" } else { "\n{\n" });
            for field in fields {
                self.print_field(out, schema, field, scope);
            }
            out.push('}');
        }
        out.push_str("\n\n");
    }

    fn print_scalar(
        &self,
        out: &mut String,
        schema: &Schema,
        scalar_type: &ScalarType,
        scope: &PrintScope,
    ) {
        let Some(rendering) = rendering_in(scope, scalar_type.def_location(), scalar_type.extensions()) else {
            return;
        };
        self.print_type_header(out, rendering, scalar_type.documentation(), "scalar", scalar_type.name());
        self.print_inline_directives(
            out,
            schema,
            ParentKind::Scalar,
            scalar_type.directives(),
            scope,
        );
        out.push_str("\n\n");
    }

    /// The `schema` block prints when forced, when a root type has a
    /// non-default name, or when the declared block carries directives. It
    /// belongs to the source that declared it (or else the one defining the
    /// first root type).
    fn print_schema_definition(
        &self,
        out: &mut String,
        schema: &Schema,
        scope: &PrintScope,
    ) {
        let roots =
            [OperationKind::Query, OperationKind::Mutation, OperationKind::Subscription]
                .into_iter()
                .filter_map(|operation| {
                    let type_name = schema.root_type_name(operation)?;
                    let root_type = schema.get_type(type_name)?;
                    if root_type.def_location().is_synthetic() {
                        return None;
                    }
                    Some((operation, root_type))
                })
                .collect::<Vec<_>>();
        if roots.is_empty() {
            return;
        }

        let schema_directives =
            schema.schema_def()
                .map(|schema_def| schema_def.directives())
                .unwrap_or_default();
        let uses_non_default_names =
            roots.iter().any(|(operation, root_type)| {
                root_type.name() != operation.default_type_name()
            });
        let needs_schema_printed =
            self.options.include_schema_definition
                || uses_non_default_names
                || !schema_directives.is_empty();
        if !needs_schema_printed {
            return;
        }

        let owner_location =
            schema.schema_def()
                .map(|schema_def| schema_def.def_location())
                .unwrap_or_else(|| roots[0].1.def_location());
        if !scope.includes(owner_location) {
            return;
        }

        out.push_str("schema");
        let directives = self.directive_strings(
            schema,
            ParentKind::Schema,
            schema_directives,
            scope,
            false,
        );
        if directives.is_empty() {
            out.push(' ');
        } else {
            out.push('\n');
            for directive in directives {
                out.push_str(&directive);
                out.push('\n');
            }
        }
        out.push_str("{\n");
        for (operation, root_type) in roots {
            out.push_str(&format!("  {}: {}\n", operation.keyword(), root_type.name()));
        }
        out.push_str("}\n\n");
    }

    fn print_type(
        &self,
        out: &mut String,
        schema: &Schema,
        type_: &GraphQLType,
        scope: &PrintScope,
    ) {
        match type_ {
            GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::String
                => (),

            GraphQLType::Enum(enum_type) =>
                self.print_enum(out, schema, enum_type, scope),
            GraphQLType::InputObject(inputobj_type) =>
                self.print_input_object(out, schema, inputobj_type, scope),
            GraphQLType::Interface(iface_type) =>
                self.print_object_or_interface(
                    out,
                    schema,
                    "interface",
                    ParentKind::Interface,
                    iface_type,
                    scope,
                ),
            GraphQLType::Object(obj_type) =>
                self.print_object_or_interface(
                    out,
                    schema,
                    "type",
                    ParentKind::Object,
                    obj_type,
                    scope,
                ),
            GraphQLType::Scalar(scalar_type) =>
                self.print_scalar(out, schema, scalar_type, scope),
            GraphQLType::Union(union_type) =>
                self.print_union(out, schema, union_type, scope),
        }
    }

    fn print_type_header(
        &self,
        out: &mut String,
        rendering: Rendering,
        documentation: &Documentation,
        keyword: &str,
        name: &str,
    ) {
        match rendering {
            Rendering::Definition => {
                self.print_documentation(out, documentation, "");
                out.push_str(&format!("{keyword} {name}"));
            },
            Rendering::Extension =>
                out.push_str(&format!("extend {keyword} {name}")),
        }
    }

    fn print_union(
        &self,
        out: &mut String,
        schema: &Schema,
        union_type: &UnionType,
        scope: &PrintScope,
    ) {
        let Some(rendering) = rendering_in(scope, union_type.def_location(), union_type.extensions()) else {
            return;
        };
        self.print_type_header(out, rendering, union_type.documentation(), "union", union_type.name());
        self.print_inline_directives(out, schema, ParentKind::Union, union_type.directives(), scope);

        let mut members =
            union_type.members()
                .iter()
                .filter(|(_, location)| scope.includes(location))
                .map(|(member_name, _)| member_name)
                .collect::<Vec<_>>();
        self.options.comparators.sort(
            ParentKind::Union,
            ChildKind::UnionMember,
            &mut members,
            |member_name| member_name.as_str(),
        );
        if !members.is_empty() {
            out.push_str(" = ");
            out.push_str(
                &members.iter()
                    .map(|member_name| member_name.as_str())
                    .collect::<Vec<_>>()
                    .join(" | "),
            );
        }
        out.push_str("\n\n");
    }
}

/// Splits a description into printable lines: surrounding blank lines and
/// the indentation common to all lines are removed, and blank lines are
/// emptied.
fn description_lines(description: &str) -> Vec<&str> {
    let lines =
        description.split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .collect::<Vec<_>>();
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return vec![];
    };
    let lines = &lines[first..=last];

    let common_indent =
        lines.iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
            .min()
            .unwrap_or(0);
    lines.iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                &line[common_indent..]
            }
        })
        .collect()
}

fn rendering_in(
    scope: &PrintScope,
    def_location: &loc::SourceLocation,
    extensions: &[loc::SourceLocation],
) -> Option<Rendering> {
    if scope.includes(def_location) {
        Some(Rendering::Definition)
    } else if extensions.iter().any(|location| scope.includes(location)) {
        Some(Rendering::Extension)
    } else {
        None
    }
}

/// Removes the types `matches` accepts from `types` (keeping the order of
/// both halves) and returns them.
fn take_matching<'s>(
    types: &mut Vec<&'s GraphQLType>,
    matches: impl Fn(&GraphQLType) -> bool,
) -> Vec<&'s GraphQLType> {
    let (taken, remaining): (Vec<_>, Vec<_>) =
        std::mem::take(types)
            .into_iter()
            .partition(|type_| matches(type_));
    *types = remaining;
    taken
}
