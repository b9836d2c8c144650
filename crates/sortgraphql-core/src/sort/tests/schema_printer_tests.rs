use crate::SortConfig;
use crate::sort::tests::test_utils;

mod ordering {
    use super::*;

    #[test]
    fn fields_are_sorted_by_name() {
        let sorted = test_utils::sort("type Query {\n  b: Int\n  a: String\n}\n");

        assert_eq!(sorted, "type Query {\n  a: String\n  b: Int\n}\n");
    }

    #[test]
    fn types_are_grouped_by_kind_after_the_roots() {
        let sorted = test_utils::sort(concat!(
            "enum Color { RED BLUE }\n",
            "type Query { node: Node color: Color }\n",
            "interface Node { id: ID! }\n",
            "scalar Date\n",
            "input Filter { b: Int a: Int }\n",
            "union Result = Query\n",
        ));

        assert_eq!(sorted, concat!(
            "type Query {\n",
            "  color: Color\n",
            "  node: Node\n",
            "}\n",
            "\n",
            "scalar Date\n",
            "\n",
            "interface Node {\n",
            "  id: ID!\n",
            "}\n",
            "\n",
            "union Result = Query\n",
            "\n",
            "input Filter {\n",
            "  a: Int\n",
            "  b: Int\n",
            "}\n",
            "\n",
            "enum Color {\n",
            "  BLUE\n",
            "  RED\n",
            "}\n",
        ));
    }

    #[test]
    fn roots_print_in_operation_order() {
        let sorted = test_utils::sort(concat!(
            "type Subscription { s: Int }\n",
            "type Apple { a: Int }\n",
            "type Mutation { m: Int }\n",
            "type Query { q: Int }\n",
        ));

        assert_eq!(sorted, concat!(
            "type Query {\n  q: Int\n}\n\n",
            "type Mutation {\n  m: Int\n}\n\n",
            "type Subscription {\n  s: Int\n}\n\n",
            "type Apple {\n  a: Int\n}\n",
        ));
    }

    #[test]
    fn union_members_are_sorted() {
        let sorted = test_utils::sort(concat!(
            "type Query { pet: Pet }\n",
            "type Dog { a: Int }\n",
            "type Cat { a: Int }\n",
            "union Pet = Dog | Cat\n",
        ));

        assert_eq!(sorted, concat!(
            "type Query {\n  pet: Pet\n}\n\n",
            "union Pet = Cat | Dog\n\n",
            "type Cat {\n  a: Int\n}\n\n",
            "type Dog {\n  a: Int\n}\n",
        ));
    }

    #[test]
    fn union_members_keep_declaration_order_when_skipped() {
        let config = SortConfig::builder().skip_union_type_sorting(true).build();
        let sorted = test_utils::sort_with(config, concat!(
            "type Query { pet: Pet }\n",
            "type Dog { a: Int }\n",
            "type Cat { a: Int }\n",
            "union Pet = Dog | Cat\n",
        ));

        assert!(sorted.contains("union Pet = Dog | Cat\n"), "got:\n{sorted}");
    }

    #[test]
    fn field_arguments_are_sorted_unless_skipped() {
        let sdl = "type Query { a(z: Int, y: String): Int }";

        assert_eq!(
            test_utils::sort(sdl),
            "type Query {\n  a(y: String, z: Int): Int\n}\n",
        );

        let config = SortConfig::builder().skip_field_argument_sorting(true).build();
        assert_eq!(
            test_utils::sort_with(config, sdl),
            "type Query {\n  a(z: Int, y: String): Int\n}\n",
        );
    }

    #[test]
    fn implemented_interfaces_are_sorted() {
        let sorted = test_utils::sort(concat!(
            "type Query implements B & A { a: Int b: Int }\n",
            "interface A { a: Int }\n",
            "interface B { b: Int }\n",
        ));

        assert!(
            sorted.starts_with("type Query implements A & B {\n  a: Int\n  b: Int\n}\n"),
            "got:\n{sorted}",
        );
    }
}

mod documentation {
    use super::*;

    const DOCUMENTED: &str = concat!(
        "# About the query\n",
        "\"\"\"\n",
        "The query root\n",
        "\"\"\"\n",
        "type Query {\n",
        "  \"The answer\"\n",
        "  answer: Int\n",
        "}\n",
    );

    #[test]
    fn descriptions_print_as_hash_comments_by_default() {
        assert_eq!(test_utils::sort(DOCUMENTED), concat!(
            "# About the query\n",
            "#The query root\n",
            "type Query {\n",
            "  #The answer\n",
            "  answer: Int\n",
            "}\n",
        ));
    }

    #[test]
    fn descriptions_print_as_strings_when_requested() {
        let config = SortConfig::builder().descriptions_as_hash_comments(false).build();

        assert_eq!(test_utils::sort_with(config, DOCUMENTED), concat!(
            "# About the query\n",
            "\"The query root\"\n",
            "type Query {\n",
            "  \"The answer\"\n",
            "  answer: Int\n",
            "}\n",
        ));
    }

    #[test]
    fn multi_line_descriptions_are_dedented_block_strings() {
        let config = SortConfig::builder().descriptions_as_hash_comments(false).build();
        let sorted = test_utils::sort_with(config, concat!(
            "type Query {\n",
            "  \"\"\"\n",
            "  First line\n",
            "\n",
            "  Second line\n",
            "  \"\"\"\n",
            "  a: Int\n",
            "}\n",
        ));

        assert_eq!(sorted, concat!(
            "type Query {\n",
            "  \"\"\"\n",
            "  First line\n",
            "\n",
            "  Second line\n",
            "  \"\"\"\n",
            "  a: Int\n",
            "}\n",
        ));
    }

    #[test]
    fn blank_description_lines_are_dropped_as_hash_comments() {
        let input = concat!(
            "\"\"\"\n",
            "First\n",
            "\n",
            "Second\n",
            "\"\"\"\n",
            "type Query {\n",
            "  a: Int\n",
            "}\n",
        );
        let expected = "#First\n#Second\ntype Query {\n  a: Int\n}\n";

        assert_eq!(test_utils::sort(input), expected);
        assert_eq!(test_utils::sort(expected), expected);
    }

    #[test]
    fn documented_arguments_go_one_per_line() {
        let sorted = test_utils::sort(concat!(
            "type Query {\n",
            "  a(\n",
            "    \"second\" y: Int\n",
            "    x: Int\n",
            "  ): Int\n",
            "}\n",
        ));

        assert_eq!(sorted, concat!(
            "type Query {\n",
            "  a(\n",
            "    x: Int,\n",
            "    #second\n",
            "    y: Int\n",
            "  ): Int\n",
            "}\n",
        ));
    }

    #[test]
    fn comments_move_with_their_element() {
        let sorted = test_utils::sort(concat!(
            "type Query {\n",
            "  # about b\n",
            "  b: Int\n",
            "  # about a\n",
            "  a: Int\n",
            "}\n",
        ));

        assert_eq!(sorted, concat!(
            "type Query {\n",
            "  # about a\n",
            "  a: Int\n",
            "  # about b\n",
            "  b: Int\n",
            "}\n",
        ));
    }
    #[test]
    fn comments_survive_tab_indentation() {
        let sorted = test_utils::sort(concat!(
            "type Query {\n",
            "\t# about b\n",
            "\tb: Int\n",
            "\t\"About a\"\n",
            "\ta: Int\n",
            "}\n",
        ));

        assert_eq!(sorted, concat!(
            "type Query {\n",
            "  #About a\n",
            "  a: Int\n",
            "  # about b\n",
            "  b: Int\n",
            "}\n",
        ));
    }

    #[test]
    fn comments_survive_crlf_line_endings() {
        let sorted = test_utils::sort(concat!(
            "# about Query\r\n",
            "type Query {\r\n",
            "  # about b\r\n",
            "  b: Int\r\n",
            "  a: Int\r\n",
            "}\r\n",
        ));

        assert_eq!(sorted, concat!(
            "# about Query\n",
            "type Query {\n",
            "  a: Int\n",
            "  # about b\n",
            "  b: Int\n",
            "}\n",
        ));
    }
}

mod directives {
    use super::*;

    #[test]
    fn user_directive_definitions_print_before_types() {
        let sorted = test_utils::sort(concat!(
            "type Query { a: Int @tag(name: \"x\") }\n",
            "directive @tag(name: String!) repeatable on OBJECT | FIELD_DEFINITION\n",
        ));

        assert_eq!(sorted, concat!(
            "directive @tag(name: String!) repeatable on OBJECT | FIELD_DEFINITION\n",
            "\n",
            "type Query {\n",
            "  a: Int @tag(name: \"x\")\n",
            "}\n",
        ));
    }

    #[test]
    fn directive_definitions_can_be_left_out() {
        let config =
            SortConfig::builder()
                .generate_defined_directive_definitions(false)
                .build();
        let sorted = test_utils::sort_with(config, concat!(
            "directive @tag on FIELD_DEFINITION\n",
            "type Query { a: Int @tag }\n",
        ));

        assert_eq!(sorted, "type Query {\n  a: Int @tag\n}\n");
    }

    #[test]
    fn all_directive_definitions_include_builtins() {
        let config =
            SortConfig::builder()
                .generate_all_directive_definitions(true)
                .build();
        let sorted = test_utils::sort_with(config, "type Query { a: Int }");

        assert!(sorted.contains("directive @deprecated("), "got:\n{sorted}");
        assert!(sorted.contains("directive @include("), "got:\n{sorted}");
        assert!(sorted.contains("directive @skip("), "got:\n{sorted}");
        assert!(sorted.contains("directive @specifiedBy("), "got:\n{sorted}");
        let deprecated_pos = sorted.find("directive @deprecated").unwrap_or(usize::MAX);
        let skip_pos = sorted.find("directive @skip").unwrap_or(0);
        assert!(deprecated_pos < skip_pos);
    }

    #[test]
    fn default_argument_values_are_omitted() {
        let sorted = test_utils::sort(concat!(
            "type Query {\n",
            "  a: Int @deprecated(reason: \"No longer supported\")\n",
            "  b: Int @deprecated(reason: \"Use a\")\n",
            "}\n",
        ));

        assert_eq!(sorted, concat!(
            "type Query {\n",
            "  a: Int @deprecated\n",
            "  b: Int @deprecated(reason: \"Use a\")\n",
            "}\n",
        ));
    }

    #[test]
    fn enum_value_deprecation_is_kept() {
        let sorted = test_utils::sort(concat!(
            "type Query { c: Color }\n",
            "enum Color { RED @deprecated BLUE }\n",
        ));

        assert!(
            sorted.ends_with("enum Color {\n  BLUE\n  RED @deprecated\n}\n"),
            "got:\n{sorted}",
        );
    }

    #[test]
    fn object_directives_go_on_their_own_lines() {
        let sorted = test_utils::sort(concat!(
            "directive @b on OBJECT\n",
            "directive @a on OBJECT\n",
            "type Query @b @a { x: Int }\n",
        ));

        assert_eq!(sorted, concat!(
            "directive @a on OBJECT\n",
            "directive @b on OBJECT\n",
            "\n",
            "type Query\n",
            "@a\n",
            "@b\n",
            "{\n",
            "  x: Int\n",
            "}\n",
        ));
    }

    #[test]
    fn inline_directives_on_scalars_and_inputs() {
        let sorted = test_utils::sort(concat!(
            "type Query { a(f: Filter): Date }\n",
            "scalar Date @specifiedBy(url: \"https://example.com/date\")\n",
            "input Filter { b: Int = 1 @deprecated a: String }\n",
        ));

        assert_eq!(sorted, concat!(
            "type Query {\n",
            "  a(f: Filter): Date\n",
            "}\n",
            "\n",
            "scalar Date @specifiedBy(url: \"https://example.com/date\")\n",
            "\n",
            "input Filter {\n",
            "  a: String\n",
            "  b: Int = 1 @deprecated\n",
            "}\n",
        ));
    }
}

mod schema_definition {
    use super::*;

    #[test]
    fn synthesized_query_root_is_not_printed() {
        let sorted = test_utils::sort("type Mutation { a: Int }");

        assert_eq!(sorted, "type Mutation {\n  a: Int\n}\n");
    }

    #[test]
    fn default_named_roots_need_no_schema_block() {
        let sorted = test_utils::sort(concat!(
            "schema { query: Query }\n",
            "type Query { a: Int }\n",
        ));

        assert_eq!(sorted, "type Query {\n  a: Int\n}\n");
    }

    #[test]
    fn schema_block_can_be_forced() {
        let config = SortConfig::builder().generate_schema_definition(true).build();
        let sorted = test_utils::sort_with(config, "type Mutation { a: Int }");

        assert_eq!(sorted, concat!(
            "schema {\n",
            "  mutation: Mutation\n",
            "}\n",
            "\n",
            "type Mutation {\n",
            "  a: Int\n",
            "}\n",
        ));
    }

    #[test]
    fn renamed_roots_print_schema_block() {
        let sorted = test_utils::sort(concat!(
            "type Mutations { b: Int }\n",
            "schema { mutation: Mutations query: Queries }\n",
            "type Queries { a: Int }\n",
        ));

        assert_eq!(sorted, concat!(
            "schema {\n",
            "  query: Queries\n",
            "  mutation: Mutations\n",
            "}\n",
            "\n",
            "type Queries {\n",
            "  a: Int\n",
            "}\n",
            "\n",
            "type Mutations {\n",
            "  b: Int\n",
            "}\n",
        ));
    }

    #[test]
    fn schema_directives_force_schema_block() {
        let sorted = test_utils::sort(concat!(
            "directive @link(url: String) repeatable on SCHEMA\n",
            "schema @link(url: \"https://example.com\") { query: Query }\n",
            "type Query { a: Int }\n",
        ));

        assert_eq!(sorted, concat!(
            "schema\n",
            "@link(url: \"https://example.com\")\n",
            "{\n",
            "  query: Query\n",
            "}\n",
            "\n",
            "directive @link(url: String) repeatable on SCHEMA\n",
            "\n",
            "type Query {\n",
            "  a: Int\n",
            "}\n",
        ));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extensions_fold_into_their_type() {
        let sorted = test_utils::sort(concat!(
            "extend type Query { b: Int }\n",
            "type Query { c: Int }\n",
            "extend type Query { a: Int }\n",
        ));

        assert_eq!(sorted, "type Query {\n  a: Int\n  b: Int\n  c: Int\n}\n");
    }

    #[test]
    fn empty_types_print_without_braces() {
        let sorted = test_utils::sort(concat!(
            "type Query { a: Int }\n",
            "type Empty\n",
        ));

        assert_eq!(sorted, "type Query {\n  a: Int\n}\n\ntype Empty\n");
    }
}
