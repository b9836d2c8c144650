use crate::ast;
use crate::SourceText;

fn pos(line: usize, column: usize) -> ast::Pos {
    ast::Pos { line, column }
}

#[test]
fn collects_comment_lines_above_element() {
    let text = SourceText::new("# Leading\n# second\ntype Foo {\n  bar: Int\n}\n");

    assert_eq!(
        text.leading_comments(&pos(3, 1), false),
        vec![" Leading".to_string(), " second".to_string()],
    );
}

#[test]
fn stops_at_previous_token() {
    let text = SourceText::new("# about A\ntype A {\n  a: Int\n}\n# about B\ntype B");

    assert_eq!(
        text.leading_comments(&pos(6, 1), false),
        vec![" about B".to_string()],
    );
    assert!(text.leading_comments(&pos(3, 3), false).is_empty());
}

#[test]
fn blank_lines_between_comments_are_skipped() {
    let text = SourceText::new("# one\n\n# two\n\ntype A");

    assert_eq!(
        text.leading_comments(&pos(5, 1), false),
        vec![" one".to_string(), " two".to_string()],
    );
}

#[test]
fn trailing_comment_of_previous_line_belongs_to_next_element() {
    let text = SourceText::new("type A { a: Int } # trailing\ntype B { b: Int }");

    assert_eq!(
        text.leading_comments(&pos(2, 1), false),
        vec![" trailing".to_string()],
    );
}

#[test]
fn hash_inside_string_is_not_a_trailing_comment() {
    let text = SourceText::new("scalar A @x(y: \"#no\")\nscalar B");

    assert!(text.leading_comments(&pos(2, 1), false).is_empty());
}

#[test]
fn element_preceded_on_same_line_has_no_comments() {
    let text = SourceText::new("# ignored\ntype A { a: Int }");

    assert!(text.leading_comments(&pos(2, 10), false).is_empty());
}

#[test]
fn comments_are_found_in_front_of_single_line_description() {
    let text = SourceText::new("# comment\n\"Describes Foo\"\ntype Foo");

    assert_eq!(
        text.leading_comments(&pos(3, 1), true),
        vec![" comment".to_string()],
    );
}

#[test]
fn comments_are_found_in_front_of_block_description() {
    let text = SourceText::new("# comment\n\"\"\"\nMulti\nline\n\"\"\"\ntype Foo");

    assert_eq!(
        text.leading_comments(&pos(6, 1), true),
        vec![" comment".to_string()],
    );
}

#[test]
fn position_on_description_is_used_directly() {
    let text = SourceText::new("type A {\n  # comment\n  \"desc\" a: Int\n}");

    assert_eq!(
        text.leading_comments(&pos(3, 3), true),
        vec![" comment".to_string()],
    );
}

#[test]
fn blank_comment_lines_are_dropped() {
    let text = SourceText::new("#\n# real\n#   \ntype A");

    assert_eq!(
        text.leading_comments(&pos(4, 1), false),
        vec![" real".to_string()],
    );
}

#[test]
fn tab_indentation_advances_column_by_eight() {
    let text = SourceText::new("type Query {\n\t# c\n  \ta: Int\n}\n");

    assert_eq!(
        text.leading_comments(&pos(3, 11), false),
        vec![" c".to_string()],
    );
}

#[test]
fn crlf_after_comment_counts_as_two_lines() {
    let text = SourceText::new("# c\r\ntype Query {\r\n  # f\r\n  b: Int\r\n}\r\n");

    assert_eq!(
        text.leading_comments(&pos(3, 1), false),
        vec![" c".to_string()],
    );
    assert_eq!(
        text.leading_comments(&pos(6, 3), false),
        vec![" f".to_string()],
    );
}

#[test]
fn crlf_block_description_is_found_before_comments() {
    let text = SourceText::new("# c\r\n\"\"\"\r\nMulti\r\n\"\"\"\r\ntype Foo");

    assert_eq!(
        text.leading_comments(&pos(6, 1), true),
        vec![" c".to_string()],
    );
}

#[test]
fn out_of_range_position_has_no_comments() {
    let text = SourceText::new("type A");

    assert!(text.leading_comments(&pos(9, 1), false).is_empty());
}
