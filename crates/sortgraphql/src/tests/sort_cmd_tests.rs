use crate::tests::test_utils;
use tempfile::TempDir;

#[test]
fn rewrites_unsorted_file_and_keeps_a_backup() {
    let dir = TempDir::new().expect("tempdir");
    let schema = test_utils::write_file(dir.path(), "schema.graphqls", test_utils::UNSORTED);

    let summary =
        test_utils::sort_cmd(&[test_utils::path_arg(&schema).as_str()])
            .sort_files()
            .expect("sort should succeed");

    assert_eq!(summary.rewritten, vec![schema.to_owned()]);
    assert!(summary.already_sorted.is_empty());
    assert_eq!(test_utils::read_file(&schema), test_utils::SORTED);
    assert_eq!(
        test_utils::read_file(&dir.path().join("schema.graphqls.bak")),
        test_utils::UNSORTED,
    );
}

#[test]
fn sorted_file_is_left_alone() {
    let dir = TempDir::new().expect("tempdir");
    let schema = test_utils::write_file(dir.path(), "schema.graphqls", test_utils::SORTED);

    let summary =
        test_utils::sort_cmd(&[test_utils::path_arg(&schema).as_str()])
            .sort_files()
            .expect("sort should succeed");

    assert_eq!(summary.already_sorted, vec![schema.to_owned()]);
    assert!(summary.rewritten.is_empty());
    assert!(!dir.path().join("schema.graphqls.bak").exists());
}

#[test]
fn no_backup_skips_the_backup() {
    let dir = TempDir::new().expect("tempdir");
    let schema = test_utils::write_file(dir.path(), "schema.graphqls", test_utils::UNSORTED);

    test_utils::sort_cmd(&["--no-backup", test_utils::path_arg(&schema).as_str()])
        .sort_files()
        .expect("sort should succeed");

    assert_eq!(test_utils::read_file(&schema), test_utils::SORTED);
    assert!(!dir.path().join("schema.graphqls.bak").exists());
}

#[test]
fn custom_backup_extension() {
    let dir = TempDir::new().expect("tempdir");
    let schema = test_utils::write_file(dir.path(), "schema.graphqls", test_utils::UNSORTED);

    test_utils::sort_cmd(&[
        "--backup-file-extension",
        ".orig",
        test_utils::path_arg(&schema).as_str(),
    ]).sort_files().expect("sort should succeed");

    assert_eq!(
        test_utils::read_file(&dir.path().join("schema.graphqls.orig")),
        test_utils::UNSORTED,
    );
}

#[test]
fn blank_backup_extension_fails_before_writing() {
    let dir = TempDir::new().expect("tempdir");
    let schema = test_utils::write_file(dir.path(), "schema.graphqls", test_utils::UNSORTED);

    let err =
        test_utils::sort_cmd(&[
            "--backup-file-extension",
            " ",
            test_utils::path_arg(&schema).as_str(),
        ]).sort_files().expect_err("backup extension is blank");

    assert!(
        err.to_string().contains("Could not create backup file, extension name was empty"),
        "got: {err}",
    );
    assert_eq!(test_utils::read_file(&schema), test_utils::UNSORTED);
}

#[test]
fn files_of_a_directory_sort_as_one_merged_schema() {
    let dir = TempDir::new().expect("tempdir");
    let query = test_utils::write_file(
        dir.path(),
        "query.graphqls",
        "type Query {\n  user: User\n  ping: Boolean\n}\n",
    );
    let user = test_utils::write_file(
        dir.path(),
        "user.graphqls",
        "type User {\n  name: String\n  id: ID!\n}\n",
    );

    let summary =
        test_utils::sort_cmd(&["--no-backup", test_utils::path_arg(dir.path()).as_str()])
            .sort_files()
            .expect("sort should succeed");

    assert_eq!(summary.rewritten, vec![query.to_owned(), user.to_owned()]);
    assert_eq!(
        test_utils::read_file(&query),
        "type Query {\n  ping: Boolean\n  user: User\n}\n",
    );
    assert_eq!(
        test_utils::read_file(&user),
        "type User {\n  id: ID!\n  name: String\n}\n",
    );
}

#[test]
fn individual_schemas_must_stand_alone() {
    let dir = TempDir::new().expect("tempdir");
    let query = test_utils::write_file(
        dir.path(),
        "query.graphqls",
        "type Query {\n  user: User\n}\n",
    );
    test_utils::write_file(dir.path(), "user.graphqls", "type User {\n  id: ID!\n}\n");

    let result =
        test_utils::sort_cmd(&["--individual-schemas", test_utils::path_arg(dir.path()).as_str()])
            .sort_files();

    assert!(result.is_err());
    assert_eq!(test_utils::read_file(&query), "type Query {\n  user: User\n}\n");
}

#[test]
fn invalid_schema_changes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let schema = test_utils::write_file(dir.path(), "schema.graphqls", "type Query { a: }\n");

    let err =
        test_utils::sort_cmd(&[test_utils::path_arg(&schema).as_str()])
            .sort_files()
            .expect_err("schema does not parse");

    assert!(format!("{err:#}").contains("Error parsing schema"), "got: {err:#}");
    assert_eq!(test_utils::read_file(&schema), "type Query { a: }\n");
}

#[test]
fn unsupported_encoding_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let schema = test_utils::write_file(dir.path(), "schema.graphqls", test_utils::UNSORTED);

    let err =
        test_utils::sort_cmd(&["--encoding", "UTF-16", test_utils::path_arg(&schema).as_str()])
            .sort_files()
            .expect_err("encoding is not supported");

    assert!(err.to_string().contains("Could not handle encoding: UTF-16"), "got: {err}");
}

#[test]
fn options_map_onto_the_sort_config() {
    let config =
        test_utils::sort_cmd(&[
            "--skip-union-type-sorting",
            "--quoted-descriptions",
            "--skip-defined-directive-definitions",
            "schema.graphqls",
        ]).options.sort_config();

    assert!(config.skip_union_type_sorting());
    assert!(!config.skip_field_argument_sorting());
    assert!(!config.descriptions_as_hash_comments());
    assert!(!config.generate_defined_directive_definitions());
}
