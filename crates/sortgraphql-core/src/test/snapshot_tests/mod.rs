//! Snapshot tests that sort the schema documents under `fixtures/` and
//! compare the output against the expected canonical documents stored next
//! to them.
//!
//! Each directory in `fixtures/` is one test case:
//!
//! ```text
//! fixtures/<case>/input/*.graphqls     documents to sort, merged in name order
//! fixtures/<case>/expected/*.graphqls  canonical output, one per input file
//! ```

mod snapshot_test_case;
mod test_runner;
mod utils;

#[cfg(test)]
mod tests {
    use crate::test::snapshot_tests::test_runner;
    use crate::test::snapshot_tests::utils;

    #[test]
    fn verify_sort_snapshot_tests() {
        let fixtures_dir = utils::get_fixtures_dir();

        let results = test_runner::run_sort_tests(fixtures_dir);

        let all_passed = results.all_passed();
        if !all_passed {
            eprintln!("{}", results.failure_report());
            eprintln!("\n{}", results.summary());
        } else {
            println!("{}", results.summary());
        }

        assert!(!results.results.is_empty(), "No snapshot fixtures were found");
        assert!(
            all_passed,
            "Sort snapshot tests failed:\n{}",
            results.failure_report()
        );
    }
}
