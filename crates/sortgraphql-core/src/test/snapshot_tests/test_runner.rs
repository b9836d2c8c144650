use crate::SchemaSorter;
use crate::SchemaSource;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use super::snapshot_test_case::SnapshotTestCase;

/// Result of a single snapshot test
#[derive(Debug)]
pub struct SnapshotTestResult {
    pub test_name: String,
    pub passed: bool,
    pub error_message: Option<String>,
    pub file_path: PathBuf,
    pub file_snippet: Option<String>,
}

/// Collection of snapshot test results
#[derive(Debug)]
pub struct SnapshotTestResults {
    pub results: Vec<SnapshotTestResult>,
}

impl SnapshotTestResults {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn add(&mut self, result: SnapshotTestResult) {
        self.results.push(result);
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| format_detailed_failure(r))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} snapshot tests failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let all_passed = self.all_passed();
        let emoji = if all_passed { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");
        let header = format!("{emoji} SORT SNAPSHOT SUMMARY");
        let total = self.results.len();

        if all_passed {
            format!("{banner}\n{header}\n{banner}\nTotal tests: {total}\nPassed: {total}\nFailed: 0\n\nAll snapshot tests passed!\n{banner}")
        } else {
            let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
            let failures_len = failures.len();
            let passed = total - failures_len;
            let failed_list = failures
                .iter()
                .map(|r| format!("  - {}", r.test_name))
                .collect::<Vec<_>>()
                .join("\n");

            format!("{banner}\n{header}\n{banner}\nTotal tests: {total}\nPassed: {passed}\nFailed: {failures_len}\n\nFailed snapshot tests:\n{failed_list}\n\nSee details above for each failure.\n{banner}")
        }
    }
}

impl std::default::Default for SnapshotTestResults {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a detailed failure message with file path, snippet, and error location
fn format_detailed_failure(result: &SnapshotTestResult) -> String {
    let mut output = String::new();
    let test_name = &result.test_name;
    let file_path = result.file_path.display();

    output.push_str(&format!("❌ {test_name}\n"));
    output.push_str(&format!("   File: {file_path}\n"));

    if let Some(msg) = &result.error_message {
        output.push_str(&format!("   {msg}\n"));
    }

    if let Some(snippet) = &result.file_snippet {
        output.push('\n');
        output.push_str(snippet);
    }

    output
}

/// Run every sort snapshot test, one case per rayon task
pub fn run_sort_tests(fixtures_dir: &Path) -> SnapshotTestResults {
    let test_cases = SnapshotTestCase::discover_all(fixtures_dir);

    let case_results: Vec<Vec<SnapshotTestResult>> = test_cases
        .par_iter()
        .map(run_case)
        .collect();

    let mut results = SnapshotTestResults::new();
    for result in case_results.into_iter().flatten() {
        results.add(result);
    }
    results
}

/// Sorts every input of a case and compares each output to its expected
/// file. The expected file must also sort into itself.
fn run_case(test_case: &SnapshotTestCase) -> Vec<SnapshotTestResult> {
    let name = &test_case.name;

    let mut sources = Vec::new();
    for path in &test_case.input_paths {
        match fs::read_to_string(path) {
            Ok(content) => sources.push(SchemaSource::new(source_id(path), content)),
            Err(e) => return vec![failure(format!("{name}/read"), path, format!("{e}"), None)],
        }
    }

    let sorter = SchemaSorter::default();
    let sorted = match sorter.sort(&sources) {
        Ok(sorted) => sorted,
        Err(e) => {
            let path = &test_case.input_paths[0];
            return vec![failure(
                format!("{name}/sort"),
                path,
                format!("Expected: Sortable schema\nGot: {e}"),
                extract_snippet(path, 5).ok(),
            )];
        },
    };

    test_case.input_paths
        .iter()
        .zip(sorted)
        .map(|(input_path, sorted_schema)| {
            let file_name = file_name(input_path);
            let test_name = format!("{name}/{file_name}");
            let Some(expected_path) = test_case.expected_path_for(input_path) else {
                return failure(test_name, input_path, "No expected file name".to_string(), None);
            };
            let expected = match fs::read_to_string(&expected_path) {
                Ok(expected) => expected,
                Err(e) => return failure(
                    test_name,
                    &expected_path,
                    format!("Could not read expected output: {e}"),
                    None,
                ),
            };

            if sorted_schema.sorted != expected {
                return failure(
                    test_name,
                    &expected_path,
                    "Expected: Sorted output to match the expected file".to_string(),
                    Some(diff_snippet(&expected, &sorted_schema.sorted)),
                );
            }

            // Per-file outputs of a merged case only build together.
            if sources.len() > 1 {
                return passed(test_name, expected_path);
            }
            let resorted = sorter.sort_as_single_document(&[
                SchemaSource::new(file_name.as_str(), expected.as_str()),
            ]);
            match resorted {
                Ok(resorted) if resorted == expected => passed(test_name, expected_path),
                Ok(resorted) => failure(
                    test_name,
                    &expected_path,
                    "Expected: Expected file to already be sorted".to_string(),
                    Some(diff_snippet(&expected, &resorted)),
                ),
                Err(e) => failure(
                    test_name,
                    &expected_path,
                    format!("Expected: Expected file to sort on its own\nGot: {e}"),
                    None,
                ),
            }
        })
        .collect()
}

fn passed(test_name: String, file_path: PathBuf) -> SnapshotTestResult {
    SnapshotTestResult {
        test_name,
        passed: true,
        error_message: None,
        file_path,
        file_snippet: None,
    }
}

fn failure(
    test_name: String,
    file_path: &Path,
    error_message: String,
    file_snippet: Option<String>,
) -> SnapshotTestResult {
    SnapshotTestResult {
        test_name,
        passed: false,
        error_message: Some(error_message),
        file_path: file_path.to_path_buf(),
        file_snippet,
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn source_id(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Shows each line of `expected` next to the line `actual` has in its place
/// and marks the lines that differ.
fn diff_snippet(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let line_count = expected_lines.len().max(actual_lines.len());

    let mut snippet = String::new();
    for idx in 0..line_count {
        let expected_line = expected_lines.get(idx).copied().unwrap_or("<missing>");
        let actual_line = actual_lines.get(idx).copied().unwrap_or("<missing>");
        let line_num = idx + 1;
        if expected_line == actual_line {
            snippet.push_str(&format!("   {line_num:>3} │ {expected_line}\n"));
        } else {
            snippet.push_str(&format!("   {line_num:>3} - {expected_line}\n"));
            snippet.push_str(&format!("   {line_num:>3} + {actual_line}\n"));
        }
    }
    snippet
}

/// Extract a code snippet from a file with line numbers
fn extract_snippet(
    file_path: &Path,
    context_lines: usize,
) -> Result<String, std::io::Error> {
    let content = fs::read_to_string(file_path)?;
    let lines: Vec<&str> = content.lines().collect();

    let end_line = context_lines.min(lines.len());
    let line_num_width = (end_line + 1).to_string().len();

    let mut snippet = String::new();
    for (idx, line) in lines[..end_line].iter().enumerate() {
        let line_num = idx + 1;
        snippet.push_str(&format!("   {line_num:>line_num_width$} │ {line}\n"));
    }

    Ok(snippet)
}
