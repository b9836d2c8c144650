use crate::test::snapshot_tests::utils;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// One fixture directory: the documents to sort and, for each of them, the
/// canonical document it must sort into.
#[derive(Debug, Clone)]
pub struct SnapshotTestCase {
    pub name: String,
    pub input_paths: Vec<PathBuf>,
    pub expected_dir: PathBuf,
}

impl SnapshotTestCase {
    /// Discovers all snapshot test cases from the fixtures directory
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(fixtures_dir) else {
            return Vec::new();
        };

        let mut cases: Vec<Self> = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_dir() {
                    return None;
                }

                let name = path.file_name()?.to_str()?.to_string();
                let input_paths = utils::schema_files_in(&path.join("input"));
                if input_paths.is_empty() {
                    eprintln!("ERROR: Snapshot case `{name}` has no input/*.graphqls files");
                    return None;
                }

                Some(Self {
                    name,
                    input_paths,
                    expected_dir: path.join("expected"),
                })
            })
            .collect();
        cases.sort_by(|a, b| a.name.cmp(&b.name));
        cases
    }

    /// The expected output for the input at `input_path`.
    pub fn expected_path_for(&self, input_path: &Path) -> Option<PathBuf> {
        Some(self.expected_dir.join(input_path.file_name()?))
    }
}
