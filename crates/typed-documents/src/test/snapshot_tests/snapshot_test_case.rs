use crate::test::snapshot_tests::utils;
use crate::test::snapshot_tests::ExpectedErrorPattern;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

const EXPECTED_OUTPUT_FILE_NAME: &str = "expected.ts";

/// A directory of GraphQL documents processed together as one generation run.
#[derive(Debug, Clone)]
pub struct SnapshotTestCase {
    pub name: String,
    pub dir: PathBuf,
    pub document_paths: Vec<PathBuf>,
    pub expected_errors: Vec<ExpectedErrorPattern>,
    pub expected_output_path: Option<PathBuf>,
}

impl SnapshotTestCase {
    /// Discovers all snapshot test cases from the fixtures directory, sorted
    /// by name.
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(fixtures_dir) else {
            return Vec::new();
        };

        let mut cases: Vec<Self> = entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let path = entry.path();

                if !path.is_dir() {
                    eprintln!("ERROR: Unexpected file in fixtures/: {}", path.display());
                    eprintln!("       Only directories are allowed in fixtures/");
                    eprintln!("       Each directory represents one generation run.");
                    return None;
                }

                Self::from_dir(path)
            })
            .collect();

        cases.sort_by(|a, b| a.name.cmp(&b.name));
        cases
    }

    fn from_dir(dir: PathBuf) -> Option<Self> {
        let name = dir.file_name()?.to_str()?.to_string();
        let document_paths = Self::discover_documents(&dir);

        let expected_errors = document_paths
            .iter()
            .filter_map(|path| fs::read_to_string(path).ok())
            .flat_map(|content| ExpectedErrorPattern::parse_all(&content))
            .collect();

        let expected_output_path = dir.join(EXPECTED_OUTPUT_FILE_NAME);
        let expected_output_path =
            if expected_output_path.is_file() {
                Some(expected_output_path)
            } else {
                None
            };

        Some(Self {
            name,
            dir,
            document_paths,
            expected_errors,
            expected_output_path,
        })
    }

    /// Discovers `.graphql` documents in a case directory, sorted by file
    /// name so that the run's document order is stable.
    fn discover_documents(dir: &Path) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };

        let mut paths: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && utils::extension_matches_ignore_case(path, "graphql")
            })
            .collect();

        paths.sort();
        paths
    }

    pub fn expects_error(&self) -> bool {
        !self.expected_errors.is_empty()
    }
}
