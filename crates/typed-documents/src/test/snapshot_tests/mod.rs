//! File-based golden tests for generated output.
//!
//! Each directory under `fixtures/` is one test case. Its `.graphql` files are
//! loaded in file-name order as the run's documents. The case either has an
//! `expected.ts` holding the exact rendered output, or one of its documents
//! carries `# EXPECTED_ERROR_CONTAINS: <text>` / `# EXPECTED_ERROR_TYPE:
//! <Variant>` comments, in which case the run must fail with a matching error.

mod snapshot_test_case;
mod utils;

pub use expected_error_pattern::ExpectedErrorPattern;
pub use snapshot_test_case::SnapshotTestCase;

#[cfg(test)]
mod tests {
    use crate::test::snapshot_tests::test_runner;
    use crate::test::snapshot_tests::utils;

    #[test]
    fn verify_generation_snapshot_tests() {
        let fixtures_dir = utils::get_fixtures_dir();
        let results = test_runner::run_snapshot_tests(fixtures_dir);

        if !results.all_passed() {
            eprintln!("{}", results.failure_report());
            eprintln!("\n{}", results.summary());
        } else {
            println!("{}", results.summary());
        }

        assert!(
            results.all_passed(),
            "Generation snapshot tests failed:\n{}",
            results.failure_report()
        );
    }
}
