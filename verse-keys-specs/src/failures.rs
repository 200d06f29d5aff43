//! Expected failures tracking via TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{SpecError, SpecResult};

/// File name of the expected failures list inside a fixtures directory.
pub const EXPECTED_FAILURES_FILE: &str = "expected-failures.toml";

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture file name.
    pub fixture: String,
    /// The case's input string.
    pub case: String,
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means no expected failures.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let load_error = |message: String| SpecError::Load {
            path: path.display().to_string(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        toml::from_str(&content).map_err(|e| load_error(e.to_string()))
    }

    /// Check if a failure is expected.
    pub fn is_expected(&self, fixture: &str, input: &str) -> FailureState {
        if self.known.iter().any(|e| e.matches(fixture, input)) {
            return FailureState::Known;
        }
        if self.pending.iter().any(|e| e.matches(fixture, input)) {
            return FailureState::Pending;
        }
        FailureState::Regression
    }

    /// Get entry for a specific failure (if expected).
    pub fn get_entry(&self, fixture: &str, input: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .find(|e| e.matches(fixture, input))
    }
}

impl FailureEntry {
    fn matches(&self, fixture: &str, input: &str) -> bool {
        self.fixture == fixture && self.case == input
    }
}

/// Result of running the harness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessResult {
    /// Total cases checked.
    pub total: usize,
    pub passed: usize,
    /// Expected failures (known + pending).
    pub expected_failures: usize,
    /// Regressions (unexpected failures).
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all cases passed (no regressions).
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn failed(&self) -> usize {
        self.expected_failures + self.regressions
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Record a failed case with its state.
    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => {
                self.expected_failures += 1;
            }
            FailureState::Regression => {
                self.regressions += 1;
            }
        }
    }

    /// Add the tallies of another run.
    pub fn merge(&mut self, other: &HarnessResult) {
        self.total += other.total;
        self.passed += other.passed;
        self.expected_failures += other.expected_failures;
        self.regressions += other.regressions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn entry(fixture: &str, case: &str) -> FailureEntry {
        FailureEntry {
            fixture: fixture.to_string(),
            case: case.to_string(),
            reason: None,
            added: None,
            issue: None,
        }
    }

    #[test]
    fn test_load_empty() {
        let failures = ExpectedFailures::default();
        assert!(failures.get_entry("ranges.toml", "GEN_1:1-3").is_none());
        assert_eq!(
            failures.is_expected("ranges.toml", "GEN_1:1-3"),
            FailureState::Regression
        );
    }

    #[test]
    fn test_is_expected() {
        let failures = ExpectedFailures {
            known: vec![entry("ranges.toml", "GEN_1:1-3")],
            pending: vec![entry("lists.toml", "GEN_1:1,3")],
        };

        assert_eq!(
            failures.is_expected("ranges.toml", "GEN_1:1-3"),
            FailureState::Known
        );
        assert_eq!(
            failures.is_expected("lists.toml", "GEN_1:1,3"),
            FailureState::Pending
        );
        assert_eq!(
            failures.is_expected("lists.toml", "GEN_1:1-3"),
            FailureState::Regression
        );
    }

    #[test]
    fn test_harness_result_record() {
        let mut result = HarnessResult::new();
        assert!(result.success());

        result.record_pass();
        result.record_failure(FailureState::Known);
        assert_eq!(result.total, 2);
        assert_eq!(result.expected_failures, 1);
        assert!(result.success());

        result.record_failure(FailureState::Regression);
        assert_eq!(result.total, 3);
        assert_eq!(result.failed(), 2);
        assert!(!result.success());

        let mut total = HarnessResult::new();
        total.merge(&result);
        total.merge(&result);
        assert_eq!(total.total, 6);
        assert_eq!(total.regressions, 2);
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[pending]]
fixture = "ranges.toml"
case = "SA2_12:22–13:2"
reason = "Needs real chapter lengths"
added = "2026-10-18"

[[known]]
fixture = "lists.toml"
case = "MAT_6:1,2"
issue = "https://github.com/example/issues/123"
"#
        )
        .unwrap();

        let failures = ExpectedFailures::load(file.path()).unwrap();
        assert_eq!(failures.pending.len(), 1);
        assert_eq!(failures.known.len(), 1);
        assert_eq!(
            failures.is_expected("ranges.toml", "SA2_12:22\u{2013}13:2"),
            FailureState::Pending
        );
        assert_eq!(
            failures
                .get_entry("ranges.toml", "SA2_12:22\u{2013}13:2")
                .and_then(|e| e.reason.as_deref()),
            Some("Needs real chapter lengths")
        );
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[known]]\nfixture = 3").unwrap();
        assert!(matches!(
            ExpectedFailures::load(file.path()),
            Err(SpecError::Load { .. })
        ));
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let failures = ExpectedFailures::load(Path::new("/nonexistent/path.toml")).unwrap();
        assert!(failures.known.is_empty() && failures.pending.is_empty());
    }
}
