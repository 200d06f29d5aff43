//! Comparison of parse outcomes with case expectations.

use std::fmt;

use verse_keys::{Reference, ReferenceError, ReferenceResult, VerseReference};

use crate::fixture::Case;

/// A single expectation that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    /// The expectation name, as written in the fixture.
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl FieldMismatch {
    pub fn new(field: &'static str, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✗ {}: expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Outcome of checking one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    /// Parsed (or failed) as the case says, but some fields differ.
    Failed(Vec<FieldMismatch>),
    /// A successful parse was expected.
    UnexpectedError(ReferenceError),
    /// An error was expected; holds the canonical text that was produced.
    UnexpectedSuccess(String),
}

impl CaseOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

/// Compare a parse outcome with the expectations of `case`.
pub fn check_case(case: &Case, outcome: &ReferenceResult<Reference>) -> CaseOutcome {
    match (&case.error, outcome) {
        (Some(expected), Err(err)) => {
            if err.name() == expected.as_str() {
                CaseOutcome::Passed
            } else {
                CaseOutcome::Failed(vec![FieldMismatch::new("error", expected.clone(), err.name())])
            }
        }
        (Some(_), Ok(reference)) => CaseOutcome::UnexpectedSuccess(reference.verse_key_text()),
        (None, Err(err)) => CaseOutcome::UnexpectedError(err.clone()),
        (None, Ok(reference)) => {
            let mismatches = field_mismatches(case, reference);
            if mismatches.is_empty() {
                CaseOutcome::Passed
            } else {
                CaseOutcome::Failed(mismatches)
            }
        }
    }
}

fn field_mismatches(case: &Case, reference: &Reference) -> Vec<FieldMismatch> {
    let mut mismatches = Vec::new();
    let verses = reference.included_verses();

    if let Some(shape) = case.shape {
        if shape != reference.shape() {
            mismatches.push(FieldMismatch::new(
                "shape",
                shape.to_string(),
                reference.shape().to_string(),
            ));
        }
    }
    if let Some(key) = &case.key {
        compare_text(&mut mismatches, "key", key, reference.verse_key_text());
    }
    if let Some(short) = &case.short {
        compare_text(&mut mismatches, "short", short, reference.short_text());
    }
    if let Some(count) = case.verses {
        if count != verses.len() {
            mismatches.push(FieldMismatch::new(
                "verses",
                count.to_string(),
                verses.len().to_string(),
            ));
        }
    }
    if let Some(first) = &case.first {
        let actual = verses.first().map(|v| v.verse_key_text()).unwrap_or_default();
        compare_text(&mut mismatches, "first", first, actual);
    }
    if let Some(last) = &case.last {
        let actual = verses.last().map(|v| v.verse_key_text()).unwrap_or_default();
        compare_text(&mut mismatches, "last", last, actual);
    }

    mismatches
}

fn compare_text(mismatches: &mut Vec<FieldMismatch>, field: &'static str, expected: &str, actual: String) {
    if expected != actual {
        mismatches.push(FieldMismatch::new(field, expected, actual));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verse_keys::{ReferenceParser, ReferenceShape};

    const BOOKS: [&str; 2] = ["SA2", "GEN"];

    fn case_for(input: &str) -> Case {
        Case {
            input: input.to_string(),
            ..Case::default()
        }
    }

    #[test]
    fn test_all_fields_match() {
        let parser = ReferenceParser::new(&BOOKS);
        let case = Case {
            shape: Some(ReferenceShape::Range),
            key: Some("SA2_19:12-19".to_string()),
            short: Some("SA2 19:12-19".to_string()),
            verses: Some(8),
            first: Some("SA2_19:12".to_string()),
            last: Some("SA2_19:19".to_string()),
            ..case_for("SA2_19:12-19")
        };
        assert_eq!(check_case(&case, &parser.parse(&case.input)), CaseOutcome::Passed);
    }

    #[test]
    fn test_mismatched_fields_are_all_reported() {
        let parser = ReferenceParser::new(&BOOKS);
        let case = Case {
            shape: Some(ReferenceShape::List),
            verses: Some(7),
            ..case_for("SA2_19:12-19")
        };
        let outcome = check_case(&case, &parser.parse(&case.input));
        assert_eq!(
            outcome,
            CaseOutcome::Failed(vec![
                FieldMismatch::new("shape", "list", "range"),
                FieldMismatch::new("verses", "7", "8"),
            ])
        );
    }

    #[test]
    fn test_expected_error() {
        let parser = ReferenceParser::new(&BOOKS);
        let case = Case {
            error: Some("MalformedReference".to_string()),
            ..case_for("GEN.1.1")
        };
        assert!(check_case(&case, &parser.parse(&case.input)).is_pass());

        let wrong = Case {
            error: Some("InvalidBookCode".to_string()),
            ..case_for("GEN.1.1")
        };
        assert_eq!(
            check_case(&wrong, &parser.parse(&wrong.input)),
            CaseOutcome::Failed(vec![FieldMismatch::new(
                "error",
                "InvalidBookCode",
                "MalformedReference"
            )])
        );
    }

    #[test]
    fn test_unexpected_outcomes() {
        let parser = ReferenceParser::new(&BOOKS);
        let bad = Case {
            error: Some("MalformedReference".to_string()),
            ..case_for("GEN_1:1")
        };
        assert_eq!(
            check_case(&bad, &parser.parse(&bad.input)),
            CaseOutcome::UnexpectedSuccess("GEN_1:1".to_string())
        );

        let good = case_for("GEN 1:1");
        assert_eq!(
            check_case(&good, &parser.parse(&good.input)),
            CaseOutcome::UnexpectedError(ReferenceError::MalformedReference("GEN 1:1".to_string()))
        );
    }

    #[test]
    fn test_mismatch_display() {
        let mismatch = FieldMismatch::new("key", "GEN_1:1", "GEN_1:2");
        assert_eq!(mismatch.to_string(), "✗ key: expected GEN_1:1, got GEN_1:2");
    }
}
