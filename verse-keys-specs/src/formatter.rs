//! Human-readable reports for failed cases.

use std::fmt::Write;

use verse_keys::ReferenceDisplay;

use crate::failures::FailureEntry;
use crate::matcher::CaseOutcome;
use crate::runner::CaseReport;

/// Format a failed case with the parsed value rendered underneath.
///
/// `expected` is the case's entry in the expected failures list, if any;
/// its reason and issue are shown so known gaps read differently from
/// regressions.
pub fn format_failure(
    fixture_name: &str,
    report: &CaseReport,
    expected: Option<&FailureEntry>,
) -> String {
    let mut output = String::new();

    let status = if expected.is_some() { "XFAIL" } else { "FAIL" };
    writeln!(output, "\n{}: {}: {:?}", status, fixture_name, report.case.input).unwrap();
    if let Some(entry) = expected {
        if let Some(reason) = &entry.reason {
            writeln!(output, "  reason: {}", reason).unwrap();
        }
        if let Some(issue) = &entry.issue {
            writeln!(output, "  issue: {}", issue).unwrap();
        }
    }
    writeln!(output).unwrap();

    match &report.outcome {
        CaseOutcome::Failed(mismatches) => {
            for mismatch in mismatches {
                writeln!(output, "    {}", mismatch).unwrap();
            }
        }
        CaseOutcome::UnexpectedError(err) => {
            writeln!(output, "  expected a reference, got error {}: {}", err.name(), err).unwrap();
        }
        CaseOutcome::UnexpectedSuccess(key) => {
            let expected = report.case.error.as_deref().unwrap_or("an error");
            writeln!(output, "  expected {}, parsed as {}", expected, key).unwrap();
        }
        CaseOutcome::Passed => {
            writeln!(output, "  (passed)").unwrap();
        }
    }

    if let Some(reference) = &report.reference {
        writeln!(output).unwrap();
        for line in ReferenceDisplay::new(reference).to_string().lines() {
            writeln!(output, "  {}", line).unwrap();
        }
    }

    if let Some(hint) = generate_hint(report) {
        writeln!(output).unwrap();
        writeln!(output, "  hint: {}", hint).unwrap();
    }

    output
}

/// Format a summary of one fixture's results.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let mut output = String::new();

    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    writeln!(output, "\n{}: {}", status, fixture_name).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        passed, failed, expected_failures, regressions
    )
    .unwrap();

    output
}

fn generate_hint(report: &CaseReport) -> Option<String> {
    let input = report.case.input.as_str();
    match &report.outcome {
        CaseOutcome::UnexpectedError(err) if err.name() == "MalformedReference" => {
            if input.contains(' ') {
                Some("references never contain spaces, use `_` after the book code".to_string())
            } else if input.contains('-') && input.matches(':').count() > 1 {
                Some("ranges across chapters use an en-dash (U+2013), not a hyphen".to_string())
            } else {
                None
            }
        }
        CaseOutcome::UnexpectedError(err) if err.name() == "InvalidBookCode" => {
            Some("the fixture config is strict and the book code is not registered".to_string())
        }
        CaseOutcome::Failed(mismatches) if mismatches.iter().any(|m| m.field == "verses") => {
            Some("cross-chapter ranges roll over after verse 222 unless a versification is supplied".to_string())
        }
        _ => None,
    }
}
