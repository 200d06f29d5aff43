//! Runs fixture cases through the reference parser.

use verse_keys::{BookCodeRegistry, Reference, ReferenceParser, ReferenceResult, ReferenceShape};

use crate::failures::{ExpectedFailures, HarnessResult};
use crate::fixture::{Case, ReferenceFixture};
use crate::matcher::{check_case, CaseOutcome};

/// Result of running one case.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub case: Case,
    /// The parsed value, when parsing succeeded.
    pub reference: Option<Reference>,
    pub outcome: CaseOutcome,
}

/// Parse every case of `fixture` with the fixture's validation config.
pub fn run_fixture(fixture: &ReferenceFixture, books: &dyn BookCodeRegistry) -> Vec<CaseReport> {
    let parser = ReferenceParser::new(books).with_config(fixture.config);
    fixture
        .cases
        .iter()
        .map(|case| {
            let result = parse_case(&parser, case);
            let outcome = check_case(case, &result);
            CaseReport {
                case: case.clone(),
                reference: result.ok(),
                outcome,
            }
        })
        .collect()
}

fn parse_case(parser: &ReferenceParser, case: &Case) -> ReferenceResult<Reference> {
    let text = case.input.as_str();
    match case.grammar {
        None => parser.parse(text),
        Some(ReferenceShape::Single) => parser.parse_single(text).map(Reference::Single),
        Some(ReferenceShape::List) => parser.parse_list(text).map(Reference::List),
        Some(ReferenceShape::Range) => parser.parse_range(text).map(Reference::Range),
        Some(ReferenceShape::Compound) => parser.parse_compound(text).map(Reference::Compound),
    }
}

/// Tally the reports of one fixture, classifying failures with `expected`.
pub fn tally(fixture_name: &str, reports: &[CaseReport], expected: &ExpectedFailures) -> HarnessResult {
    let mut result = HarnessResult::new();
    for report in reports {
        if report.outcome.is_pass() {
            result.record_pass();
        } else {
            result.record_failure(expected.is_expected(fixture_name, &report.case.input));
        }
    }
    result
}
