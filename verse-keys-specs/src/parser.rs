//! Parser for `.toml` fixture files.
//!
//! Format:
//! ```toml
//! title = "Single verses"
//!
//! [config]
//! strict_validation = true
//!
//! [[case]]
//! input = "REV_11:12!b"
//! shape = "single"
//! key = "REV_11:12!b"
//! short = "REV 11:12b"
//!
//! [[case]]
//! input = "JNA_2:3b"
//! error = "MalformedReference"
//! ```

use crate::errors::{SpecError, SpecResult};
use crate::fixture::{Case, ReferenceFixture};

/// Error variant names a case may expect.
pub const ERROR_NAMES: [&str; 4] = [
    "MalformedReference",
    "InvalidBookCode",
    "InvalidRangeOrder",
    "InvalidListOrder",
];

/// Parse a fixture file's content.
pub fn parse_fixture(content: &str) -> SpecResult<ReferenceFixture> {
    let fixture: ReferenceFixture = toml::from_str(content).map_err(|e| SpecError::Parse {
        line: e
            .span()
            .map_or(0, |span| line_number(content, span.start)),
        message: e.message().to_string(),
    })?;

    for case in &fixture.cases {
        validate_case(content, case)?;
    }

    Ok(fixture)
}

fn validate_case(content: &str, case: &Case) -> SpecResult<()> {
    let error = |message: String| SpecError::Parse {
        line: find_line(content, &case.input),
        message,
    };

    if case.input.is_empty() {
        return Err(error("case has an empty input".to_string()));
    }
    if let Some(name) = &case.error {
        if !ERROR_NAMES.contains(&name.as_str()) {
            return Err(error(format!(
                "unknown error {:?} for {:?}, expected one of {}",
                name,
                case.input,
                ERROR_NAMES.join(", ")
            )));
        }
        if case.has_success_checks() {
            return Err(error(format!(
                "case {:?} expects an error and a successful parse",
                case.input
            )));
        }
    }
    Ok(())
}

/// 1-based line of a byte offset.
fn line_number(content: &str, offset: usize) -> usize {
    let offset = offset.min(content.len());
    content.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// Line where `input` first appears, or 0 if it cannot be found.
fn find_line(content: &str, input: &str) -> usize {
    if input.is_empty() {
        return 0;
    }
    content
        .find(input)
        .map_or(0, |offset| line_number(content, offset))
}
