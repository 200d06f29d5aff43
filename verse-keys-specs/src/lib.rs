#![doc(
    html_root_url = "https://docs.rs/verse-keys-specs/0.1.0",
    issue_tracker_base_url = "https://github.com/Freely-Given-org/verse-keys/issues/"
)]

//! Fixture-driven regression harness for verse-keys.
//!
//! Test cases are declared in `.toml` fixture files: an input string plus
//! the shape, canonical texts and expansion it should produce, or the error
//! it should fail with.
//!
//! ## Modules
//!
//! - [`parser`] - Parses `.toml` fixture files
//! - [`fixture`] - Fixture and case types
//! - [`loader`] - Loads fixture files from disk
//! - [`matcher`] - Compares parse outcomes with case expectations
//! - [`runner`] - Runs fixture cases through the reference parser
//! - [`errors`] - Error types for the harness
//! - [`formatter`] - Human-readable failure reports
//! - [`failures`] - Expected failures tracking via TOML

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod matcher;
pub mod parser;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{
    ExpectedFailures, FailureEntry, FailureState, HarnessResult, EXPECTED_FAILURES_FILE,
};
pub use fixture::{Case, ReferenceFixture};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use matcher::{check_case, CaseOutcome, FieldMismatch};
pub use parser::{parse_fixture, ERROR_NAMES};
pub use runner::{run_fixture, tally, CaseReport};

#[cfg(test)]
mod tests;
