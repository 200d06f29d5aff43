//! Core types for parsed fixture files.

use serde::{Deserialize, Serialize};
use verse_keys::{ReferenceShape, ValidationConfig};

/// A parsed `.toml` fixture document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceFixture {
    /// Optional title, shown in reports.
    #[serde(default)]
    pub title: Option<String>,
    /// Validation policy every case in the file is parsed with.
    #[serde(default)]
    pub config: ValidationConfig,
    /// `[[case]]` tables, in file order.
    #[serde(default, rename = "case")]
    pub cases: Vec<Case>,
}

/// One input string and what parsing it should produce.
///
/// Only the expectations that are present are checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Case {
    pub input: String,
    /// Restrict parsing to one shape's grammars instead of the dispatcher.
    #[serde(default)]
    pub grammar: Option<ReferenceShape>,
    /// Expected error variant name, e.g. `MalformedReference`.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub shape: Option<ReferenceShape>,
    /// Canonical machine text.
    #[serde(default)]
    pub key: Option<String>,
    /// Human-readable text.
    #[serde(default)]
    pub short: Option<String>,
    /// Number of included verses.
    #[serde(default)]
    pub verses: Option<usize>,
    /// Canonical text of the first included verse.
    #[serde(default)]
    pub first: Option<String>,
    /// Canonical text of the last included verse.
    #[serde(default)]
    pub last: Option<String>,
}

impl Case {
    /// Whether the case expects the parse to fail.
    pub fn expects_error(&self) -> bool {
        self.error.is_some()
    }

    /// Whether any expectation about a successful parse is present.
    pub fn has_success_checks(&self) -> bool {
        self.shape.is_some()
            || self.key.is_some()
            || self.short.is_some()
            || self.verses.is_some()
            || self.first.is_some()
            || self.last.is_some()
    }
}

impl ReferenceFixture {
    /// Cases that expect a successful parse.
    pub fn good_cases(&self) -> impl Iterator<Item = &Case> {
        self.cases.iter().filter(|case| !case.expects_error())
    }

    /// Cases that expect an error.
    pub fn bad_cases(&self) -> impl Iterator<Item = &Case> {
        self.cases.iter().filter(|case| case.expects_error())
    }

    pub fn display_name<'a>(&'a self, file_name: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(file_name)
    }
}
