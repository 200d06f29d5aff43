//! Book-code registry interface.
//!
//! The registry itself lives outside this crate (see `verse-keys-books` for
//! the standard table). Parsers only read from it, possibly from several
//! threads at once, hence the `Send + Sync` bound.

use std::collections::HashSet;

/// External abbreviation schemes a book code can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbbreviationScheme {
    /// OSIS book names, e.g. `Gen`, `1Sam`.
    Osis,
    /// USFM book identifiers, e.g. `GEN`, `1SA`.
    Usfm,
}

/// Lookup of the known 3-character book codes.
pub trait BookCodeRegistry: Send + Sync {
    /// Whether `code` is a known book code.
    fn is_valid_code(&self, code: &str) -> bool;

    /// The abbreviation of `code` in an external scheme, if known.
    fn canonical_abbreviation(&self, _code: &str, _scheme: AbbreviationScheme) -> Option<String> {
        None
    }
}

impl<const N: usize> BookCodeRegistry for [&'static str; N] {
    fn is_valid_code(&self, code: &str) -> bool {
        self.iter().any(|&known| known == code)
    }
}

impl BookCodeRegistry for HashSet<String> {
    fn is_valid_code(&self, code: &str) -> bool {
        self.contains(code)
    }
}
