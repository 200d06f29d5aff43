//! Dispatch of reference text to the shape grammars.

use std::cmp::Ordering;

use crate::books::BookCodeRegistry;
use crate::config::ValidationConfig;
use crate::errors::{ReferenceError, ReferenceResult};
use crate::reference::{
    CompoundReference, Reference, ReferenceList, ReferenceRange, SingleReference, VerseReference,
};
use crate::versification::{SentinelVersification, Versification};

/// Parses reference text against a book-code registry.
///
/// The parser only borrows its collaborators and holds no mutable state, so
/// one instance can be shared between threads.
///
/// ```
/// use verse_keys::{ReferenceParser, ValidationConfig, VerseReference};
///
/// let books = ["GEN", "EXO"];
/// let parser = ReferenceParser::new(&books).with_config(ValidationConfig::strict());
///
/// assert!(parser.parse("LEV_1:1").is_err());
/// assert_eq!(parser.parse("EXO_1:1!b,3-4").unwrap().verse_key_text(), "EXO_1:1!b,3-4");
/// ```
#[derive(Clone, Copy)]
pub struct ReferenceParser<'a> {
    books: &'a dyn BookCodeRegistry,
    versification: &'a dyn Versification,
    config: ValidationConfig,
}

impl<'a> ReferenceParser<'a> {
    /// A lenient parser using the sentinel chapter length.
    pub fn new(books: &'a dyn BookCodeRegistry) -> Self {
        Self {
            books,
            versification: &SentinelVersification,
            config: ValidationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Use real chapter lengths when expanding cross-chapter ranges.
    pub fn with_versification(mut self, versification: &'a dyn Versification) -> Self {
        self.versification = versification;
        self
    }

    pub fn config(&self) -> ValidationConfig {
        self.config
    }

    pub(crate) fn versification(&self) -> &dyn Versification {
        self.versification
    }

    /// Parse `text` as whichever shape it matches.
    ///
    /// Grammars are tried as single verse, then list, then range, then
    /// compound. The first grammar that matches decides the outcome: a
    /// validation failure there is returned as is.
    pub fn parse(&self, text: &str) -> ReferenceResult<Reference> {
        if let Some(single) = SingleReference::try_match(text, self)? {
            return Ok(Reference::Single(single));
        }
        if let Some(list) = ReferenceList::try_match(text, self)? {
            return Ok(Reference::List(list));
        }
        if let Some(range) = ReferenceRange::try_match(text, self)? {
            return Ok(Reference::Range(range));
        }
        if let Some(compound) = CompoundReference::try_match(text, self)? {
            return Ok(Reference::Compound(compound));
        }
        Err(self.malformed(text))
    }

    pub fn parse_single(&self, text: &str) -> ReferenceResult<SingleReference> {
        SingleReference::try_match(text, self)?.ok_or_else(|| self.malformed(text))
    }

    pub fn parse_list(&self, text: &str) -> ReferenceResult<ReferenceList> {
        ReferenceList::try_match(text, self)?.ok_or_else(|| self.malformed(text))
    }

    pub fn parse_range(&self, text: &str) -> ReferenceResult<ReferenceRange> {
        ReferenceRange::try_match(text, self)?.ok_or_else(|| self.malformed(text))
    }

    pub fn parse_compound(&self, text: &str) -> ReferenceResult<CompoundReference> {
        CompoundReference::try_match(text, self)?.ok_or_else(|| self.malformed(text))
    }

    /// Build a single verse from fields, checking the book code as well as
    /// the field shape.
    pub fn verse(
        &self,
        book: &str,
        chapter: impl ToString,
        verse: impl ToString,
        suffix: &str,
    ) -> ReferenceResult<SingleReference> {
        let reference = SingleReference::new(book, chapter, verse, suffix)?;
        self.check_book_code(book, &reference.verse_key_text())?;
        Ok(reference)
    }

    fn malformed(&self, text: &str) -> ReferenceError {
        log::debug!("unable to parse reference {:?}", text);
        ReferenceError::MalformedReference(text.to_string())
    }

    pub(crate) fn check_book_code(&self, code: &str, text: &str) -> ReferenceResult<()> {
        if self.books.is_valid_code(code) {
            return Ok(());
        }
        if self.config.strict_validation {
            return Err(ReferenceError::InvalidBookCode {
                code: code.to_string(),
                reference: text.to_string(),
            });
        }
        if self.config.report_book_code_errors {
            log::error!("invalid book code {:?} in {:?}", code, text);
        }
        Ok(())
    }

    /// Adjacent entries of a list or compound must increase, and must not
    /// be neighbouring verses of the same portion.
    pub(crate) fn check_separate(
        &self,
        first: &SingleReference,
        second: &SingleReference,
        text: &str,
    ) -> ReferenceResult<()> {
        let increasing = first.position_cmp(second) == Ordering::Less;
        let contiguous = first.chapter() == second.chapter()
            && first.suffix() == second.suffix()
            && verse_number(second) < verse_number(first) + 2;
        if increasing && !contiguous {
            return Ok(());
        }
        self.violation(ReferenceError::InvalidListOrder(text.to_string()))
    }

    pub(crate) fn check_range_order(
        &self,
        start: &SingleReference,
        end: &SingleReference,
        text: &str,
    ) -> ReferenceResult<()> {
        if end.position_cmp(start) != Ordering::Less {
            return Ok(());
        }
        self.violation(ReferenceError::InvalidRangeOrder(text.to_string()))
    }

    fn violation(&self, err: ReferenceError) -> ReferenceResult<()> {
        if self.config.strict_validation {
            return Err(err);
        }
        log::warn!("{}", err);
        Ok(())
    }
}

fn verse_number(reference: &SingleReference) -> u32 {
    crate::reference::leading_number(reference.verse()).unwrap_or(0)
}

impl std::fmt::Debug for ReferenceParser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceParser")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
