use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::VerseReference;
use crate::books::{AbbreviationScheme, BookCodeRegistry};
use crate::errors::{ReferenceError, ReferenceResult};
use crate::grammar::{self, Fields};
use crate::parser::ReferenceParser;

/// One verse, e.g. `SA2_19:12!b`: book code, chapter, verse and optional
/// sub-verse suffix.
///
/// Chapter and verse are kept as strings; an absent suffix is `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingleReference {
    book: String,
    chapter: String,
    verse: String,
    suffix: String,
}

impl SingleReference {
    /// Build a reference from its fields.
    ///
    /// Only the shape of the fields is checked here; use
    /// [`ReferenceParser::verse`] to also check the book code. The book is
    /// three uppercase letters or digits. Chapter and verse are one to three
    /// characters and, when numeric, lie in 1..199, so a book introduction
    /// key such as chapter `0` verse `-1` is not representable.
    ///
    /// ```
    /// use verse_keys::SingleReference;
    ///
    /// let reference = SingleReference::new("GEN", 1, 1, "a").unwrap();
    /// assert_eq!(reference.to_string(), "GEN 1:1a");
    /// ```
    pub fn new(
        book: &str,
        chapter: impl ToString,
        verse: impl ToString,
        suffix: &str,
    ) -> ReferenceResult<Self> {
        let reference = Self::from_parts(book, chapter.to_string(), verse.to_string(), suffix);
        if !reference.has_valid_fields() {
            return Err(ReferenceError::MalformedReference(reference.verse_key_text()));
        }
        Ok(reference)
    }

    pub(crate) fn from_parts(
        book: &str,
        chapter: impl Into<String>,
        verse: impl Into<String>,
        suffix: &str,
    ) -> Self {
        Self {
            book: book.to_string(),
            chapter: chapter.into(),
            verse: verse.into(),
            suffix: suffix.to_string(),
        }
    }

    fn has_valid_fields(&self) -> bool {
        grammar::is_book_shaped(&self.book)
            && grammar::is_valid_label(&self.chapter)
            && grammar::is_valid_label(&self.verse)
            && grammar::is_valid_suffix(&self.suffix)
    }

    /// Match `text` against the single-verse grammar, ignoring the registry.
    fn match_grammar(text: &str) -> Option<Self> {
        let mut fields = Fields::match_text(&grammar::VERSE, text)?;
        let book = fields.next_field();
        let chapter = fields.next_field();
        let verse = fields.next_field();
        let suffix = fields.next_field();
        Some(Self::from_parts(book, chapter, verse, suffix))
    }

    pub(crate) fn try_match(text: &str, parser: &ReferenceParser) -> ReferenceResult<Option<Self>> {
        match Self::match_grammar(text) {
            Some(reference) => {
                parser.check_book_code(&reference.book, text)?;
                Ok(Some(reference))
            }
            None => Ok(None),
        }
    }

    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    pub fn verse(&self) -> &str {
        &self.verse
    }

    /// The suffix letter, or `""` when the whole verse is meant.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn bcv(&self) -> (&str, &str, &str) {
        (&self.book, &self.chapter, &self.verse)
    }

    pub fn bcvs(&self) -> (&str, &str, &str, &str) {
        (&self.book, &self.chapter, &self.verse, &self.suffix)
    }

    pub fn cv(&self) -> (&str, &str) {
        (&self.chapter, &self.verse)
    }

    pub fn cvs(&self) -> (&str, &str, &str) {
        (&self.chapter, &self.verse, &self.suffix)
    }

    /// The chapter as a number.
    ///
    /// Unusual values such as `"1a"` are logged and read up to the first
    /// non-digit. Returns `None` if there is no leading digit at all.
    pub fn chapter_number(&self) -> Option<u32> {
        number_field("chapter", &self.chapter)
    }

    /// The verse as a number, with the same leniency as
    /// [`chapter_number`](Self::chapter_number).
    pub fn verse_number(&self) -> Option<u32> {
        number_field("verse", &self.verse)
    }

    /// OSIS reference such as `Gen.1.1`, if the registry knows the OSIS name.
    pub fn osis_reference(&self, books: &dyn BookCodeRegistry) -> Option<String> {
        let book = books.canonical_abbreviation(&self.book, AbbreviationScheme::Osis)?;
        Some(format!("{}.{}.{}", book, self.chapter, self.verse))
    }

    /// `12!b`
    pub(crate) fn key_verse(&self) -> String {
        if self.suffix.is_empty() {
            self.verse.clone()
        } else {
            format!("{}!{}", self.verse, self.suffix)
        }
    }

    /// `19:12!b`
    pub(crate) fn key_chapter_verse(&self) -> String {
        format!("{}:{}", self.chapter, self.key_verse())
    }

    /// `12b`
    pub(crate) fn short_verse(&self) -> String {
        format!("{}{}", self.verse, self.suffix)
    }

    /// `19:12b`
    pub(crate) fn short_chapter_verse(&self) -> String {
        format!("{}:{}", self.chapter, self.short_verse())
    }

    /// Compare (chapter, verse, suffix), ignoring the book.
    pub(crate) fn position_cmp(&self, other: &Self) -> Ordering {
        leading_number(&self.chapter)
            .cmp(&leading_number(&other.chapter))
            .then_with(|| self.chapter.cmp(&other.chapter))
            .then_with(|| leading_number(&self.verse).cmp(&leading_number(&other.verse)))
            .then_with(|| self.verse.cmp(&other.verse))
            .then_with(|| self.suffix.cmp(&other.suffix))
    }
}

/// The digits at the start of `value`, as a number.
pub(crate) fn leading_number(value: &str) -> Option<u32> {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

fn number_field(name: &str, value: &str) -> Option<u32> {
    if let Ok(number) = value.parse() {
        return Some(number);
    }
    log::warn!("unusual {} value {:?}", name, value);
    leading_number(value)
}

impl VerseReference for SingleReference {
    fn book(&self) -> &str {
        &self.book
    }

    fn short_text(&self) -> String {
        format!("{} {}", self.book, self.short_chapter_verse())
    }

    fn verse_key_text(&self) -> String {
        format!("{}_{}", self.book, self.key_chapter_verse())
    }

    fn included_verses(&self) -> &[SingleReference] {
        std::slice::from_ref(self)
    }
}

/// Orders by book code, then numerically by chapter and verse, then suffix.
///
/// Book codes compare alphabetically, not in canonical book order.
impl Ord for SingleReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.book
            .cmp(&other.book)
            .then_with(|| self.position_cmp(other))
    }
}

impl PartialOrd for SingleReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SingleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_text())
    }
}

/// Parses the canonical `BBB_C:V!S` form without consulting a registry.
impl FromStr for SingleReference {
    type Err = ReferenceError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::match_grammar(text).ok_or_else(|| ReferenceError::MalformedReference(text.to_string()))
    }
}

impl Serialize for SingleReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.verse_key_text())
    }
}

impl<'de> Deserialize<'de> for SingleReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationConfig;

    const BOOKS: [&str; 4] = ["GEN", "EXO", "SA2", "REV"];

    #[test]
    fn test_parse_plain_verse() {
        let parser = ReferenceParser::new(&BOOKS);
        let reference = parser.parse_single("GEN_1:1").unwrap();
        assert_eq!(reference.bcvs(), ("GEN", "1", "1", ""));
        assert_eq!(reference, SingleReference::new("GEN", "1", "1", "").unwrap());
    }

    #[test]
    fn test_texts() {
        let parser = ReferenceParser::new(&BOOKS);
        let reference = parser.parse_single("REV_11:12!b").unwrap();
        assert_eq!(reference.suffix(), "b");
        assert_eq!(reference.verse_key_text(), "REV_11:12!b");
        assert_eq!(reference.short_text(), "REV 11:12b");

        let plain = parser.parse_single("SA2_19:12").unwrap();
        assert_eq!(plain.short_text(), "SA2 19:12");
        assert_eq!(plain.verse_key_text(), "SA2_19:12");
    }

    #[test]
    fn test_new_accepts_numbers() {
        let reference = SingleReference::new("EXO", 20, 10, "").unwrap();
        assert_eq!(reference.cv(), ("20", "10"));
    }

    #[test]
    fn test_new_rejects_bad_fields() {
        assert!(SingleReference::new("GENESIS", 1, 1, "").is_err());
        assert!(SingleReference::new("GEN", "", 1, "").is_err());
        assert!(SingleReference::new("GEN", "1:2", 1, "").is_err());
        assert!(SingleReference::new("GEN", 1, 1, "z").is_err());
        assert!(SingleReference::new("GEN", 1, 1, "ab").is_err());
    }

    #[test]
    fn test_new_matches_grammar() {
        let parser = ReferenceParser::new(&BOOKS);
        for (book, chapter, verse) in [
            ("gen", "1", "1"),
            ("Gen", "1", "1"),
            ("GEN", "1234", "5"),
            ("GEN", "200", "1"),
            ("GEN", "1", "200"),
            ("GEN", "0", "1"),
            ("GEN", "01", "1"),
            ("GEN", "0", "-1"),
        ] {
            assert!(
                SingleReference::new(book, chapter, verse, "").is_err(),
                "{} {}:{}",
                book,
                chapter,
                verse
            );
        }

        for (chapter, verse) in [("1", "1"), ("199", "199"), ("19", "12")] {
            let reference = SingleReference::new("SA2", chapter, verse, "b").unwrap();
            let reparsed = parser.parse_single(&reference.verse_key_text()).unwrap();
            assert_eq!(reparsed, reference);
        }
    }

    #[test]
    fn test_lenient_numbers() {
        let reference = SingleReference::new("GEN", "1a", "12b", "").unwrap();
        assert_eq!(reference.chapter_number(), Some(1));
        assert_eq!(reference.verse_number(), Some(12));

        let odd = SingleReference::new("GEN", "A", "x", "").unwrap();
        assert_eq!(odd.chapter_number(), None);
        assert_eq!(odd.verse_number(), None);
    }

    #[test]
    fn test_ordering_is_numeric() {
        let a = SingleReference::new("GEN", 2, 9, "").unwrap();
        let b = SingleReference::new("GEN", 2, 10, "").unwrap();
        let c = SingleReference::new("GEN", 2, 10, "a").unwrap();
        let d = SingleReference::new("GEN", 10, 1, "").unwrap();
        let mut sorted = vec![d.clone(), c.clone(), b.clone(), a.clone()];
        sorted.sort();
        assert_eq!(sorted, vec![a, b, c, d]);
    }

    #[test]
    fn test_unknown_book_is_tolerated_by_default() {
        let parser = ReferenceParser::new(&BOOKS);
        let reference = parser.parse_single("ABC_1:1").unwrap();
        assert_eq!(reference.book(), "ABC");
    }

    #[test]
    fn test_unknown_book_fails_when_strict() {
        let parser = ReferenceParser::new(&BOOKS).with_config(ValidationConfig::strict());
        let err = parser.parse_single("ABC_1:1").unwrap_err();
        assert_eq!(
            err,
            ReferenceError::InvalidBookCode {
                code: "ABC".to_string(),
                reference: "ABC_1:1".to_string(),
            }
        );
    }

    #[test]
    fn test_from_str_and_serde() {
        let reference: SingleReference = "SA2_19:12!b".parse().unwrap();
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, "\"SA2_19:12!b\"");
        let back: SingleReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);

        assert!("SA2 19:12".parse::<SingleReference>().is_err());
    }

    #[test]
    fn test_osis_reference_needs_abbreviation() {
        let reference = SingleReference::new("GEN", 1, 1, "").unwrap();
        assert_eq!(reference.osis_reference(&BOOKS), None);
    }
}
