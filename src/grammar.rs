//! Regular grammars for every reference shape.
//!
//! All patterns are anchored, so they only match entire strings.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Book codes only, as strict as possible.
const BOOK: &str = "([A-PR-XZ][A-EG-VX-Z1][A-WYZ1-6])";
/// Chapter and verse numbers 1..199.
const NUMBER: &str = "([1-9][0-9]?|1[0-9][0-9])";
/// Optional `!` plus one suffix letter.
const SUFFIX: &str = "(?:!([a-f]))?";

/// Separates the endpoints of a range that crosses chapters.
pub(crate) const EN_DASH: char = '\u{2013}';

/// Characters that can never appear inside a single field.
pub(crate) const SEPARATORS: [char; 9] = [' ', '-', ',', '.', ':', ';', '_', '!', EN_DASH];

fn vs() -> String {
    format!("{}{}", NUMBER, SUFFIX)
}

fn cvs() -> String {
    format!("{}:{}", NUMBER, vs())
}

fn bcvs() -> String {
    format!("{}_{}", BOOK, cvs())
}

fn anchored(pattern: String) -> Regex {
    Regex::new(&format!("^{}$", pattern)).expect("Invalid reference grammar")
}

pub(crate) static VERSE: Lazy<Regex> = Lazy::new(|| anchored(bcvs()));

pub(crate) static VERSES2: Lazy<Regex> = Lazy::new(|| anchored(format!("{},{}", bcvs(), vs())));
pub(crate) static VERSES2C: Lazy<Regex> =
    Lazy::new(|| anchored(format!("{};{}", bcvs(), cvs())));
pub(crate) static VERSES3: Lazy<Regex> =
    Lazy::new(|| anchored(format!("{},{},{}", bcvs(), vs(), vs())));
pub(crate) static VERSES3C: Lazy<Regex> =
    Lazy::new(|| anchored(format!("{};{};{}", bcvs(), cvs(), cvs())));

pub(crate) static CHAPTER: Lazy<Regex> = Lazy::new(|| anchored(format!("{}_{}", BOOK, NUMBER)));
pub(crate) static VERSE_RANGE: Lazy<Regex> =
    Lazy::new(|| anchored(format!("{}-{}", bcvs(), vs())));
pub(crate) static CHAPTER_RANGE: Lazy<Regex> =
    Lazy::new(|| anchored(format!("{}{}{}", bcvs(), EN_DASH, cvs())));

pub(crate) static VERSE_RANGE_PLUS: Lazy<Regex> =
    Lazy::new(|| anchored(format!("{}-{},{}", bcvs(), vs(), vs())));
pub(crate) static VERSE_PLUS_RANGE: Lazy<Regex> =
    Lazy::new(|| anchored(format!("{},{}-{}", bcvs(), vs(), vs())));
pub(crate) static VERSE_PLUS_RANGE_PLUS: Lazy<Regex> =
    Lazy::new(|| anchored(format!("{},{}-{},{}", bcvs(), vs(), vs(), vs())));

static NUMBER_ONLY: Lazy<Regex> = Lazy::new(|| anchored(NUMBER.to_string()));

/// Whether `book` has the shape of a book code: three uppercase ASCII
/// letters or digits. Registry membership is checked separately.
pub(crate) fn is_book_shaped(book: &str) -> bool {
    book.len() == 3 && book.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Whether `label` can stand as a chapter or verse: one to three characters
/// with no separators, and in 1..199 when it is all digits.
pub(crate) fn is_valid_label(label: &str) -> bool {
    let len = label.chars().count();
    if !(1..=3).contains(&len) || label.contains(&SEPARATORS[..]) {
        return false;
    }
    !label.bytes().all(|b| b.is_ascii_digit()) || NUMBER_ONLY.is_match(label)
}

/// Whether `suffix` is empty or one of the allowed suffix letters.
pub(crate) fn is_valid_suffix(suffix: &str) -> bool {
    matches!(suffix, "" | "a" | "b" | "c" | "d" | "e" | "f")
}

/// Reads the capture groups of a match left to right.
///
/// Groups that did not participate (an absent suffix) read as `""`.
pub(crate) struct Fields<'t> {
    captures: Captures<'t>,
    next: usize,
}

impl<'t> Fields<'t> {
    pub(crate) fn match_text(grammar: &Regex, text: &'t str) -> Option<Self> {
        grammar
            .captures(text)
            .map(|captures| Fields { captures, next: 1 })
    }

    pub(crate) fn next_field(&mut self) -> &'t str {
        let field = self.captures.get(self.next).map_or("", |m| m.as_str());
        self.next += 1;
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_bounded() {
        assert!(VERSE.is_match("GEN_1:1"));
        assert!(VERSE.is_match("PSA_119:176"));
        assert!(VERSE.is_match("PSA_199:199"));
        assert!(!VERSE.is_match("PSA_200:1"));
        assert!(!VERSE.is_match("MAL_1234:1"));
        assert!(!VERSE.is_match("MAT_1:1234"));
        assert!(!VERSE.is_match("GEN_0:1"));
        assert!(!VERSE.is_match("GEN_01:1"));
    }

    #[test]
    fn test_book_alphabet() {
        assert!(VERSE.is_match("SA2_19:12"));
        assert!(!VERSE.is_match("2SA_19:12"));
        assert!(!VERSE.is_match("Gn_1:1"));
        assert!(!VERSE.is_match("GEN.1.1"));
        assert!(!VERSE.is_match("EXO 2:2"));
    }

    #[test]
    fn test_suffix_needs_a_letter() {
        assert!(VERSE.is_match("REV_11:12!b"));
        assert!(VERSE.is_match("REV_11:12!f"));
        assert!(!VERSE.is_match("REV_11:12!z"));
        assert!(!VERSE.is_match("REV_11:12!"));
        assert!(!VERSE.is_match("JNA_2:3b"));
    }

    #[test]
    fn test_fields_read_in_order() {
        let mut fields = Fields::match_text(&VERSES2, "REV_11:2!b,6").unwrap();
        assert_eq!(fields.next_field(), "REV");
        assert_eq!(fields.next_field(), "11");
        assert_eq!(fields.next_field(), "2");
        assert_eq!(fields.next_field(), "b");
        assert_eq!(fields.next_field(), "6");
        assert_eq!(fields.next_field(), "");
    }

    #[test]
    fn test_hyphen_and_en_dash_are_distinct() {
        assert!(VERSE_RANGE.is_match("SA2_19:12-19"));
        assert!(!VERSE_RANGE.is_match("SA2_19:12\u{2013}19"));
        assert!(CHAPTER_RANGE.is_match("SA2_12:22\u{2013}13:2"));
        assert!(!CHAPTER_RANGE.is_match("SA2_12:22-13:2"));
    }
}
