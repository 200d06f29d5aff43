use std::fmt;

use super::{SingleReference, VerseReference};
use crate::errors::ReferenceResult;
use crate::grammar::{self, Fields};
use crate::parser::ReferenceParser;

/// Which list grammar matched; only affects how the list re-serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Verses of one chapter: `MAT_6:1,4`
    SameChapter,
    /// Chapter-qualified entries: `MAT_6:1;7:2`
    CrossChapter,
}

/// Two or three separate verses of one book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceList {
    kind: ListKind,
    verses: Vec<SingleReference>,
}

impl ReferenceList {
    pub(crate) fn try_match(text: &str, parser: &ReferenceParser) -> ReferenceResult<Option<Self>> {
        let grammars = [
            (&*grammar::VERSES2, ListKind::SameChapter, 2),
            (&*grammar::VERSES2C, ListKind::CrossChapter, 2),
            (&*grammar::VERSES3, ListKind::SameChapter, 3),
            (&*grammar::VERSES3C, ListKind::CrossChapter, 3),
        ];

        for (pattern, kind, count) in grammars {
            let mut fields = match Fields::match_text(pattern, text) {
                Some(fields) => fields,
                None => continue,
            };

            let book = fields.next_field();
            parser.check_book_code(book, text)?;

            let mut chapter = fields.next_field();
            let mut verses = Vec::with_capacity(count);
            for index in 0..count {
                if kind == ListKind::CrossChapter && index > 0 {
                    chapter = fields.next_field();
                }
                let verse = fields.next_field();
                let suffix = fields.next_field();
                verses.push(SingleReference::from_parts(book, chapter, verse, suffix));
            }

            for pair in verses.windows(2) {
                parser.check_separate(&pair[0], &pair[1], text)?;
            }

            return Ok(Some(Self { kind, verses }));
        }

        Ok(None)
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// The listed verses, in order.
    pub fn verses(&self) -> &[SingleReference] {
        &self.verses
    }

    fn render(
        &self,
        book_separator: char,
        chapter_verse: fn(&SingleReference) -> String,
        verse: fn(&SingleReference) -> String,
    ) -> String {
        let first = &self.verses[0];
        let mut text = format!("{}{}{}", first.book(), book_separator, chapter_verse(first));
        for entry in &self.verses[1..] {
            match self.kind {
                ListKind::SameChapter => {
                    text.push(',');
                    text.push_str(&verse(entry));
                }
                ListKind::CrossChapter => {
                    text.push(';');
                    text.push_str(&chapter_verse(entry));
                }
            }
        }
        text
    }
}

impl VerseReference for ReferenceList {
    fn book(&self) -> &str {
        self.verses[0].book()
    }

    fn short_text(&self) -> String {
        self.render(
            ' ',
            SingleReference::short_chapter_verse,
            SingleReference::short_verse,
        )
    }

    fn verse_key_text(&self) -> String {
        self.render('_', SingleReference::key_chapter_verse, SingleReference::key_verse)
    }

    fn included_verses(&self) -> &[SingleReference] {
        &self.verses
    }
}

impl fmt::Display for ReferenceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationConfig;
    use crate::errors::ReferenceError;

    const BOOKS: [&str; 3] = ["SA2", "REV", "MAT"];

    #[test]
    fn test_same_chapter_pair() {
        let parser = ReferenceParser::new(&BOOKS);
        let list = parser.parse_list("SA2_19:12,19").unwrap();
        assert_eq!(list.kind(), ListKind::SameChapter);
        assert_eq!(list.verses().len(), 2);
        assert_eq!(list.verses()[0].cv(), ("19", "12"));
        assert_eq!(list.verses()[1].cv(), ("19", "19"));
        assert_eq!(list.verse_key_text(), "SA2_19:12,19");
        assert_eq!(list.short_text(), "SA2 19:12,19");
    }

    #[test]
    fn test_suffixes_survive() {
        let parser = ReferenceParser::new(&BOOKS);
        let list = parser.parse_list("REV_11:2!b,6!a").unwrap();
        assert_eq!(list.verses()[0].suffix(), "b");
        assert_eq!(list.verses()[1].suffix(), "a");
        assert_eq!(list.verse_key_text(), "REV_11:2!b,6!a");
        assert_eq!(list.short_text(), "REV 11:2b,6a");
    }

    #[test]
    fn test_three_entries() {
        let parser = ReferenceParser::new(&BOOKS);
        let list = parser.parse_list("MAT_6:1,4,9").unwrap();
        let verses: Vec<&str> = list.included_verses().iter().map(|v| v.verse()).collect();
        assert_eq!(verses, vec!["1", "4", "9"]);
    }

    #[test]
    fn test_cross_chapter_entries() {
        let parser = ReferenceParser::new(&BOOKS);
        let list = parser.parse_list("MAT_6:1;7:2;8:3!c").unwrap();
        assert_eq!(list.kind(), ListKind::CrossChapter);
        let chapters: Vec<&str> = list.verses().iter().map(|v| v.chapter()).collect();
        assert_eq!(chapters, vec!["6", "7", "8"]);
        assert_eq!(list.verse_key_text(), "MAT_6:1;7:2;8:3!c");
        assert_eq!(list.short_text(), "MAT 6:1;7:2;8:3c");
    }

    #[test]
    fn test_contiguous_verses_tolerated_when_lenient() {
        let parser = ReferenceParser::new(&BOOKS);
        assert!(parser.parse_list("MAT_6:1,2").is_ok());
    }

    #[test]
    fn test_contiguous_verses_rejected_when_strict() {
        let parser = ReferenceParser::new(&BOOKS).with_config(ValidationConfig::strict());
        assert_eq!(
            parser.parse_list("MAT_6:1,2").unwrap_err(),
            ReferenceError::InvalidListOrder("MAT_6:1,2".to_string())
        );
        assert_eq!(
            parser.parse_list("MAT_6:9,4").unwrap_err().name(),
            "InvalidListOrder"
        );
        assert_eq!(
            parser.parse_list("MAT_7:1;6:4").unwrap_err().name(),
            "InvalidListOrder"
        );
        // different halves of neighbouring verses are fine
        assert!(parser.parse_list("MAT_6:1!b,2!a").is_ok());
        assert!(parser.parse_list("MAT_6:1;7:2").is_ok());
    }

    #[test]
    fn test_malformed_lists() {
        let parser = ReferenceParser::new(&BOOKS);
        for text in ["LEV_3,9", "SA2_19:12,321", "REV_11:12!a,!c", "MAT_6:1"] {
            assert_eq!(
                parser.parse_list(text).unwrap_err(),
                ReferenceError::MalformedReference(text.to_string())
            );
        }
    }
}
