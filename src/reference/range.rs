use std::cmp::Ordering;
use std::fmt;

use super::single::leading_number;
use super::{SingleReference, VerseReference};
use crate::errors::ReferenceResult;
use crate::grammar::{self, Fields, EN_DASH};
use crate::parser::ReferenceParser;
use crate::versification::{Versification, ROLLOVER_VERSE_THRESHOLD, WHOLE_CHAPTER_END_VERSE};

/// Which range grammar matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// Hyphen, within one chapter: `JNA_2:1-7`
    Verses,
    /// En-dash, chapter-qualified end: `SA2_12:22–13:2`
    Chapters,
    /// Whole chapter shorthand: `GEN_18`
    WholeChapter,
}

/// An inclusive span of verses with its verse-by-verse expansion.
///
/// The expansion is computed once, when the range is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceRange {
    kind: RangeKind,
    start: SingleReference,
    end: SingleReference,
    verses: Vec<SingleReference>,
}

impl ReferenceRange {
    pub(crate) fn try_match(text: &str, parser: &ReferenceParser) -> ReferenceResult<Option<Self>> {
        if let Some(mut fields) = Fields::match_text(&grammar::VERSE_RANGE, text) {
            let book = fields.next_field();
            parser.check_book_code(book, text)?;
            let chapter = fields.next_field();
            let start = SingleReference::from_parts(book, chapter, fields.next_field(), fields.next_field());
            let end = SingleReference::from_parts(book, chapter, fields.next_field(), fields.next_field());
            return Self::from_endpoints(RangeKind::Verses, start, end, parser, text).map(Some);
        }

        if let Some(mut fields) = Fields::match_text(&grammar::CHAPTER_RANGE, text) {
            let book = fields.next_field();
            parser.check_book_code(book, text)?;
            let start = SingleReference::from_parts(
                book,
                fields.next_field(),
                fields.next_field(),
                fields.next_field(),
            );
            let end = SingleReference::from_parts(
                book,
                fields.next_field(),
                fields.next_field(),
                fields.next_field(),
            );
            return Self::from_endpoints(RangeKind::Chapters, start, end, parser, text).map(Some);
        }

        if let Some(mut fields) = Fields::match_text(&grammar::CHAPTER, text) {
            let book = fields.next_field();
            parser.check_book_code(book, text)?;
            let chapter = fields.next_field();
            let start = SingleReference::from_parts(book, chapter, "1", "");
            let end = SingleReference::from_parts(book, chapter, WHOLE_CHAPTER_END_VERSE.to_string(), "");
            let verses = whole_chapter(&start, parser.versification());
            return Ok(Some(Self {
                kind: RangeKind::WholeChapter,
                start,
                end,
                verses,
            }));
        }

        Ok(None)
    }

    /// Build a range between two verses of one book, checking their order.
    pub(crate) fn from_endpoints(
        kind: RangeKind,
        start: SingleReference,
        end: SingleReference,
        parser: &ReferenceParser,
        text: &str,
    ) -> ReferenceResult<Self> {
        parser.check_range_order(&start, &end, text)?;
        let verses = expand(kind, &start, &end, parser.versification());
        Ok(Self {
            kind,
            start,
            end,
            verses,
        })
    }

    pub fn kind(&self) -> RangeKind {
        self.kind
    }

    pub fn start(&self) -> &SingleReference {
        &self.start
    }

    pub fn end(&self) -> &SingleReference {
        &self.end
    }
}

fn number(field: &str) -> u32 {
    leading_number(field).unwrap_or(0)
}

/// Step through the range one verse at a time.
///
/// Only cross-chapter ranges roll over, after the versification's last
/// verse. Interior verses carry no suffix. A range that does not move
/// forward yields just its endpoints.
fn expand(
    kind: RangeKind,
    start: &SingleReference,
    end: &SingleReference,
    versification: &dyn Versification,
) -> Vec<SingleReference> {
    let mut verses = vec![start.clone()];
    if end.position_cmp(start) != Ordering::Greater {
        if end != start {
            verses.push(end.clone());
        }
        return verses;
    }

    let book = start.book();
    let target = (number(end.chapter()), number(end.verse()));
    let (mut chapter, mut verse) = (number(start.chapter()), number(start.verse()));
    loop {
        verse += 1;
        if kind == RangeKind::Chapters {
            let last = versification
                .last_verse(book, chapter)
                .unwrap_or(ROLLOVER_VERSE_THRESHOLD)
                .min(WHOLE_CHAPTER_END_VERSE);
            if verse > last {
                chapter += 1;
                verse = 1;
            }
        }
        if (chapter, verse) >= target {
            break;
        }
        let chapter_text = if kind == RangeKind::Chapters {
            chapter.to_string()
        } else {
            start.chapter().to_string()
        };
        verses.push(SingleReference::from_parts(book, chapter_text, verse.to_string(), ""));
    }
    verses.push(end.clone());
    verses
}

fn whole_chapter(start: &SingleReference, versification: &dyn Versification) -> Vec<SingleReference> {
    let last = versification
        .last_verse(start.book(), number(start.chapter()))
        .unwrap_or(ROLLOVER_VERSE_THRESHOLD)
        .min(WHOLE_CHAPTER_END_VERSE);
    (1..=last)
        .map(|verse| SingleReference::from_parts(start.book(), start.chapter(), verse.to_string(), ""))
        .collect()
}

impl VerseReference for ReferenceRange {
    fn book(&self) -> &str {
        self.start.book()
    }

    fn short_text(&self) -> String {
        match self.kind {
            RangeKind::Verses => format!("{}-{}", self.start.short_text(), self.end.short_verse()),
            RangeKind::Chapters => format!(
                "{}{}{}",
                self.start.short_text(),
                EN_DASH,
                self.end.short_chapter_verse()
            ),
            RangeKind::WholeChapter => format!("{} {}", self.start.book(), self.start.chapter()),
        }
    }

    fn verse_key_text(&self) -> String {
        match self.kind {
            RangeKind::Verses => format!("{}-{}", self.start.verse_key_text(), self.end.key_verse()),
            RangeKind::Chapters => format!(
                "{}{}{}",
                self.start.verse_key_text(),
                EN_DASH,
                self.end.key_chapter_verse()
            ),
            RangeKind::WholeChapter => format!("{}_{}", self.start.book(), self.start.chapter()),
        }
    }

    fn included_verses(&self) -> &[SingleReference] {
        &self.verses
    }
}

impl fmt::Display for ReferenceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_text())
    }
}
