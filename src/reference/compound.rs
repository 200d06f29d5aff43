use std::fmt;

use super::{RangeKind, ReferenceRange, SingleReference, VerseReference};
use crate::errors::ReferenceResult;
use crate::grammar::{self, Fields};
use crate::parser::ReferenceParser;

/// Which compound grammar matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundKind {
    /// `GEN_1:1-3,4`
    RangeThenVerse,
    /// `GEN_1:1,3-4`
    VerseThenRange,
    /// `GEN_1:1,3-4,6`
    VerseRangeVerse,
}

/// One part of a [`CompoundReference`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompoundElement {
    Verse(SingleReference),
    Range(ReferenceRange),
}

impl CompoundElement {
    fn first_verse(&self) -> &SingleReference {
        match self {
            CompoundElement::Verse(verse) => verse,
            CompoundElement::Range(range) => range.start(),
        }
    }

    fn last_verse(&self) -> &SingleReference {
        match self {
            CompoundElement::Verse(verse) => verse,
            CompoundElement::Range(range) => range.end(),
        }
    }

    /// The element without its book and chapter, e.g. `3-4!a`.
    pub(crate) fn verse_part(&self, verse: fn(&SingleReference) -> String) -> String {
        match self {
            CompoundElement::Verse(single) => verse(single),
            CompoundElement::Range(range) => {
                format!("{}-{}", verse(range.start()), verse(range.end()))
            }
        }
    }
}

impl VerseReference for CompoundElement {
    fn book(&self) -> &str {
        self.first_verse().book()
    }

    fn short_text(&self) -> String {
        match self {
            CompoundElement::Verse(verse) => verse.short_text(),
            CompoundElement::Range(range) => range.short_text(),
        }
    }

    fn verse_key_text(&self) -> String {
        match self {
            CompoundElement::Verse(verse) => verse.verse_key_text(),
            CompoundElement::Range(range) => range.verse_key_text(),
        }
    }

    fn included_verses(&self) -> &[SingleReference] {
        match self {
            CompoundElement::Verse(verse) => verse.included_verses(),
            CompoundElement::Range(range) => range.included_verses(),
        }
    }
}

/// A same-chapter range flanked by one or two single verses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompoundReference {
    kind: CompoundKind,
    elements: Vec<CompoundElement>,
    verses: Vec<SingleReference>,
}

impl CompoundReference {
    pub(crate) fn try_match(text: &str, parser: &ReferenceParser) -> ReferenceResult<Option<Self>> {
        let grammars = [
            (&*grammar::VERSE_RANGE_PLUS, CompoundKind::RangeThenVerse),
            (&*grammar::VERSE_PLUS_RANGE, CompoundKind::VerseThenRange),
            (&*grammar::VERSE_PLUS_RANGE_PLUS, CompoundKind::VerseRangeVerse),
        ];

        for (pattern, kind) in grammars {
            let mut fields = match Fields::match_text(pattern, text) {
                Some(fields) => fields,
                None => continue,
            };

            let book = fields.next_field();
            parser.check_book_code(book, text)?;
            let chapter = fields.next_field();
            let mut next_verse =
                || SingleReference::from_parts(book, chapter, fields.next_field(), fields.next_field());
            let next_range = |start: SingleReference, end: SingleReference| {
                ReferenceRange::from_endpoints(RangeKind::Verses, start, end, parser, text)
                    .map(CompoundElement::Range)
            };

            let elements = match kind {
                CompoundKind::RangeThenVerse => {
                    let start = next_verse();
                    let end = next_verse();
                    let verse = next_verse();
                    vec![next_range(start, end)?, CompoundElement::Verse(verse)]
                }
                CompoundKind::VerseThenRange => {
                    let verse = next_verse();
                    let start = next_verse();
                    let end = next_verse();
                    vec![CompoundElement::Verse(verse), next_range(start, end)?]
                }
                CompoundKind::VerseRangeVerse => {
                    let before = next_verse();
                    let start = next_verse();
                    let end = next_verse();
                    let after = next_verse();
                    vec![
                        CompoundElement::Verse(before),
                        next_range(start, end)?,
                        CompoundElement::Verse(after),
                    ]
                }
            };

            for pair in elements.windows(2) {
                parser.check_separate(pair[0].last_verse(), pair[1].first_verse(), text)?;
            }

            let verses = elements
                .iter()
                .flat_map(|element| element.included_verses().iter().cloned())
                .collect();
            return Ok(Some(Self {
                kind,
                elements,
                verses,
            }));
        }

        Ok(None)
    }

    pub fn kind(&self) -> CompoundKind {
        self.kind
    }

    pub fn elements(&self) -> &[CompoundElement] {
        &self.elements
    }

    fn render(&self, book_separator: char, verse: fn(&SingleReference) -> String) -> String {
        let first = self.elements[0].first_verse();
        let parts: Vec<String> = self
            .elements
            .iter()
            .map(|element| element.verse_part(verse))
            .collect();
        format!(
            "{}{}{}:{}",
            first.book(),
            book_separator,
            first.chapter(),
            parts.join(",")
        )
    }
}

impl VerseReference for CompoundReference {
    fn book(&self) -> &str {
        self.elements[0].book()
    }

    fn short_text(&self) -> String {
        self.render(' ', SingleReference::short_verse)
    }

    fn verse_key_text(&self) -> String {
        self.render('_', SingleReference::key_verse)
    }

    fn included_verses(&self) -> &[SingleReference] {
        &self.verses
    }
}

impl fmt::Display for CompoundReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_text())
    }
}
