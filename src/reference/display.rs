use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::{CompoundElement, ListKind, RangeKind, Reference, SingleReference, VerseReference};
use crate::grammar::EN_DASH;

/// One underlined component of the canonical text.
struct Piece {
    /// Separator written before the component.
    lead: String,
    text: String,
    label: String,
}

impl Piece {
    fn new(lead: impl Into<String>, text: impl Into<String>, label: String) -> Self {
        Piece {
            lead: lead.into(),
            text: text.into(),
            label,
        }
    }
}

/// Renders a reference's canonical text with each component underlined and
/// labelled with its short text.
///
/// ```text
/// REV_11:2!b–12:6!a
/// ╰────────╯REV 11:2b
///            ╰────╯REV 12:6a
/// ```
pub struct ReferenceDisplay<'a> {
    reference: &'a Reference,
    include_verses: bool,
}

impl<'a> ReferenceDisplay<'a> {
    pub fn new(reference: &'a Reference) -> Self {
        ReferenceDisplay {
            reference,
            include_verses: false,
        }
    }

    /// Also list every included verse on a final line.
    pub fn with_included_verses(mut self) -> Self {
        self.include_verses = true;
        self
    }

    fn pieces(&self) -> Vec<Piece> {
        match self.reference {
            Reference::Single(single) => {
                vec![Piece::new("", single.verse_key_text(), single.short_text())]
            }
            Reference::List(list) => {
                let (first, rest) = match list.verses().split_first() {
                    Some(split) => split,
                    None => return Vec::new(),
                };
                let mut pieces = vec![Piece::new("", first.verse_key_text(), first.short_text())];
                for entry in rest {
                    pieces.push(match list.kind() {
                        ListKind::SameChapter => Piece::new(",", entry.key_verse(), entry.short_text()),
                        ListKind::CrossChapter => {
                            Piece::new(";", entry.key_chapter_verse(), entry.short_text())
                        }
                    });
                }
                pieces
            }
            Reference::Range(range) => match range.kind() {
                RangeKind::Verses => vec![
                    Piece::new("", range.start().verse_key_text(), range.start().short_text()),
                    Piece::new("-", range.end().key_verse(), range.end().short_text()),
                ],
                RangeKind::Chapters => vec![
                    Piece::new("", range.start().verse_key_text(), range.start().short_text()),
                    Piece::new(
                        EN_DASH.to_string(),
                        range.end().key_chapter_verse(),
                        range.end().short_text(),
                    ),
                ],
                RangeKind::WholeChapter => {
                    vec![Piece::new("", range.verse_key_text(), range.short_text())]
                }
            },
            Reference::Compound(compound) => compound
                .elements()
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    let text = element.verse_part(SingleReference::key_verse);
                    if index == 0 {
                        let first = first_verse(element);
                        let text = format!("{}_{}:{}", first.book(), first.chapter(), text);
                        Piece::new("", text, element.short_text())
                    } else {
                        Piece::new(",", text, element.short_text())
                    }
                })
                .collect(),
        }
    }
}

fn first_verse(element: &CompoundElement) -> &SingleReference {
    match element {
        CompoundElement::Verse(verse) => verse,
        CompoundElement::Range(range) => range.start(),
    }
}

impl<'a> fmt::Display for ReferenceDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pieces = self.pieces();
        let mut opening_line = String::new();
        let mut columns = Vec::with_capacity(pieces.len());
        for piece in &pieces {
            opening_line.push_str(&piece.lead);
            let start = UnicodeWidthStr::width(&*opening_line);
            opening_line.push_str(&piece.text);
            columns.push((start, UnicodeWidthStr::width(&*opening_line)));
        }

        f.write_str(&opening_line)?;

        for (piece, (start, end)) in pieces.iter().zip(columns) {
            f.write_char('\n')?;
            for _ in 0..start {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;
            for _ in (start + 1)..end.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end - start > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&piece.label)?;
        }

        if self.include_verses {
            let verses: Vec<String> = self
                .reference
                .included_verses()
                .iter()
                .map(|verse| verse.verse_key_text())
                .collect();
            write!(f, "\n= {}", verses.join(" "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferenceParser;

    const BOOKS: [&str; 4] = ["SA2", "REV", "EXO", "GEN"];

    fn display(text: &str) -> String {
        let parser = ReferenceParser::new(&BOOKS);
        let reference = parser.parse(text).unwrap();
        ReferenceDisplay::new(&reference).to_string()
    }

    #[test]
    fn test_single() {
        insta::assert_snapshot!(display("REV_11:12!b"), @r###"
        REV_11:12!b
        ╰─────────╯REV 11:12b
        "###);
    }

    #[test]
    fn test_list() {
        insta::assert_snapshot!(display("SA2_19:12,19"), @r###"
        SA2_19:12,19
        ╰───────╯SA2 19:12
                  ╰╯SA2 19:19
        "###);
    }

    #[test]
    fn test_cross_chapter_list() {
        insta::assert_snapshot!(display("GEN_1:1;2:4"), @r###"
        GEN_1:1;2:4
        ╰─────╯GEN 1:1
                ╰─╯GEN 2:4
        "###);
    }

    #[test]
    fn test_en_dash_is_one_column() {
        insta::assert_snapshot!(display("REV_11:2!b\u{2013}12:6!a"), @r###"
        REV_11:2!b–12:6!a
        ╰────────╯REV 11:2b
                   ╰────╯REV 12:6a
        "###);
    }

    #[test]
    fn test_compound() {
        insta::assert_snapshot!(display("EXO_1:1-3!a,4!c"), @r###"
        EXO_1:1-3!a,4!c
        ╰─────────╯EXO 1:1-3a
                    ╰─╯EXO 1:4c
        "###);
    }

    #[test]
    fn test_included_verses() {
        let parser = ReferenceParser::new(&BOOKS);
        let reference = parser.parse("GEN_1:1,3-4").unwrap();
        let display = ReferenceDisplay::new(&reference).with_included_verses();
        insta::assert_snapshot!(display, @r###"
        GEN_1:1,3-4
        ╰─────╯GEN 1:1
                ╰─╯GEN 1:3-4
        = GEN_1:1 GEN_1:3 GEN_1:4
        "###);
    }
}
