#![doc(
    html_root_url = "https://docs.rs/verse-keys-books/0.1.0",
    issue_tracker_base_url = "https://github.com/Freely-Given-org/verse-keys/issues/"
)]

//! The standard book-code table for `verse-keys`.
//!
//! ```
//! use verse_keys::{ReferenceParser, ValidationConfig, VerseReference};
//! use verse_keys_books::BibleBooksCodes;
//!
//! let parser = ReferenceParser::new(BibleBooksCodes::standard())
//!     .with_config(ValidationConfig::strict());
//! assert!(parser.parse("SA2_19:12").is_ok());
//! assert!(parser.parse("ABC_1:1").is_err());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use verse_keys::{AbbreviationScheme, BookCodeRegistry};

/// One book of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookEntry {
    /// Our 3-character code, e.g. `SA2`.
    pub code: &'static str,
    /// OSIS book name, e.g. `2Sam`.
    pub osis: &'static str,
    /// USFM book identifier, e.g. `2SA`.
    pub usfm: &'static str,
    pub name: &'static str,
    /// Position in canonical book order, starting at 1.
    pub order: usize,
}

// (code, OSIS, USFM, English name), in canonical order.
const BOOKS: [(&str, &str, &str, &str); 73] = [
    ("GEN", "Gen", "GEN", "Genesis"),
    ("EXO", "Exod", "EXO", "Exodus"),
    ("LEV", "Lev", "LEV", "Leviticus"),
    ("NUM", "Num", "NUM", "Numbers"),
    ("DEU", "Deut", "DEU", "Deuteronomy"),
    ("JOS", "Josh", "JOS", "Joshua"),
    ("JDG", "Judg", "JDG", "Judges"),
    ("RUT", "Ruth", "RUT", "Ruth"),
    ("SA1", "1Sam", "1SA", "1 Samuel"),
    ("SA2", "2Sam", "2SA", "2 Samuel"),
    ("KI1", "1Kgs", "1KI", "1 Kings"),
    ("KI2", "2Kgs", "2KI", "2 Kings"),
    ("CH1", "1Chr", "1CH", "1 Chronicles"),
    ("CH2", "2Chr", "2CH", "2 Chronicles"),
    ("EZR", "Ezra", "EZR", "Ezra"),
    ("NEH", "Neh", "NEH", "Nehemiah"),
    ("EST", "Esth", "EST", "Esther"),
    ("JOB", "Job", "JOB", "Job"),
    ("PSA", "Ps", "PSA", "Psalms"),
    ("PRO", "Prov", "PRO", "Proverbs"),
    ("ECC", "Eccl", "ECC", "Ecclesiastes"),
    ("SNG", "Song", "SNG", "Song of Songs"),
    ("ISA", "Isa", "ISA", "Isaiah"),
    ("JER", "Jer", "JER", "Jeremiah"),
    ("LAM", "Lam", "LAM", "Lamentations"),
    ("EZE", "Ezek", "EZK", "Ezekiel"),
    ("DAN", "Dan", "DAN", "Daniel"),
    ("HOS", "Hos", "HOS", "Hosea"),
    ("JOL", "Joel", "JOL", "Joel"),
    ("AMO", "Amos", "AMO", "Amos"),
    ("OBA", "Obad", "OBA", "Obadiah"),
    ("JNA", "Jonah", "JON", "Jonah"),
    ("MIC", "Mic", "MIC", "Micah"),
    ("NAH", "Nah", "NAM", "Nahum"),
    ("HAB", "Hab", "HAB", "Habakkuk"),
    ("ZEP", "Zeph", "ZEP", "Zephaniah"),
    ("HAG", "Hag", "HAG", "Haggai"),
    ("ZEC", "Zech", "ZEC", "Zechariah"),
    ("MAL", "Mal", "MAL", "Malachi"),
    ("MAT", "Matt", "MAT", "Matthew"),
    ("MRK", "Mark", "MRK", "Mark"),
    ("LUK", "Luke", "LUK", "Luke"),
    ("JHN", "John", "JHN", "John"),
    ("ACT", "Acts", "ACT", "Acts"),
    ("ROM", "Rom", "ROM", "Romans"),
    ("CO1", "1Cor", "1CO", "1 Corinthians"),
    ("CO2", "2Cor", "2CO", "2 Corinthians"),
    ("GAL", "Gal", "GAL", "Galatians"),
    ("EPH", "Eph", "EPH", "Ephesians"),
    ("PHP", "Phil", "PHP", "Philippians"),
    ("COL", "Col", "COL", "Colossians"),
    ("TH1", "1Thess", "1TH", "1 Thessalonians"),
    ("TH2", "2Thess", "2TH", "2 Thessalonians"),
    ("TI1", "1Tim", "1TI", "1 Timothy"),
    ("TI2", "2Tim", "2TI", "2 Timothy"),
    ("TIT", "Titus", "TIT", "Titus"),
    ("PHM", "Phlm", "PHM", "Philemon"),
    ("HEB", "Heb", "HEB", "Hebrews"),
    ("JAM", "Jas", "JAS", "James"),
    ("PE1", "1Pet", "1PE", "1 Peter"),
    ("PE2", "2Pet", "2PE", "2 Peter"),
    ("JN1", "1John", "1JN", "1 John"),
    ("JN2", "2John", "2JN", "2 John"),
    ("JN3", "3John", "3JN", "3 John"),
    ("JDE", "Jude", "JUD", "Jude"),
    ("REV", "Rev", "REV", "Revelation"),
    ("TOB", "Tob", "TOB", "Tobit"),
    ("JDT", "Jdt", "JDT", "Judith"),
    ("WIS", "Wis", "WIS", "Wisdom of Solomon"),
    ("SIR", "Sir", "SIR", "Sirach"),
    ("BAR", "Bar", "BAR", "Baruch"),
    ("MA1", "1Macc", "1MA", "1 Maccabees"),
    ("MA2", "2Macc", "2MA", "2 Maccabees"),
];

static STANDARD: Lazy<BibleBooksCodes> = Lazy::new(BibleBooksCodes::new);

/// Read-only registry of the protestant canon plus common deuterocanonical
/// books.
#[derive(Debug, Clone)]
pub struct BibleBooksCodes {
    entries: Vec<BookEntry>,
    by_code: HashMap<&'static str, usize>,
}

impl BibleBooksCodes {
    pub fn new() -> Self {
        let entries: Vec<BookEntry> = BOOKS
            .iter()
            .enumerate()
            .map(|(index, &(code, osis, usfm, name))| BookEntry {
                code,
                osis,
                usfm,
                name,
                order: index + 1,
            })
            .collect();
        let by_code = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.code, index))
            .collect();
        BibleBooksCodes { entries, by_code }
    }

    /// A shared instance, built on first use.
    pub fn standard() -> &'static BibleBooksCodes {
        &STANDARD
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Option<&BookEntry> {
        self.by_code.get(code).map(|&index| &self.entries[index])
    }

    /// All books in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &BookEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BibleBooksCodes {
    fn default() -> Self {
        Self::new()
    }
}

impl BookCodeRegistry for BibleBooksCodes {
    fn is_valid_code(&self, code: &str) -> bool {
        self.contains(code)
    }

    fn canonical_abbreviation(&self, code: &str, scheme: AbbreviationScheme) -> Option<String> {
        let entry = self.get(code)?;
        let abbreviation = match scheme {
            AbbreviationScheme::Osis => entry.osis,
            AbbreviationScheme::Usfm => entry.usfm,
        };
        Some(abbreviation.to_string())
    }
}
