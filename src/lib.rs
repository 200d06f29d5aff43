#![doc(
    html_root_url = "https://docs.rs/verse-keys/0.1.0",
    issue_tracker_base_url = "https://github.com/Freely-Given-org/verse-keys/issues/"
)]

//! Parser and canonicalizer for our internal Bible verse references.
//!
//! The native reference format is tightly defined, e.g. `GEN_1:1`,
//! `EXO_20:10`, `CH2_7:6` or `JDE_1:2!b`:
//!
//! - the book code is always three UPPERCASE characters
//! - `_` separates book from chapter, `:` separates chapter from verse
//! - chapter and verse fields are kept as strings
//! - a verse may carry a `!` plus one lowercase suffix letter marking a very
//!   approximate portion of the verse (`a` first half, `b` second half,
//!   `c` final third, `d` final quarter; `e` and `f` are accepted but have no
//!   assigned meaning)
//! - no spaces are ever allowed
//!
//! Ranges are inclusive. A hyphen spans verses within one chapter
//! (`GEN_1:1-2`), an en-dash spans chapters (`GEN_1:1–2:3`).
//!
//! ## Shapes
//!
//! - [`SingleReference`] - one verse (`SA2_19:12`)
//! - [`ReferenceList`] - two or three separate verses (`MAT_6:1,4`, `MAT_6:1;7:2`)
//! - [`ReferenceRange`] - an inclusive span (`JNA_2:1-7`, `SA2_12:22–13:2`, `GEN_18`)
//! - [`CompoundReference`] - a range flanked by single verses (`GEN_1:1,3-4`)
//!
//! [`ReferenceParser`] tries each grammar in a fixed order and returns a
//! [`Reference`]. Every shape implements [`VerseReference`].
//!
//! ## Example
//!
//! ```
//! use verse_keys::{Reference, ReferenceParser, VerseReference};
//!
//! let books = ["SA2", "REV"];
//! let parser = ReferenceParser::new(&books);
//!
//! let reference = parser.parse("SA2_19:12-19").unwrap();
//! assert!(matches!(reference, Reference::Range(_)));
//! assert_eq!(reference.included_verses().len(), 8);
//! assert_eq!(reference.short_text(), "SA2 19:12-19");
//! ```

mod books;
mod config;
mod errors;
mod grammar;
mod parser;
mod reference;
mod versification;

pub use books::{AbbreviationScheme, BookCodeRegistry};
pub use config::ValidationConfig;
pub use errors::{ReferenceError, ReferenceResult};
pub use parser::ReferenceParser;
pub use reference::{
    CompoundElement, CompoundKind, CompoundReference, ListKind, RangeKind, Reference,
    ReferenceDisplay, ReferenceList, ReferenceRange, ReferenceShape, SingleReference,
    VerseReference,
};
pub use versification::{
    SentinelVersification, Versification, ROLLOVER_VERSE_THRESHOLD, WHOLE_CHAPTER_END_VERSE,
};
