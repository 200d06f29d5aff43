//! The four reference shapes and the sum type over them.

mod compound;
mod display;
mod list;
mod range;
mod single;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::compound::{CompoundElement, CompoundKind, CompoundReference};
pub use self::display::ReferenceDisplay;
pub use self::list::{ListKind, ReferenceList};
pub use self::range::{RangeKind, ReferenceRange};
pub use self::single::SingleReference;

pub(crate) use self::single::leading_number;

/// Capabilities shared by every reference shape.
pub trait VerseReference {
    /// The 3-character book code.
    fn book(&self) -> &str;

    /// Human-readable form, e.g. `SA2 19:12b`.
    fn short_text(&self) -> String;

    /// Canonical machine form, e.g. `SA2_19:12!b`. Parses back to an equal value.
    fn verse_key_text(&self) -> String;

    /// Every atomic verse touched by this reference, in order.
    fn included_verses(&self) -> &[SingleReference];
}

/// A parsed reference of any shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    Single(SingleReference),
    List(ReferenceList),
    Range(ReferenceRange),
    Compound(CompoundReference),
}

/// The shape of a [`Reference`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceShape {
    Single,
    List,
    Range,
    Compound,
}

impl Reference {
    pub fn shape(&self) -> ReferenceShape {
        match self {
            Reference::Single(_) => ReferenceShape::Single,
            Reference::List(_) => ReferenceShape::List,
            Reference::Range(_) => ReferenceShape::Range,
            Reference::Compound(_) => ReferenceShape::Compound,
        }
    }

    fn as_verse_reference(&self) -> &dyn VerseReference {
        match self {
            Reference::Single(single) => single,
            Reference::List(list) => list,
            Reference::Range(range) => range,
            Reference::Compound(compound) => compound,
        }
    }
}

impl VerseReference for Reference {
    fn book(&self) -> &str {
        self.as_verse_reference().book()
    }

    fn short_text(&self) -> String {
        self.as_verse_reference().short_text()
    }

    fn verse_key_text(&self) -> String {
        self.as_verse_reference().verse_key_text()
    }

    fn included_verses(&self) -> &[SingleReference] {
        self.as_verse_reference().included_verses()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_text())
    }
}

impl fmt::Display for ReferenceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceShape::Single => "single",
            ReferenceShape::List => "list",
            ReferenceShape::Range => "range",
            ReferenceShape::Compound => "compound",
        };
        f.write_str(name)
    }
}
