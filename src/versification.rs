//! Chapter lengths used when a range crosses a chapter boundary.

/// Verse number after which cross-chapter expansion rolls into the next
/// chapter when no real chapter length is known.
pub const ROLLOVER_VERSE_THRESHOLD: u32 = 222;

/// Placeholder end verse of a whole-chapter reference such as `GEN_18`.
pub const WHOLE_CHAPTER_END_VERSE: u32 = 999;

/// Supplies the last verse number of a chapter.
pub trait Versification: Send + Sync {
    /// Last verse of `chapter` in `book`, or `None` if unknown.
    fn last_verse(&self, book: &str, chapter: u32) -> Option<u32>;
}

/// Treats every chapter as ending at [`ROLLOVER_VERSE_THRESHOLD`].
///
/// This is only an approximation: expanded cross-chapter ranges will list
/// verses that do not exist. Inject a real [`Versification`] to avoid that.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentinelVersification;

impl Versification for SentinelVersification {
    fn last_verse(&self, _book: &str, _chapter: u32) -> Option<u32> {
        Some(ROLLOVER_VERSE_THRESHOLD)
    }
}
