mod document;
mod position;
mod syllable;

pub use document::{DisplayWindow, LyricDocument};
pub use position::Position;
pub use syllable::Syllable;

/// A word is a run of syllables joined by `|` in the source text.
pub type Word = Vec<Syllable>;

/// A line of words, separated by single spaces in the source text.
pub type Line = Vec<Word>;

/// A segment (verse/chorus block), separated by blank lines in the source text.
pub type Segment = Vec<Line>;
