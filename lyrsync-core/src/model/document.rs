use crate::error::LyricsError;
use crate::model::{Position, Segment, Syllable, Word};
use std::fs;
use std::path::Path;

/// The parsed lyric transcript: segments of lines of words of syllables.
///
/// Blank lines separate segments, spaces separate words, `|` separates
/// syllables. The document exclusively owns the whole tree; callers address
/// syllables only through [`Position`] coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricDocument {
    segments: Vec<Segment>,
}

/// One repaint of the scrolling lyric display, keyed to a cursor position.
///
/// `sung` is the already-sung text (rendered emphasized), `upcoming` the
/// not-yet-sung remainder of the line (rendered muted). `line_break` is set
/// when the cursor just opened a new line, so the view scrolls the previous
/// line up before printing `upcoming`.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayWindow {
    pub sung: String,
    pub upcoming: String,
    pub line_break: bool,
}

impl LyricDocument {
    /// Reads and parses a lyric transcript file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LyricsError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Parses raw transcript text.
    ///
    /// Runs of blank lines act as segment separators (a trailing newline is a
    /// terminator, not an empty segment), so every parsed segment has at
    /// least one line. Empty words and empty syllables are rejected.
    pub fn parse(source: &str) -> Result<Self, LyricsError> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut current: Segment = Vec::new();

        for raw_line in source.lines() {
            if raw_line.is_empty() {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                continue;
            }

            let segment = segments.len();
            let line = current.len();
            let mut words: Vec<Word> = Vec::new();
            for word_text in raw_line.split(' ') {
                if word_text.is_empty() {
                    return Err(LyricsError::EmptyWord { segment, line });
                }
                let word: Word = word_text.split('|').map(Syllable::new).collect();
                if word.iter().any(|syllable| syllable.text.is_empty()) {
                    return Err(LyricsError::EmptySyllable {
                        segment,
                        line,
                        word: words.len(),
                    });
                }
                words.push(word);
            }
            current.push(words);
        }
        if !current.is_empty() {
            segments.push(current);
        }

        if segments.is_empty() {
            return Err(LyricsError::EmptyDocument);
        }
        Ok(Self { segments })
    }

    pub fn syllable(&self, pos: Position) -> &Syllable {
        &self.segments[pos.segment][pos.line][pos.word][pos.syllable]
    }

    pub fn update_start(&mut self, pos: Position, time: f64) {
        self.syllable_mut(pos).start = time;
    }

    pub fn update_end(&mut self, pos: Position, time: f64) {
        self.syllable_mut(pos).end = time;
    }

    /// The next position in reading order, odometer style: syllable, then
    /// word, then line, then segment. Past the last segment the cursor
    /// clamps to the document's last position, so advancing from the end is
    /// idempotent (terminal state, no wraparound).
    pub fn advance(&self, pos: Position) -> Position {
        let Position {
            mut segment,
            mut line,
            mut word,
            mut syllable,
        } = pos;

        syllable += 1;
        if syllable >= self.segments[segment][line][word].len() {
            syllable = 0;
            word += 1;
            if word >= self.segments[segment][line].len() {
                word = 0;
                line += 1;
                if line >= self.segments[segment].len() {
                    line = 0;
                    segment += 1;
                    if segment >= self.segments.len() {
                        return self.last_position();
                    }
                }
            }
        }

        Position {
            segment,
            line,
            word,
            syllable,
        }
    }

    /// Already-sung text of the cursor's line: one entry per whole word
    /// before the cursor, plus the sung prefix of the cursor's word.
    pub fn text_before(&self, pos: Position) -> Vec<String> {
        let line = &self.segments[pos.segment][pos.line];
        let mut past = flatten_words(&line[..pos.word]);
        past.push(join_syllables(&line[pos.word][..pos.syllable]));
        past
    }

    /// Not-yet-sung text of the cursor's line: the unsung suffix of the
    /// cursor's word, then one entry per whole word after it.
    pub fn text_after(&self, pos: Position) -> Vec<String> {
        let line = &self.segments[pos.segment][pos.line];
        let mut future = vec![join_syllables(&line[pos.word][pos.syllable..])];
        future.extend(flatten_words(&line[pos.word + 1..]));
        future
    }

    /// The display window one step ahead of `pos`.
    ///
    /// The window tracks `advance(pos)`: while that stays mid-line the sung
    /// part is the line's prefix, but when it opens a new line the whole
    /// previous line (last line of the previous segment at a segment
    /// boundary) is shown as sung and `line_break` asks the view to scroll.
    pub fn window(&self, pos: Position) -> DisplayWindow {
        let next = self.advance(pos);

        let sung = if next.at_line_start() && next.line > 0 {
            flatten_words(&self.segments[next.segment][next.line - 1]).join(" ")
        } else if next.at_line_start() && next.segment > 0 {
            let previous = &self.segments[next.segment - 1];
            flatten_words(&previous[previous.len() - 1]).join(" ")
        } else {
            self.text_before(next).join(" ")
        };

        DisplayWindow {
            sung,
            upcoming: self.text_after(next).join(" "),
            line_break: next.at_line_start() && next != Position::ORIGIN,
        }
    }

    /// Serializes to the timed-lyrics output format: one line per lyric
    /// line, words joined by single spaces, each word the concatenation of
    /// its syllables' bracketed timestamps, one blank line after every
    /// segment.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            for line in segment {
                let words: Vec<String> = line
                    .iter()
                    .map(|word| word.iter().map(Syllable::lrc).collect())
                    .collect();
                out.push_str(&words.join(" "));
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    fn syllable_mut(&mut self, pos: Position) -> &mut Syllable {
        &mut self.segments[pos.segment][pos.line][pos.word][pos.syllable]
    }

    fn last_position(&self) -> Position {
        let segment = self.segments.len() - 1;
        let line = self.segments[segment].len() - 1;
        let word = self.segments[segment][line].len() - 1;
        Position {
            segment,
            line,
            word,
            syllable: self.segments[segment][line][word].len() - 1,
        }
    }
}

fn join_syllables(syllables: &[Syllable]) -> String {
    syllables.iter().map(|s| s.text.as_str()).collect()
}

fn flatten_words(words: &[Word]) -> Vec<String> {
    words.iter().map(|word| join_syllables(word)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(source: &str) -> LyricDocument {
        LyricDocument::parse(source).unwrap()
    }

    fn pos(segment: usize, line: usize, word: usize, syllable: usize) -> Position {
        Position {
            segment,
            line,
            word,
            syllable,
        }
    }

    #[test]
    fn parse_splits_four_levels() {
        let doc = doc("do|re mi\nfa\n\nso|la");
        assert_eq!(doc.segments.len(), 2);
        assert_eq!(doc.segments[0].len(), 2);
        assert_eq!(doc.segments[0][0].len(), 2);
        assert_eq!(doc.segments[0][0][0].len(), 2);
        assert_eq!(doc.syllable(pos(0, 0, 0, 1)).text, "re");
        assert_eq!(doc.syllable(pos(1, 0, 0, 0)).text, "so");
    }

    #[test]
    fn parse_tolerates_blank_line_runs_and_trailing_newlines() {
        let doc = doc("a\n\n\nb\n\n");
        assert_eq!(doc.segments.len(), 2);
        assert!(doc.segments.iter().all(|segment| !segment.is_empty()));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            LyricDocument::parse(""),
            Err(LyricsError::EmptyDocument)
        ));
        assert!(matches!(
            LyricDocument::parse("\n\n"),
            Err(LyricsError::EmptyDocument)
        ));
    }

    #[test]
    fn parse_rejects_doubled_space() {
        assert!(matches!(
            LyricDocument::parse("a  b"),
            Err(LyricsError::EmptyWord { segment: 0, line: 0 })
        ));
    }

    #[test]
    fn parse_rejects_empty_syllable() {
        assert!(matches!(
            LyricDocument::parse("a||b"),
            Err(LyricsError::EmptySyllable {
                segment: 0,
                line: 0,
                word: 0
            })
        ));
        assert!(matches!(
            LyricDocument::parse("ok |bad"),
            Err(LyricsError::EmptySyllable { word: 1, .. })
        ));
    }

    #[test]
    fn advance_walks_reading_order() {
        let doc = doc("do|re mi\nfa\n\nso");
        let mut cursor = Position::ORIGIN;
        let expected = [
            pos(0, 0, 0, 1),
            pos(0, 0, 1, 0),
            pos(0, 1, 0, 0),
            pos(1, 0, 0, 0),
        ];
        for step in expected {
            cursor = doc.advance(cursor);
            assert_eq!(cursor, step);
        }
    }

    #[test]
    fn advance_is_strictly_monotonic_until_clamp() {
        let doc = doc("do|re mi\nfa|sol|la\n\nti do\nre");
        let mut cursor = Position::ORIGIN;
        loop {
            let next = doc.advance(cursor);
            if next == cursor {
                break;
            }
            assert!(next > cursor);
            cursor = next;
        }
    }

    #[test]
    fn advance_clamps_at_document_end() {
        let doc = doc("a b\n\nc|d");
        let last = pos(1, 0, 0, 1);
        assert_eq!(doc.advance(last), last);
        assert_eq!(doc.advance(doc.advance(last)), last);
    }

    #[test]
    fn text_before_and_after_split_the_current_word() {
        let doc = doc("hel|lo world");
        let cursor = pos(0, 0, 0, 1);
        assert_eq!(doc.text_before(cursor), vec!["hel".to_string()]);
        assert_eq!(
            doc.text_after(cursor),
            vec!["lo".to_string(), "world".to_string()]
        );
    }

    #[test]
    fn window_within_a_line_has_no_line_break() {
        let doc = doc("hel|lo world");
        let window = doc.window(Position::ORIGIN);
        assert!(!window.line_break);
        assert_eq!(window.sung, "hel");
        assert_eq!(window.upcoming, "lo world");
    }

    #[test]
    fn window_marks_line_boundary_and_shows_previous_line_as_sung() {
        let doc = doc("a b\nc d");
        // advancing off "b" lands on line 1
        let window = doc.window(pos(0, 0, 1, 0));
        assert!(window.line_break);
        assert_eq!(window.sung, "a b");
        assert_eq!(window.upcoming, "c d");
    }

    #[test]
    fn window_crosses_segment_boundary() {
        let doc = doc("a\n\nb c");
        let window = doc.window(pos(0, 0, 0, 0));
        assert!(window.line_break);
        assert_eq!(window.sung, "a");
        assert_eq!(window.upcoming, "b c");
    }

    #[test]
    fn window_at_terminal_position_is_stable() {
        let doc = doc("a b");
        let last = pos(0, 0, 1, 0);
        let window = doc.window(last);
        assert!(!window.line_break);
        assert_eq!(window.upcoming, "b");
    }

    #[test]
    fn serialize_concatenates_syllables_and_blank_line_per_segment() {
        let doc = doc("a|b c\n\nd");
        assert_eq!(
            doc.serialize(),
            "[00:00.00]a[00:00.00][00:00.00]b[00:00.00] [00:00.00]c[00:00.00]\n\n\
             [00:00.00]d[00:00.00]\n\n"
        );
        assert!(!doc.serialize().contains('|'));
    }

    #[test]
    fn updates_land_on_the_addressed_syllable() {
        let mut doc = doc("a|b");
        doc.update_start(pos(0, 0, 0, 1), 1.25);
        doc.update_end(pos(0, 0, 0, 1), 2.5);
        let syllable = doc.syllable(pos(0, 0, 0, 1));
        assert_eq!(syllable.start, 1.25);
        assert_eq!(syllable.end, 2.5);
        assert_eq!(syllable.lrc(), "[00:01.25]b[00:02.50]");
    }
}
