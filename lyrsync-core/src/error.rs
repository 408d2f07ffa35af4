use thiserror::Error;

#[derive(Error, Debug)]
pub enum LyricsError {
    #[error("failed to read lyrics file: {0}")]
    Io(#[from] std::io::Error),

    #[error("lyrics file contains no lyric lines")]
    EmptyDocument,

    #[error("empty word in segment {segment}, line {line} (doubled space?)")]
    EmptyWord { segment: usize, line: usize },

    #[error("empty syllable in segment {segment}, line {line}, word {word}")]
    EmptySyllable {
        segment: usize,
        line: usize,
        word: usize,
    },
}
