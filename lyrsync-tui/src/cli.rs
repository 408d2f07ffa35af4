use clap::Parser;
use std::path::PathBuf;

/// Sync lyrics to music.
///
/// Plays the track, then: space taps the next syllable, `b` marks a musical
/// break, `p` toggles pause, `s` saves the timed lyrics, `q` quits.
#[derive(Parser, Debug)]
#[command(name = "lyrsync")]
pub struct Cli {
    /// Lyric transcript; `|` splits syllables, blank lines split segments
    #[arg(short = 'l', long)]
    pub lyricsfile: PathBuf,

    /// Audio track to play back
    #[arg(short = 'm', long)]
    pub musicfile: PathBuf,

    /// Playback start offset in seconds
    #[arg(short = 's', long)]
    pub starttime: u64,

    /// Where the timed lyrics are written on save
    #[arg(short = 'o', long)]
    pub outputfile: PathBuf,
}
