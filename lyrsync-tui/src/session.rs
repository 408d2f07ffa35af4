use anyhow::{Context, Result};
use log::info;
use lyrsync_core::{DisplayWindow, LyricDocument, Position};
use std::fs;
use std::path::PathBuf;

/// Drives the timing cursor over the document in response to key commands.
///
/// `cursor` is `None` until the first tap, so that tap opens the first
/// syllable without closing any interval. `pending_break` suppresses the
/// close-interval step of the advance that follows a marked musical pause.
pub struct TimingSession {
    document: LyricDocument,
    output_path: PathBuf,
    cursor: Option<Position>,
    pending_break: bool,
}

impl TimingSession {
    pub fn new(document: LyricDocument, output_path: PathBuf) -> Self {
        Self {
            document,
            output_path,
            cursor: None,
            pending_break: false,
        }
    }

    pub fn document(&self) -> &LyricDocument {
        &self.document
    }

    /// Tap: close the current syllable at `now` (unless a break was marked),
    /// open the next one, and hand back the window to redraw.
    ///
    /// At the document's end the cursor stays clamped on the last syllable
    /// and further taps keep re-stamping it.
    pub fn advance(&mut self, now: f64) -> DisplayWindow {
        let next = match self.cursor {
            Some(current) => self.document.advance(current),
            None => Position::ORIGIN,
        };

        if let Some(current) = self.cursor {
            if !self.pending_break {
                self.document.update_end(current, now);
            }
        }
        self.document.update_start(next, now);

        self.cursor = Some(next);
        self.pending_break = false;
        self.document.window(next)
    }

    /// Musical pause: close the current syllable now. No cursor move, no
    /// redraw.
    pub fn mark_break(&mut self, now: f64) {
        if let Some(current) = self.cursor {
            self.document.update_end(current, now);
        }
        self.pending_break = true;
    }

    /// Writes the timed document, replacing any previous contents.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.output_path, self.document.serialize())
            .with_context(|| format!("failed to write {}", self.output_path.display()))?;
        info!("saved timed lyrics to {}", self.output_path.display());
        Ok(())
    }
}
