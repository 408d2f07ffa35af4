use anyhow::Result;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use lyrsync_core::DisplayWindow;
use std::io::{Stdout, Write};

/// Repaints the scrolling lyric line in place: sung text bold, upcoming text
/// dark grey. On a line break the finished line is left behind and the
/// upcoming line starts fresh below it.
pub fn draw_window(stdout: &mut Stdout, window: &DisplayWindow) -> Result<()> {
    queue!(
        stdout,
        Print('\r'),
        Clear(ClearType::CurrentLine),
        SetAttribute(Attribute::Bold),
        Print(&window.sung),
        SetAttribute(Attribute::Reset),
    )?;
    if window.line_break {
        // raw mode does no newline translation, move the cursor ourselves
        queue!(stdout, Print("\r\n"))?;
    }
    queue!(
        stdout,
        SetForegroundColor(Color::DarkGrey),
        Print(&window.upcoming),
        ResetColor
    )?;
    stdout.flush()?;

    Ok(())
}
