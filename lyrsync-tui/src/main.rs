mod cli;
mod config;
mod session;
mod view;

use crate::cli::Cli;
use crate::config::Command;
use crate::session::TimingSession;
use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::debug;
use lyrsync_core::LyricDocument;
use lyrsync_play::{Mpg123Remote, PlaybackClock};
use std::io;
use std::time::Duration;

const POLL_DURATION: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let document = LyricDocument::load(&cli.lyricsfile)?;
    let mut session = TimingSession::new(document, cli.outputfile.clone());

    let clock = PlaybackClock::new();
    let mut player = Mpg123Remote::spawn(clock.clone())?;
    player.load(&cli.musicfile).await?;
    player.jump(cli.starttime).await?;

    enable_raw_mode()?;
    let outcome = run(&mut session, &mut player, &clock).await;
    disable_raw_mode()?;
    player.kill().await;

    outcome
}

/// The key loop: one event at a time, fully processed before the next.
async fn run(
    session: &mut TimingSession,
    player: &mut Mpg123Remote,
    clock: &PlaybackClock,
) -> Result<()> {
    let mut stdout = io::stdout();

    loop {
        if !event::poll(POLL_DURATION)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }

        match Command::from_key(key) {
            Command::Advance => {
                let window = session.advance(clock.elapsed());
                view::draw_window(&mut stdout, &window)?;
            }
            Command::MarkBreak => session.mark_break(clock.elapsed()),
            Command::Save => session.save()?,
            Command::TogglePause => player.toggle_pause().await?,
            Command::Quit => {
                debug!("quit requested");
                return Ok(());
            }
            Command::Nop => {}
        }
    }
}
