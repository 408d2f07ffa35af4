use crate::clock::PlaybackClock;
use anyhow::{Context, Result};
use log::{debug, error};
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin};

/// Handle on an `mpg123 -R` child process.
///
/// Commands are one-way, newline-terminated writes to the child's stdin with
/// no acknowledgement. Status lines arrive on stderr (`--remote-err`) and
/// are drained by a background task that keeps the [`PlaybackClock`]
/// current; when the child exits the task ends at EOF and the clock simply
/// stops moving.
pub struct Mpg123Remote {
    child: Child,
    stdin: ChildStdin,
}

impl Mpg123Remote {
    /// Spawns the player in remote-control mode and starts the status reader.
    pub fn spawn(clock: PlaybackClock) -> Result<Self> {
        let mut child = tokio::process::Command::new("mpg123")
            .args(["-b", "512", "-R", "--remote-err"])
            .stdin(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("failed to spawn mpg123 (is it installed?)")?;

        let stdin = child.stdin.take().context("mpg123 stdin was not piped")?;
        let stderr = child.stderr.take().context("mpg123 stderr was not piped")?;

        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                clock.set(parse_elapsed(&line));
            }
            debug!("mpg123 status stream closed");
        });

        Ok(Self { child, stdin })
    }

    pub async fn load(&mut self, path: &Path) -> Result<()> {
        self.send(&format!("load {}", path.display())).await
    }

    /// Seeks to an absolute offset in seconds.
    pub async fn jump(&mut self, seconds: u64) -> Result<()> {
        self.send(&format!("J {seconds}s")).await
    }

    /// Toggles between paused and playing.
    pub async fn toggle_pause(&mut self) -> Result<()> {
        self.send("pause").await
    }

    /// Forcibly terminates the player; there is no shutdown handshake.
    pub async fn kill(&mut self) {
        if let Err(e) = self.child.kill().await {
            error!("failed to kill mpg123: {e}");
        }
    }

    async fn send(&mut self, command: &str) -> Result<()> {
        debug!("mpg123 <- {command}");
        self.stdin
            .write_all(format!("{command}\n").as_bytes())
            .await?;
        self.stdin.flush().await?;
        Ok(())
    }
}

/// Elapsed playback seconds from one status line.
///
/// Frame lines look like `@F <played> <left> <sec> <sec-left>`; the 4th
/// whitespace-separated field is the elapsed time. Any line that does not
/// parse counts as 0.0.
fn parse_elapsed(line: &str) -> f64 {
    line.split_whitespace()
        .nth(3)
        .and_then(|field| field.parse().ok())
        .unwrap_or(0.0)
}
