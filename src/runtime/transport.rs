use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, execute, queue};

use crate::app::{PlayOutcome, TrackPlayer};
use crate::audio::{Player, TransportCmd};
use crate::config::PlaybackSettings;
use crate::library::Track;
use crate::ui;

const POLL: Duration = Duration::from_millis(200);

/// Restores cooked mode when dropped, including on early returns.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Plays tracks on the default output device with single-key transport controls.
///
/// The device is opened on first use so that listing and downloading work on
/// machines without audio output.
pub struct TerminalPlayer {
    settings: PlaybackSettings,
    player: Option<Player>,
}

impl TerminalPlayer {
    pub fn new(settings: PlaybackSettings) -> Self {
        Self {
            settings,
            player: None,
        }
    }

    fn player(&mut self) -> anyhow::Result<&mut Player> {
        if self.player.is_none() {
            self.player = Some(Player::open(self.settings.volume)?);
        }
        self.player
            .as_mut()
            .context("audio output was not initialised")
    }

    fn draw_status(player: &Player, out: &mut impl Write) -> io::Result<()> {
        let Some(track) = player.current() else {
            return Ok(());
        };
        let line = ui::status_line(track, player.status(), player.elapsed(), player.volume());
        queue!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::CurrentLine)
        )?;
        write!(out, "{line}")?;
        out.flush()
    }

    fn transport_loop(&mut self, out: &mut impl Write) -> anyhow::Result<PlayOutcome> {
        let seek = i64::try_from(self.settings.seek_seconds).unwrap_or(i64::MAX);
        let step = self.settings.volume_step;
        let player = self.player()?;

        loop {
            Self::draw_status(player, out)?;

            if player.is_finished() {
                return Ok(PlayOutcome::Finished);
            }
            if !event::poll(POLL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(cmd) = TransportCmd::from_key(&key) else {
                continue;
            };

            tracing::debug!("transport: {cmd:?}");
            match cmd {
                TransportCmd::TogglePause => player.toggle_pause(),
                TransportCmd::SeekForward => player.seek_by(seek)?,
                TransportCmd::SeekBackward => player.seek_by(-seek)?,
                TransportCmd::VolumeUp => player.change_volume(step),
                TransportCmd::VolumeDown => player.change_volume(-step),
                TransportCmd::Stop => return Ok(PlayOutcome::Stopped),
                TransportCmd::Next => return Ok(PlayOutcome::Next),
                TransportCmd::Prev => return Ok(PlayOutcome::Prev),
            }
        }
    }
}

impl TrackPlayer for TerminalPlayer {
    fn play(&mut self, track: &Track) -> anyhow::Result<PlayOutcome> {
        self.player()?.play(track)?;

        let mut stdout = io::stdout();
        writeln!(stdout, "{}", ui::controls_text(self.settings.seek_seconds))?;

        let outcome = {
            let _raw = RawModeGuard::enable()?;
            self.transport_loop(&mut stdout)
        };

        if let Some(p) = self.player.as_mut() {
            p.stop();
        }
        execute!(stdout, cursor::MoveToColumn(0))?;
        writeln!(stdout)?;
        outcome
    }
}
