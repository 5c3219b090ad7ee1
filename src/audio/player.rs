use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::config::MAX_VOLUME;
use crate::library::Track;

use super::clock::PlaybackClock;
use super::sink::create_sink_at;
use super::types::{PlaybackError, PlaybackStatus};

/// Clamp `current + delta` into the supported volume range.
pub fn step_volume(current: f32, delta: f32) -> f32 {
    (current + delta).clamp(0.0, MAX_VOLUME)
}

/// Where a relative seek lands: never before zero, never past a known duration.
pub fn seek_target(elapsed: Duration, delta_secs: i64, duration: Option<Duration>) -> Duration {
    let delta = Duration::from_secs(delta_secs.unsigned_abs());
    let target = if delta_secs < 0 {
        elapsed.saturating_sub(delta)
    } else {
        elapsed + delta
    };
    match duration {
        Some(total) => target.min(total),
        None => target,
    }
}

/// Single-track player on the default output device.
pub struct Player {
    stream: OutputStream,
    sink: Option<Sink>,
    current: Option<Track>,
    clock: PlaybackClock,
    volume: f32,
}

impl Player {
    pub fn open(volume: f32) -> Result<Self, PlaybackError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped; that would garble the menu.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            current: None,
            clock: PlaybackClock::default(),
            volume: volume.clamp(0.0, MAX_VOLUME),
        })
    }

    /// Start `track` from the beginning, replacing whatever was playing.
    pub fn play(&mut self, track: &Track) -> Result<(), PlaybackError> {
        self.stop();

        let sink = create_sink_at(&self.stream, track, Duration::ZERO)?;
        sink.set_volume(self.volume);
        sink.play();

        tracing::info!("playing {}", track.path.display());
        self.sink = Some(sink);
        self.current = Some(track.clone());
        self.clock.start_at(Duration::ZERO);
        Ok(())
    }

    pub fn toggle_pause(&mut self) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        if sink.is_paused() {
            sink.play();
            self.clock.resume();
        } else {
            sink.pause();
            self.clock.pause();
        }
    }

    pub fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.current = None;
        self.clock.reset();
    }

    /// Seek by `delta_secs` (positive or negative) by rebuilding the sink at the new offset.
    pub fn seek_by(&mut self, delta_secs: i64) -> Result<(), PlaybackError> {
        let (Some(track), Some(old)) = (self.current.as_ref(), self.sink.as_ref()) else {
            return Ok(());
        };

        let target = seek_target(self.clock.elapsed(), delta_secs, track.duration);
        let paused = old.is_paused();

        let new_sink = create_sink_at(&self.stream, track, target)?;
        new_sink.set_volume(self.volume);
        old.stop();
        if !paused {
            new_sink.play();
        }

        tracing::debug!("seek to {}s", target.as_secs());
        self.sink = Some(new_sink);
        self.clock.seek_to(target);
        Ok(())
    }

    pub fn change_volume(&mut self, delta: f32) {
        self.volume = step_volume(self.volume, delta);
        if let Some(ref s) = self.sink {
            s.set_volume(self.volume);
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn elapsed(&self) -> Duration {
        match self.current.as_ref().and_then(|t| t.duration) {
            Some(total) => self.clock.elapsed().min(total),
            None => self.clock.elapsed(),
        }
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// True once the current track has played to its end.
    pub fn is_finished(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| !s.is_paused() && s.empty())
    }

    pub fn status(&self) -> PlaybackStatus {
        match self.sink.as_ref() {
            None => PlaybackStatus::Stopped,
            Some(s) if s.is_paused() => PlaybackStatus::Paused,
            Some(_) => PlaybackStatus::Playing,
        }
    }
}
