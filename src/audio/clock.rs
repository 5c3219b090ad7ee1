use std::time::{Duration, Instant};

/// Elapsed-time bookkeeping for the current track.
///
/// Time accumulates while running; pausing folds the running span into
/// `accumulated`. Seeking restarts from an explicit offset.
#[derive(Debug, Clone, Default)]
pub struct PlaybackClock {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl PlaybackClock {
    /// Start (or restart) running from `offset`.
    pub fn start_at(&mut self, offset: Duration) {
        self.accumulated = offset;
        self.started_at = Some(Instant::now());
    }

    /// Move to `offset` without changing whether the clock runs.
    pub fn seek_to(&mut self, offset: Duration) {
        self.accumulated = offset;
        if self.started_at.is_some() {
            self.started_at = Some(Instant::now());
        }
    }

    pub fn pause(&mut self) {
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
    }

    pub fn resume(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }
}
