//! Stopwatch timing state: elapsed time, run flag and laps.
//!
//! Elapsed time is sampled against an anchor (`now - elapsed` at the moment of
//! starting) instead of being incremented per tick, so late or skipped ticks
//! never skew the reading.

pub mod format;

pub use format::format_elapsed;

use crate::audio::Cue;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stopwatch {
    elapsed_ms: u64,
    running: bool,
    laps: Vec<u64>,
    anchor_ms: u64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start when stopped (resuming from the frozen elapsed time), stop when
    /// running. Returns the cue for the transition taken.
    pub fn toggle_run(&mut self, now_ms: u64) -> Cue {
        if self.running {
            self.running = false;
            Cue::Stop
        } else {
            self.anchor_ms = now_ms.saturating_sub(self.elapsed_ms);
            self.running = true;
            Cue::Start
        }
    }

    /// Stop and clear everything. Valid in any state.
    pub fn reset(&mut self) -> Cue {
        self.running = false;
        self.elapsed_ms = 0;
        self.laps.clear();
        Cue::Reset
    }

    /// Record the current elapsed time as a lap. Ignored while stopped.
    pub fn lap(&mut self) -> Option<Cue> {
        if !self.running {
            return None;
        }
        self.laps.push(self.elapsed_ms);
        Some(Cue::Lap)
    }

    /// Re-sample elapsed time from the anchor. No-op while stopped.
    pub fn tick(&mut self, now_ms: u64) {
        if !self.running {
            return;
        }
        // Elapsed never decreases while running.
        self.elapsed_ms = self
            .elapsed_ms
            .max(now_ms.saturating_sub(self.anchor_ms));
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    /// Lap-to-lap durations; the first split is the first lap itself.
    pub fn splits(&self) -> impl Iterator<Item = u64> + '_ {
        self.laps.iter().scan(0u64, |prev, &lap| {
            let split = lap.saturating_sub(*prev);
            *prev = lap;
            Some(split)
        })
    }
}
