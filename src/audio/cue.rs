use super::tone::Tone;
use std::time::Duration;

/// Feedback cue emitted by a stopwatch transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Start,
    Stop,
    Reset,
    Lap,
}

impl Cue {
    pub fn tone(self) -> Tone {
        let (frequency_hz, ms) = match self {
            Cue::Start => (800.0, 150),
            Cue::Stop => (600.0, 150),
            Cue::Reset => (400.0, 200),
            Cue::Lap => (1000.0, 100),
        };
        Tone::new(frequency_hz, Duration::from_millis(ms))
    }
}
