use crate::app::event::TimerGeneration;
use crate::audio::Cue;

/// Side effects requested by the handler, executed by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PlayCue(Cue),
    StartStopwatchTimer { generation: TimerGeneration },
    CancelStopwatchTimer,
    Quit,
}
