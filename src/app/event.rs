use crossterm::event::Event as CrosstermEvent;

/// Sequence number of a stopwatch tick timer. Bumped on every start and
/// stop, so ticks queued by a cancelled timer can be told apart.
pub type TimerGeneration = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Wall-clock refresh (1s)
    ClockTick,

    /// Stopwatch poll (10ms) from the timer of the given generation
    StopwatchTick { generation: TimerGeneration },
}
