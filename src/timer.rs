//! Periodic tick tasks.
//!
//! A [`PeriodicTimer`] posts an event onto the application queue at a fixed
//! period until its handle is dropped or cancelled. Timers never touch state
//! themselves; all mutation happens on the event loop that drains the queue.

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

pub struct PeriodicTimer {
    name: &'static str,
    task: JoinHandle<()>,
}

impl PeriodicTimer {
    /// Spawn a task that sends `make_event()` every `period`, starting one
    /// period from now. The task ends on its own if the queue is closed.
    pub fn spawn<F>(
        name: &'static str,
        period: Duration,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        make_event: F,
    ) -> Self
    where
        F: Fn() -> AppEvent + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        debug!(timer = name, period_ms = period.as_millis() as u64, "timer started");
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            // Ticks re-sample real time, so a burst of catch-up ticks is useless.
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if event_tx.send(make_event()).is_err() {
                    break;
                }
            }
        });
        Self { name, task }
    }

    /// Stop the timer. Equivalent to dropping it.
    pub fn cancel(self) {}

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PeriodicTimer {
    fn drop(&mut self) {
        self.task.abort();
        debug!(timer = self.name, "timer cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> usize {
        let mut n = 0;
        while rx.try_recv().is_ok() {
            n += 1;
        }
        n
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_at_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = PeriodicTimer::spawn("test", Duration::from_millis(10), tx, || {
            AppEvent::ClockTick
        });

        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(drain(&mut rx), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        let n = drain(&mut rx);
        assert!((9..=11).contains(&n), "got {} ticks", n);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = PeriodicTimer::spawn("test", Duration::from_millis(10), tx, || {
            AppEvent::ClockTick
        });

        tokio::time::sleep(Duration::from_millis(55)).await;
        assert!(drain(&mut rx) >= 4);

        timer.cancel();
        // The aborted task drops the only sender, closing the queue.
        let mut late = 0;
        while rx.recv().await.is_some() {
            late += 1;
        }
        assert_eq!(late, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_queue_closed() {
        let (tx, rx) = mpsc::unbounded_channel();
        let timer = PeriodicTimer::spawn("test", Duration::from_millis(10), tx, || {
            AppEvent::ClockTick
        });
        drop(rx);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(timer.is_finished());
    }
}
