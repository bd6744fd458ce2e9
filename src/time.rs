//! Time sources.
//!
//! The stopwatch measures against a monotonic millisecond counter, the clock
//! panel against local wall-clock time. Both come from one [`TimeSource`] so
//! tests can drive them by hand.

use chrono::{DateTime, Local};
use std::time::Instant;

pub trait TimeSource: Send + Sync {
    /// Milliseconds since an arbitrary fixed origin. Never goes backwards.
    fn now_ms(&self) -> u64;

    /// Current local wall-clock time.
    fn wall_now(&self) -> DateTime<Local>;
}

/// Real time: `Instant` for the monotonic counter, `chrono::Local` for the wall.
pub struct SystemTimeSource {
    origin: Instant,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource for SystemTimeSource {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn wall_now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
pub use manual::ManualTimeSource;

#[cfg(test)]
mod manual {
    use super::TimeSource;
    use chrono::{DateTime, Duration, Local, TimeZone};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Hand-advanced time for tests. The wall clock starts at a fixed local
    /// date and moves together with the monotonic counter.
    pub struct ManualTimeSource {
        ms: AtomicU64,
        wall_origin: DateTime<Local>,
    }

    impl ManualTimeSource {
        pub fn new() -> Self {
            let wall_origin = Local
                .with_ymd_and_hms(2024, 3, 9, 14, 5, 0)
                .single()
                .unwrap_or_else(Local::now);
            Self {
                ms: AtomicU64::new(10_000),
                wall_origin,
            }
        }

        pub fn advance(&self, ms: u64) {
            self.ms.fetch_add(ms, Ordering::SeqCst);
        }
    }

    impl TimeSource for ManualTimeSource {
        fn now_ms(&self) -> u64 {
            self.ms.load(Ordering::SeqCst)
        }

        fn wall_now(&self) -> DateTime<Local> {
            self.wall_origin + Duration::milliseconds(self.now_ms() as i64)
        }
    }
}
