use crate::app::event::TimerGeneration;
use crate::clock::ClockSource;
use crate::config::AppConfig;
use crate::stopwatch::Stopwatch;
use crate::time::TimeSource;
use crate::ui::layout::{self, AppLayout};
use ratatui::layout::Rect;
use std::sync::Arc;

/// User toggles. Independent of timing state and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub sound_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            sound_enabled: true,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub time: Arc<dyn TimeSource>,
    pub clock: ClockSource,
    pub stopwatch: Stopwatch,
    pub prefs: Preferences,
    /// Generation of the stopwatch timer whose ticks are applied.
    pub tick_generation: TimerGeneration,
    /// Lap list rows scrolled up from the newest lap; 0 follows the tail.
    pub lap_scroll_offset: usize,
    /// Last known terminal size, for mouse hit testing.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, time: Arc<dyn TimeSource>) -> Self {
        let clock = ClockSource::new(
            time.wall_now(),
            &config.ui.time_format,
            &config.ui.date_format,
        );
        let prefs = Preferences {
            dark_mode: config.ui.dark_mode,
            sound_enabled: config.sound.enabled,
        };
        Self {
            config,
            time,
            clock,
            stopwatch: Stopwatch::new(),
            prefs,
            tick_generation: 0,
            lap_scroll_offset: 0,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn layout(&self) -> AppLayout {
        layout::compute_layout(self.viewport, !self.stopwatch.laps().is_empty())
    }

    /// Number of lap rows that fit in the lap panel.
    pub fn visible_lap_rows(&self) -> usize {
        self.layout()
            .laps
            .map(|r| r.height.saturating_sub(2) as usize)
            .unwrap_or(0)
    }

    pub fn max_lap_scroll(&self) -> usize {
        self.stopwatch
            .laps()
            .len()
            .saturating_sub(self.visible_lap_rows())
    }

    pub fn scroll_laps_up(&mut self, rows: usize) {
        self.lap_scroll_offset = self
            .lap_scroll_offset
            .saturating_add(rows)
            .min(self.max_lap_scroll());
        self.dirty = true;
    }

    pub fn scroll_laps_down(&mut self, rows: usize) {
        self.lap_scroll_offset = self.lap_scroll_offset.saturating_sub(rows);
        self.dirty = true;
    }

    /// Show sound as muted once the output can no longer play.
    pub fn audio_lost(&mut self) {
        if self.prefs.sound_enabled {
            self.prefs.sound_enabled = false;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        let laps = self.stopwatch.laps().len();
        let mut s = if self.stopwatch.is_running() {
            "Running".to_string()
        } else if self.stopwatch.elapsed_ms() > 0 {
            "Paused".to_string()
        } else {
            "Ready".to_string()
        };
        if laps > 0 {
            s.push_str(&format!(" | Laps: {}", laps));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualTimeSource;

    fn state() -> AppState {
        let mut s = AppState::new(AppConfig::default(), Arc::new(ManualTimeSource::new()));
        s.viewport = Rect::new(0, 0, 80, 30);
        s
    }

    #[test]
    fn test_prefs_from_config() {
        let mut cfg = AppConfig::default();
        cfg.ui.dark_mode = false;
        cfg.sound.enabled = false;
        let s = AppState::new(cfg, Arc::new(ManualTimeSource::new()));
        assert_eq!(
            s.prefs,
            Preferences {
                dark_mode: false,
                sound_enabled: false
            }
        );
        assert!(Preferences::default().dark_mode);
    }

    #[test]
    fn test_lap_scroll_is_clamped() {
        let mut s = state();
        s.stopwatch.toggle_run(0);
        for t in 1..=40 {
            s.stopwatch.tick(t * 100);
            s.stopwatch.lap();
        }
        let rows = s.visible_lap_rows();
        assert!(rows > 0 && rows < 40);

        s.scroll_laps_up(1_000);
        assert_eq!(s.lap_scroll_offset, 40 - rows);
        s.scroll_laps_down(3);
        assert_eq!(s.lap_scroll_offset, 40 - rows - 3);
        s.scroll_laps_down(1_000);
        assert_eq!(s.lap_scroll_offset, 0);
    }

    #[test]
    fn test_status_line() {
        let mut s = state();
        assert_eq!(s.status_line(), "Ready");
        s.stopwatch.toggle_run(0);
        s.stopwatch.tick(10);
        s.stopwatch.lap();
        assert_eq!(s.status_line(), "Running | Laps: 1");
        s.stopwatch.toggle_run(10);
        assert_eq!(s.status_line(), "Paused | Laps: 1");
    }

    #[test]
    fn test_audio_lost_mutes_sound() {
        let mut s = state();
        s.dirty = false;
        s.audio_lost();
        assert!(!s.prefs.sound_enabled);
        assert!(s.dirty);

        // Already muted: nothing to redraw.
        s.dirty = false;
        s.audio_lost();
        assert!(!s.dirty);
    }
}
