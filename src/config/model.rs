//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

use crate::clock::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Appearance settings. `dark_mode` is only the starting theme; toggling it
/// at runtime is not written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// strftime pattern for the clock line.
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// strftime pattern for the date line.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Draw the stopwatch reading in block digits when the panel is big enough.
    #[serde(default = "default_true")]
    pub big_digits: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            time_format: default_time_format(),
            date_format: default_date_format(),
            big_digits: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundBackend {
    /// Synthesized sine tones on the audio device.
    Tone,
    /// Terminal bell.
    Bell,
    None,
}

/// Audio feedback settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_backend")]
    pub backend: SoundBackend,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backend: default_backend(),
            sample_rate: default_sample_rate(),
        }
    }
}

/// Tick periods for the two timers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_clock_period")]
    pub clock_period_ms: u64,
    #[serde(default = "default_stopwatch_period")]
    pub stopwatch_period_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            clock_period_ms: default_clock_period(),
            stopwatch_period_ms: default_stopwatch_period(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_backend() -> SoundBackend {
    SoundBackend::Bell
}

fn default_sample_rate() -> u32 {
    44_100
}

fn default_clock_period() -> u64 {
    1000
}

fn default_stopwatch_period() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "~/.local/share/lapwatch/logs".to_string()
}
