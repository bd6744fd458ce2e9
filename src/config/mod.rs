pub mod model;

use crate::clock;
use anyhow::{Context, Result};
use std::ops::RangeInclusive;
use std::path::PathBuf;

pub use model::{AppConfig, LoggingConfig, SoundBackend};

/// Sample rates cue synthesis accepts, in Hz.
pub const SAMPLE_RATES: RangeInclusive<u32> = 8_000..=192_000;

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lapwatch")
        .join("config.toml")
}

/// Load the config file, or defaults if there is none. Also returns a
/// description of every value that was replaced, for logging once the
/// subscriber is up.
pub fn load_config() -> Result<(AppConfig, Vec<String>)> {
    let path = config_path();
    if !path.exists() {
        return Ok((AppConfig::default(), Vec::new()));
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents)
}

/// Parse and normalize a config file body.
pub fn parse_config(contents: &str) -> Result<(AppConfig, Vec<String>)> {
    let mut config: AppConfig =
        toml::from_str(contents).with_context(|| "Failed to parse config file")?;
    let warnings = normalize(&mut config);
    Ok((config, warnings))
}

/// Replace values that would break the app at runtime.
fn normalize(config: &mut AppConfig) -> Vec<String> {
    let defaults = AppConfig::default();
    let mut warnings = Vec::new();

    if !clock::is_valid_format(&config.ui.time_format) {
        warnings.push(format!(
            "invalid time_format {:?}, using default",
            config.ui.time_format
        ));
        config.ui.time_format = defaults.ui.time_format;
    }
    if !clock::is_valid_format(&config.ui.date_format) {
        warnings.push(format!(
            "invalid date_format {:?}, using default",
            config.ui.date_format
        ));
        config.ui.date_format = defaults.ui.date_format;
    }

    // A zero period would make tokio's interval panic.
    config.timing.clock_period_ms = config.timing.clock_period_ms.max(1);
    config.timing.stopwatch_period_ms = config.timing.stopwatch_period_ms.max(1);

    let rate = config.sound.sample_rate;
    if rate == 0 {
        config.sound.sample_rate = defaults.sound.sample_rate;
    } else if !SAMPLE_RATES.contains(&rate) {
        config.sound.sample_rate = rate.clamp(*SAMPLE_RATES.start(), *SAMPLE_RATES.end());
        warnings.push(format!(
            "sample_rate {} out of range, using {}",
            rate, config.sound.sample_rate
        ));
    }

    warnings
}
