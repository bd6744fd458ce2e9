//! Sine tone synthesis.
//!
//! A cue is a mono sine wave whose gain decays exponentially from
//! [`START_GAIN`] to [`END_GAIN`] over the tone's duration.

use std::f32::consts::TAU;
use std::time::Duration;

pub const START_GAIN: f32 = 0.1;
pub const END_GAIN: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
}

impl Tone {
    pub fn new(frequency_hz: f32, duration: Duration) -> Self {
        Self {
            frequency_hz,
            duration,
        }
    }

    /// Number of mono samples at `sample_rate`.
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (self.duration.as_secs_f64() * sample_rate as f64).round() as usize
    }

    /// Gain at `t` seconds into the tone.
    pub fn gain_at(&self, t: f32) -> f32 {
        let d = self.duration.as_secs_f32();
        if d <= 0.0 {
            return END_GAIN;
        }
        let progress = (t / d).clamp(0.0, 1.0);
        START_GAIN * (END_GAIN / START_GAIN).powf(progress)
    }

    pub fn samples(&self, sample_rate: u32) -> Vec<f32> {
        let rate = sample_rate.max(1) as f32;
        (0..self.sample_count(sample_rate))
            .map(|i| {
                let t = i as f32 / rate;
                (TAU * self.frequency_hz * t).sin() * self.gain_at(t)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        let tone = Tone::new(800.0, Duration::from_millis(150));
        assert_eq!(tone.sample_count(44_100), 6_615);
        assert_eq!(tone.samples(44_100).len(), 6_615);
    }

    #[test]
    fn test_envelope_decays() {
        let tone = Tone::new(400.0, Duration::from_millis(200));
        assert!((tone.gain_at(0.0) - START_GAIN).abs() < 1e-6);
        assert!((tone.gain_at(0.2) - END_GAIN).abs() < 1e-6);
        assert!(tone.gain_at(0.05) > tone.gain_at(0.15));
    }

    #[test]
    fn test_samples_bounded_by_envelope() {
        let tone = Tone::new(1000.0, Duration::from_millis(100));
        let samples = tone.samples(8_000);
        assert_eq!(samples[0], 0.0);
        for (i, s) in samples.iter().enumerate() {
            let t = i as f32 / 8_000.0;
            assert!(s.abs() <= tone.gain_at(t) + 1e-6);
        }
        // 1 kHz at 8 kHz: quarter period lands on the first peak.
        assert!((samples[2] - tone.gain_at(2.0 / 8_000.0)).abs() < 1e-4);
    }

    #[test]
    fn test_zero_duration_is_silent() {
        let tone = Tone::new(440.0, Duration::ZERO);
        assert!(tone.samples(44_100).is_empty());
    }
}
