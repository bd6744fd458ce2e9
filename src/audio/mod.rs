//! Best-effort audio feedback for stopwatch transitions.
//!
//! Cues are turned into [`Tone`]s and handed to a [`ToneSink`]. Any failure
//! is logged and swallowed: sound can go missing, timing can't.

pub mod cue;
#[cfg(feature = "tone")]
pub mod device;
pub mod sink;
pub mod tone;

pub use cue::Cue;
pub use sink::{BellSink, NullSink, ToneSink};
pub use tone::Tone;

use crate::config::model::{SoundBackend, SoundConfig};
use crate::error::AudioError;
use tracing::{debug, warn};

/// Plays cues on a sink, going quiet after the sink reports the device gone.
pub struct AudioOutput {
    sink: Box<dyn ToneSink>,
    available: bool,
}

impl AudioOutput {
    pub fn new(sink: Box<dyn ToneSink>) -> Self {
        Self {
            sink,
            available: true,
        }
    }

    /// Build the sink named by the config. A device that can't be opened
    /// leaves the output silent.
    pub fn from_config(config: &SoundConfig) -> Self {
        Self::from_opened(open_sink(config))
    }

    /// Wrap the outcome of opening a sink. A failed open yields a silent
    /// output that reports itself unavailable.
    fn from_opened(opened: Result<Box<dyn ToneSink>, AudioError>) -> Self {
        match opened {
            Ok(sink) => {
                debug!(sink = sink.name(), "audio output ready");
                Self::new(sink)
            }
            Err(e) => {
                warn!("audio disabled: {}", e);
                Self {
                    sink: Box::new(NullSink),
                    available: false,
                }
            }
        }
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn play(&mut self, cue: Cue) {
        if !self.available {
            return;
        }
        match self.sink.play(&cue.tone()) {
            Ok(()) => debug!(?cue, "cue played"),
            Err(AudioError::DeviceUnavailable(reason)) => {
                warn!(%reason, "audio device lost, muting cues");
                self.available = false;
            }
            Err(e) => debug!(?cue, "cue dropped: {}", e),
        }
    }
}

fn open_sink(config: &SoundConfig) -> Result<Box<dyn ToneSink>, AudioError> {
    match config.backend {
        SoundBackend::None => Ok(Box::new(NullSink)),
        SoundBackend::Bell => Ok(Box::new(BellSink::stdout())),
        SoundBackend::Tone => open_device(config.sample_rate),
    }
}

#[cfg(feature = "tone")]
fn open_device(sample_rate: u32) -> Result<Box<dyn ToneSink>, AudioError> {
    Ok(Box::new(device::DeviceSink::open(sample_rate)?))
}

#[cfg(not(feature = "tone"))]
fn open_device(_sample_rate: u32) -> Result<Box<dyn ToneSink>, AudioError> {
    warn!("built without the `tone` feature, using the terminal bell");
    Ok(Box::new(BellSink::stdout()))
}
