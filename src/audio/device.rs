//! Sine output through the default audio device (`tone` feature).

use super::sink::ToneSink;
use super::tone::Tone;
use crate::error::AudioError;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, PlayError, Sink};

/// Plays synthesized tones on the default output device.
///
/// Each tone gets its own detached [`Sink`], so overlapping cues mix instead
/// of queueing behind each other.
pub struct DeviceSink {
    // Dropping the stream closes the device.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sample_rate: u32,
}

impl DeviceSink {
    pub fn open(sample_rate: u32) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| AudioError::DeviceUnavailable(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            sample_rate,
        })
    }
}

impl ToneSink for DeviceSink {
    fn name(&self) -> &'static str {
        "tone"
    }

    fn play(&mut self, tone: &Tone) -> Result<(), AudioError> {
        let sink = Sink::try_new(&self.handle).map_err(play_error)?;
        sink.append(SamplesBuffer::new(1, self.sample_rate, tone.samples(self.sample_rate)));
        sink.detach();
        Ok(())
    }
}

/// `NoDevice` means the stream's mixer is gone, so no later cue can play.
fn play_error(e: PlayError) -> AudioError {
    match e {
        PlayError::NoDevice => AudioError::DeviceUnavailable(e.to_string()),
        other => AudioError::Playback(other.to_string()),
    }
}
