use super::tone::Tone;
use crate::error::AudioError;
use std::io::{self, Write};

/// Somewhere a tone can be sent. Playing must not block the event loop for
/// the length of the tone.
pub trait ToneSink {
    fn name(&self) -> &'static str;
    fn play(&mut self, tone: &Tone) -> Result<(), AudioError>;
}

/// Discards every tone.
pub struct NullSink;

impl ToneSink for NullSink {
    fn name(&self) -> &'static str {
        "none"
    }

    fn play(&mut self, _tone: &Tone) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Rings the terminal bell. Pitch and length are up to the terminal.
pub struct BellSink<W: Write> {
    out: W,
}

impl BellSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ToneSink for BellSink<W> {
    fn name(&self) -> &'static str {
        "bell"
    }

    fn play(&mut self, _tone: &Tone) -> Result<(), AudioError> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}
