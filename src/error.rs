use thiserror::Error;

/// Failures of the best-effort audio path. These are logged and never
/// surfaced in the UI.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device available: {0}")]
    DeviceUnavailable(String),

    #[error("failed to play tone: {0}")]
    Playback(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
