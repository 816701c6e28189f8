//! Fire-and-forget sound playback on top of rodio.
//!
//! Sounds are decoded once at load time to validate them and kept as raw
//! bytes; each `play` decodes a fresh source into a detached sink so
//! overlapping cues mix instead of cutting each other off.

mod output;
mod sound;

pub use output::AudioOutput;
pub use sound::Sound;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    NoDevice(String),
    #[error("failed to read sound file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode sound: {0}")]
    Decode(String),
    #[error("playback failed: {0}")]
    Playback(String),
}
