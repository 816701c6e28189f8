use rodio::{OutputStream, OutputStreamHandle, Sink};

use super::{AudioError, Sound};

struct Device {
    // Dropping the stream stops all playback.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Default audio output, or a silent stand-in when none is available.
pub struct AudioOutput {
    device: Option<Device>,
    volume: f32,
}

impl AudioOutput {
    /// Opens the default output device.
    pub fn open() -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::NoDevice(e.to_string()))?;
        log::info!("audio output opened");
        Ok(Self {
            device: Some(Device { _stream: stream, handle }),
            volume: 1.0,
        })
    }

    /// Output that accepts every call and plays nothing.
    pub fn silent() -> Self {
        Self {
            device: None,
            volume: 1.0,
        }
    }

    /// Opens the default device, degrading to [`AudioOutput::silent`] with a
    /// warning when that fails.
    pub fn open_or_silent() -> Self {
        match Self::open() {
            Ok(out) => out,
            Err(e) => {
                log::warn!("{e}; continuing without sound");
                Self::silent()
            }
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Starts `sound` and returns immediately.
    pub fn play(&self, sound: &Sound) -> Result<(), AudioError> {
        let Some(device) = self.device.as_ref() else { return Ok(()) };

        let sink = Sink::try_new(&device.handle).map_err(|e| AudioError::Playback(e.to_string()))?;
        sink.set_volume(self.volume);
        sink.append(sound.decoder()?);
        sink.detach();
        log::trace!("playing {}", sound.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::sound::tests::wav_bytes;

    #[test]
    fn silent_output_accepts_play() {
        let out = AudioOutput::silent();
        assert!(out.device.is_none());
        let sound = Sound::from_bytes("beep", wav_bytes(&[0, 500, 0])).unwrap();
        assert!(out.play(&sound).is_ok());
    }

    #[test]
    fn volume_is_clamped() {
        let mut out = AudioOutput::silent();
        out.set_volume(3.0);
        assert_eq!(out.volume, 1.0);
        out.set_volume(-1.0);
        assert_eq!(out.volume, 0.0);
    }
}
