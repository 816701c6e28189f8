use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::Decoder;
use rodio::decoder::DecoderError;

use super::AudioError;

/// An encoded sound clip (WAV, MP3, OGG or FLAC) held in memory.
///
/// Cloning is cheap; clones share the bytes.
#[derive(Clone)]
pub struct Sound {
    name: Arc<str>,
    bytes: Arc<[u8]>,
}

impl std::fmt::Debug for Sound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sound")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl Sound {
    /// Wraps encoded bytes, failing if no decoder recognizes them.
    pub fn from_bytes(name: impl Into<Arc<str>>, bytes: impl Into<Arc<[u8]>>) -> Result<Self, AudioError> {
        let sound = Self {
            name: name.into(),
            bytes: bytes.into(),
        };
        sound.decoder()?;
        Ok(sound)
    }

    pub fn load(path: &Path) -> Result<Self, AudioError> {
        let bytes = std::fs::read(path).map_err(|source| AudioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let sound = Self {
            name: path.display().to_string().into(),
            bytes: bytes.into(),
        };
        sound
            .raw_decoder()
            .map_err(|e| AudioError::Decode(format!("{}: {e}", path.display())))?;
        Ok(sound)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn decoder(&self) -> Result<Decoder<Cursor<Arc<[u8]>>>, AudioError> {
        self.raw_decoder().map_err(|e| AudioError::Decode(e.to_string()))
    }

    fn raw_decoder(&self) -> Result<Decoder<Cursor<Arc<[u8]>>>, DecoderError> {
        Decoder::new(Cursor::new(Arc::clone(&self.bytes)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal mono 16-bit PCM WAV file.
    pub(crate) fn wav_bytes(samples: &[i16]) -> Vec<u8> {
        let data_len = (samples.len() * 2) as u32;
        let mut out = Vec::with_capacity(44 + data_len as usize);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&8000u32.to_le_bytes());
        out.extend_from_slice(&16000u32.to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for s in samples {
            out.extend_from_slice(&s.to_le_bytes());
        }
        out
    }

    #[test]
    fn accepts_wav() {
        let sound = Sound::from_bytes("beep", wav_bytes(&[0, 1000, -1000, 0])).unwrap();
        assert_eq!(sound.name(), "beep");
        assert!(sound.decoder().is_ok());
    }

    #[test]
    fn rejects_garbage() {
        let err = Sound::from_bytes("junk", b"definitely not audio".to_vec()).unwrap_err();
        assert!(matches!(err, AudioError::Decode(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Sound::load(Path::new("no/such/sound.mp3")).unwrap_err();
        assert!(matches!(err, AudioError::Io { .. }));
        assert!(err.to_string().contains("no/such/sound.mp3"));
    }
}
