use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum FontLoadError {
    #[error("failed to read font file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse font: {0}")]
    Parse(String),
}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the loaded fonts.
///
/// Fonts are immutable once loaded. The application owns the system and
/// lends it to the text renderer each frame so glyphs can be rasterized on
/// first use.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType/OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError::Parse(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    pub fn load_font_file(&mut self, path: &Path) -> Result<FontId, FontLoadError> {
        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.load_font(&bytes)
    }

    /// Loads the first font in `candidates` that can be read and parsed.
    pub fn load_first_available<'a, I>(&mut self, candidates: I) -> Option<FontId>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        candidates.into_iter().find_map(|path| match self.load_font_file(path) {
            Ok(id) => {
                log::info!("loaded font {}", path.display());
                Some(id)
            }
            Err(e) => {
                log::debug!("{e}");
                None
            }
        })
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Distance from the top of a line to its baseline at `size`.
    pub fn ascent(&self, id: FontId, size: f32) -> f32 {
        self.get(id)
            .and_then(|f| f.horizontal_line_metrics(size))
            .map_or(size * 0.8, |m| m.ascent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_a_parse_error() {
        let mut fonts = FontSystem::new();
        assert!(matches!(fonts.load_font(b"nope"), Err(FontLoadError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font_file(Path::new("no/such/font.ttf")).unwrap_err();
        assert!(matches!(err, FontLoadError::Io { .. }));
    }

    #[test]
    fn no_candidate_available() {
        let mut fonts = FontSystem::new();
        let candidates = [Path::new("no/such/a.ttf"), Path::new("no/such/b.ttf")];
        assert_eq!(fonts.load_first_available(candidates), None);
    }

    #[test]
    fn unknown_font_estimates_ascent() {
        let fonts = FontSystem::new();
        assert!((fonts.ascent(FontId(3), 10.0) - 8.0).abs() < 1e-4);
    }
}
