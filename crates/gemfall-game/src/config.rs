//! Game configuration loaded from an optional TOML file.
//!
//! Every section and field has a default, so a file only needs to name what
//! it overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowSection,
    pub assets: AssetsSection,
    pub logging: LoggingSection,
    pub motion: MotionConfig,
    pub player: PlayerSection,
    pub coins: CoinsSection,
    pub rubies: RubiesSection,
    pub razors: RazorsSection,
    /// Fixed RNG seed; random when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowSection::default(),
            assets: AssetsSection::default(),
            logging: LoggingSection::default(),
            motion: MotionConfig::default(),
            player: PlayerSection::default(),
            coins: CoinsSection::default(),
            rubies: RubiesSection::default(),
            razors: RazorsSection::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSection {
    pub width: u32,
    pub height: u32,
    /// Replaces the game's own title.
    pub title: Option<String>,
    pub vsync: bool,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: None,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetsSection {
    /// Directory holding `images/` and `sound_effects/`.
    pub root: PathBuf,
    /// TrueType font for the score overlay; system fonts are tried if unset.
    pub font: Option<PathBuf>,
    /// Playback volume in `[0, 1]`.
    pub volume: f32,
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            font: None,
            volume: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `env_logger` filter, e.g. "debug" or "gemfall_game=trace".
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerSection {
    /// Overrides each game's own player scale.
    pub scale: Option<f32>,
}

/// How many of a sprite to spawn and at which scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Population {
    pub count: usize,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CoinsSection {
    pub count: usize,
    pub scale: f32,
}

impl Default for CoinsSection {
    fn default() -> Self {
        Self { count: 50, scale: 0.2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RubiesSection {
    pub count: usize,
    pub scale: f32,
}

impl Default for RubiesSection {
    fn default() -> Self {
        Self { count: 50, scale: 0.3 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RazorsSection {
    pub count: usize,
    pub scale: f32,
}

impl Default for RazorsSection {
    fn default() -> Self {
        Self { count: 50, scale: 0.3 }
    }
}

impl GameConfig {
    pub fn coins(&self) -> Population {
        Population { count: self.coins.count, scale: self.coins.scale }
    }

    pub fn rubies(&self) -> Population {
        Population { count: self.rubies.count, scale: self.rubies.scale }
    }

    pub fn razors(&self) -> Population {
        Population { count: self.razors.count, scale: self.razors.scale }
    }
}

/// Per-tick motion constants.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub fall_speed: f32,
    pub slide_speed: f32,
    /// Radians per tick.
    pub orbit_speed: f32,
    pub orbit_radius_min: u32,
    pub orbit_radius_max: u32,
    /// Bounce velocity components are drawn from `-max..=max`.
    pub bounce_max_speed: i32,
    pub line_dance_speed: f32,
    pub line_dance_x: f32,
    pub line_dance_base: f32,
    pub line_dance_spacing: f32,
    /// Respawn band beyond the arena edge: `[edge + min, edge + max)`.
    pub respawn_margin_min: f32,
    pub respawn_margin_max: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            fall_speed: 1.0,
            slide_speed: 1.0,
            orbit_speed: 0.008,
            orbit_radius_min: 10,
            orbit_radius_max: 200,
            bounce_max_speed: 3,
            line_dance_speed: 3.0,
            line_dance_x: 400.0,
            line_dance_base: 5.0,
            line_dance_spacing: 20.0,
            respawn_margin_min: 20.0,
            respawn_margin_max: 100.0,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Rejects values the games cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.window.width == 0 || self.window.height == 0 {
            return invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            ));
        }
        let m = &self.motion;
        if m.orbit_radius_min >= m.orbit_radius_max {
            return invalid(format!(
                "orbit_radius_min ({}) must be below orbit_radius_max ({})",
                m.orbit_radius_min, m.orbit_radius_max
            ));
        }
        if !(m.respawn_margin_min < m.respawn_margin_max) {
            return invalid("respawn_margin_min must be below respawn_margin_max".to_string());
        }
        if m.bounce_max_speed < 0 {
            return invalid("bounce_max_speed must not be negative".to_string());
        }
        for (name, section) in [("coins", self.coins()), ("rubies", self.rubies()), ("razors", self.razors())] {
            if !(section.scale > 0.0 && section.scale.is_finite()) {
                return invalid(format!("{name}.scale must be positive"));
            }
        }
        if self.player.scale.is_some_and(|s| !(s > 0.0 && s.is_finite())) {
            return invalid("player.scale must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&self.assets.volume) {
            return invalid(format!("assets.volume must be within [0, 1], got {}", self.assets.volume));
        }
        Ok(())
    }
}
