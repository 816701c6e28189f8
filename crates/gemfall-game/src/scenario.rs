//! The two games, described as data.

use gemfall_engine::coords::Vec2;
use gemfall_engine::paint::Color;

use crate::assets::paths;
use crate::config::{GameConfig, Population};
use crate::motion::MotionMode;
use crate::session::SessionSetup;
use crate::spawn::SpawnGroup;
use crate::world::Arena;

/// An image drawn at a fixed scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteAsset {
    pub image: &'static str,
    pub scale: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Backdrop {
    Clear(Color),
    /// Stretched over the whole arena.
    Image(&'static str),
}

/// Sounds played when the player collects or is hit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cues {
    pub collect: &'static str,
    pub hit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub title: &'static str,
    pub mode: MotionMode,
    pub player: SpriteAsset,
    pub collectible: SpriteAsset,
    pub collectible_count: usize,
    pub hazard: Option<(SpriteAsset, usize)>,
    pub backdrop: Backdrop,
    pub cues: Option<Cues>,
    pub ends_when_collected: bool,
}

/// "Amazon" green.
fn amazon() -> Color {
    Color::from_srgb_u8(59, 122, 87, 255)
}

impl Scenario {
    /// Coins moving by `mode`; collect them all, forever.
    pub fn coin_motion(mode: MotionMode, config: &GameConfig) -> Self {
        let coins = config.coins();
        Self {
            title: "Sprite Example",
            mode,
            player: SpriteAsset {
                image: paths::CHARACTER,
                scale: config.player.scale.unwrap_or(0.5),
            },
            collectible: SpriteAsset {
                image: paths::COIN,
                scale: coins.scale,
            },
            collectible_count: coins.count,
            hazard: None,
            backdrop: Backdrop::Clear(amazon()),
            cues: None,
            ends_when_collected: false,
        }
    }

    /// Orbiting rubies to collect, sliding razors to avoid.
    pub fn razors_and_rubies(config: &GameConfig) -> Self {
        let (rubies, razors): (Population, Population) = (config.rubies(), config.razors());
        Self {
            title: "Rubies and Razors",
            mode: MotionMode::Circling,
            player: SpriteAsset {
                image: paths::CHARACTER_JUMPING,
                scale: config.player.scale.unwrap_or(0.6),
            },
            collectible: SpriteAsset {
                image: paths::RUBY,
                scale: rubies.scale,
            },
            collectible_count: rubies.count,
            hazard: Some((
                SpriteAsset {
                    image: paths::RAZOR,
                    scale: razors.scale,
                },
                razors.count,
            )),
            backdrop: Backdrop::Image(paths::BACKGROUND),
            cues: Some(Cues {
                collect: paths::RUBY_SOUND,
                hit: paths::RAZOR_SOUND,
            }),
            ends_when_collected: true,
        }
    }

    /// Window title, honoring a configured override.
    pub fn window_title(&self, config: &GameConfig) -> String {
        config
            .window
            .title
            .clone()
            .unwrap_or_else(|| self.title.to_string())
    }

    /// Session parameters once sprite sizes are known.
    pub fn session_setup(
        &self,
        arena: Arena,
        player_size: Vec2,
        collectible_size: Vec2,
        hazard_size: Option<Vec2>,
        config: &GameConfig,
    ) -> SessionSetup {
        SessionSetup {
            arena,
            player_size,
            mode: self.mode,
            collectibles: SpawnGroup {
                count: self.collectible_count,
                size: collectible_size,
            },
            hazards: self.hazard.zip(hazard_size).map(|((_, count), size)| SpawnGroup { count, size }),
            motion: config.motion,
            ends_when_collected: self.ends_when_collected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_motion_has_no_hazards_and_no_end() {
        let config = GameConfig::default();
        let s = Scenario::coin_motion(MotionMode::Bouncing, &config);
        assert_eq!(s.title, "Sprite Example");
        assert_eq!(s.mode, MotionMode::Bouncing);
        assert_eq!(s.collectible_count, 50);
        assert_eq!(s.collectible.scale, 0.2);
        assert!(s.hazard.is_none() && s.cues.is_none());
        assert!(!s.ends_when_collected);
        assert!(matches!(s.backdrop, Backdrop::Clear(_)));
    }

    #[test]
    fn razors_and_rubies_orbits_and_ends() {
        let config = GameConfig::default();
        let s = Scenario::razors_and_rubies(&config);
        assert_eq!(s.mode, MotionMode::Circling);
        assert_eq!(s.player.scale, 0.6);
        assert_eq!(s.hazard.map(|(_, n)| n), Some(50));
        assert!(s.ends_when_collected);
        assert_eq!(s.backdrop, Backdrop::Image(paths::BACKGROUND));
    }

    #[test]
    fn config_overrides_title_and_counts() {
        let config = GameConfig::from_toml_str(
            "[window]\ntitle = \"Mine\"\n[coins]\ncount = 5\nscale = 1.0",
            "t",
        )
        .unwrap();
        let s = Scenario::coin_motion(MotionMode::Circling, &config);
        assert_eq!(s.window_title(&config), "Mine");
        assert_eq!(s.collectible_count, 5);
        assert_eq!(s.collectible.scale, 1.0);
    }

    #[test]
    fn player_scale_can_be_overridden() {
        let defaults = GameConfig::default();
        assert_eq!(Scenario::coin_motion(MotionMode::Sliding, &defaults).player.scale, 0.5);

        let config = GameConfig::from_toml_str("[player]
scale = 1.5", "t").unwrap();
        assert_eq!(Scenario::coin_motion(MotionMode::Sliding, &config).player.scale, 1.5);
        assert_eq!(Scenario::razors_and_rubies(&config).player.scale, 1.5);
    }

    #[test]
    fn setup_carries_hazards_only_when_present() {
        let config = GameConfig::default();
        let arena = Arena::new(800.0, 600.0);
        let size = Vec2::new(10.0, 10.0);

        let coins = Scenario::coin_motion(MotionMode::Sliding, &config)
            .session_setup(arena, size, size, None, &config);
        assert!(coins.hazards.is_none());

        let rr = Scenario::razors_and_rubies(&config).session_setup(arena, size, size, Some(size), &config);
        assert_eq!(rr.hazards, Some(SpawnGroup { count: 50, size }));
        assert!(rr.ends_when_collected);
    }
}
