//! Images, sounds and fonts, read from a fixed layout under the asset root.

use std::path::Path;

use anyhow::{Context, Result};
use gemfall_engine::audio::Sound;
use gemfall_engine::coords::Vec2;
use gemfall_engine::render::{SpriteRenderer, TextureId, TextureImage};
use gemfall_engine::text::{FontId, FontSystem};

use crate::scenario::{Backdrop, Scenario, SpriteAsset};

/// Paths relative to the asset root.
pub mod paths {
    pub const CHARACTER: &str = "images/character.png";
    pub const CHARACTER_JUMPING: &str = "images/character_jumping.png";
    pub const COIN: &str = "images/coin_01.png";
    pub const RUBY: &str = "images/rubies.png";
    pub const RAZOR: &str = "images/blue_razor.png";
    pub const BACKGROUND: &str = "images/milky_way.jpg";
    pub const RUBY_SOUND: &str = "sound_effects/ruby_sound.mp3";
    pub const RAZOR_SOUND: &str = "sound_effects/razor.mp3";
}

/// Fonts tried when none is configured.
pub const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A registered texture and the world size it is drawn at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteHandle {
    pub texture: TextureId,
    pub size: Vec2,
}

pub struct CueSounds {
    pub collect: Sound,
    pub hit: Sound,
}

pub struct GameAssets {
    pub player: SpriteHandle,
    pub collectible: SpriteHandle,
    pub hazard: Option<SpriteHandle>,
    pub backdrop: Option<TextureId>,
    pub cues: Option<CueSounds>,
}

impl GameAssets {
    /// Decodes everything `scenario` needs and registers the textures.
    ///
    /// Fails on the first missing or undecodable file.
    pub fn load(scenario: &Scenario, root: &Path, sprites: &mut SpriteRenderer) -> Result<Self> {
        let player = load_sprite(root, scenario.player, sprites)?;
        let collectible = load_sprite(root, scenario.collectible, sprites)?;
        let hazard = scenario
            .hazard
            .map(|(asset, _)| load_sprite(root, asset, sprites))
            .transpose()?;

        let backdrop = match scenario.backdrop {
            Backdrop::Clear(_) => None,
            Backdrop::Image(rel) => {
                let image = TextureImage::load(&root.join(rel))?;
                Some(sprites.add_texture(rel, image))
            }
        };

        let cues = match scenario.cues {
            Some(cues) => Some(CueSounds {
                collect: load_sound(root, cues.collect)?,
                hit: load_sound(root, cues.hit)?,
            }),
            None => None,
        };

        log::info!("assets loaded from {}", root.display());
        Ok(Self {
            player,
            collectible,
            hazard,
            backdrop,
            cues,
        })
    }
}

fn load_sprite(root: &Path, asset: SpriteAsset, sprites: &mut SpriteRenderer) -> Result<SpriteHandle> {
    let image = TextureImage::load(&root.join(asset.image))?;
    let size = scaled_size(image.width(), image.height(), asset.scale);
    log::debug!(
        "{}: {}x{} at scale {} -> {:.1}x{:.1}",
        asset.image,
        image.width(),
        image.height(),
        asset.scale,
        size.x,
        size.y
    );
    let texture = sprites.add_texture(asset.image, image);
    Ok(SpriteHandle { texture, size })
}

fn load_sound(root: &Path, rel: &str) -> Result<Sound> {
    let path = root.join(rel);
    Sound::load(&path).with_context(|| format!("failed to load sound {}", path.display()))
}

/// World size of a `width` x `height` texture drawn at `scale`.
pub fn scaled_size(width: u32, height: u32, scale: f32) -> Vec2 {
    Vec2::new(width as f32 * scale, height as f32 * scale)
}

/// Loads the configured font, falling back to [`SYSTEM_FONTS`].
///
/// `None` means no overlay text can be drawn.
pub fn load_font(fonts: &mut FontSystem, configured: Option<&Path>) -> Option<FontId> {
    if let Some(path) = configured {
        match fonts.load_font_file(path) {
            Ok(id) => return Some(id),
            Err(e) => log::warn!("{e}; trying system fonts"),
        }
    }

    let found = fonts.load_first_available(SYSTEM_FONTS.iter().map(Path::new));
    if found.is_none() {
        log::warn!("no usable font found; score overlay disabled");
    }
    found
}
