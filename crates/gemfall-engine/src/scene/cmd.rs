use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::render::TextureId;
use crate::text::FontId;

/// Renderer-agnostic draw command.
///
/// Adding a command: add a variant here, a push helper on `DrawList`, and a
/// renderer under `render` that filters for it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Sprite(SpriteCmd),
    Text(TextCmd),
}

/// Textured quad.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCmd {
    pub texture: TextureId,
    /// Destination in logical pixels (top-left origin).
    pub dst: Rect,
    /// Multiplied with the texel color.
    pub tint: Color,
}

/// Single-line or wrapped text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the text block in logical pixels.
    pub origin: Vec2,
    /// Wrapping width in logical pixels; `None` disables wrapping.
    pub max_width: Option<f32>,
}
