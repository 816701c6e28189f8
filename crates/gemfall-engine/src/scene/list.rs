use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::render::TextureId;
use crate::text::FontId;

use super::{DrawCmd, Layer, SpriteCmd, TextCmd};

/// A recorded command with its paint-order key.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub layer: Layer,
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one frame.
///
/// `push` is O(1). Paint-order iteration sorts an index buffer that is kept
/// across frames, so a warmed-up list does not allocate.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    sorted: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded items, keeping capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.sorted.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
    }

    pub fn push(&mut self, layer: Layer, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { layer, order, cmd });
        self.sorted_dirty = true;
    }

    /// Records an untinted sprite.
    pub fn push_sprite(&mut self, layer: Layer, texture: TextureId, dst: Rect) {
        self.push(layer, DrawCmd::Sprite(SpriteCmd { texture, dst, tint: Color::WHITE }));
    }

    /// Records an unwrapped line of text with its top-left at `origin`.
    pub fn push_text(
        &mut self,
        layer: Layer,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        self.push(layer, DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            origin,
            max_width: None,
        }));
    }

    /// Iterates items back-to-front without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.sorted.clear();
            self.sorted.extend(0..self.items.len());
            let items = &self.items;
            self.sorted
                .sort_by_key(|&i| (items[i].layer, items[i].order));
            self.sorted_dirty = false;
        }
        self.sorted.iter().map(|&i| &self.items[i])
    }
}
