//! World space: origin bottom-left, +y up, logical pixels.
//!
//! The engine draws and reports the pointer in screen space (top-left,
//! +y down); [`Arena`] converts between the two.

use gemfall_engine::coords::{Rect, Vec2, Viewport};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Screen-space rectangle covering the world-space `rect`.
    pub fn to_screen(self, rect: Rect) -> Rect {
        let top = rect.max().y;
        Rect::new(rect.origin.x, self.viewport().flip_y(top), rect.size.x, rect.size.y)
    }

    /// World-space position of a screen-space point.
    pub fn to_world(self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x, self.viewport().flip_y(y))
    }

    /// Screen-space position of a world-space point.
    pub fn point_to_screen(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x, self.viewport().flip_y(p.y))
    }
}
