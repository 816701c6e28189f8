use gemfall_engine::coords::{Rect, Vec2};
use rand::Rng;

use crate::config::MotionConfig;
use crate::motion::Motion;
use crate::world::Arena;

/// Anything with a center and a size. Edges and hitbox derive from those.
pub trait Body {
    fn center(&self) -> Vec2;
    fn size(&self) -> Vec2;

    fn left(&self) -> f32 {
        self.center().x - self.size().x * 0.5
    }

    fn right(&self) -> f32 {
        self.center().x + self.size().x * 0.5
    }

    fn bottom(&self) -> f32 {
        self.center().y - self.size().y * 0.5
    }

    fn top(&self) -> f32 {
        self.center().y + self.size().y * 0.5
    }

    fn hitbox(&self) -> Rect {
        Rect::from_center(self.center(), self.size())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Kind {
    /// +1 on contact.
    Collectible,
    /// -1 on contact.
    Hazard,
}

impl Kind {
    pub fn score_delta(self) -> i32 {
        match self {
            Kind::Collectible => 1,
            Kind::Hazard => -1,
        }
    }
}

/// A moving coin, ruby or razor.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub center: Vec2,
    pub size: Vec2,
    pub motion: Motion,
    pub kind: Kind,
}

impl Entity {
    pub fn new(kind: Kind, center: Vec2, size: Vec2, motion: Motion) -> Self {
        Self {
            center,
            size,
            motion,
            kind,
        }
    }

    /// One simulation tick. Returns true when the entity respawned.
    pub fn advance<R: Rng>(&mut self, arena: Arena, config: &MotionConfig, rng: &mut R) -> bool {
        self.motion.advance(&mut self.center, self.size, arena, config, rng)
    }
}

impl Body for Entity {
    fn center(&self) -> Vec2 {
        self.center
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}

/// The pointer-driven sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub center: Vec2,
    pub size: Vec2,
}

impl Player {
    pub const START: Vec2 = Vec2::new(50.0, 50.0);

    pub fn new(size: Vec2) -> Self {
        Self {
            center: Self::START,
            size,
        }
    }

    /// Jumps to `pos`. No smoothing, no clamping.
    pub fn move_to(&mut self, pos: Vec2) {
        self.center = pos;
    }
}

impl Body for Player {
    fn center(&self) -> Vec2 {
        self.center
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}
