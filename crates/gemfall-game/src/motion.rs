//! Motion modes and their per-tick update rules.

use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

use gemfall_engine::coords::{Rect, Vec2};
use rand::Rng;

use crate::config::MotionConfig;
use crate::world::Arena;

/// Coin motion selected on the command line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MotionMode {
    Sliding,
    Bouncing,
    LineDancing,
    Circling,
}

impl MotionMode {
    pub const ALL: [MotionMode; 4] = [
        MotionMode::Sliding,
        MotionMode::Bouncing,
        MotionMode::LineDancing,
        MotionMode::Circling,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MotionMode::Sliding => "sliding",
            MotionMode::Bouncing => "bouncing",
            MotionMode::LineDancing => "line_dancing",
            MotionMode::Circling => "circling",
        }
    }
}

impl fmt::Display for MotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown motion mode `{0}` (expected one of: sliding, bouncing, line_dancing, circling)")]
pub struct ParseModeError(pub String);

impl FromStr for MotionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MotionMode::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// Per-entity motion state. Fixed at spawn time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Motion {
    /// Straight down; re-enters above the arena after leaving the bottom.
    Fall { speed: f32 },
    /// Straight line, reflected at the arena edges. Line dancers are bouncers
    /// with `velocity.y == 0`.
    Bounce { velocity: Vec2 },
    /// Circle around `center`; `angle` is measured from +y toward +x.
    Orbit {
        center: Vec2,
        radius: f32,
        angle: f32,
        speed: f32,
    },
    /// Straight left; re-enters right of the arena after leaving the left.
    Slide { speed: f32 },
}

/// Slide respawn fires once the left edge passes this x.
const SLIDE_EXIT_X: f32 = -2.0;

impl Motion {
    /// Point on the orbit at `angle`.
    pub fn orbit_position(center: Vec2, radius: f32, angle: f32) -> Vec2 {
        Vec2::new(radius * angle.sin() + center.x, radius * angle.cos() + center.y)
    }

    /// Advances one tick, moving `pos` (a body's center) in place.
    ///
    /// Returns true when the body left the arena and was respawned.
    pub fn advance<R: Rng>(
        &mut self,
        pos: &mut Vec2,
        size: Vec2,
        arena: Arena,
        config: &MotionConfig,
        rng: &mut R,
    ) -> bool {
        match self {
            Motion::Fall { speed } => {
                pos.y -= *speed;
                if Rect::from_center(*pos, size).max().y < 0.0 {
                    pos.x = uniform(rng, 0.0, arena.width);
                    pos.y = uniform(
                        rng,
                        arena.height + config.respawn_margin_min,
                        arena.height + config.respawn_margin_max,
                    );
                    return true;
                }
                false
            }

            Motion::Bounce { velocity } => {
                *pos += *velocity;
                let hitbox = Rect::from_center(*pos, size);
                let (min, max) = (hitbox.min(), hitbox.max());

                if min.x < 0.0 {
                    velocity.x = velocity.x.abs();
                } else if max.x > arena.width {
                    velocity.x = -velocity.x.abs();
                }
                if min.y < 0.0 {
                    velocity.y = velocity.y.abs();
                } else if max.y > arena.height {
                    velocity.y = -velocity.y.abs();
                }
                false
            }

            Motion::Orbit {
                center,
                radius,
                angle,
                speed,
            } => {
                *pos = Self::orbit_position(*center, *radius, *angle);
                *angle = (*angle + *speed).rem_euclid(TAU);
                false
            }

            Motion::Slide { speed } => {
                pos.x -= *speed;
                if Rect::from_center(*pos, size).min().x < SLIDE_EXIT_X {
                    pos.y = uniform(rng, 0.0, arena.height);
                    pos.x = uniform(
                        rng,
                        arena.width + config.respawn_margin_min,
                        arena.width + config.respawn_margin_max,
                    );
                    return true;
                }
                false
            }
        }
    }
}

/// Uniform in `[lo, hi)`, or `lo` when the range is empty.
pub(crate) fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if lo < hi { rng.gen_range(lo..hi) } else { lo }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ARENA: Arena = Arena::new(800.0, 600.0);
    const SIZE: Vec2 = Vec2::new(20.0, 20.0);

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn mode_names_parse() {
        for mode in MotionMode::ALL {
            assert_eq!(mode.name().parse::<MotionMode>(), Ok(mode));
        }
        assert_eq!("line_dancing".parse::<MotionMode>(), Ok(MotionMode::LineDancing));
    }

    #[test]
    fn mode_parsing_is_exact() {
        for bad in ["", "Sliding", "circle", "line-dancing", " sliding"] {
            assert_eq!(bad.parse::<MotionMode>(), Err(ParseModeError(bad.to_string())));
        }
    }

    #[test]
    fn fall_moves_down_by_speed() {
        let mut m = Motion::Fall { speed: 1.0 };
        let mut pos = Vec2::new(100.0, 300.0);
        assert!(!m.advance(&mut pos, SIZE, ARENA, &MotionConfig::default(), &mut rng()));
        assert_eq!(pos, Vec2::new(100.0, 299.0));
    }

    #[test]
    fn fall_respawns_above_the_arena_in_the_same_tick() {
        let config = MotionConfig::default();
        let mut r = rng();
        for _ in 0..200 {
            let mut m = Motion::Fall { speed: 1.0 };
            // Top edge at -0.5 after this tick.
            let mut pos = Vec2::new(50.0, -10.0 + 0.5);
            assert!(m.advance(&mut pos, SIZE, ARENA, &config, &mut r));
            assert!((0.0..800.0).contains(&pos.x));
            assert!((620.0..700.0).contains(&pos.y), "y = {}", pos.y);
        }
    }

    #[test]
    fn fall_keeps_going_while_top_is_visible() {
        let mut m = Motion::Fall { speed: 1.0 };
        let mut pos = Vec2::new(50.0, -9.0);
        // Top at 0.0 is not below zero yet.
        assert!(!m.advance(&mut pos, SIZE, ARENA, &MotionConfig::default(), &mut rng()));
        assert_eq!(pos.y, -10.0);
    }

    #[test]
    fn slide_respawns_right_of_the_arena() {
        let config = MotionConfig::default();
        let mut r = rng();
        for _ in 0..200 {
            let mut m = Motion::Slide { speed: 1.0 };
            // Left edge ends at -2.5.
            let mut pos = Vec2::new(8.5, 300.0);
            assert!(m.advance(&mut pos, SIZE, ARENA, &config, &mut r));
            assert!((820.0..900.0).contains(&pos.x), "x = {}", pos.x);
            assert!((0.0..600.0).contains(&pos.y));
        }
    }

    #[test]
    fn slide_tolerates_two_pixels_past_the_edge() {
        let mut m = Motion::Slide { speed: 1.0 };
        let mut pos = Vec2::new(9.0, 300.0);
        assert!(!m.advance(&mut pos, SIZE, ARENA, &MotionConfig::default(), &mut rng()));
        assert_eq!(pos.x, 8.0);
    }

    #[test]
    fn orbit_stays_on_its_radius() {
        let center = Vec2::new(300.0, 200.0);
        let mut m = Motion::Orbit {
            center,
            radius: 120.0,
            angle: 1.0,
            speed: 0.008,
        };
        let mut pos = Motion::orbit_position(center, 120.0, 1.0);
        let mut r = rng();
        for _ in 0..5_000 {
            m.advance(&mut pos, SIZE, ARENA, &MotionConfig::default(), &mut r);
            assert_abs_diff_eq!((pos.x - center.x).hypot(pos.y - center.y), 120.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn orbit_angle_advances_after_positioning() {
        let center = Vec2::new(0.0, 0.0);
        let mut m = Motion::Orbit {
            center,
            radius: 10.0,
            angle: 0.0,
            speed: 0.5,
        };
        let mut pos = Vec2::zero();
        m.advance(&mut pos, SIZE, ARENA, &MotionConfig::default(), &mut rng());
        // angle 0 is straight up from the center.
        assert_abs_diff_eq!(pos.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(pos.y, 10.0, epsilon = 1e-5);
        match m {
            Motion::Orbit { angle, .. } => assert_abs_diff_eq!(angle, 0.5),
            _ => unreachable!(),
        }
    }

    #[test]
    fn bounce_reflects_at_each_edge() {
        let config = MotionConfig::default();
        let mut m = Motion::Bounce { velocity: Vec2::new(3.0, -3.0) };
        // After moving: right edge at 802, bottom edge at -2.
        let mut pos = Vec2::new(789.0, 11.0);
        m.advance(&mut pos, SIZE, ARENA, &config, &mut rng());
        assert_eq!(m, Motion::Bounce { velocity: Vec2::new(-3.0, 3.0) });
    }

    #[test]
    fn bounce_never_leaves_the_arena_for_long() {
        let config = MotionConfig::default();
        let mut r = rng();
        for (vx, vy) in [(3.0, 2.0), (-3.0, -1.0), (1.0, -3.0), (-2.0, 3.0)] {
            let mut m = Motion::Bounce { velocity: Vec2::new(vx, vy) };
            let mut pos = Vec2::new(400.0, 300.0);
            for _ in 0..10_000 {
                m.advance(&mut pos, SIZE, ARENA, &config, &mut r);
                let hb = Rect::from_center(pos, SIZE);
                // At most one tick of overshoot.
                assert!(hb.min().x >= -3.0 && hb.max().x <= 803.0, "x = {}", pos.x);
                assert!(hb.min().y >= -3.0 && hb.max().y <= 603.0, "y = {}", pos.y);
            }
        }
    }

    #[test]
    fn bounce_started_outside_returns_and_stays() {
        let config = MotionConfig::default();
        let mut m = Motion::Bounce { velocity: Vec2::new(-3.0, 0.0) };
        let mut pos = Vec2::new(-60.0, 300.0);
        let mut r = rng();
        for _ in 0..100 {
            m.advance(&mut pos, SIZE, ARENA, &config, &mut r);
        }
        assert!(Rect::from_center(pos, SIZE).min().x >= 0.0);
        for _ in 0..1_000 {
            m.advance(&mut pos, SIZE, ARENA, &config, &mut r);
            assert!(Rect::from_center(pos, SIZE).min().x >= -3.0);
        }
    }

    #[test]
    fn line_dancers_stay_on_their_row() {
        let config = MotionConfig::default();
        let mut m = Motion::Bounce { velocity: Vec2::new(-3.0, 0.0) };
        let mut pos = Vec2::new(400.0, 45.0);
        let mut r = rng();
        for _ in 0..2_000 {
            m.advance(&mut pos, SIZE, ARENA, &config, &mut r);
            assert_eq!(pos.y, 45.0);
        }
    }

    #[test]
    fn uniform_handles_empty_ranges() {
        let mut r = rng();
        assert_eq!(uniform(&mut r, 5.0, 5.0), 5.0);
        assert_eq!(uniform(&mut r, 6.0, 5.0), 6.0);
        let v = uniform(&mut r, 1.0, 2.0);
        assert!((1.0..2.0).contains(&v));
    }
}
