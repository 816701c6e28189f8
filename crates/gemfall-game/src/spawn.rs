//! Initial placement of coins, rubies and razors.

use std::f32::consts::TAU;

use gemfall_engine::coords::Vec2;
use rand::Rng;

use crate::config::MotionConfig;
use crate::entity::{Entity, Kind};
use crate::motion::{Motion, MotionMode, uniform};
use crate::world::Arena;

/// `count` sprites of one size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpawnGroup {
    pub count: usize,
    pub size: Vec2,
}

/// Collectibles moving according to `mode`.
pub fn collectibles<R: Rng>(
    mode: MotionMode,
    group: SpawnGroup,
    arena: Arena,
    config: &MotionConfig,
    rng: &mut R,
) -> Vec<Entity> {
    let spacing = line_dance_spacing(group.count, arena, config);

    (0..group.count)
        .map(|i| {
            let (center, motion) = match mode {
                MotionMode::Sliding => (
                    anywhere(arena, rng),
                    Motion::Fall { speed: config.fall_speed },
                ),

                MotionMode::Bouncing => {
                    let half = group.size * 0.5;
                    let center = Vec2::new(
                        uniform(rng, half.x, arena.width - half.x),
                        uniform(rng, half.y, arena.height - half.y),
                    );
                    let max = config.bounce_max_speed;
                    let velocity = Vec2::new(
                        rng.gen_range(-max..=max) as f32,
                        rng.gen_range(-max..=max) as f32,
                    );
                    (center, Motion::Bounce { velocity })
                }

                MotionMode::LineDancing => {
                    let center = Vec2::new(
                        config.line_dance_x,
                        config.line_dance_base + i as f32 * spacing,
                    );
                    let vx = if i % 2 == 0 {
                        -config.line_dance_speed
                    } else {
                        config.line_dance_speed
                    };
                    (center, Motion::Bounce { velocity: Vec2::new(vx, 0.0) })
                }

                MotionMode::Circling => {
                    let center = anywhere(arena, rng);
                    let radius =
                        rng.gen_range(config.orbit_radius_min..config.orbit_radius_max) as f32;
                    let angle = rng.gen_range(0.0..TAU);
                    (
                        Motion::orbit_position(center, radius, angle),
                        Motion::Orbit {
                            center,
                            radius,
                            angle,
                            speed: config.orbit_speed,
                        },
                    )
                }
            };
            Entity::new(Kind::Collectible, center, group.size, motion)
        })
        .collect()
}

/// Hazards sliding leftward from anywhere in the arena.
pub fn razors<R: Rng>(group: SpawnGroup, arena: Arena, config: &MotionConfig, rng: &mut R) -> Vec<Entity> {
    (0..group.count)
        .map(|_| {
            Entity::new(
                Kind::Hazard,
                anywhere(arena, rng),
                group.size,
                Motion::Slide { speed: config.slide_speed },
            )
        })
        .collect()
}

fn anywhere<R: Rng>(arena: Arena, rng: &mut R) -> Vec2 {
    Vec2::new(uniform(rng, 0.0, arena.width), uniform(rng, 0.0, arena.height))
}

/// Row spacing for line dancers, compressed so the top row stays in the arena.
///
/// Compression ignores sprite height, so with many dancers adjacent rows
/// overlap on screen. Every dancer stays reachable.
fn line_dance_spacing(count: usize, arena: Arena, config: &MotionConfig) -> f32 {
    let wanted = config.line_dance_spacing;
    if count == 0 {
        return wanted;
    }
    let room = (arena.height - config.line_dance_base).max(0.0);
    if config.line_dance_base + count as f32 * wanted > arena.height {
        room / count as f32
    } else {
        wanted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Body;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ARENA: Arena = Arena::new(800.0, 600.0);
    const GROUP: SpawnGroup = SpawnGroup {
        count: 50,
        size: Vec2::new(24.0, 24.0),
    };

    fn in_arena(p: Vec2) -> bool {
        (0.0..ARENA.width).contains(&p.x) && (0.0..ARENA.height).contains(&p.y)
    }

    fn spawn(mode: MotionMode) -> Vec<Entity> {
        let mut rng = StdRng::seed_from_u64(7);
        collectibles(mode, GROUP, ARENA, &MotionConfig::default(), &mut rng)
    }

    #[test]
    fn spawns_the_requested_count() {
        for mode in MotionMode::ALL {
            let coins = spawn(mode);
            assert_eq!(coins.len(), 50, "{mode}");
            assert!(coins.iter().all(|c| c.kind == Kind::Collectible && c.size == GROUP.size));
        }
    }

    #[test]
    fn sliding_coins_start_in_the_arena_and_fall() {
        for c in spawn(MotionMode::Sliding) {
            assert!(in_arena(c.center));
            assert_eq!(c.motion, Motion::Fall { speed: 1.0 });
        }
    }

    #[test]
    fn bouncing_coins_start_fully_inside_with_integer_velocity() {
        for c in spawn(MotionMode::Bouncing) {
            assert!(c.left() >= 0.0 && c.right() <= 800.0);
            assert!(c.bottom() >= 0.0 && c.top() <= 600.0);
            let Motion::Bounce { velocity } = c.motion else { panic!("not bouncing") };
            for v in [velocity.x, velocity.y] {
                assert_eq!(v.fract(), 0.0);
                assert!((-3.0..=3.0).contains(&v));
            }
        }
    }

    #[test]
    fn line_dancers_alternate_direction() {
        let coins = spawn(MotionMode::LineDancing);
        for (i, c) in coins.iter().enumerate() {
            assert_eq!(c.center.x, 400.0);
            let expected = if i % 2 == 0 { -3.0 } else { 3.0 };
            assert_eq!(c.motion, Motion::Bounce { velocity: Vec2::new(expected, 0.0) });
        }
    }

    #[test]
    fn line_dancer_rows_fit_the_arena() {
        let coins = spawn(MotionMode::LineDancing);
        assert_eq!(coins[0].center.y, 5.0);
        assert!(coins.windows(2).all(|w| w[1].center.y > w[0].center.y));
        assert!(coins.iter().all(|c| c.center.y < 600.0));
    }

    #[test]
    fn compressed_rows_may_overlap() {
        let coins = spawn(MotionMode::LineDancing);
        let gap = coins[1].center.y - coins[0].center.y;
        // (600 - 5) / 50 rows, tighter than a 24 px coin.
        assert!((gap - 11.9).abs() < 1e-3);
        assert!(gap < GROUP.size.y);
        assert!(coins.iter().all(|c| in_arena(c.center)));
    }

    #[test]
    fn few_line_dancers_keep_the_nominal_spacing() {
        let mut rng = StdRng::seed_from_u64(1);
        let group = SpawnGroup { count: 3, ..GROUP };
        let coins = collectibles(MotionMode::LineDancing, group, ARENA, &MotionConfig::default(), &mut rng);
        let ys: Vec<f32> = coins.iter().map(|c| c.center.y).collect();
        assert_eq!(ys, vec![5.0, 25.0, 45.0]);
    }

    #[test]
    fn circling_coins_start_on_their_orbit() {
        for c in spawn(MotionMode::Circling) {
            let Motion::Orbit { center, radius, angle, speed } = c.motion else {
                panic!("not orbiting")
            };
            assert!(in_arena(center));
            assert!((10.0..200.0).contains(&radius) && radius.fract() == 0.0);
            assert!((0.0..TAU).contains(&angle));
            assert_eq!(speed, 0.008);
            assert_eq!(c.center, Motion::orbit_position(center, radius, angle));
        }
    }

    #[test]
    fn razors_slide_from_inside_the_arena() {
        let mut rng = StdRng::seed_from_u64(3);
        let razors = razors(GROUP, ARENA, &MotionConfig::default(), &mut rng);
        assert_eq!(razors.len(), 50);
        for r in razors {
            assert_eq!(r.kind, Kind::Hazard);
            assert!(in_arena(r.center));
            assert_eq!(r.motion, Motion::Slide { speed: 1.0 });
        }
    }

    #[test]
    fn same_seed_same_world() {
        assert_eq!(spawn(MotionMode::Circling), spawn(MotionMode::Circling));
    }
}
