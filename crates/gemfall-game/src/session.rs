//! One play-through: entities, score and the terminal condition.

use gemfall_engine::coords::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision;
use crate::config::MotionConfig;
use crate::entity::{Entity, Kind, Player};
use crate::motion::MotionMode;
use crate::spawn::{self, SpawnGroup};
use crate::world::Arena;

/// Everything needed to (re)build a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSetup {
    pub arena: Arena,
    pub player_size: Vec2,
    pub mode: MotionMode,
    pub collectibles: SpawnGroup,
    pub hazards: Option<SpawnGroup>,
    pub motion: MotionConfig,
    /// The session ends once every collectible is gone.
    pub ends_when_collected: bool,
}

/// What one tick's collision sweep removed.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StepReport {
    pub collected: usize,
    pub hazards_hit: usize,
}

impl StepReport {
    pub fn score_delta(self) -> i32 {
        self.collected as i32 * Kind::Collectible.score_delta()
            + self.hazards_hit as i32 * Kind::Hazard.score_delta()
    }

    pub fn is_empty(self) -> bool {
        self.collected == 0 && self.hazards_hit == 0
    }
}

pub struct Session {
    setup: SessionSetup,
    rng: StdRng,

    player: Player,
    collectibles: Vec<Entity>,
    hazards: Vec<Entity>,

    score: i32,
    over: bool,
    ticks: u64,
}

impl Session {
    /// Spawns a fresh world. `seed` makes it reproducible.
    pub fn new(setup: SessionSetup, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = Self {
            player: Player::new(setup.player_size),
            setup,
            rng,
            collectibles: Vec::new(),
            hazards: Vec::new(),
            score: 0,
            over: false,
            ticks: 0,
        };
        session.populate();
        session
    }

    /// Respawns everything and resets the score. The RNG keeps running, so a
    /// restart produces a new layout.
    pub fn restart(&mut self) {
        self.player = Player::new(self.setup.player_size);
        self.score = 0;
        self.ticks = 0;
        self.populate();
        log::info!("session restarted");
    }

    fn populate(&mut self) {
        let s = &self.setup;
        self.collectibles = spawn::collectibles(s.mode, s.collectibles, s.arena, &s.motion, &mut self.rng);
        self.hazards = match s.hazards {
            Some(group) => spawn::razors(group, s.arena, &s.motion, &mut self.rng),
            None => Vec::new(),
        };
        self.over = self.is_terminal();
        log::debug!(
            "spawned {} collectibles ({}) and {} hazards",
            self.collectibles.len(),
            s.mode,
            self.hazards.len()
        );
    }

    fn is_terminal(&self) -> bool {
        self.setup.ends_when_collected && self.collectibles.is_empty()
    }

    /// Moves the player to a world-space position. Ignored once over.
    pub fn move_player(&mut self, pos: Vec2) {
        if !self.over {
            self.player.move_to(pos);
        }
    }

    /// Runs one tick: motion, then the collision sweep, then scoring.
    ///
    /// Does nothing once the session is over.
    pub fn step(&mut self) -> StepReport {
        if self.over {
            return StepReport::default();
        }
        self.ticks += 1;

        let (arena, motion) = (self.setup.arena, &self.setup.motion);
        for e in self.collectibles.iter_mut().chain(self.hazards.iter_mut()) {
            if e.advance(arena, motion, &mut self.rng) {
                log::trace!("{:?} respawned at ({:.1}, {:.1})", e.kind, e.center.x, e.center.y);
            }
        }

        let report = StepReport {
            collected: collision::sweep(&self.player, &mut self.collectibles),
            hazards_hit: collision::sweep(&self.player, &mut self.hazards),
        };

        if !report.is_empty() {
            self.score += report.score_delta();
            log::debug!(
                "+{} -{} -> score {}",
                report.collected,
                report.hazards_hit,
                self.score
            );
        }

        if self.is_terminal() {
            self.over = true;
            log::info!("game over after {} ticks, score {}", self.ticks, self.score);
        }

        report
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn arena(&self) -> Arena {
        self.setup.arena
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn collectibles(&self) -> &[Entity] {
        &self.collectibles
    }

    pub fn hazards(&self) -> &[Entity] {
        &self.hazards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Body;
    use crate::motion::Motion;

    const ARENA: Arena = Arena::new(800.0, 600.0);

    fn setup(mode: MotionMode, hazards: bool, ends: bool) -> SessionSetup {
        SessionSetup {
            arena: ARENA,
            player_size: Vec2::new(40.0, 40.0),
            mode,
            collectibles: SpawnGroup {
                count: 50,
                size: Vec2::new(16.0, 16.0),
            },
            hazards: hazards.then_some(SpawnGroup {
                count: 50,
                size: Vec2::new(16.0, 16.0),
            }),
            motion: MotionConfig::default(),
            ends_when_collected: ends,
        }
    }

    /// Parks the player on each remaining collectible in turn until none
    /// are left, summing what the sweeps report.
    fn collect_everything(session: &mut Session) -> (usize, usize) {
        let (mut collected, mut hit) = (0, 0);
        for _ in 0..10_000 {
            let Some(target) = session.collectibles().first() else { break };
            // Aim where it will be after this tick's motion.
            let mut probe = target.clone();
            let mut rng = StdRng::seed_from_u64(0);
            probe.advance(session.arena(), &MotionConfig::default(), &mut rng);
            session.move_player(probe.center);
            let report = session.step();
            collected += report.collected;
            hit += report.hazards_hit;
        }
        (collected, hit)
    }

    #[test]
    fn fresh_session() {
        let s = Session::new(setup(MotionMode::Sliding, false, false), Some(1));
        assert_eq!(s.score(), 0);
        assert_eq!(s.collectibles().len(), 50);
        assert!(s.hazards().is_empty());
        assert_eq!(s.player().center, Vec2::new(50.0, 50.0));
        assert!(!s.is_over());
    }

    #[test]
    fn collecting_everything_scores_the_count() {
        for mode in MotionMode::ALL {
            let mut s = Session::new(setup(mode, false, false), Some(11));
            let (collected, hit) = collect_everything(&mut s);
            assert_eq!((collected, hit), (50, 0), "{mode}");
            assert_eq!(s.score(), 50);
            assert!(s.collectibles().is_empty());
            // Coin motion has no terminal condition.
            assert!(!s.is_over());
        }
    }

    #[test]
    fn respawned_entities_can_still_be_hit() {
        let mut s = Session::new(setup(MotionMode::Sliding, true, false), Some(6));
        let size = Vec2::new(16.0, 16.0);
        // One tick from dropping below the floor and from passing the left edge.
        s.collectibles = vec![Entity::new(
            Kind::Collectible,
            Vec2::new(400.0, -8.5),
            size,
            Motion::Fall { speed: 1.0 },
        )];
        s.hazards = vec![Entity::new(Kind::Hazard, Vec2::new(5.0, 300.0), size, Motion::Slide { speed: 1.0 })];

        s.move_player(Vec2::new(-5_000.0, -5_000.0));
        assert!(s.step().is_empty());

        let (coin, razor) = (s.collectibles()[0].center, s.hazards()[0].center);
        assert!((620.0..700.0).contains(&coin.y) && (0.0..800.0).contains(&coin.x));
        assert!((820.0..900.0).contains(&razor.x) && (0.0..600.0).contains(&razor.y));

        let (mut collected, mut hit) = (0, 0);
        for _ in 0..100 {
            let Some(target) = s.collectibles().first().or(s.hazards().first()) else { break };
            let mut next = target.clone();
            next.advance(s.arena(), &MotionConfig::default(), &mut StdRng::seed_from_u64(0));
            s.move_player(next.center);
            let report = s.step();
            collected += report.collected;
            hit += report.hazards_hit;
        }
        assert_eq!((collected, hit), (1, 1));
        assert_eq!(s.score(), 0);
        assert!(s.collectibles().is_empty() && s.hazards().is_empty());
    }

    #[test]
    fn rubies_and_razors_score_is_the_difference() {
        let mut s = Session::new(setup(MotionMode::Circling, true, true), Some(5));
        let (collected, hit) = collect_everything(&mut s);
        assert_eq!(collected, 50);
        assert_eq!(s.score(), 50 - hit as i32);
        assert!(s.collectibles().is_empty());
        assert!(s.is_over());
    }

    #[test]
    fn score_can_go_negative() {
        let mut s = Session::new(setup(MotionMode::Circling, true, true), Some(9));
        // Sit on razors without touching rubies.
        s.collectibles.clear();
        s.over = false;
        s.setup.ends_when_collected = false;
        // Far from the left edge so it cannot respawn this tick.
        let razor = s.hazards().iter().find(|h| h.center.x > 100.0).unwrap().center;
        s.move_player(razor + Vec2::new(-1.0, 0.0));
        let report = s.step();
        assert!(report.hazards_hit >= 1);
        assert_eq!(s.score(), -(report.hazards_hit as i32));
    }

    #[test]
    fn game_over_freezes_motion_and_input() {
        let mut s = Session::new(setup(MotionMode::Circling, true, true), Some(2));
        collect_everything(&mut s);
        assert!(s.is_over());

        let hazards = s.hazards().to_vec();
        let player = s.player().center;
        let score = s.score();

        s.move_player(Vec2::new(1.0, 1.0));
        for _ in 0..10 {
            assert_eq!(s.step(), StepReport::default());
        }
        assert_eq!(s.hazards(), &hazards[..]);
        assert_eq!(s.player().center, player);
        assert_eq!(s.score(), score);
    }

    #[test]
    fn restart_resets_score_and_entities() {
        let mut s = Session::new(setup(MotionMode::Circling, true, true), Some(4));
        collect_everything(&mut s);
        assert!(s.is_over());

        s.restart();
        assert_eq!(s.score(), 0);
        assert!(!s.is_over());
        assert_eq!(s.collectibles().len(), 50);
        assert_eq!(s.hazards().len(), 50);
        assert_eq!(s.player().center, Vec2::new(50.0, 50.0));
        assert_eq!(s.ticks(), 0);
    }

    #[test]
    fn empty_population_ends_immediately() {
        let mut cfg = setup(MotionMode::Circling, true, true);
        cfg.collectibles.count = 0;
        let s = Session::new(cfg, Some(1));
        assert!(s.is_over());
    }

    #[test]
    fn each_entity_scores_once() {
        let mut s = Session::new(setup(MotionMode::LineDancing, false, false), Some(3));
        let first = s.collectibles()[0].clone();
        s.move_player(first.center);
        let a = s.step();
        let b = s.step();
        assert!(a.collected >= 1);
        // Anything left under the player arrived this tick, not the same coin.
        assert!(!s.collectibles().iter().any(|c| *c == first));
        assert_eq!(s.score(), (a.collected + b.collected) as i32);
    }

    #[test]
    fn player_far_away_collects_nothing() {
        let mut s = Session::new(setup(MotionMode::Bouncing, false, false), Some(8));
        s.move_player(Vec2::new(-5_000.0, -5_000.0));
        for _ in 0..100 {
            assert!(s.step().is_empty());
        }
        assert_eq!(s.collectibles().len(), 50);
        assert!(s.collectibles().iter().all(|c| c.hitbox().size.x > 0.0));
    }
}
