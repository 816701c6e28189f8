/// Fixed-timestep accumulator.
///
/// Frame deltas are accumulated and drained in whole steps, so per-step
/// constants (pixels per tick, radians per tick) behave the same at any
/// refresh rate. At most `max_steps` are returned per call; leftover time
/// beyond that is dropped.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FixedStep {
    /// `rate` is in steps per second.
    pub fn new(rate: f32, max_steps: u32) -> Self {
        debug_assert!(rate > 0.0);
        Self {
            step: 1.0 / rate,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    /// Adds `dt` seconds and returns how many whole steps to simulate.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if steps == self.max_steps && self.accumulator >= self.step {
            log::trace!("fixed step saturated; dropping {:.3}s", self.accumulator);
            self.accumulator %= self.step;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(60.0, 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_steps_are_drained() {
        let mut fs = FixedStep::new(10.0, 8);
        assert_eq!(fs.advance(0.25), 2);
        // 0.05s carried over
        assert_eq!(fs.advance(0.06), 1);
    }

    #[test]
    fn short_frames_accumulate() {
        let mut fs = FixedStep::new(60.0, 8);
        assert_eq!(fs.advance(0.008), 0);
        assert_eq!(fs.advance(0.010), 1);
    }

    #[test]
    fn saturation_caps_steps_and_drops_backlog() {
        let mut fs = FixedStep::new(60.0, 4);
        assert_eq!(fs.advance(1.0), 4);
        assert_eq!(fs.advance(0.0), 0);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut fs = FixedStep::default();
        assert_eq!(fs.advance(-1.0), 0);
        assert_eq!(fs.advance(1.0 / 60.0 + 1e-4), 1);
    }
}
