/// Slowest rate the clock accepts, in steps per second
pub const MIN_STEPS_PER_SECOND: f32 = 1.0;
/// Fastest rate the clock accepts, in steps per second
pub const MAX_STEPS_PER_SECOND: f32 = 60.0;
/// Most steps a single `advance` may report. Any backlog beyond it is dropped.
pub const MAX_STEPS_PER_ADVANCE: u32 = 32;

/// Fixed-rate step clock driven by frame deltas.
///
/// Frame time is accumulated and one interval is consumed per due step, so
/// a single frame can yield zero, one or several steps and no elapsed time
/// is lost to rounding.
#[derive(Clone, Debug)]
pub struct StepClock {
    interval: f32,
    accumulated: f32,
}

impl StepClock {
    /// Clock firing `steps_per_second` times per second of frame time.
    /// The rate is clamped to `MIN_STEPS_PER_SECOND..=MAX_STEPS_PER_SECOND`.
    pub fn new(steps_per_second: f32) -> Self {
        let rate = steps_per_second
            .max(MIN_STEPS_PER_SECOND)
            .min(MAX_STEPS_PER_SECOND);
        Self {
            interval: 1.0 / rate,
            accumulated: 0.0,
        }
    }

    /// Add `delta_time` seconds and return how many steps are now due
    pub fn advance(&mut self, delta_time: f32) -> u32 {
        self.accumulated += delta_time.max(0.0);
        let mut due = 0;
        while self.accumulated >= self.interval && due < MAX_STEPS_PER_ADVANCE {
            self.accumulated -= self.interval;
            due += 1;
        }
        if self.accumulated >= self.interval {
            // Too far behind to catch up; start over from this frame
            self.accumulated = 0.0;
        }
        due
    }

    /// Drop any partially accumulated time
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_step_before_interval() {
        let mut clock = StepClock::new(8.0);
        assert_eq!(clock.advance(0.1), 0);
        assert_eq!(clock.advance(0.02), 0);
        assert_eq!(clock.advance(0.01), 1);
    }

    #[test]
    fn test_long_frame_fires_multiple_steps() {
        let mut clock = StepClock::new(8.0);
        assert_eq!(clock.advance(0.5), 4);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = StepClock::new(4.0);
        // 60 frames of 1/60s = 1s = 4 steps total
        let total: u32 = (0..60).map(|_| clock.advance(1.0 / 60.0)).sum();
        assert!((3..=4).contains(&total), "total = {}", total);
        assert_eq!(clock.advance(0.25 + 1e-3) + total, 5);
    }

    #[test]
    fn test_reset_drops_remainder() {
        let mut clock = StepClock::new(8.0);
        clock.advance(0.1);
        clock.reset();
        assert_eq!(clock.advance(0.1), 0);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut clock = StepClock::new(8.0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(0.125), 1);
    }

    #[test]
    fn test_rate_is_clamped() {
        // A quarter second at 60 steps/s, give or take float rounding
        let mut fast = StepClock::new(1e10);
        let due = fast.advance(0.25);
        assert!((14..=15).contains(&due), "due = {}", due);
        let mut slow = StepClock::new(0.0);
        assert_eq!(slow.advance(0.5), 0);
        assert_eq!(slow.advance(0.5), 1);
        let mut nan = StepClock::new(f32::NAN);
        assert_eq!(nan.advance(1.0), 1);
    }

    #[test]
    fn test_huge_frame_is_capped() {
        let mut clock = StepClock::new(MAX_STEPS_PER_SECOND);
        assert_eq!(clock.advance(1e30), MAX_STEPS_PER_ADVANCE);
        // The backlog is gone, not carried into the next frame
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.advance(f32::INFINITY), MAX_STEPS_PER_ADVANCE);
        assert_eq!(clock.advance(0.0), 0);
    }
}
