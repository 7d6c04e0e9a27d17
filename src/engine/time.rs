use std::time::Instant;

use crate::locomotion::character::Clock;

/// Wall-clock frame timer. Each `delta_seconds` call returns the time since
/// the previous call, so whoever drives the tick also drives the measurement.
pub struct FrameTimer {
    last: Instant,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Clock for FrameTimer {
    fn delta_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Constant-step clock for scripted runs and tests.
pub struct FixedClock {
    step: f32,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl Clock for FixedClock {
    fn delta_seconds(&mut self) -> f32 {
        self.step
    }
}
