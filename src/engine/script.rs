//! Canned input timelines for the headless demo run.

use crate::locomotion::intent::{DeviceSnapshot, InputDevice};

struct Segment {
    duration: f32,
    snapshot: DeviceSnapshot,
}

/// Plays a list of held-input segments at a fixed step. Once the timeline
/// runs out it reports an all-released device forever, so trailing ticks can
/// settle the character (landing, dodge completion).
pub struct ScriptedDevice {
    segments: Vec<Segment>,
    step: f32,
    elapsed: f32,
}

impl ScriptedDevice {
    pub fn new(step: f32) -> Self {
        Self {
            segments: Vec::new(),
            step,
            elapsed: 0.0,
        }
    }

    /// Append a stretch of `duration` seconds during which `snapshot` is the
    /// device state.
    pub fn hold(mut self, duration: f32, snapshot: DeviceSnapshot) -> Self {
        self.segments.push(Segment { duration, snapshot });
        self
    }

    /// Number of fixed steps the timeline itself covers.
    pub fn total_ticks(&self) -> usize {
        let total: f32 = self.segments.iter().map(|s| s.duration).sum();
        (total / self.step).ceil() as usize
    }

    fn at(&self, t: f32) -> DeviceSnapshot {
        let mut start = 0.0;
        for segment in &self.segments {
            if t < start + segment.duration {
                return segment.snapshot;
            }
            start += segment.duration;
        }
        DeviceSnapshot::default()
    }
}

impl InputDevice for ScriptedDevice {
    fn sample(&mut self) -> DeviceSnapshot {
        let snap = self.at(self.elapsed);
        self.elapsed += self.step;
        snap
    }
}
