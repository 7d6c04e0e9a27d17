//! Input sampling: raw device levels in, per-tick intent with edges out.

use glam::Vec2;

/// Raw device levels for one tick. Devices report state, not events; the
/// sampler derives the press/release edges itself so jump-cut works the same
/// over any backend.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceSnapshot {
    /// Left-stick / WASD axes, x right and y forward. Unclamped here;
    /// the sampler clamps to [-1, 1].
    pub move_axis: Vec2,
    pub jump: bool,
    pub dodge: bool,
    pub dash: bool,
}

/// Device backend injected into the sampler at construction.
pub trait InputDevice {
    fn sample(&mut self) -> DeviceSnapshot;
}

/// What the character wants this tick. One is produced per tick and consumed
/// whole by the locomotion machine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputIntent {
    /// Each component in [-1, 1].
    pub move_axis: Vec2,
    pub jump_held: bool,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dodge_just_pressed: bool,
    pub dash_just_pressed: bool,
}

/// Turns device levels into intents. Holds the previous tick's levels, so it
/// must be sampled exactly once per tick or edges are lost.
pub struct InputSampler {
    device: Box<dyn InputDevice>,
    prev: DeviceSnapshot,
}

impl InputSampler {
    pub fn new(device: Box<dyn InputDevice>) -> Self {
        Self {
            device,
            prev: DeviceSnapshot::default(),
        }
    }

    /// Produce this tick's intent. No side effects beyond advancing the
    /// edge-detection memory.
    pub fn sample(&mut self) -> InputIntent {
        let snap = self.device.sample();
        let intent = InputIntent {
            move_axis: snap.move_axis.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)),
            jump_held: snap.jump,
            jump_just_pressed: snap.jump && !self.prev.jump,
            jump_just_released: !snap.jump && self.prev.jump,
            dodge_just_pressed: snap.dodge && !self.prev.dodge,
            dash_just_pressed: snap.dash && !self.prev.dash,
        };
        self.prev = snap;
        intent
    }
}
