//! The character itself: collaborators injected at construction, one
//! evaluation per tick.

use glam::Vec3;
use log::debug;

use super::animation::{self, AnimationSink};
use super::config::{ConfigError, LocomotionConfig};
use super::intent::InputSampler;
use super::machine;
use super::orientation;
use super::state::{LocomotionState, MotionState};

/// Authoritative collision resolution. Applies a world-space displacement to
/// the character body and reports whether the body ended the move on
/// walkable ground. Called at most once per tick.
pub trait Mover {
    fn attempt_move(&mut self, displacement: Vec3) -> bool;
}

/// Frame-time source. Deltas are assumed non-negative.
pub trait Clock {
    fn delta_seconds(&mut self) -> f32;
}

/// External notification that ends the Dodging state, typically wired to the
/// dodge clip's completion callback. Polled once per tick; a `true` return
/// consumes the notification.
pub trait DodgeSignal {
    fn poll_complete(&mut self) -> bool;
}

/// One playable character. Construction validates the tuning and takes every
/// collaborator explicitly; after that, `update` runs a tick with no error
/// paths and no hidden lookups.
pub struct Character {
    config: LocomotionConfig,
    motion: MotionState,
    sampler: InputSampler,
    mover: Box<dyn Mover>,
    clock: Box<dyn Clock>,
    animation: Box<dyn AnimationSink>,
    dodge_signal: Box<dyn DodgeSignal>,
}

impl Character {
    pub fn new(
        config: LocomotionConfig,
        sampler: InputSampler,
        mover: Box<dyn Mover>,
        clock: Box<dyn Clock>,
        animation: Box<dyn AnimationSink>,
        dodge_signal: Box<dyn DodgeSignal>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            motion: MotionState::new(),
            sampler,
            mover,
            clock,
            animation,
            dodge_signal,
        })
    }

    /// Run one tick: sample intent, decide and integrate, hand the
    /// displacement to the Mover, steer facing, push the animation flags.
    /// Returns the state the tick settled on.
    pub fn update(&mut self) -> LocomotionState {
        let dt = self.clock.delta_seconds();
        let intent = self.sampler.sample();
        let dodge_complete = self.dodge_signal.poll_complete();

        let decision =
            machine::advance(&mut self.motion, &intent, &self.config, dodge_complete, dt);

        // The single Mover call of the tick; its grounded verdict feeds the
        // next tick's decisions.
        self.motion.grounded = self.mover.attempt_move(decision.displacement);

        if let Some(heading) = decision.heading {
            self.motion.facing_yaw =
                orientation::turn_toward(self.motion.facing_yaw, heading, &self.config, dt);
        }

        self.animation
            .set_flags(animation::project(self.motion.state()));

        if self.motion.fsm.just_entered() {
            debug!(
                "[locomotion] {} -> {}",
                self.motion.fsm.previous.label(),
                self.motion.state().label()
            );
        }

        self.motion.state()
    }

    /// External cancellation (reset/death): clears the active state, timers,
    /// and velocity within this call.
    pub fn reset(&mut self) {
        self.motion.reset();
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;
    use crate::engine::time::FixedClock;
    use crate::locomotion::animation::AnimationFlags;
    use crate::locomotion::intent::{DeviceSnapshot, InputDevice};

    const DT: f32 = 1.0 / 60.0;

    struct FixedDevice(DeviceSnapshot);

    impl InputDevice for FixedDevice {
        fn sample(&mut self) -> DeviceSnapshot {
            self.0
        }
    }

    /// Plays frames in order, holding the last one.
    struct SequenceDevice {
        frames: Vec<DeviceSnapshot>,
        cursor: usize,
    }

    impl InputDevice for SequenceDevice {
        fn sample(&mut self) -> DeviceSnapshot {
            let snap = self.frames[self.cursor.min(self.frames.len() - 1)];
            self.cursor += 1;
            snap
        }
    }

    #[derive(Default)]
    struct MoverLog {
        calls: usize,
        last_displacement: Vec3,
        grounded: bool,
    }

    #[derive(Clone)]
    struct SharedMover(Rc<RefCell<MoverLog>>);

    impl Mover for SharedMover {
        fn attempt_move(&mut self, displacement: Vec3) -> bool {
            let mut log = self.0.borrow_mut();
            log.calls += 1;
            log.last_displacement = displacement;
            log.grounded
        }
    }

    #[derive(Clone, Default)]
    struct SharedSink(Rc<RefCell<Vec<AnimationFlags>>>);

    impl AnimationSink for SharedSink {
        fn set_flags(&mut self, flags: AnimationFlags) {
            self.0.borrow_mut().push(flags);
        }
    }

    struct NeverComplete;

    impl DodgeSignal for NeverComplete {
        fn poll_complete(&mut self) -> bool {
            false
        }
    }

    fn character_with(
        snapshot: DeviceSnapshot,
        mover: SharedMover,
        sink: SharedSink,
    ) -> Character {
        Character::new(
            LocomotionConfig::default(),
            InputSampler::new(Box::new(FixedDevice(snapshot))),
            Box::new(mover),
            Box::new(FixedClock::new(DT)),
            Box::new(sink),
            Box::new(NeverComplete),
        )
        .unwrap()
    }

    #[test]
    fn construction_rejects_broken_tuning() {
        let config = LocomotionConfig {
            base_gravity: 1.0,
            ..Default::default()
        };
        let result = Character::new(
            config,
            InputSampler::new(Box::new(FixedDevice(DeviceSnapshot::default()))),
            Box::new(SharedMover(Rc::default())),
            Box::new(FixedClock::new(DT)),
            Box::new(SharedSink::default()),
            Box::new(NeverComplete),
        );
        assert!(matches!(result, Err(ConfigError::BaseGravity(_))));
    }

    #[test]
    fn a_tick_calls_the_mover_once_and_pushes_flags() {
        let mover_log = Rc::new(RefCell::new(MoverLog {
            grounded: true,
            ..Default::default()
        }));
        let sink = SharedSink::default();
        let walk = DeviceSnapshot {
            move_axis: Vec2::new(0.0, 1.0),
            ..Default::default()
        };
        let mut character = character_with(walk, SharedMover(mover_log.clone()), sink.clone());

        // Spawn is airborne: the first tick settles to Falling, the Mover
        // lands us, and the second tick walks.
        assert_eq!(character.update(), LocomotionState::Falling);
        assert_eq!(character.update(), LocomotionState::Walking);

        let log = mover_log.borrow();
        assert_eq!(log.calls, 2);
        let stride = Vec2::new(log.last_displacement.x, log.last_displacement.z).length();
        assert!((stride - character.config().move_speed * DT).abs() < 1e-5);

        let pushed = sink.0.borrow();
        assert_eq!(pushed.len(), 2);
        assert!(pushed[0].is_falling);
        assert!(pushed[1].is_walking);
    }

    #[test]
    fn facing_follows_the_heading() {
        let mover_log = Rc::new(RefCell::new(MoverLog {
            grounded: true,
            ..Default::default()
        }));
        let strafe = DeviceSnapshot {
            move_axis: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        let mut character = character_with(
            strafe,
            SharedMover(mover_log),
            SharedSink::default(),
        );

        for _ in 0..120 {
            character.update();
        }

        assert!((character.motion().facing_yaw - 90.0).abs() < 1.0);
    }

    #[test]
    fn reset_cancels_an_active_jump() {
        let mover_log = Rc::new(RefCell::new(MoverLog {
            grounded: true,
            ..Default::default()
        }));
        // Land first, then press jump so the edge arrives while grounded.
        let device = SequenceDevice {
            frames: vec![
                DeviceSnapshot::default(),
                DeviceSnapshot {
                    jump: true,
                    ..Default::default()
                },
            ],
            cursor: 0,
        };
        let mut character = Character::new(
            LocomotionConfig::default(),
            InputSampler::new(Box::new(device)),
            Box::new(SharedMover(mover_log)),
            Box::new(FixedClock::new(DT)),
            Box::new(SharedSink::default()),
            Box::new(NeverComplete),
        )
        .unwrap();

        character.update(); // lands
        character.update(); // jumps
        assert_eq!(character.motion().state(), LocomotionState::Jumping);

        character.reset();

        assert_eq!(character.motion().state(), LocomotionState::Idle);
        assert_eq!(character.motion().velocity, Vec3::ZERO);
    }
}
