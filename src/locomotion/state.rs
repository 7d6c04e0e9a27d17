//! Locomotion state data. Transition logic lives in
//! `locomotion::machine` so this file stays pure data.

use glam::Vec3;

use crate::fsm::StateMachine;

/// The canonical locomotion state. Exactly one is active per tick; the
/// animation flags are a pure projection of it (`locomotion::animation`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocomotionState {
    Idle,
    Walking,
    /// Active jump, from launch until the next landing.
    Jumping,
    /// Airborne without an active jump (stepped off a ledge, post-dash air
    /// time, descent after a canceled jump).
    Falling,
    /// Timed speed burst. Elapsed time lives in the state container.
    Dashing,
    /// Scripted evade. Ends on an external completion signal, not a timer.
    Dodging,
}

impl LocomotionState {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            LocomotionState::Idle => "Idle",
            LocomotionState::Walking => "Walking",
            LocomotionState::Jumping => "Jumping",
            LocomotionState::Falling => "Falling",
            LocomotionState::Dashing => "Dashing",
            LocomotionState::Dodging => "Dodging",
        }
    }

    /// States that hold through the movement/idle settle instead of being
    /// re-derived from input every tick.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LocomotionState::Jumping | LocomotionState::Dashing | LocomotionState::Dodging
        )
    }
}

pub type LocomotionFsm = StateMachine<LocomotionState>;

/// Mutable per-character motion record. The machine mutates it in place; the
/// Mover authors `grounded` at the end of each tick.
pub struct MotionState {
    /// Only the y component is integrated by the core; x/z stay zero and the
    /// horizontal displacement is handed to the Mover directly.
    pub velocity: Vec3,
    /// Result of the previous tick's Mover call. Spawns airborne; the first
    /// resolved move settles it.
    pub grounded: bool,
    /// Seconds since leaving ground without jumping. Zeroed on landing and
    /// on jump launch.
    pub coyote_timer: f32,
    /// Set when an ascending jump's button is released; steepens gravity for
    /// the rest of the ascent. Cleared on landing and on jump launch.
    pub jump_cut: bool,
    /// Facing yaw in degrees, `atan2(dx, dz)` convention (0° looks down +Z).
    pub facing_yaw: f32,
    /// Active state plus time-in-state (dash/dodge elapsed).
    pub fsm: LocomotionFsm,
}

impl MotionState {
    pub fn new() -> Self {
        Self {
            velocity: Vec3::ZERO,
            grounded: false,
            coyote_timer: 0.0,
            jump_cut: false,
            facing_yaw: 0.0,
            fsm: StateMachine::new(LocomotionState::Idle),
        }
    }

    /// Current state, by value.
    pub fn state(&self) -> LocomotionState {
        self.fsm.state
    }

    /// External cancellation (reset/death): clears the active state, timers,
    /// and velocity atomically. Facing is kept for visual continuity and
    /// `grounded` is re-authored by the next Mover call.
    pub fn reset(&mut self) {
        self.velocity = Vec3::ZERO;
        self.coyote_timer = 0.0;
        self.jump_cut = false;
        self.fsm.reset(LocomotionState::Idle);
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new()
    }
}
