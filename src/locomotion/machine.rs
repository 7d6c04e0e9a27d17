//! The per-tick transition core: fixed-priority state decisions, gravity,
//! and the displacement handed to the Mover.

use glam::{Vec2, Vec3};
use log::debug;

use super::config::LocomotionConfig;
use super::gravity;
use super::intent::InputIntent;
use super::state::{LocomotionState, MotionState};

/// What one tick decided: the world-space displacement for the Mover and,
/// when steering is allowed this tick, the heading for the orientation
/// controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickDecision {
    pub displacement: Vec3,
    pub heading: Option<Vec2>,
}

/// Initial vertical speed whose ballistic apex is `jump_height` under
/// `base_gravity`: sqrt(2 · h · |g|).
pub fn launch_velocity(config: &LocomotionConfig) -> f32 {
    (2.0 * config.jump_height * config.base_gravity.abs()).sqrt()
}

/// Advance one tick.
///
/// Deterministic in (previous motion, intent, config, dodge signal, dt): the
/// grounded flag read here is the one the previous Mover call produced, and
/// the only effects are the mutated `motion` and the returned decision.
///
/// Order within the tick: landing reset, dodge/dash exits, the
/// jump / jump-cut / dodge / dash trigger chain (at most one fires),
/// gravity, then the movement/idle settle.
pub fn advance(
    motion: &mut MotionState,
    intent: &InputIntent,
    config: &LocomotionConfig,
    dodge_complete: bool,
    dt: f32,
) -> TickDecision {
    motion.fsm.tick(dt);

    // ------------------------------------------------------------------
    // Landing reset
    // ------------------------------------------------------------------
    if motion.grounded {
        motion.velocity.y = 0.0;
        motion.coyote_timer = 0.0;
        motion.jump_cut = false;
        if matches!(
            motion.state(),
            LocomotionState::Jumping | LocomotionState::Falling
        ) {
            // Provisional; the settle below promotes to Walking if input
            // warrants it.
            motion.fsm.go(LocomotionState::Idle);
        }
    }

    // ------------------------------------------------------------------
    // Exits for the timed/signaled states
    // ------------------------------------------------------------------
    // Processed before the trigger chain so a press on the exact exit tick
    // can re-enter.
    if motion.state() == LocomotionState::Dodging && dodge_complete {
        motion.fsm.go(LocomotionState::Idle);
    }
    if motion.state() == LocomotionState::Dashing && motion.fsm.elapsed >= config.dash_duration {
        motion.fsm.go(LocomotionState::Idle);
    }

    // ------------------------------------------------------------------
    // Trigger chain: first eligible entry wins
    // ------------------------------------------------------------------
    let jumping = motion.state() == LocomotionState::Jumping;
    let dodging = motion.state() == LocomotionState::Dodging;
    let dashing = motion.state() == LocomotionState::Dashing;
    // Open interval: a timer exactly at zero or exactly at the allowance is
    // outside the grace window.
    let coyote_open = motion.coyote_timer > 0.0 && motion.coyote_timer < config.coyote_allowance;

    if intent.jump_just_pressed && (motion.grounded || coyote_open) {
        motion.velocity.y = launch_velocity(config);
        motion.coyote_timer = 0.0;
        motion.jump_cut = false;
        motion.fsm.go(LocomotionState::Jumping);
        debug!(
            "[locomotion] jump, launch velocity {:.2}",
            motion.velocity.y
        );
    } else if jumping && intent.jump_just_released && motion.velocity.y > 0.0 {
        // Tapped button: steepen gravity for the rest of the ascent.
        motion.jump_cut = true;
    } else if !jumping && !dodging && intent.dodge_just_pressed {
        motion.fsm.go(LocomotionState::Dodging);
    } else if !dashing && !dodging && intent.dash_just_pressed {
        motion.fsm.go(LocomotionState::Dashing);
    }

    // ------------------------------------------------------------------
    // Gravity, always
    // ------------------------------------------------------------------
    gravity::integrate(motion, config, dt);

    // ------------------------------------------------------------------
    // Movement / idle settle and the Mover displacement
    // ------------------------------------------------------------------
    let dodging = motion.state() == LocomotionState::Dodging;
    let dashing = motion.state() == LocomotionState::Dashing;

    let axis = intent.move_axis;
    let idle_input =
        axis.x.abs() < config.input_deadzone && axis.y.abs() < config.input_deadzone;

    let mut displacement = Vec3::new(0.0, motion.velocity.y * dt, 0.0);
    let mut heading = None;

    // TODO: a dash with no directional input goes nowhere; dash along the
    // current facing instead.
    if !dodging && !idle_input {
        // The deadzone test rejected near-zero axes, so normalize is safe.
        let direction = Vec3::new(axis.x, 0.0, axis.y).normalize();
        let speed = if dashing {
            config.move_speed * config.dash_speed_multiplier
        } else {
            config.move_speed
        };
        displacement += direction * speed * dt;
        heading = Some(axis);
    }

    if !motion.state().is_transient() {
        let settled = if !motion.grounded {
            LocomotionState::Falling
        } else if idle_input {
            LocomotionState::Idle
        } else {
            LocomotionState::Walking
        };
        motion.fsm.go(settled);
    }

    TickDecision {
        displacement,
        heading,
    }
}
