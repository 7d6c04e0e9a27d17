//! Vertical velocity integration and the coyote-grace timer.

use super::config::LocomotionConfig;
use super::state::{LocomotionState, MotionState};

/// Integrate gravity into `velocity.y` and advance the coyote timer.
///
/// The gravity scale is derived fresh every tick from tuning and state:
/// full fall multiplier while descending, a half fall multiplier while
/// ascending under a cut jump, plain base gravity otherwise. The result is
/// clamped to terminal velocity.
pub fn integrate(motion: &mut MotionState, config: &LocomotionConfig, dt: f32) {
    let mut scale = config.base_gravity;
    if motion.velocity.y < 0.0 {
        scale *= config.gravity_fall_multiplier;
    } else if motion.jump_cut && motion.velocity.y > 0.0 {
        scale *= config.gravity_fall_multiplier * 0.5;
    }

    motion.velocity.y = (motion.velocity.y + scale * dt).max(-config.max_fall_speed);

    // Grace accumulates only while airborne without an active jump; landing
    // and jump launch both zero it in the machine.
    if !motion.grounded && motion.state() != LocomotionState::Jumping {
        motion.coyote_timer += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn airborne() -> MotionState {
        let mut motion = MotionState::new();
        motion.grounded = false;
        motion.fsm.go(LocomotionState::Falling);
        motion
    }

    #[test]
    fn descent_uses_the_fall_multiplier() {
        let config = LocomotionConfig::default();
        let mut motion = airborne();
        motion.velocity.y = -1.0;

        integrate(&mut motion, &config, DT);

        let expected = -1.0 + config.base_gravity * config.gravity_fall_multiplier * DT;
        assert!((motion.velocity.y - expected).abs() < 1e-6);
    }

    #[test]
    fn ascent_without_cut_uses_base_gravity() {
        let config = LocomotionConfig::default();
        let mut motion = airborne();
        motion.fsm.go(LocomotionState::Jumping);
        motion.velocity.y = 4.0;

        integrate(&mut motion, &config, DT);

        let expected = 4.0 + config.base_gravity * DT;
        assert!((motion.velocity.y - expected).abs() < 1e-6);
    }

    #[test]
    fn cut_ascent_decelerates_faster_but_descent_ignores_the_latch() {
        let config = LocomotionConfig::default();

        let mut cut = airborne();
        cut.fsm.go(LocomotionState::Jumping);
        cut.velocity.y = 4.0;
        cut.jump_cut = true;
        integrate(&mut cut, &config, DT);

        let mut uncut = airborne();
        uncut.fsm.go(LocomotionState::Jumping);
        uncut.velocity.y = 4.0;
        integrate(&mut uncut, &config, DT);

        assert!(cut.velocity.y < uncut.velocity.y);

        // Once descending, a stale latch changes nothing.
        let mut descending_cut = airborne();
        descending_cut.velocity.y = -2.0;
        descending_cut.jump_cut = true;
        let mut descending = airborne();
        descending.velocity.y = -2.0;
        integrate(&mut descending_cut, &config, DT);
        integrate(&mut descending, &config, DT);
        assert_eq!(descending_cut.velocity.y, descending.velocity.y);
    }

    #[test]
    fn fall_speed_clamps_at_terminal_velocity() {
        let config = LocomotionConfig::default();
        let mut motion = airborne();
        motion.velocity.y = -config.max_fall_speed + 0.01;

        // A long stall frame would overshoot terminal velocity unclamped.
        integrate(&mut motion, &config, 0.5);

        assert_eq!(motion.velocity.y, -config.max_fall_speed);
    }

    #[test]
    fn coyote_accumulates_only_while_airborne_and_not_jumping() {
        let config = LocomotionConfig::default();

        let mut falling = airborne();
        integrate(&mut falling, &config, DT);
        assert!(falling.coyote_timer > 0.0);

        let mut jumping = airborne();
        jumping.fsm.go(LocomotionState::Jumping);
        integrate(&mut jumping, &config, DT);
        assert_eq!(jumping.coyote_timer, 0.0);

        let mut grounded = MotionState::new();
        grounded.grounded = true;
        integrate(&mut grounded, &config, DT);
        assert_eq!(grounded.coyote_timer, 0.0);
    }
}
