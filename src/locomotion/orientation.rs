//! Facing-yaw smoothing toward the current movement heading.

use glam::Vec2;

use super::config::LocomotionConfig;

/// Smooth the facing yaw toward the heading implied by `direction`
/// (x maps to world dx, y to world dz; yaw 0° looks down +Z, +90° down +X).
///
/// Below the deadzone the current facing holds — releasing the stick never
/// snaps the character back toward zero. The interpolation is exponential:
/// every tick covers the fraction `rotation_smoothing_rate * dt` of the
/// remaining arc, along the shortest way around.
pub fn turn_toward(facing_yaw: f32, direction: Vec2, config: &LocomotionConfig, dt: f32) -> f32 {
    if direction.length() < config.input_deadzone {
        return facing_yaw;
    }
    let target = direction.x.atan2(direction.y).to_degrees();
    let t = (config.rotation_smoothing_rate * dt).min(1.0);
    slerp_degrees(facing_yaw, target, t)
}

/// Shortest-arc blend between two angles in degrees.
fn slerp_degrees(from: f32, to: f32, t: f32) -> f32 {
    let delta = wrap_degrees(to - from);
    wrap_degrees(from + delta * t)
}

/// Wrap into [-180, 180).
fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}
