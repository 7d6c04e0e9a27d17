//! Per-character locomotion tuning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning for one character. Immutable once the character is built: the
/// constructor validates it and nothing clamps or repairs values afterwards.
///
/// `#[serde(default)]` lets a tuning file override only the fields it cares
/// about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Apex height of a full (uncut) jump, in meters.
    pub jump_height: f32,
    /// Downward acceleration while ascending. Negative.
    pub base_gravity: f32,
    /// Gravity multiplier applied while descending, for a snappier fall.
    pub gravity_fall_multiplier: f32,
    /// Terminal fall speed, stored as a positive magnitude.
    pub max_fall_speed: f32,
    /// Grace window after stepping off a ledge during which a jump still
    /// fires. Open interval: a timer exactly at the allowance is too late.
    pub coyote_allowance: f32,
    /// Ground speed in meters per second.
    pub move_speed: f32,
    /// Factor applied to `move_speed` while dashing.
    pub dash_speed_multiplier: f32,
    /// How long a dash lasts, in seconds.
    pub dash_duration: f32,
    /// Exponential smoothing rate for facing yaw (per second).
    pub rotation_smoothing_rate: f32,
    /// Stick magnitude below which input reads as neutral.
    pub input_deadzone: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            jump_height: 1.0,
            base_gravity: -9.81,
            gravity_fall_multiplier: 2.5,
            max_fall_speed: 10.0,
            coyote_allowance: 0.15,
            move_speed: 5.0,
            dash_speed_multiplier: 4.0,
            dash_duration: 0.25,
            rotation_smoothing_rate: 15.0,
            input_deadzone: 0.05,
        }
    }
}

/// A tuning value that breaks its construction-time contract.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("jump_height must be >= 0 (got {0})")]
    JumpHeight(f32),
    #[error("base_gravity must be < 0, pointing down (got {0})")]
    BaseGravity(f32),
    #[error("gravity_fall_multiplier must be >= 1 (got {0})")]
    GravityFallMultiplier(f32),
    #[error("max_fall_speed is a positive magnitude (got {0})")]
    MaxFallSpeed(f32),
    #[error("coyote_allowance must be >= 0 (got {0})")]
    CoyoteAllowance(f32),
    #[error("dash_duration must be > 0 (got {0})")]
    DashDuration(f32),
}

impl LocomotionConfig {
    /// Check every tuning contract. Called by `Character::new` and by the
    /// demo's tuning-file loader.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jump_height < 0.0 {
            return Err(ConfigError::JumpHeight(self.jump_height));
        }
        if self.base_gravity >= 0.0 {
            return Err(ConfigError::BaseGravity(self.base_gravity));
        }
        if self.gravity_fall_multiplier < 1.0 {
            return Err(ConfigError::GravityFallMultiplier(
                self.gravity_fall_multiplier,
            ));
        }
        if self.max_fall_speed <= 0.0 {
            return Err(ConfigError::MaxFallSpeed(self.max_fall_speed));
        }
        if self.coyote_allowance < 0.0 {
            return Err(ConfigError::CoyoteAllowance(self.coyote_allowance));
        }
        if self.dash_duration <= 0.0 {
            return Err(ConfigError::DashDuration(self.dash_duration));
        }
        Ok(())
    }
}
