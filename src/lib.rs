//! A per-tick character locomotion state machine: input intent in, exactly
//! one of six states out (Idle, Walking, Jumping, Falling, Dashing, Dodging),
//! with coyote time, jump-cut, timed dash, signal-ended dodge, gravity
//! integration, facing smoothing, and a pure animation-flag projection.
//!
//! Collision resolution, timing, raw input, and animation playback are
//! collaborator traits injected at construction (`locomotion::character`);
//! the `engine`, `scene`, and `app` modules supply the demo implementations.

pub mod app;
pub mod engine;
pub mod fsm;
pub mod locomotion;
pub mod scene;
