//! Demo harness: an interactive SDL run and a headless scripted run, both
//! wiring the same character against the demo level.

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use glam::{Vec2, Vec3};
use log::info;
use thiserror::Error;

use crate::engine::input::SharedInput;
use crate::engine::script::ScriptedDevice;
use crate::engine::time::{FixedClock, FrameTimer};
use crate::engine::window::GameWindow;
use crate::locomotion::animation::{AnimationFlags, AnimationSink};
use crate::locomotion::character::{Character, Clock, DodgeSignal};
use crate::locomotion::config::{ConfigError, LocomotionConfig};
use crate::locomotion::intent::{DeviceSnapshot, InputDevice, InputSampler};
use crate::scene::{self, mover::KinematicMover};

const SPAWN: Vec3 = Vec3::new(0.0, 3.0, 0.0);
const STEP: f32 = 1.0 / 60.0;
/// Ticks the stub dodge "clip" runs before it signals completion.
const DODGE_CLIP_TICKS: u32 = 30;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("SDL: {0}")]
    Sdl(String),
    #[error("failed to read tuning file {path}: {source}")]
    TuningRead {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse tuning file {path}: {source}")]
    TuningParse {
        path: String,
        source: ron::error::SpannedError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Load a RON tuning file and run the construction-time checks on it, so a
/// broken file aborts before any window appears.
pub fn load_tuning(path: &Path) -> Result<LocomotionConfig, AppError> {
    let contents = fs::read_to_string(path).map_err(|source| AppError::TuningRead {
        path: path.display().to_string(),
        source,
    })?;
    let config: LocomotionConfig =
        ron::from_str(&contents).map_err(|source| AppError::TuningParse {
            path: path.display().to_string(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

/// Stand-in for the animation collaborator. Consumes the projected flags and
/// runs a tick-counted dodge clip whose end feeds the completion signal.
#[derive(Default)]
struct StubAnimator {
    flags: AnimationFlags,
    dodge_ticks_left: u32,
}

impl StubAnimator {
    fn apply(&mut self, flags: AnimationFlags) {
        // Rising edge of the dodge flag starts the clip.
        if flags.is_dodging && !self.flags.is_dodging {
            self.dodge_ticks_left = DODGE_CLIP_TICKS;
        }
        self.flags = flags;
    }

    fn poll(&mut self) -> bool {
        if self.dodge_ticks_left > 0 {
            self.dodge_ticks_left -= 1;
            self.dodge_ticks_left == 0
        } else {
            false
        }
    }
}

/// One animator, two contracts: the same object is both the flag sink and
/// the dodge completion signal.
#[derive(Clone, Default)]
struct AnimatorHandle(Rc<RefCell<StubAnimator>>);

impl AnimationSink for AnimatorHandle {
    fn set_flags(&mut self, flags: AnimationFlags) {
        self.0.borrow_mut().apply(flags);
    }
}

impl DodgeSignal for AnimatorHandle {
    fn poll_complete(&mut self) -> bool {
        self.0.borrow_mut().poll()
    }
}

fn build_character(
    config: LocomotionConfig,
    device: Box<dyn InputDevice>,
    clock: Box<dyn Clock>,
) -> Result<Character, AppError> {
    let mover = KinematicMover::new(scene::demo_level(), SPAWN);
    let animator = AnimatorHandle::default();
    let character = Character::new(
        config,
        InputSampler::new(device),
        Box::new(mover),
        clock,
        Box::new(animator.clone()),
        Box::new(animator),
    )?;
    Ok(character)
}

/// Interactive run: a window for keyboard focus, real frame time, state
/// transitions logged at info.
pub fn run_interactive(config: LocomotionConfig) -> Result<(), AppError> {
    let sdl = sdl2::init().map_err(AppError::Sdl)?;
    let _window = GameWindow::new(&sdl, "gait demo", 960, 540).map_err(AppError::Sdl)?;
    let mut event_pump = sdl.event_pump().map_err(AppError::Sdl)?;

    let input = SharedInput::new();
    let mut character = build_character(
        config,
        Box::new(input.clone()),
        Box::new(FrameTimer::new()),
    )?;

    info!("WASD move, Space jump, LShift dash, LCtrl dodge, Escape quits");
    let mut previous = character.motion().state();
    loop {
        input.0.borrow_mut().update(&mut event_pump);
        if input.0.borrow().should_quit() {
            break;
        }

        let state = character.update();
        if state != previous {
            info!("[demo] {} -> {}", previous.label(), state.label());
            previous = state;
        }

        std::thread::sleep(Duration::from_secs_f32(STEP));
    }
    Ok(())
}

/// Scripted run: the canned timeline at a fixed 60 Hz step, no window.
/// Prints the transition timeline and exits; suitable for CI smoke runs.
pub fn run_scripted(config: LocomotionConfig) -> Result<(), AppError> {
    let script = demo_script();
    // Slack after the timeline so the last landing and the dodge clip finish.
    let ticks = script.total_ticks() + 60;
    let mut character = build_character(config, Box::new(script), Box::new(FixedClock::new(STEP)))?;

    let mut previous = character.motion().state();
    for tick in 0..ticks {
        let state = character.update();
        if state != previous {
            info!(
                "[demo] t={:5.2}s {} -> {}",
                tick as f32 * STEP,
                previous.label(),
                state.label()
            );
            previous = state;
        }
    }
    info!("[demo] script finished in state {}", previous.label());
    Ok(())
}

/// Fall to land, walk, tapped jump (showing jump-cut), full jump, dash,
/// dodge, settle.
fn demo_script() -> ScriptedDevice {
    let released = DeviceSnapshot::default();
    let forward = DeviceSnapshot {
        move_axis: Vec2::new(0.0, 1.0),
        ..released
    };
    ScriptedDevice::new(STEP)
        .hold(0.6, released)
        .hold(1.0, forward)
        .hold(0.1, DeviceSnapshot { jump: true, ..forward })
        .hold(0.8, forward)
        .hold(0.7, DeviceSnapshot { jump: true, ..forward })
        .hold(0.5, forward)
        .hold(0.3, DeviceSnapshot { dash: true, ..forward })
        .hold(0.5, forward)
        .hold(0.1, DeviceSnapshot { dodge: true, ..released })
        .hold(0.8, released)
}
