//! SDL keyboard state and the shared device handle the sampler reads.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use glam::Vec2;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;

use crate::locomotion::intent::{DeviceSnapshot, InputDevice};

/// Scancode-level key state fed from the SDL event pump once per frame.
pub struct KeyState {
    keys: HashSet<Scancode>,
    quit: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            quit: false,
        }
    }

    pub fn update(&mut self, event_pump: &mut EventPump) {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(sc), ..
                } => {
                    self.keys.insert(sc);
                }
                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    self.keys.remove(&sc);
                }
                _ => {}
            }
        }
    }

    pub fn is_key_held(&self, sc: Scancode) -> bool {
        self.keys.contains(&sc)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Map the held keys onto device levels: WASD for the move axis, Space
    /// jump, LShift dash, LCtrl dodge. Edges are the sampler's business.
    pub fn snapshot(&self) -> DeviceSnapshot {
        let mut axis = Vec2::ZERO;
        if self.is_key_held(Scancode::W) {
            axis.y += 1.0;
        }
        if self.is_key_held(Scancode::S) {
            axis.y -= 1.0;
        }
        if self.is_key_held(Scancode::D) {
            axis.x += 1.0;
        }
        if self.is_key_held(Scancode::A) {
            axis.x -= 1.0;
        }
        DeviceSnapshot {
            move_axis: axis,
            jump: self.is_key_held(Scancode::Space),
            dash: self.is_key_held(Scancode::LShift),
            dodge: self.is_key_held(Scancode::LCtrl),
        }
    }
}

/// Cloneable handle over one `KeyState`, so the app loop can pump events into
/// the same device the injected sampler reads from.
#[derive(Clone)]
pub struct SharedInput(pub Rc<RefCell<KeyState>>);

impl SharedInput {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(KeyState::new())))
    }
}

impl InputDevice for SharedInput {
    fn sample(&mut self) -> DeviceSnapshot {
        self.0.borrow().snapshot()
    }
}
