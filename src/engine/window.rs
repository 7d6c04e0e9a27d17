use sdl2::video::Window;
use sdl2::Sdl;

/// Plain centered window so the OS routes keyboard input to the demo.
/// No GL context is created; the demo draws nothing.
pub struct GameWindow {
    _window: Window,
}

impl GameWindow {
    pub fn new(sdl: &Sdl, title: &str, width: u32, height: u32) -> Result<Self, String> {
        let video = sdl.video()?;
        let window = video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        Ok(Self { _window: window })
    }
}
