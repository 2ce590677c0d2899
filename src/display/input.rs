//! Per-frame keyboard and mouse state built from SDL events

use std::collections::HashSet;

use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::mouse::MouseButton;

/// Held keys and buttons plus the edges seen since the last [`InputState::begin_frame`].
///
/// Mouse coordinates are stored in frame-buffer pixels, i.e. window
/// coordinates divided by the window scale.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Scancode>,
    keys_pressed: HashSet<Scancode>,
    keys_released: HashSet<Scancode>,
    buttons_down: HashSet<MouseButton>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
    mouse: (i32, i32),
    wheel: i32,
    scale: (i32, i32),
    quit: bool,
}

impl InputState {
    pub fn new(scale_x: u32, scale_y: u32) -> Self {
        Self {
            scale: (scale_x.max(1) as i32, scale_y.max(1) as i32),
            ..Self::default()
        }
    }

    /// Drop last frame's edges and wheel motion; held state carries over
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.wheel = 0;
    }

    pub fn handle(&mut self, event: &Event) {
        match *event {
            Event::Quit { .. } => self.quit = true,
            Event::KeyDown {
                scancode: Some(code),
                repeat,
                ..
            } => {
                if !repeat {
                    self.keys_pressed.insert(code);
                }
                self.keys_down.insert(code);
            },
            Event::KeyUp {
                scancode: Some(code),
                ..
            } => {
                self.keys_down.remove(&code);
                self.keys_released.insert(code);
            },
            Event::MouseMotion { x, y, .. } => self.set_mouse(x, y),
            Event::MouseButtonDown {
                mouse_btn, x, y, ..
            } => {
                self.set_mouse(x, y);
                self.buttons_down.insert(mouse_btn);
                self.buttons_pressed.insert(mouse_btn);
            },
            Event::MouseButtonUp {
                mouse_btn, x, y, ..
            } => {
                self.set_mouse(x, y);
                self.buttons_down.remove(&mouse_btn);
                self.buttons_released.insert(mouse_btn);
            },
            Event::MouseWheel { y, .. } => self.wheel += y,
            _ => {},
        }
    }

    fn set_mouse(&mut self, x: i32, y: i32) {
        self.mouse = (x / self.scale.0.max(1), y / self.scale.1.max(1));
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Key is held
    pub fn is_down(&self, key: Scancode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Key went down this frame
    pub fn is_pressed(&self, key: Scancode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Key was released this frame
    pub fn is_up(&self, key: Scancode) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn mouse_is_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn mouse_is_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn mouse_is_up(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Cursor position in frame-buffer pixels
    pub fn mouse(&self) -> (i32, i32) {
        self.mouse
    }

    /// Wheel steps since the frame began, positive away from the user
    pub fn wheel(&self) -> i32 {
        self.wheel
    }
}
