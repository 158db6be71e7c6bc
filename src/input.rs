//! Input handling for the frame loop.
//!
//! The `Input` struct provides a clean abstraction over raw window events,
//! tracking both instantaneous events (key just pressed) and continuous state
//! (key held down).
//!
//! # Usage
//!
//! ```ignore
//! // Rate control reacts once per press, never to auto-repeat
//! if input.key_pressed(KeyCode::Up) {
//!     emitter.increase_rate();
//! }
//!
//! // Emitter follows the pointer while the left button is held
//! if input.mouse_held(MouseButton::Left) {
//!     emitter.set_position(input.mouse_position());
//! }
//! ```

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<WinitMouseButton> for MouseButton {
    fn from(btn: WinitMouseButton) -> Self {
        match btn {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Left, // Default for other buttons
        }
    }
}

/// Keyboard keys the demo can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Arrows
    Up, Down, Left, Right,

    // Common keys
    Space, Enter, Escape, Tab,

    // Keypad and main-row rate keys
    Plus, Minus,

    // Letters commonly bound to type cycling
    A, D, Q, W, S, E,

    // Other
    Other(u32),
}

impl KeyCode {
    /// Short name for on-screen instructions.
    pub fn label(self) -> String {
        match self {
            KeyCode::Up => "UP".into(),
            KeyCode::Down => "DOWN".into(),
            KeyCode::Left => "LEFT".into(),
            KeyCode::Right => "RIGHT".into(),
            KeyCode::Space => "SPACE".into(),
            KeyCode::Enter => "ENTER".into(),
            KeyCode::Escape => "ESC".into(),
            KeyCode::Tab => "TAB".into(),
            KeyCode::Plus => "+".into(),
            KeyCode::Minus => "-".into(),
            KeyCode::A => "A".into(),
            KeyCode::D => "D".into(),
            KeyCode::Q => "Q".into(),
            KeyCode::W => "W".into(),
            KeyCode::S => "S".into(),
            KeyCode::E => "E".into(),
            KeyCode::Other(code) => format!("#{code}"),
        }
    }
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::ArrowUp => KeyCode::Up,
            WinitKeyCode::ArrowDown => KeyCode::Down,
            WinitKeyCode::ArrowLeft => KeyCode::Left,
            WinitKeyCode::ArrowRight => KeyCode::Right,

            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
            WinitKeyCode::Escape => KeyCode::Escape,
            WinitKeyCode::Tab => KeyCode::Tab,

            WinitKeyCode::NumpadAdd | WinitKeyCode::Equal => KeyCode::Plus,
            WinitKeyCode::NumpadSubtract | WinitKeyCode::Minus => KeyCode::Minus,

            WinitKeyCode::KeyA => KeyCode::A,
            WinitKeyCode::KeyD => KeyCode::D,
            WinitKeyCode::KeyQ => KeyCode::Q,
            WinitKeyCode::KeyW => KeyCode::W,
            WinitKeyCode::KeyS => KeyCode::S,
            WinitKeyCode::KeyE => KeyCode::E,

            _ => KeyCode::Other(key as u32),
        }
    }
}

/// Input state tracking for keyboard and mouse.
///
/// Tracks both instantaneous events (pressed/released this frame) and
/// continuous state (currently held).
#[derive(Debug)]
pub struct Input {
    // Key state
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,

    // Mouse button state
    mouse_held: HashSet<MouseButton>,
    mouse_pressed: HashSet<MouseButton>,
    mouse_released: HashSet<MouseButton>,

    // Pointer position in logical pixels
    mouse_position: Vec2,

    // Physical pixels per logical pixel
    scale_factor: f64,
}

impl Input {
    /// Create a new input tracker.
    pub fn new() -> Self {
        Self {
            keys_held: HashSet::new(),
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            mouse_held: HashSet::new(),
            mouse_pressed: HashSet::new(),
            mouse_released: HashSet::new(),
            mouse_position: Vec2::ZERO,
            scale_factor: 1.0,
        }
    }

    // ========== Key Queries ==========

    /// Check if a key was pressed this frame (just went down).
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key is currently held down.
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was released this frame (just went up).
    pub fn key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    // ========== Mouse Button Queries ==========

    /// Check if a mouse button was pressed this frame.
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_pressed.contains(&button)
    }

    /// Check if a mouse button is currently held down.
    pub fn mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_held.contains(&button)
    }

    /// Check if a mouse button was released this frame.
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.mouse_released.contains(&button)
    }

    // ========== Mouse Position Queries ==========

    /// Get the pointer position in logical pixels, origin top-left.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    // ========== Frame Loop Hooks ==========

    /// Called at the end of each frame to clear per-frame state.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
    }

    /// Update the physical-to-logical pixel ratio.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Record a key going down. Repeats while held are ignored.
    pub fn press_key(&mut self, key: KeyCode) {
        if !self.keys_held.contains(&key) {
            self.keys_pressed.insert(key);
        }
        self.keys_held.insert(key);
    }

    /// Record a key going up.
    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
        self.keys_released.insert(key);
    }

    /// Record a mouse button going down.
    pub fn press_mouse(&mut self, button: MouseButton) {
        self.mouse_pressed.insert(button);
        self.mouse_held.insert(button);
    }

    /// Record a mouse button going up.
    pub fn release_mouse(&mut self, button: MouseButton) {
        self.mouse_held.remove(&button);
        self.mouse_released.insert(button);
    }

    /// Move the pointer to a logical-pixel position.
    pub fn move_mouse(&mut self, position: Vec2) {
        self.mouse_position = position;
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    let key = KeyCode::from(keycode);
                    match event.state {
                        ElementState::Pressed => self.press_key(key),
                        ElementState::Released => self.release_key(key),
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let btn = MouseButton::from(*button);
                match state {
                    ElementState::Pressed => self.press_mouse(btn),
                    ElementState::Released => self.release_mouse(btn),
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor);
                self.move_mouse(Vec2::new(logical.x, logical.y));
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
            }

            WindowEvent::Focused(false) => {
                // Releases that happen while unfocused never arrive
                self.keys_held.clear();
                self.mouse_held.clear();
            }

            _ => {}
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
