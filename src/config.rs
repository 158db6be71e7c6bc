//! Demo configuration.
//!
//! Use method chaining to configure, then hand the result to [`crate::run`]:
//!
//! ```ignore
//! let config = DemoConfig::new()
//!     .with_window_size(1280, 720)
//!     .with_target_fps(120)
//!     .with_emission_rate(-3);
//! wsf::run(config)?;
//! ```

use crate::input::{KeyCode, MouseButton};
use crate::particle::{ParticleKind, Rgba};

/// Key and button bindings.
#[derive(Clone, Debug, PartialEq)]
pub struct Controls {
    pub rate_up: KeyCode,
    pub rate_down: KeyCode,
    pub next_kind: KeyCode,
    pub prev_kind: KeyCode,
    pub quit: KeyCode,
    /// Held to drag the emitter to the pointer.
    pub move_emitter: MouseButton,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            rate_up: KeyCode::Up,
            rate_down: KeyCode::Down,
            next_kind: KeyCode::Right,
            prev_kind: KeyCode::Left,
            quit: KeyCode::Escape,
            move_emitter: MouseButton::Left,
        }
    }
}

/// Window, pacing and starting-state settings.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Frame rate cap; `0` means uncapped.
    pub target_fps: u32,
    pub background: Rgba,
    pub emission_rate: i32,
    pub kind: ParticleKind,
    pub controls: Controls,
    pub show_hud: bool,
}

impl DemoConfig {
    /// Default demo settings.
    pub fn new() -> Self {
        Self {
            width: 800,
            height: 450,
            title: "wsf - water, smoke & fire".to_string(),
            target_fps: 60,
            background: Rgba::BLACK,
            emission_rate: 0,
            kind: ParticleKind::Water,
            controls: Controls::default(),
            show_hud: true,
        }
    }

    /// Set the window size in logical pixels. This is also the simulation area.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Cap the frame rate. `0` removes the cap.
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    /// Set the clear color.
    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Set the starting emission rate.
    pub fn with_emission_rate(mut self, rate: i32) -> Self {
        self.emission_rate = rate;
        self
    }

    /// Set the starting particle kind.
    pub fn with_kind(mut self, kind: ParticleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replace the key bindings.
    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    /// Show or hide the text overlay.
    pub fn with_hud(mut self, show: bool) -> Self {
        self.show_hud = show;
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}
