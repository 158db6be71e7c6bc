//! # WSF - Water, Smoke & Fire
//!
//! A real-time particle demo: hold the left mouse button to drag an emitter
//! around the window and watch water fall, smoke billow and fire flicker.
//!
//! The interesting part is the particle storage. All particles live in a
//! [`ParticlePool`], a fixed-size ring buffer that hands out slots at its
//! head and reclaims them from its tail once the oldest particles die. No
//! memory is allocated after startup.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wsf::prelude::*;
//!
//! fn main() -> Result<(), DemoError> {
//!     wsf::run(DemoConfig::new().with_emission_rate(2))
//! }
//! ```
//!
//! ## Headless use
//!
//! The simulation does not need a window:
//!
//! ```ignore
//! use wsf::prelude::*;
//!
//! let mut sim = Simulation::with_seed(Vec2::new(800.0, 450.0), 42);
//! sim.emitter_mut().kind = ParticleKind::Smoke;
//! for _ in 0..120 {
//!     sim.frame();
//! }
//! let circles = collect_instances(sim.pool());
//! ```
//!
//! ## Frame Order
//!
//! | Step | Module |
//! |------|--------|
//! | emit | [`emitter`] |
//! | simulate | [`physics`] |
//! | reclaim | [`ParticlePool::compact`] |
//! | draw | [`render`] + GPU |

pub mod config;
pub mod emitter;
mod error;
mod gpu;
mod hud;
pub mod input;
pub mod particle;
pub mod physics;
pub mod pool;
pub mod render;
mod shader;
pub mod simulation;
pub mod time;
mod window;

pub use config::{Controls, DemoConfig};
pub use emitter::Emitter;
pub use error::{DemoError, GpuError};
pub use glam::Vec2;
pub use particle::{Particle, ParticleKind, Rgba};
pub use pool::{ParticlePool, MAX_PARTICLES};
pub use render::{collect_instances, CircleInstance, HudStatus};
pub use simulation::{FrameStats, Simulation};
pub use window::run;
pub use wsf_derive::ParticleType;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use wsf::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Controls, DemoConfig};
    pub use crate::emitter::Emitter;
    pub use crate::error::{DemoError, GpuError};
    pub use crate::input::{Input, KeyCode, MouseButton};
    pub use crate::particle::{Particle, ParticleKind, Rgba};
    pub use crate::pool::{ParticlePool, MAX_PARTICLES};
    pub use crate::render::{collect_instances, CircleInstance, HudStatus};
    pub use crate::simulation::{FrameStats, Simulation};
    pub use crate::time::Time;
    pub use crate::Vec2;
    pub use wsf_derive::ParticleType;
}
