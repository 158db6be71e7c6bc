//! Simulation state and per-frame ordering.
//!
//! [`Simulation`] owns everything the demo mutates: the particle pool, the
//! emitter and the random number generator. The frame loop drives it and
//! then reads the pool to draw.
//!
//! Within one frame the order is fixed:
//!
//! 1. emit - new particles enter the pool
//! 2. step - every live particle moves, some die
//! 3. compact - dead particles at the back of the pool are reclaimed
//!
//! Rendering happens after compaction, so a particle emitted this frame is
//! drawn this frame, and a particle that died this frame is not.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{Controls, DemoConfig};
use crate::emitter::Emitter;
use crate::input::Input;
use crate::physics;
use crate::pool::ParticlePool;

/// What one call to [`Simulation::frame`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Particles that entered the pool.
    pub emitted: u32,
    /// Particles marked dead by this step.
    pub died: usize,
    /// Pool slots reclaimed by compaction.
    pub reclaimed: usize,
}

/// The whole mutable state of the demo.
pub struct Simulation {
    pool: ParticlePool,
    emitter: Emitter,
    rng: SmallRng,
    bounds: Vec2,
    frame: u64,
}

impl Simulation {
    /// Simulation over a `bounds`-sized screen, emitter at the center.
    pub fn new(bounds: Vec2) -> Self {
        Self::with_rng(bounds, SmallRng::from_entropy())
    }

    /// Like [`Simulation::new`] but with reproducible randomness.
    pub fn with_seed(bounds: Vec2, seed: u64) -> Self {
        Self::with_rng(bounds, SmallRng::seed_from_u64(seed))
    }

    /// Simulation matching a demo configuration.
    pub fn from_config(config: &DemoConfig) -> Self {
        let mut sim = Self::new(Vec2::new(config.width as f32, config.height as f32));
        sim.emitter.emission_rate = config.emission_rate;
        sim.emitter.kind = config.kind;
        sim
    }

    fn with_rng(bounds: Vec2, rng: SmallRng) -> Self {
        Self {
            pool: ParticlePool::new(),
            emitter: Emitter::new(bounds / 2.0),
            rng,
            bounds,
            frame: 0,
        }
    }

    /// Apply this frame's input to the emitter.
    pub fn apply_input(&mut self, input: &Input, controls: &Controls) {
        if input.key_pressed(controls.rate_up) {
            self.emitter.increase_rate();
            log::debug!("emission rate -> {}", self.emitter.emission_rate);
        }
        if input.key_pressed(controls.rate_down) {
            self.emitter.decrease_rate();
            log::debug!("emission rate -> {}", self.emitter.emission_rate);
        }
        if input.key_pressed(controls.next_kind) {
            self.emitter.next_kind();
            log::debug!("particle type -> {}", self.emitter.kind.label());
        }
        if input.key_pressed(controls.prev_kind) {
            self.emitter.prev_kind();
            log::debug!("particle type -> {}", self.emitter.kind.label());
        }
        if input.mouse_held(controls.move_emitter) {
            self.emitter.set_position(input.mouse_position());
        }
    }

    /// Run one frame: emit, step, compact.
    pub fn frame(&mut self) -> FrameStats {
        let emitted = self.emitter.emit(&mut self.pool, &mut self.rng);
        let died = physics::step(&mut self.pool, self.bounds);
        let reclaimed = self.pool.compact();
        self.frame += 1;

        let stats = FrameStats { emitted, died, reclaimed };
        log::trace!(
            "frame {}: {:?}, window {} slots",
            self.frame,
            stats,
            self.pool.active_len()
        );
        stats
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut Emitter {
        &mut self.emitter
    }

    /// Screen size the particles live in.
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Frames simulated so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}
