//! Mouse-driven particle emitter.
//!
//! The emitter decides how many particles to create each frame and what they
//! look like when they are born. A single signed integer, the emission rate,
//! covers both slow and fast emission:
//!
//! | `emission_rate` | Per frame |
//! |-----------------|-----------|
//! | `< 0` | one particle with probability `1 / |rate|` |
//! | `0` | exactly one particle |
//! | `N > 0` | exactly `N + 1` particles |
//!
//! New particles start at the emitter position with the selected kind's
//! base radius and color, moving in a uniformly random direction at a
//! uniformly random speed in `[0, 2)`. Fire starts ten times slower.
//!
//! # Example
//!
//! ```ignore
//! let mut emitter = Emitter::new(Vec2::new(400.0, 225.0));
//! emitter.increase_rate();      // 2 particles per frame
//! emitter.next_kind();          // switch to smoke
//! let spawned = emitter.emit(&mut pool, &mut rng);
//! ```

use glam::Vec2;
use rand::Rng;

use crate::particle::{Particle, ParticleKind};
use crate::pool::ParticlePool;

/// Upper bound (exclusive) of the random initial speed.
pub const MAX_INITIAL_SPEED: f32 = 2.0;

/// Fire's initial speed is divided by this.
pub const FIRE_SPEED_DIVISOR: f32 = 10.0;

/// Emitter settings: rate, selected kind and position.
#[derive(Clone, Debug, PartialEq)]
pub struct Emitter {
    /// Signed emission control value, see the module docs.
    pub emission_rate: i32,
    /// Kind given to newly emitted particles.
    pub kind: ParticleKind,
    /// Where new particles appear.
    pub position: Vec2,
}

impl Emitter {
    /// Emitter at `position` emitting one water particle per frame.
    pub fn new(position: Vec2) -> Self {
        Self {
            emission_rate: 0,
            kind: ParticleKind::Water,
            position,
        }
    }

    /// Set the initial emission rate.
    pub fn with_rate(mut self, emission_rate: i32) -> Self {
        self.emission_rate = emission_rate;
        self
    }

    /// Set the initial particle kind.
    pub fn with_kind(mut self, kind: ParticleKind) -> Self {
        self.kind = kind;
        self
    }

    /// How many particles to emit this frame.
    ///
    /// Negative rates roll the dice once per frame; non-negative rates are
    /// deterministic.
    pub fn emission_count<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.emission_rate < 0 {
            let draw: u32 = rng.gen();
            if draw % self.emission_rate.unsigned_abs() == 0 {
                1
            } else {
                0
            }
        } else {
            self.emission_rate as u32 + 1
        }
    }

    /// Emit this frame's particles into `pool`.
    ///
    /// Returns how many particles actually entered the pool. Emissions that
    /// find the pool full are dropped silently.
    pub fn emit<R: Rng + ?Sized, const N: usize>(
        &self,
        pool: &mut ParticlePool<N>,
        rng: &mut R,
    ) -> u32 {
        let wanted = self.emission_count(rng);
        let mut spawned = 0;
        for _ in 0..wanted {
            if !self.spawn_one(pool, rng) {
                log::trace!("particle pool full, dropped {} emissions", wanted - spawned);
                break;
            }
            spawned += 1;
        }
        spawned
    }

    /// Emit a single particle. Returns `false` if the pool was full.
    pub fn spawn_one<R: Rng + ?Sized, const N: usize>(
        &self,
        pool: &mut ParticlePool<N>,
        rng: &mut R,
    ) -> bool {
        let velocity = self.initial_velocity(rng);
        match pool.try_allocate() {
            Some(slot) => {
                *slot = Particle::spawn(self.kind, self.position, velocity);
                true
            }
            None => false,
        }
    }

    /// Random initial velocity for the current kind.
    pub fn initial_velocity<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let mut speed = rng.gen_range(0.0..MAX_INITIAL_SPEED);
        if self.kind == ParticleKind::Fire {
            speed /= FIRE_SPEED_DIVISOR;
        }
        let angle = rng.gen_range(0.0f32..360.0).to_radians();
        Vec2::new(speed * angle.cos(), speed * angle.sin())
    }

    /// Raise the rate by one.
    pub fn increase_rate(&mut self) {
        self.emission_rate = self.emission_rate.saturating_add(1);
    }

    /// Lower the rate by one.
    pub fn decrease_rate(&mut self) {
        self.emission_rate = self.emission_rate.saturating_sub(1);
    }

    /// Select the next particle kind, wrapping around.
    pub fn next_kind(&mut self) {
        self.kind = self.kind.next();
    }

    /// Select the previous particle kind, wrapping around.
    pub fn prev_kind(&mut self) {
        self.kind = self.kind.prev();
    }

    /// Move the emitter.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}
