//! CPU side of drawing: what to draw, not how.
//!
//! [`collect_instances`] turns the live particles into GPU instance records,
//! and [`HudStatus`] produces the overlay text. Both only read simulation
//! state; the `gpu` module does the actual drawing.

use bytemuck::{Pod, Zeroable};

use crate::config::Controls;
use crate::particle::ParticleKind;
use crate::pool::ParticlePool;
use crate::simulation::Simulation;

/// One filled circle, in pixel coordinates with linear color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [f32; 4],
}

/// Instance records for every live particle, oldest first.
pub fn collect_instances<const N: usize>(pool: &ParticlePool<N>) -> Vec<CircleInstance> {
    let mut instances = Vec::with_capacity(pool.active_len());
    instances.extend(pool.iter_alive().map(|p| CircleInstance {
        center: p.position.to_array(),
        radius: p.radius,
        color: p.color.to_linear(),
    }));
    instances
}

/// Values shown on the overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct HudStatus {
    pub emission_rate: i32,
    pub kind: ParticleKind,
    pub live: usize,
    pub capacity: usize,
    pub fps: f32,
}

impl HudStatus {
    /// Snapshot of the simulation plus the measured frame rate.
    pub fn capture(sim: &Simulation, fps: f32) -> Self {
        Self {
            emission_rate: sim.emitter().emission_rate,
            kind: sim.emitter().kind,
            live: sim.pool().live_count(),
            capacity: sim.pool().usable_capacity(),
            fps,
        }
    }

    /// How-to lines for the given bindings.
    pub fn instructions(controls: &Controls) -> Vec<String> {
        vec![
            format!("Hold {:?} mouse button to move the emitter", controls.move_emitter),
            format!(
                "{} / {}: emission rate",
                controls.rate_up.label(),
                controls.rate_down.label()
            ),
            format!(
                "{} / {}: particle type",
                controls.prev_kind.label(),
                controls.next_kind.label()
            ),
            format!("{}: quit", controls.quit.label()),
        ]
    }

    /// Current emitter settings.
    pub fn status_line(&self) -> String {
        format!(
            "Emission rate: {} ({})   Type: {}",
            self.emission_rate,
            describe_rate(self.emission_rate),
            self.kind.label()
        )
    }

    /// Pool occupancy.
    pub fn particles_line(&self) -> String {
        format!("Particles: {} / {}", self.live, self.capacity)
    }

    /// Frame-rate counter text.
    pub fn fps_line(&self) -> String {
        format!("{:.0} FPS", self.fps)
    }
}

/// Human description of a signed emission rate.
pub fn describe_rate(rate: i32) -> String {
    if rate < 0 {
        format!("1 every ~{} frames", rate.unsigned_abs())
    } else {
        let per_frame = rate as i64 + 1;
        format!("{per_frame}/frame")
    }
}
