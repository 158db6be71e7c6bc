//! Per-kind particle motion.
//!
//! Every frame each live particle ages by a fixed `1/60` s and then follows
//! its kind's rule:
//!
//! | Kind | Motion | Over time | Dies when |
//! |------|--------|-----------|-----------|
//! | Water | falls under gravity | - | leaves the screen |
//! | Smoke | rises, drifts | grows, fades | alpha runs out |
//! | Fire | rises, flickers sideways | shrinks, reddens | green runs out or radius ~ 0 |
//!
//! All kinds also die when they leave the screen rectangle expanded by their
//! own radius. Nothing here frees memory; particles are only flagged dead and
//! the pool reclaims them later.
//!
//! Velocities are in pixels per frame, not per second.

use glam::Vec2;

use crate::particle::{Particle, ParticleKind};
use crate::pool::ParticlePool;

/// Simulated time per frame, independent of the real frame duration.
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Downward acceleration applied to water each frame.
pub const WATER_GRAVITY: f32 = 0.2;

/// Upward acceleration applied to smoke and fire each frame.
pub const BUOYANCY: f32 = 0.05;

pub const SMOKE_GROWTH: f32 = 0.5;
pub const SMOKE_FADE: u8 = 4;

pub const FIRE_SHRINK: f32 = 0.15;
pub const FIRE_COOLING: u8 = 3;
/// Angular frequency of the sideways flicker, in radians per second of age.
pub const FIRE_FLICKER: f32 = 215.0;
pub const FIRE_MIN_RADIUS: f32 = 0.02;

/// Advance every live particle in the pool's active window by one frame.
///
/// `bounds` is the screen size in pixels. Returns how many particles died
/// during this step.
pub fn step<const N: usize>(pool: &mut ParticlePool<N>, bounds: Vec2) -> usize {
    let mut died = 0;
    for particle in pool.iter_active_mut() {
        if !particle.alive {
            continue;
        }
        advance(particle, bounds);
        if !particle.alive {
            died += 1;
        }
    }
    died
}

/// Advance one particle by one frame. Dead particles are left untouched.
pub fn advance(p: &mut Particle, bounds: Vec2) {
    if !p.alive {
        return;
    }

    p.age += FIXED_DT;

    match p.kind {
        ParticleKind::Water => advance_water(p),
        ParticleKind::Smoke => advance_smoke(p),
        ParticleKind::Fire => advance_fire(p),
    }

    if out_of_bounds(p, bounds) {
        p.alive = false;
    }
}

fn advance_water(p: &mut Particle) {
    p.position.x += p.velocity.x;
    p.velocity.y += WATER_GRAVITY;
    p.position.y += p.velocity.y;
}

fn advance_smoke(p: &mut Particle) {
    p.position.x += p.velocity.x;
    p.velocity.y -= BUOYANCY;
    p.position.y += p.velocity.y;
    p.radius += SMOKE_GROWTH;

    match fade(p.color.a, SMOKE_FADE) {
        Some(a) => p.color.a = a,
        None => p.alive = false,
    }
}

fn advance_fire(p: &mut Particle) {
    p.position.x += p.velocity.x + (p.age * FIRE_FLICKER).cos();
    p.velocity.y -= BUOYANCY;
    p.position.y += p.velocity.y;
    p.radius -= FIRE_SHRINK;

    match fade(p.color.g, FIRE_COOLING) {
        Some(g) => p.color.g = g,
        None => p.alive = false,
    }

    if p.radius <= FIRE_MIN_RADIUS {
        p.alive = false;
    }
}

/// `channel - amount`, or `None` once the channel is down to `amount` or less.
fn fade(channel: u8, amount: u8) -> Option<u8> {
    if channel > amount {
        Some(channel - amount)
    } else {
        None
    }
}

/// Whether the particle is fully outside the screen expanded by its radius.
pub fn out_of_bounds(p: &Particle, bounds: Vec2) -> bool {
    let r = p.radius;
    p.position.x < -r
        || p.position.x > bounds.x + r
        || p.position.y < -r
        || p.position.y > bounds.y + r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Rgba;

    const SCREEN: Vec2 = Vec2::new(800.0, 450.0);

    fn at_center(kind: ParticleKind) -> Particle {
        Particle::spawn(kind, SCREEN / 2.0, Vec2::ZERO)
    }

    #[test]
    fn test_water_velocity_updates_before_position() {
        let mut p = at_center(ParticleKind::Water);
        advance(&mut p, SCREEN);

        assert!((p.velocity.y - 0.2).abs() < 1e-6);
        assert!((p.position.y - 225.2).abs() < 1e-4);
        assert_eq!(p.position.x, 400.0);
        assert!((p.age - FIXED_DT).abs() < 1e-7);
    }

    #[test]
    fn test_water_keeps_color_and_radius() {
        let mut p = at_center(ParticleKind::Water);
        for _ in 0..10 {
            advance(&mut p, SCREEN);
        }
        assert!(p.alive);
        assert_eq!(p.radius, 5.0);
        assert_eq!(p.color, Rgba::BLUE);
    }

    #[test]
    fn test_smoke_rises_grows_and_fades() {
        let mut p = at_center(ParticleKind::Smoke);
        advance(&mut p, SCREEN);

        assert!((p.velocity.y + 0.05).abs() < 1e-6);
        assert!(p.position.y < 225.0);
        assert_eq!(p.radius, 7.5);
        assert_eq!(p.color.a, 251);
    }

    #[test]
    fn test_smoke_alpha_steps_by_four_until_death() {
        let mut p = at_center(ParticleKind::Smoke);
        // Keep it on screen so only the fade can kill it
        let mut last_alpha = p.color.a;
        let mut frames = 0;
        while p.alive {
            p.position = SCREEN / 2.0;
            p.velocity = Vec2::ZERO;
            p.radius = 7.0;
            advance(&mut p, SCREEN);
            frames += 1;
            if p.alive {
                assert_eq!(p.color.a, last_alpha - 4);
                assert!(p.color.a > 0);
                last_alpha = p.color.a;
            }
        }
        // 255 -> 3 in 63 steps, then one more frame to die
        assert_eq!(last_alpha, 3);
        assert_eq!(frames, 64);
    }

    #[test]
    fn test_fire_dies_when_radius_runs_out() {
        let mut p = at_center(ParticleKind::Fire);
        let mut frames = 0;
        while p.alive {
            p.position = SCREEN / 2.0;
            p.velocity = Vec2::ZERO;
            advance(&mut p, SCREEN);
            frames += 1;
        }
        // 10 / 0.15 ~ 66.7 frames of shrinking; green (249 / 3 = 83 steps)
        // would last longer, so the radius rule fires first.
        assert_eq!(frames, 67);
        assert!(p.radius <= FIRE_MIN_RADIUS);
        assert!(p.color.g > FIRE_COOLING);
    }

    #[test]
    fn test_fire_dies_when_green_runs_out() {
        let mut p = at_center(ParticleKind::Fire);
        p.color.g = 6;
        p.radius = 100.0;

        advance(&mut p, SCREEN);
        assert!(p.alive);
        assert_eq!(p.color.g, 3);

        advance(&mut p, SCREEN);
        assert!(!p.alive);
        assert_eq!(p.color.g, 3);
    }

    #[test]
    fn test_fire_flickers_sideways() {
        let mut p = at_center(ParticleKind::Fire);
        advance(&mut p, SCREEN);
        let expected = 400.0 + (FIXED_DT * FIRE_FLICKER).cos();
        assert!((p.position.x - expected).abs() < 1e-3);
        assert!((p.radius - 9.85).abs() < 1e-5);
        assert_eq!(p.color.g, 246);
    }

    #[test]
    fn test_out_of_bounds_uses_radius_margin() {
        let mut p = at_center(ParticleKind::Water);
        p.position = Vec2::new(-4.9, 100.0);
        assert!(!out_of_bounds(&p, SCREEN));
        p.position = Vec2::new(-5.1, 100.0);
        assert!(out_of_bounds(&p, SCREEN));
        p.position = Vec2::new(100.0, 455.1);
        assert!(out_of_bounds(&p, SCREEN));
        p.position = Vec2::new(804.9, 455.0);
        assert!(!out_of_bounds(&p, SCREEN));
    }

    #[test]
    fn test_leaving_screen_kills_on_that_step() {
        let mut p = Particle::spawn(ParticleKind::Water, Vec2::new(400.0, 449.0), Vec2::new(0.0, 10.0));
        advance(&mut p, SCREEN);
        assert!(!p.alive);
    }

    #[test]
    fn test_dead_particles_are_not_advanced() {
        let mut p = at_center(ParticleKind::Water);
        p.alive = false;
        let before = p;
        advance(&mut p, SCREEN);
        assert_eq!(p, before);
    }

    #[test]
    fn test_step_counts_deaths() {
        let mut pool = ParticlePool::<8>::new();
        for y in [100.0, 449.0, 200.0] {
            let slot = pool.try_allocate().unwrap();
            *slot = Particle::spawn(ParticleKind::Water, Vec2::new(10.0, y), Vec2::new(0.0, 10.0));
        }
        assert_eq!(step(&mut pool, SCREEN), 1);
        assert_eq!(pool.live_count(), 2);
        // Already dead particles are not counted again
        assert_eq!(step(&mut pool, SCREEN), 0);
    }
}
