//! End-to-end frame scenarios: emission counts, death and reclamation,
//! and what ends up on screen.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wsf::physics;
use wsf::prelude::*;

const SCREEN: Vec2 = Vec2::new(800.0, 450.0);

#[test]
fn test_non_negative_rate_emits_rate_plus_one_per_frame() {
    let mut pool = ParticlePool::<100_000>::new();
    let mut rng = SmallRng::seed_from_u64(1);

    for rate in [0, 1, 4, 9] {
        let emitter = Emitter::new(SCREEN / 2.0).with_rate(rate);
        let before = pool.active_len();
        for _ in 0..25 {
            emitter.emit(&mut pool, &mut rng);
        }
        assert_eq!(pool.active_len() - before, (rate as usize + 1) * 25);
    }
}

#[test]
fn test_rate_minus_one_emits_every_frame() {
    let mut pool = ParticlePool::<64>::new();
    let mut rng = SmallRng::seed_from_u64(2);
    let emitter = Emitter::new(SCREEN / 2.0).with_rate(-1);

    for _ in 0..10 {
        assert_eq!(emitter.emit(&mut pool, &mut rng), 1);
    }
}

#[test]
fn test_negative_rate_emits_at_most_once_per_frame() {
    let mut pool = ParticlePool::<2048>::new();
    let mut rng = SmallRng::seed_from_u64(3);
    let emitter = Emitter::new(SCREEN / 2.0).with_rate(-4);

    let mut total = 0;
    for _ in 0..1000 {
        let n = emitter.emit(&mut pool, &mut rng);
        assert!(n <= 1);
        total += n;
    }
    // Roughly one frame in four
    assert!(total > 150 && total < 350, "emitted {total}");
}

#[test]
fn test_first_water_frame() {
    let mut sim = Simulation::with_seed(SCREEN, 11);
    assert_eq!(sim.emitter().position, Vec2::new(400.0, 225.0));

    let stats = sim.frame();
    assert_eq!(stats, FrameStats { emitted: 1, died: 0, reclaimed: 0 });

    let circles = collect_instances(sim.pool());
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].radius, 5.0);
    assert_eq!(circles[0].color, Rgba::BLUE.to_linear());

    // One step of gravity already applied
    let p = sim.pool().iter_alive().next().unwrap();
    assert!((p.velocity.y - 0.2).abs() < 2.0 + 1e-4);
    assert!((p.position - Vec2::new(400.0, 225.0)).length() <= 2.5);
}

#[test]
fn test_stationary_water_falls_under_gravity() {
    let mut pool = ParticlePool::<4>::new();
    *pool.try_allocate().unwrap() =
        Particle::spawn(ParticleKind::Water, Vec2::new(400.0, 225.0), Vec2::ZERO);

    assert_eq!(physics::step(&mut pool, SCREEN), 0);
    let p = pool.iter_alive().next().unwrap();
    assert!((p.position - Vec2::new(400.0, 225.2)).length() < 1e-4);
    assert!((p.velocity.y - 0.2).abs() < 1e-6);
}

#[test]
fn test_particle_that_dies_this_frame_is_not_drawn() {
    let mut sim = Simulation::with_seed(SCREEN, 5);
    sim.emitter_mut().kind = ParticleKind::Fire;

    // Fire shrinks from radius 10 by 0.15 per frame; the first particle
    // survives 66 steps and dies on its 67th
    for _ in 0..66 {
        let stats = sim.frame();
        assert_eq!(stats.died, 0);
    }
    assert_eq!(sim.pool().live_count(), 66);
    assert_eq!(sim.pool().tail(), 0);

    let stats = sim.frame();
    assert_eq!(stats, FrameStats { emitted: 1, died: 1, reclaimed: 1 });
    assert_eq!(sim.pool().tail(), 1);

    let circles = collect_instances(sim.pool());
    assert_eq!(circles.len(), 66);
    assert!(circles.iter().all(|c| c.radius > physics::FIRE_MIN_RADIUS));
}

#[test]
fn test_saturated_pool_drops_emissions() {
    let mut sim = Simulation::with_seed(SCREEN, 9);
    sim.emitter_mut().emission_rate = 5000;

    let stats = sim.frame();
    assert_eq!(stats.emitted as usize, MAX_PARTICLES - 1);
    assert!(sim.pool().is_full());

    // Nothing has died yet, so nothing can be reclaimed or emitted
    let stats = sim.frame();
    assert_eq!(stats.emitted, 0);
    assert_eq!(sim.pool().active_len(), MAX_PARTICLES - 1);
}

#[test]
fn test_smoke_stream_reaches_steady_state() {
    let mut sim = Simulation::with_seed(SCREEN, 21);
    sim.emitter_mut().kind = ParticleKind::Smoke;
    sim.emitter_mut().emission_rate = 2;

    // Smoke lives 63 frames, so the window stops growing at 63 frames of emissions
    for _ in 0..200 {
        sim.frame();
    }
    assert_eq!(sim.pool().live_count(), 63 * 3);
    assert_eq!(sim.pool().active_len(), 63 * 3);
}

#[test]
fn test_input_drives_the_emitter() {
    let controls = Controls::default();
    let mut sim = Simulation::with_seed(SCREEN, 0);
    let mut input = Input::new();

    input.press_key(controls.rate_up);
    input.press_key(controls.next_kind);
    sim.apply_input(&input, &controls);
    input.begin_frame();

    assert_eq!(sim.emitter().emission_rate, 1);
    assert_eq!(sim.emitter().kind, ParticleKind::Smoke);

    // Held keys do not repeat
    sim.apply_input(&input, &controls);
    assert_eq!(sim.emitter().emission_rate, 1);

    input.move_mouse(Vec2::new(10.0, 20.0));
    sim.apply_input(&input, &controls);
    assert_eq!(sim.emitter().position, SCREEN / 2.0);

    input.press_mouse(controls.move_emitter);
    sim.apply_input(&input, &controls);
    assert_eq!(sim.emitter().position, Vec2::new(10.0, 20.0));

    let stats = sim.frame();
    assert_eq!(stats.emitted, 2);
}
