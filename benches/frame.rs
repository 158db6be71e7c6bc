//! Benchmarks for the CPU side of a frame.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wsf::physics;
use wsf::prelude::*;

const SCREEN: Vec2 = Vec2::new(800.0, 450.0);

/// A simulation that has been running long enough to reach steady state.
fn warmed_up(kind: ParticleKind, rate: i32) -> Simulation {
    let mut sim = Simulation::with_seed(SCREEN, 42);
    sim.emitter_mut().kind = kind;
    sim.emitter_mut().emission_rate = rate;
    for _ in 0..240 {
        sim.frame();
    }
    sim
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for kind in ParticleKind::ALL {
        group.bench_with_input(BenchmarkId::new("steady", kind.label()), &kind, |b, &kind| {
            let mut sim = warmed_up(kind, 10);
            b.iter(|| black_box(sim.frame()))
        });
    }

    group.bench_function("saturated_water", |b| {
        let mut sim = warmed_up(ParticleKind::Water, 100);
        b.iter(|| black_box(sim.frame()))
    });

    group.finish();
}

fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool");

    group.bench_function("fill_and_drain", |b| {
        let mut pool: ParticlePool = ParticlePool::new();
        b.iter(|| {
            while let Some(slot) = pool.try_allocate() {
                *slot = Particle::spawn(ParticleKind::Water, Vec2::ZERO, Vec2::ZERO);
                slot.alive = false;
            }
            black_box(pool.compact())
        })
    });

    group.bench_function("step_full", |b| {
        let mut pool: ParticlePool = ParticlePool::new();
        while let Some(slot) = pool.try_allocate() {
            *slot = Particle::spawn(ParticleKind::Water, SCREEN / 2.0, Vec2::ZERO);
        }
        b.iter(|| {
            // Reset so the particles never fall off screen
            for p in pool.iter_active_mut() {
                p.position = SCREEN / 2.0;
                p.velocity = Vec2::ZERO;
            }
            black_box(physics::step(&mut pool, SCREEN))
        })
    });

    group.finish();
}

fn bench_collect_instances(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect_instances");

    for rate in [0, 10, 100] {
        let sim = warmed_up(ParticleKind::Smoke, rate);
        group.bench_with_input(
            BenchmarkId::from_parameter(sim.pool().live_count()),
            &sim,
            |b, sim| b.iter(|| black_box(collect_instances(sim.pool()))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_frame, bench_pool, bench_collect_instances);
criterion_main!(benches);
