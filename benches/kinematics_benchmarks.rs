//! Kinematics benchmarks using Criterion.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chromatrack::kinematics;
use chromatrack::{BoundedHistory, HsvColor, TimedSample, TrackedEntity, TrackingRegistry};

/// Create an entity with a saturated sample window of diagonal motion.
fn create_saturated_entity() -> TrackedEntity {
    let mut entity = TrackedEntity::new(HsvColor::by_name("blue").unwrap());
    for i in 0..32 {
        let t = i as f64 * 0.033;
        entity.add_sample(TimedSample::new(3.0 * i as f64, 2.0 * i as f64, t));
    }
    entity
}

fn benchmark_history_enqueue(c: &mut Criterion) {
    c.bench_function("history_enqueue_1000", |b| {
        b.iter(|| {
            let mut history = BoundedHistory::with_capacity(10);
            for i in 0..1000 {
                history.enqueue(black_box(TimedSample::new(i as f64, i as f64, i as f64)));
            }
            history.len()
        })
    });
}

fn benchmark_speed(c: &mut Criterion) {
    let entity = create_saturated_entity();
    c.bench_function("speed_full_window", |b| {
        b.iter(|| kinematics::speed(black_box(&entity)).unwrap())
    });
}

fn benchmark_direction(c: &mut Criterion) {
    let entity = create_saturated_entity();
    c.bench_function("direction_full_window", |b| {
        b.iter(|| kinematics::direction(black_box(&entity)))
    });
}

fn benchmark_velocity(c: &mut Criterion) {
    let entity = create_saturated_entity();
    c.bench_function("velocity_full_window", |b| {
        b.iter(|| kinematics::velocity(black_box(&entity)).unwrap())
    });
}

fn benchmark_registry_frame_cycle(c: &mut Criterion) {
    let registry = TrackingRegistry::from_color_names(&["blue", "green"], 680, 440).unwrap();
    let mut frame = 0u64;
    c.bench_function("registry_add_point_and_poll", |b| {
        b.iter(|| {
            frame += 1;
            let t = frame as f64 * 0.033;
            registry
                .add_point("blue", TimedSample::new(frame as f64, t, t))
                .unwrap();
            registry.velocity(black_box("blue")).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_history_enqueue,
    benchmark_speed,
    benchmark_direction,
    benchmark_velocity,
    benchmark_registry_frame_cycle
);
criterion_main!(benches);
