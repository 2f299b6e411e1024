use compass_heading::{
    CompassService, Heading, HeadingCalculator, HeadingUpdate, LifecycleEvent, Notification,
    PresentationSink, SensorAvailability, SensorEvent, SensorKind, classify_direction,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nalgebra::Vector3;
use rand::prelude::*;
use rand_pcg::Pcg64;
use std::f32::consts::PI;

// Pre-generated sensor data to eliminate RNG overhead during benchmarks
struct PreGeneratedData {
    samples: Vec<(Vector3<f32>, Vector3<f32>)>,
    index: usize,
}

impl PreGeneratedData {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut samples = Vec::with_capacity(count);

        for i in 0..count {
            let time = i as f32 * 0.02; // 50Hz sample rate

            // Slow turn with a little hand tremor
            let turn = time * 0.1 * 2.0 * PI;

            let accelerometer = Vector3::new(
                0.3 * (turn * 3.0).sin() + rng.random_range(-0.05..0.05),
                0.3 * (turn * 2.0).cos() + rng.random_range(-0.05..0.05),
                9.81 + rng.random_range(-0.05..0.05),
            );

            let magnetometer = Vector3::new(
                -22.0 * turn.sin() + rng.random_range(-0.5..0.5),
                22.0 * turn.cos() + rng.random_range(-0.5..0.5),
                -40.0 + rng.random_range(-0.5..0.5),
            );

            samples.push((accelerometer, magnetometer));
        }

        Self { samples, index: 0 }
    }

    fn next(&mut self) -> (Vector3<f32>, Vector3<f32>) {
        let sample = self.samples[self.index];
        self.index = (self.index + 1) % self.samples.len();
        sample
    }
}

/// Sink that discards everything
struct NullSink;

impl PresentationSink for NullSink {
    fn publish(&mut self, update: &HeadingUpdate) {
        black_box(update);
    }

    fn show_notification(&mut self, notification: &Notification) {
        black_box(notification);
    }

    fn cancel_notification(&mut self, id: u32) {
        black_box(id);
    }
}

/// Benchmark heading computation from one sample pair
fn bench_compute_heading(c: &mut Criterion) {
    let calculator = HeadingCalculator::new();
    let mut data = PreGeneratedData::new(1000, 42);

    c.bench_function("compute_heading", |b| {
        b.iter(|| {
            let (accelerometer, magnetometer) = data.next();
            black_box(calculator.compute_heading(black_box(accelerometer), black_box(magnetometer)))
        })
    });
}

/// Benchmark sector lookup
fn bench_classify_direction(c: &mut Criterion) {
    let headings: Vec<Heading> = (0..360)
        .map(|degrees| Heading::from_degrees(f64::from(degrees) + 0.5, 2).unwrap())
        .collect();

    c.bench_function("classify_direction_full_turn", |b| {
        b.iter(|| {
            for heading in &headings {
                black_box(classify_direction(black_box(*heading)));
            }
        })
    });
}

/// Benchmark the service path, foreground and background
fn bench_service_events(c: &mut Criterion) {
    let mut data = PreGeneratedData::new(1000, 7);

    for (name, event) in [
        ("service_event_foreground", LifecycleEvent::Resumed),
        ("service_event_background", LifecycleEvent::Paused),
    ] {
        let mut service = CompassService::new(HeadingCalculator::new(), NullSink);
        service.on_create(SensorAvailability::default());
        service.on_lifecycle(event);

        c.bench_function(name, |b| {
            b.iter(|| {
                let (accelerometer, magnetometer) = data.next();
                let accel = [accelerometer.x, accelerometer.y, accelerometer.z];
                let mag = [magnetometer.x, magnetometer.y, magnetometer.z];
                service.on_sensor_changed(Some(&SensorEvent::new(SensorKind::Accelerometer, &accel)));
                black_box(service.on_sensor_changed(Some(&SensorEvent::new(
                    SensorKind::MagneticField,
                    &mag,
                ))))
            })
        });
    }
}

criterion_group!(
    benches,
    bench_compute_heading,
    bench_classify_direction,
    bench_service_events
);

criterion_main!(benches);
