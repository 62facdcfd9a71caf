//! Resample Performance Benchmark
//!
//! Measures linear interpolation throughput for the rate conversions the
//! speech service sees most often.
//!
//! ## Test Scenarios
//!
//! - 44100 Hz → 16000 Hz (CD audio)
//! - 48000 Hz → 16000 Hz (video soundtracks)
//! - 8000 Hz → 16000 Hz (telephony upsample)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wsp_ingest::audio::Resampler;

const TARGET_RATE: u32 = 16000;

/// One second of a 440 Hz tone at `rate`
fn tone(rate: u32) -> Vec<f32> {
    (0..rate)
        .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / rate as f32).sin() * 0.5)
        .collect()
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample_to_16k");

    for source_rate in [44100u32, 48000, 8000] {
        let input = tone(source_rate);
        group.throughput(Throughput::Elements(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(source_rate),
            &input,
            |b, input| {
                b.iter(|| Resampler::resample(black_box(input.clone()), source_rate, TARGET_RATE))
            },
        );
    }

    group.finish();
}

fn bench_same_rate(c: &mut Criterion) {
    let input = tone(TARGET_RATE);
    c.bench_function("resample_same_rate_passthrough", |b| {
        b.iter(|| Resampler::resample(black_box(input.clone()), TARGET_RATE, TARGET_RATE))
    });
}

criterion_group!(benches, bench_resample, bench_same_rate);
criterion_main!(benches);
