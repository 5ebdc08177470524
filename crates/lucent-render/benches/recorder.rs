//! Benchmarks for command recording and flushing.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lucent_render::{BlendMode, Color, CommandRecorder};

fn bench_coalesced_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_draws");

    for size in [1000, 10000, 100000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("same_state", size), &size, |b, &size| {
            b.iter(|| {
                let mut recorder = CommandRecorder::new();
                for _ in 0..size {
                    recorder.push_draw(black_box(6));
                }
                recorder.flush();
                recorder.commands().len()
            });
        });

        group.bench_with_input(
            BenchmarkId::new("state_every_16", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut recorder = CommandRecorder::new();
                    for i in 0..size {
                        if i % 16 == 0 {
                            let blend = if (i / 16) % 2 == 0 {
                                BlendMode::Additive
                            } else {
                                BlendMode::Alpha
                            };
                            recorder.push_blend_mode(blend);
                        }
                        recorder.push_draw(black_box(6));
                    }
                    recorder.flush();
                    recorder.commands().len()
                });
            },
        );
    }

    group.finish();
}

fn bench_noop_state_pushes(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_noop_state");
    group.throughput(Throughput::Elements(10000));

    group.bench_function("color_mul_unchanged", |b| {
        b.iter(|| {
            let mut recorder = CommandRecorder::new();
            for _ in 0..10000 {
                recorder.push_color_mul(black_box(Color::WHITE));
            }
            recorder.flush();
            recorder.commands().len()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_coalesced_draws, bench_noop_state_pushes);
criterion_main!(benches);
