// Copyright (c) 2024-2026 Christian Moeller
// SPDX-License-Identifier: MIT

//! Benchmarks for the soft-float routines.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use libsoftfp::{ceil, rint, sqrt, sqrtf, trunc};

fn inputs_f64() -> Vec<f64> {
    (1..=4096).map(|i| i as f64 * 0.318309886).collect()
}

fn bench_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");
    let xs = inputs_f64();
    let xsf: Vec<f32> = xs.iter().map(|&x| x as f32).collect();
    group.throughput(Throughput::Elements(xs.len() as u64));

    group.bench_function("f64", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += sqrt(black_box(x));
            }
            black_box(acc)
        })
    });
    group.bench_function("f32", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &xsf {
                acc += sqrtf(black_box(x));
            }
            black_box(acc)
        })
    });
    group.finish();
}

fn bench_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounding");
    let xs = inputs_f64();
    group.throughput(Throughput::Elements(xs.len() as u64));

    for (name, f) in [
        ("ceil", ceil as fn(f64) -> f64),
        ("trunc", trunc),
        ("rint", rint),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in &xs {
                    acc += f(black_box(x));
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sqrt, bench_rounding);
criterion_main!(benches);
