//! Benchmarks for the classification hot paths using criterion.
//!
//! Run with: cargo bench --bench classify_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use eigenchar_core::CharImage;
use eigenchar_features::{bounding_box_size, feature_matrix};
use eigenchar_recognize::{classify, PcaReducer};
use nalgebra::DMatrix;

/// Deterministic pseudo-random matrix in [0, 255] (xorshift, no RNG dep).
fn synthetic_matrix(rows: usize, cols: usize, seed: u64) -> DMatrix<f64> {
    let mut state = seed | 1;
    DMatrix::from_fn(rows, cols, |_, _| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 256) as f64
    })
}

fn synthetic_images(count: usize) -> Vec<CharImage> {
    (0..count)
        .map(|i| {
            CharImage::from_fn(20, 16, |r, c| {
                ((r * 31 + c * 7 + i as u32 * 13) % 256) as u8
            })
        })
        .collect()
}

fn bench_vectorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorize");

    for &count in &[100, 500, 2000] {
        let images = synthetic_images(count);
        let bbox = bounding_box_size(&images).unwrap();
        group.bench_with_input(BenchmarkId::new("feature_matrix", count), &images, |b, images| {
            b.iter(|| feature_matrix(images, bbox));
        });
    }
    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    group.sample_size(10); // eigendecomposition is the slow part

    let full = synthetic_matrix(200, 320, 0x5eed);
    let reducer = PcaReducer::new(50, 10);

    group.bench_function("fit_two_pass", |b| {
        b.iter(|| reducer.fit(&full).unwrap());
    });

    let (_, basis) = reducer.fit(&full).unwrap();
    group.bench_function("apply_frozen_basis", |b| {
        b.iter(|| reducer.apply(&full, &basis).unwrap());
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for &(train_n, test_n) in &[(500, 100), (2000, 500)] {
        let train = synthetic_matrix(train_n, 10, 0xabcd);
        let test = synthetic_matrix(test_n, 10, 0x1234);
        let labels: Vec<String> = (0..train_n).map(|i| ((b'a' + (i % 26) as u8) as char).to_string()).collect();

        group.bench_function(
            BenchmarkId::new("cosine_nearest", format!("{train_n}x{test_n}")),
            |b| {
                b.iter(|| classify(&train, &labels, &test).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_vectorize, bench_reduce, bench_classify);
criterion_main!(benches);
