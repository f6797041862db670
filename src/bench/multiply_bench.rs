//! Criterion benchmarks for the serial multiply.
//!
//! Square sizes track the CLI's single-argument mode; the rectangular cases
//! show how the strided walk through B behaves when n grows.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mm_mult::fill::{MatrixFill, SEED, UniformFill};
use mm_mult::{Dims, Matrix, matmul_naive_ijk, multiply_into};

fn operands(dims: Dims) -> (Matrix, Matrix, Matrix) {
    let mut fill = UniformFill::seeded(SEED, 100.0).unwrap();
    let mut a = Matrix::zeros(dims.l, dims.m).unwrap();
    let mut b = Matrix::zeros(dims.m, dims.n).unwrap();
    fill.fill(&mut a);
    fill.fill(&mut b);
    let c = Matrix::zeros(dims.l, dims.n).unwrap();
    (a, b, c)
}

fn bench_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("square");

    for size in [32, 64, 128, 256] {
        let dims = Dims::square(size).unwrap();
        let (a, b, mut out) = operands(dims);
        group.throughput(Throughput::Elements(dims.flops() as u64));

        group.bench_with_input(BenchmarkId::new("naive_ijk", size), &size, |bencher, _| {
            bencher.iter(|| {
                matmul_naive_ijk(
                    black_box(a.as_slice()),
                    black_box(b.as_slice()),
                    out.as_mut_slice(),
                    size,
                    size,
                    size,
                )
            });
        });
    }

    group.finish();
}

fn bench_rectangular(c: &mut Criterion) {
    let mut group = c.benchmark_group("rectangular");

    for (l, m, n) in [(256, 64, 16), (16, 64, 256), (64, 256, 64)] {
        let dims = Dims::new(l, m, n).unwrap();
        let (a, b, mut out) = operands(dims);
        group.throughput(Throughput::Elements(dims.flops() as u64));

        group.bench_function(BenchmarkId::new("multiply_into", dims), |bencher| {
            bencher.iter(|| multiply_into(black_box(&a), black_box(&b), &mut out).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_square, bench_rectangular);
criterion_main!(benches);
