//! Criterion benchmarks for pricer_core normal distribution primitives and root finding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::distributions::{norm_cdf, norm_inv_cdf, norm_pdf};
use pricer_core::math::solvers::{BisectionSolver, SolverConfig};

/// Benchmark the normal CDF and PDF at body and tail points.
fn bench_normal_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_distribution");

    for x in [-10.0_f64, -1.0, 0.0, 2.5] {
        group.bench_with_input(BenchmarkId::new("norm_cdf", x), &x, |b, &x| {
            b.iter(|| norm_cdf(black_box(x)));
        });
        group.bench_with_input(BenchmarkId::new("norm_pdf", x), &x, |b, &x| {
            b.iter(|| norm_pdf(black_box(x)));
        });
    }

    for p in [1e-10_f64, 0.025, 0.5, 0.975] {
        group.bench_with_input(BenchmarkId::new("norm_inv_cdf", p), &p, |b, &p| {
            b.iter(|| norm_inv_cdf(black_box(p)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark bracket expansion plus bisection on a monotone function.
fn bench_bisection(c: &mut Criterion) {
    let mut group = c.benchmark_group("bisection");

    for tolerance in [1e-6_f64, 1e-9, 1e-12] {
        let solver = BisectionSolver::new(SolverConfig::new(tolerance, 1_000_000).unwrap(), 0.47);
        group.bench_with_input(
            BenchmarkId::new("solve_norm_cdf", tolerance),
            &solver,
            |b, solver| {
                b.iter(|| solver.solve(norm_cdf, black_box(0.9), 0.01, 1.99).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normal_distribution, bench_bisection);
criterion_main!(benches);
