//! Throughput of the arithmetic fallbacks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nfill_math::{catalog, ops, OperationBody};

const INPUTS: [f64; 8] = [-0.0, 0.0, 0.5, -0.5, 3.75, -1e10, 1e300, f64::NAN];

fn benchmark_unary_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("math_unary_fallbacks");

    for op in catalog::arithmetic_operations(true) {
        if let OperationBody::Unary(f) = op.body {
            group.bench_function(op.name, |b| {
                b.iter(|| {
                    for x in INPUTS {
                        black_box(f(black_box(x)));
                    }
                })
            });
        }
    }

    group.finish();
}

fn benchmark_variadic_and_bitwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("math_multi_operand_fallbacks");
    let operands: Vec<f64> = (0..64).map(f64::from).collect();

    group.bench_function("hypot_64", |b| b.iter(|| ops::hypot(black_box(&operands))));
    group.bench_function("imul", |b| {
        b.iter(|| ops::imul(black_box(4_294_967_295.0), black_box(5.0)))
    });
    group.bench_function("clz32", |b| b.iter(|| ops::clz32(black_box(-1e10))));

    group.finish();
}

criterion_group!(benches, benchmark_unary_ops, benchmark_variadic_and_bitwise);
criterion_main!(benches);
