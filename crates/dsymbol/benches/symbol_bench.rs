//! Criterion benchmarks for whole-symbol work.
//!
//! - Text: parse and write.
//! - Invariants: orbifold name, orientation, curvature.
//! - Algorithms: isomorphism, maximal symmetry, canonical numbering.
//!
//! Inputs are the catalog maps plus random symbols from fixed replay tokens.
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dsymbol::algorithms::{max_symmetry, orientate, reorder};
use dsymbol::isomorphic::isomorphic;
use dsymbol::orbifold::group_name;
use dsymbol::random::{draw_symbols, RandomSymbolCfg, StepCount};
use dsymbol::symbol::{catalog, DSymbol};

fn inputs() -> Vec<(&'static str, DSymbol)> {
    vec![
        ("cube_map", catalog::cube_map()),
        ("torus_6x6", catalog::square_torus(6, 6)),
        ("figure_eight", catalog::figure_eight_map()),
    ]
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    for (label, ds) in inputs() {
        let text = ds.write();
        group.bench_with_input(BenchmarkId::new("parse", label), &text, |b, text| {
            b.iter(|| text.parse::<DSymbol>().unwrap())
        });
        group.bench_with_input(BenchmarkId::new("write", label), &ds, |b, ds| {
            b.iter(|| ds.write())
        });
    }
    group.finish();
}

fn bench_invariants(c: &mut Criterion) {
    let mut group = c.benchmark_group("invariants");
    for (label, ds) in inputs() {
        group.bench_with_input(BenchmarkId::new("group_name", label), &ds, |b, ds| {
            b.iter(|| group_name(ds))
        });
        group.bench_with_input(BenchmarkId::new("orientation", label), &ds, |b, ds| {
            b.iter(|| ds.orientation())
        });
        group.bench_with_input(BenchmarkId::new("curvature", label), &ds, |b, ds| {
            b.iter(|| ds.curvature())
        });
    }
    group.finish();
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");
    for (label, ds) in inputs() {
        let shuffled = reorder(&ds);
        group.bench_with_input(BenchmarkId::new("isomorphic", label), &ds, |b, ds| {
            b.iter(|| isomorphic(ds, &shuffled, false))
        });
        group.bench_with_input(BenchmarkId::new("reorder", label), &ds, |b, ds| {
            b.iter(|| reorder(ds))
        });
    }
    let cfg = RandomSymbolCfg {
        steps: StepCount::Fixed(4),
        max_size: 64,
        ..RandomSymbolCfg::default()
    };
    let pool = draw_symbols(&cfg, 11, 32);
    group.bench_function(BenchmarkId::new("max_symmetry", "random_cover"), |b| {
        b.iter_batched(
            || orientate(&pool[pool.len() / 2]),
            |ds| max_symmetry(&ds),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_text, bench_invariants, bench_algorithms);
criterion_main!(benches);
