//! Criterion benchmarks for surgery and random generation.
//! Focus: the four edits on the cube map and a torus grid, one symmetry-breaking
//! step on the hexagonal lattice, and random draws.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dsymbol::edit::{
    break_symmetries, contract_edge, glue_tiles_around_edge, glue_tiles_around_vertex,
    truncate_vertex, BreakCfg, BreakMode,
};
use dsymbol::random::{draw_symbol, RandomSymbolCfg, ReplayToken};
use dsymbol::symbol::{catalog, DSymbol};

fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit");
    for (label, ds) in [
        ("cube_map", catalog::cube_map()),
        ("torus_5x5", catalog::square_torus(5, 5)),
    ] {
        group.bench_with_input(BenchmarkId::new("contract_edge", label), &ds, |b, ds| {
            b.iter(|| contract_edge(ds, 1))
        });
        group.bench_with_input(BenchmarkId::new("glue_edge", label), &ds, |b, ds| {
            b.iter(|| glue_tiles_around_edge(ds, 1))
        });
        group.bench_with_input(BenchmarkId::new("glue_vertex", label), &ds, |b, ds| {
            b.iter(|| glue_tiles_around_vertex(ds, 1))
        });
        group.bench_with_input(BenchmarkId::new("truncate", label), &ds, |b, ds| {
            b.iter(|| truncate_vertex(ds, 1))
        });
    }
    group.finish();
}

fn bench_break(c: &mut Criterion) {
    let mut group = c.benchmark_group("break");
    let hex: DSymbol = "<1.1:2:2,2,2:6,3>".parse().unwrap();
    for mode in [BreakMode::RemoveOne, BreakMode::RemoveSome] {
        let cfg = BreakCfg {
            mode,
            max_results: 8,
            ..BreakCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("hexagonal", format!("{mode:?}")), &cfg, |b, cfg| {
            b.iter(|| break_symmetries(&hex, cfg))
        });
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    let cfg = RandomSymbolCfg::default();
    group.bench_function(BenchmarkId::new("draw_symbol", "default"), |b| {
        b.iter_batched(
            || ReplayToken { seed: 42, index: 0 },
            |mut tok| {
                tok.index = tok.index.wrapping_add(1);
                let _ = draw_symbol(&cfg, tok);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_edits, bench_break, bench_random);
criterion_main!(benches);
