//! Criterion benchmarks for the ear-clipping scan.
//! Focus sizes: n in {8, 32, 128, 512} vertices (the scan is O(n²)).
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use earclip::clip::{triangulate, ClipCfg, VertexLoop};
use earclip::geom::rand::{draw_outline_star, ReplayToken, StarCfg};
use earclip::geom::winding_of;

fn star_loop(n: usize, seed: u64) -> VertexLoop {
    let cfg = StarCfg {
        vertices: n,
        ..StarCfg::default()
    };
    VertexLoop::from_points(draw_outline_star(cfg, ReplayToken { seed, index: 0 }))
}

fn bench_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");
    for &n in &[8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("triangulate_star", n), &n, |b, &n| {
            b.iter_batched(
                || star_loop(n, 43),
                |mut outline| {
                    let tris = triangulate(&mut outline, ClipCfg::default()).unwrap();
                    assert_eq!(tris.len(), n - 2);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("winding_of", n), &n, |b, &n| {
            let points = star_loop(n, 44).points();
            b.iter(|| winding_of(&points))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_clip);
criterion_main!(benches);
