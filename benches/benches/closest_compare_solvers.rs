// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use proxima_closest::{closest_pair_brute_force, find_closest_pair};
use proxima_mst::{Edge, minimum_spanning_tree};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_points(count: usize, extent: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push(Point::new(
            rng.next_f64() * extent,
            rng.next_f64() * extent,
        ));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn gen_collinear_points(count: usize, step: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    for i in 0..count {
        // Jitter the spacing so the minimum gap is not constant.
        out.push(Point::new(i as f64 * step + rng.next_f64() * 0.25, 0.0));
    }
    out
}

fn bench_divide(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide");
    for &n in &[256usize, 1024, 4096, 16384] {
        let pts = gen_uniform_points(n, 10_000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter(|| {
                let pair = find_closest_pair(black_box(&pts)).unwrap();
                black_box(pair.distance());
            })
        });
    }
    let pts = gen_clustered_points(16, 256, 128.0);
    group.bench_function("clustered", |b| {
        b.iter(|| {
            let pair = find_closest_pair(black_box(&pts)).unwrap();
            black_box(pair.distance());
        })
    });
    let pts = gen_collinear_points(4096, 3.0);
    group.bench_function("collinear", |b| {
        b.iter(|| {
            let pair = find_closest_pair(black_box(&pts)).unwrap();
            black_box(pair.distance());
        })
    });
    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");
    for &n in &[256usize, 1024, 4096] {
        let pts = gen_uniform_points(n, 10_000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter(|| {
                let pair = closest_pair_brute_force(black_box(&pts)).unwrap();
                black_box(pair.distance());
            })
        });
    }
    group.finish();
}

fn gen_random_graph(vertices: u32, edges_per_vertex: usize) -> Vec<Edge> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let mut edges = Vec::with_capacity(vertices as usize * edges_per_vertex);
    // A spanning path keeps the graph connected; extra edges are random.
    for v in 1..vertices {
        edges.push(Edge::new(v - 1, v, (rng.next_u64() % 10_000) as i64));
    }
    for _ in 0..vertices as usize * edges_per_vertex {
        let u = (rng.next_u64() % u64::from(vertices)) as u32;
        let v = (rng.next_u64() % u64::from(vertices)) as u32;
        if u == v {
            continue;
        }
        edges.push(Edge::new(u, v, (rng.next_u64() % 10_000) as i64));
    }
    edges
}

fn bench_boruvka(c: &mut Criterion) {
    let mut group = c.benchmark_group("boruvka");
    for &v in &[256u32, 1024, 4096] {
        let edges = gen_random_graph(v, 4);
        group.throughput(Throughput::Elements(u64::from(v)));
        group.bench_function(format!("random_v{}", v), |b| {
            b.iter_batched(
                || edges.clone(),
                |edges| {
                    let tree = minimum_spanning_tree(v, &edges).unwrap();
                    black_box(tree.total_weight);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_divide, bench_brute_force, bench_boruvka);
criterion_main!(benches);
