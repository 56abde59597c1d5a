use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use route_finder::graph::generators::{generate_grid, generate_random_connected};
use route_finder::{FrontierStrategy, PathFinder};

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_connected");

    for &size in &[200usize, 1_000, 5_000] {
        let graph = generate_random_connected(size, size * 2, 42);
        let target = size - 1;

        for strategy in [FrontierStrategy::LinearScan, FrontierStrategy::BinaryHeap] {
            let finder = PathFinder::new().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), size),
                &graph,
                |b, graph| b.iter(|| finder.find_route(graph, black_box(&0usize), black_box(&target))),
            );
        }
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(60, 60);
    let corner = 60 * 60 - 1;

    c.bench_function("grid_60x60_heap", |b| {
        let finder = PathFinder::new().with_strategy(FrontierStrategy::BinaryHeap);
        b.iter(|| finder.find_route(&graph, black_box(&0usize), black_box(&corner)))
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid);
criterion_main!(benches);
