use criterion::{criterion_group, criterion_main, Criterion};
use linkrank_core::LinkGraph;

fn ring_with_chords(n: u32) -> LinkGraph {
    let mut g = LinkGraph::new();
    g.initialize(n as usize).expect("initialize");
    for i in 0..n {
        g.add_edge(i, (i + 1) % n).expect("edge");
        g.add_edge(i, (i * 7 + 3) % n).expect("edge");
    }
    g
}

fn bench_pagerank(c: &mut Criterion) {
    let mut g = ring_with_chords(10_000);
    c.bench_function("pagerank_10k_20_iters", |b| b.iter(|| g.compute_pagerank(0.85, 20).expect("pagerank")));
    c.bench_function("top_n_10k", |b| b.iter(|| g.top_n(10)));
}

criterion_group!(benches, bench_pagerank);
criterion_main!(benches);
