use std::time::Duration;

use chartgraph::{DiagramStore, Position, ShapeType, Slot};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

fn bench_scales() -> &'static [usize] {
    &[100, 500, 1_000]
}

fn chain_store(nodes: usize) -> (DiagramStore, Vec<String>) {
    let mut store = DiagramStore::new();
    let ids: Vec<String> = (0..nodes)
        .map(|i| {
            store
                .add_node(ShapeType::Rectangle, Position::new(0.0, 100.0 * i as f64))
                .id
        })
        .collect();
    for pair in ids.windows(2) {
        store.add_edge(&pair[0], &pair[1], Slot::Bottom, Slot::Top);
    }
    (store, ids)
}

fn bench_connect(c: &mut Criterion) {
    let mut group = c.benchmark_group("connect");
    group
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASURE);
    for &nodes in bench_scales() {
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, &nodes| {
            b.iter_batched(
                || chain_store(nodes),
                |(mut store, ids)| {
                    // reconnect the head slot: evicts the previous occupant
                    for target in ids.iter().skip(1).take(32) {
                        store.add_edge(&ids[0], target, Slot::Bottom, Slot::Top);
                    }
                    store
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_cascade_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade_delete");
    group
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASURE);
    for &nodes in bench_scales() {
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, &nodes| {
            b.iter_batched(
                || chain_store(nodes),
                |(mut store, ids)| {
                    store.delete_node(&ids[nodes / 2]);
                    store
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_snapshot_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_roundtrip");
    group
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASURE);
    for &nodes in bench_scales() {
        let (store, _) = chain_store(nodes);
        let diagram = store.export_snapshot();
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &diagram, |b, diagram| {
            b.iter(|| {
                let text = chartgraph::serialize_diagram(diagram).expect("serialize");
                chartgraph::deserialize_diagram(&text).expect("deserialize")
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_connect,
    bench_cascade_delete,
    bench_snapshot_roundtrip
);
criterion_main!(benches);
