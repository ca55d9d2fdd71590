use std::thread;

use chartgraph::{DiagramStore, Position, ShapeLimits, ShapeType, SharedStore, Slot};

#[test]
fn test_shape_limits_default_to_five_each() {
    let limits = ShapeLimits::default();
    assert_eq!(limits.limit(ShapeType::Rectangle), 5);
    assert_eq!(limits.limit(ShapeType::Triangle), 5);
    assert_eq!(limits.limit(ShapeType::Circle), 5);
}

#[test]
fn test_shape_limits_are_advisory_only() {
    let limits = ShapeLimits {
        rectangle: 1,
        triangle: 5,
        circle: 5,
    };
    let mut store = DiagramStore::new();
    store.add_node(ShapeType::Rectangle, Position::new(0.0, 0.0));
    assert!(!limits.can_add(&store, ShapeType::Rectangle));
    assert!(limits.can_add(&store, ShapeType::Circle));
    // the store itself never refuses
    store.add_node(ShapeType::Rectangle, Position::new(1.0, 0.0));
    assert_eq!(store.shape_count(ShapeType::Rectangle), 2);
}

#[test]
fn test_shared_store_clones_observe_same_state() {
    let shared = SharedStore::new();
    let handle = shared.clone();
    let id = shared.write(|store| {
        store
            .add_node(ShapeType::Circle, Position::new(5.0, 5.0))
            .id
    });
    assert!(handle.read(|store| store.node(&id).is_some()));
}

#[test]
fn test_shared_store_serializes_writers_across_threads() {
    let shared = SharedStore::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    shared.write(|store| {
                        store.add_node(ShapeType::Triangle, Position::new(0.0, 0.0));
                    });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread");
    }
    assert_eq!(shared.read(|store| store.nodes().len()), 100);
    // labels stay ordinal under the lock
    let labels: Vec<String> =
        shared.read(|store| store.nodes().iter().map(|n| n.data.label.clone()).collect());
    assert!(labels.contains(&"1".to_string()));
    assert!(labels.contains(&"100".to_string()));
}

#[test]
fn test_shared_store_from_existing_store() {
    let mut store = DiagramStore::new();
    let a = store.add_node(ShapeType::Rectangle, Position::new(0.0, 0.0));
    let b = store.add_node(ShapeType::Circle, Position::new(0.0, 100.0));
    store
        .add_edge(&a.id, &b.id, Slot::Bottom, Slot::Top)
        .expect("edge");
    let shared = SharedStore::from_store(store);
    assert_eq!(shared.read(|s| s.edges().len()), 1);
}
