use ahash::{AHashMap, AHashSet};
use serde::Serialize;

use crate::model::{Diagram, DiagramEdge, Slot};

/// Structural audit counters for an externally supplied diagram. The store
/// maintains these invariants itself; the report exists to vet documents
/// produced elsewhere (e.g. hand-edited files) and as a test oracle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub total_nodes: usize,
    pub total_edges: usize,
    /// Edges whose source or target references no node in the diagram.
    pub orphan_edges: usize,
    /// Edges with identical source/target/handle tuples, beyond the first.
    pub duplicate_edges: usize,
    pub self_loops: usize,
    /// Node slots referencing an edge id absent from the edge list.
    pub dangling_slots: usize,
    /// Node slots referencing an edge that does not occupy that slot on
    /// that node.
    pub mismatched_slots: usize,
}

impl IntegrityReport {
    pub fn has_issues(&self) -> bool {
        self.orphan_edges > 0
            || self.duplicate_edges > 0
            || self.self_loops > 0
            || self.dangling_slots > 0
            || self.mismatched_slots > 0
    }
}

pub fn check_diagram(diagram: &Diagram) -> IntegrityReport {
    let mut report = IntegrityReport {
        total_nodes: diagram.nodes.len(),
        total_edges: diagram.edges.len(),
        ..IntegrityReport::default()
    };

    let node_ids: AHashSet<&str> = diagram.nodes.iter().map(|n| n.id.as_str()).collect();
    let edges_by_id: AHashMap<&str, &DiagramEdge> =
        diagram.edges.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut seen_tuples = AHashSet::new();
    for edge in &diagram.edges {
        if !node_ids.contains(edge.source.as_str()) || !node_ids.contains(edge.target.as_str()) {
            report.orphan_edges += 1;
        }
        if edge.source == edge.target {
            report.self_loops += 1;
        }
        let tuple = (
            edge.source.as_str(),
            edge.target.as_str(),
            edge.source_handle,
            edge.target_handle,
        );
        if !seen_tuples.insert(tuple) {
            report.duplicate_edges += 1;
        }
    }

    for node in &diagram.nodes {
        for slot in [Slot::Top, Slot::Bottom] {
            let Some(edge_id) = node.data.connections.get(slot) else {
                continue;
            };
            match edges_by_id.get(edge_id) {
                None => report.dangling_slots += 1,
                Some(edge) if edge.slot_on(&node.id) != Some(slot) => {
                    report.mismatched_slots += 1;
                }
                Some(_) => {}
            }
        }
    }

    report
}
