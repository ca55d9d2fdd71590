use ahash::AHashSet;

use crate::ident::generate_id;
use crate::model::{
    Connections, Diagram, DiagramEdge, DiagramNode, NodeData, Position, ShapeType, Slot,
};

/// The authoritative mutable diagram state. One logical mutator at a time;
/// every operation applies atomically from the caller's perspective.
///
/// Lookup misses on mutation are benign no-ops: the caller may race a stale
/// reference against a deletion.
#[derive(Debug, Default)]
pub struct DiagramStore {
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
    selected: Option<String>,
}

impl DiagramStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&DiagramEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn shape_count(&self, shape_type: ShapeType) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.shape_type == shape_type)
            .count()
    }

    pub fn selected_element(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selection is advisory UI state; the id is not checked for existence.
    pub fn set_selected_element(&mut self, id: Option<String>) {
        self.selected = id;
    }

    /// Creates a node with a fresh id, an ordinal label among nodes of the
    /// same shape type, and both slots empty. Per-shape count limits are the
    /// caller's policy, not enforced here.
    pub fn add_node(&mut self, shape_type: ShapeType, position: Position) -> DiagramNode {
        let label = (self.shape_count(shape_type) + 1).to_string();
        let node = DiagramNode {
            id: generate_id(),
            shape_type,
            position,
            data: NodeData {
                label,
                connections: Connections::default(),
            },
        };
        self.nodes.push(node.clone());
        node
    }

    pub fn update_node_position(&mut self, id: &str, position: Position) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.position = position;
        }
    }

    /// Removes the node and every edge touching it, scrubbing the slot each
    /// removed edge held on its surviving endpoint. Collect first, then apply
    /// as one transition.
    pub fn delete_node(&mut self, id: &str) {
        if self.node(id).is_none() {
            return;
        }
        let removed: AHashSet<String> = self
            .edges
            .iter()
            .filter(|e| e.touches(id))
            .map(|e| e.id.clone())
            .collect();

        self.nodes.retain(|n| n.id != id);
        self.edges.retain(|e| !removed.contains(&e.id));
        for node in &mut self.nodes {
            for edge_id in &removed {
                node.data.connections.clear_edge(edge_id);
            }
        }
        if let Some(sel) = self.selected.as_deref() {
            if sel == id || removed.contains(sel) {
                self.selected = None;
            }
        }
    }

    /// Connects `source` to `target`, occupying one slot on each endpoint.
    ///
    /// Self-loops and exact duplicates are silent no-ops (a rejected user
    /// gesture, not an error). A slot already occupied is freed first by
    /// removing its edge in full, then the duplicate check runs against the
    /// surviving edges so an evicted edge is never recreated verbatim.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        source_handle: Slot,
        target_handle: Slot,
    ) -> Option<DiagramEdge> {
        if source == target {
            return None;
        }
        if self.node(source).is_none() || self.node(target).is_none() {
            return None;
        }

        if let Some(occupant) = self.occupant(source, source_handle) {
            self.delete_edge(&occupant);
        }
        if let Some(occupant) = self.occupant(target, target_handle) {
            self.delete_edge(&occupant);
        }

        let duplicate = self.edges.iter().any(|e| {
            e.source == source
                && e.target == target
                && e.source_handle == source_handle
                && e.target_handle == target_handle
        });
        if duplicate {
            return None;
        }

        let edge = DiagramEdge {
            id: generate_id(),
            source: source.to_owned(),
            target: target.to_owned(),
            source_handle,
            target_handle,
        };
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == source) {
            node.data.connections.set(source_handle, Some(edge.id.clone()));
        }
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == target) {
            node.data.connections.set(target_handle, Some(edge.id.clone()));
        }
        self.edges.push(edge.clone());
        Some(edge)
    }

    /// Removes the edge and clears whichever slot referenced it on both
    /// endpoints. No-op if the id is absent.
    pub fn delete_edge(&mut self, id: &str) {
        let Some(pos) = self.edges.iter().position(|e| e.id == id) else {
            return;
        };
        let edge = self.edges.remove(pos);
        for node in &mut self.nodes {
            if edge.touches(&node.id) {
                node.data.connections.clear_edge(id);
            }
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.selected = None;
    }

    /// Wholesale replacement. The diagram is trusted as-is; validate it with
    /// [`crate::codec::deserialize_diagram`] before handing it over.
    pub fn load_diagram(&mut self, diagram: Diagram) {
        self.nodes = diagram.nodes;
        self.edges = diagram.edges;
        self.selected = None;
    }

    pub fn export_snapshot(&self) -> Diagram {
        Diagram {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    fn occupant(&self, node_id: &str, slot: Slot) -> Option<String> {
        self.node(node_id)
            .and_then(|n| n.data.connections.get(slot))
            .map(str::to_owned)
    }
}
