use serde::{Deserialize, Serialize};

/// Closed set of placeable shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Triangle,
    Circle,
}

impl ShapeType {
    pub const ALL: [ShapeType; 3] = [ShapeType::Rectangle, ShapeType::Triangle, ShapeType::Circle];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Rectangle => "rectangle",
            ShapeType::Triangle => "triangle",
            ShapeType::Circle => "circle",
        }
    }
}

/// One of a node's two fixed connection points. Capacity one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Top,
    Bottom,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Top => "top",
            Slot::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Explicit slot-to-edge mapping. A `Some` entry must name an edge that has
/// this node as an endpoint at that slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connections {
    pub top: Option<String>,
    pub bottom: Option<String>,
}

impl Connections {
    pub fn get(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Top => self.top.as_deref(),
            Slot::Bottom => self.bottom.as_deref(),
        }
    }

    pub fn set(&mut self, slot: Slot, edge_id: Option<String>) {
        match slot {
            Slot::Top => self.top = edge_id,
            Slot::Bottom => self.bottom = edge_id,
        }
    }

    /// Clears every slot currently referencing `edge_id`.
    pub fn clear_edge(&mut self, edge_id: &str) {
        if self.top.as_deref() == Some(edge_id) {
            self.top = None;
        }
        if self.bottom.as_deref() == Some(edge_id) {
            self.bottom = None;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
    pub connections: Connections,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: String,
    #[serde(rename = "shapeType")]
    pub shape_type: ShapeType,
    pub position: Position,
    pub data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "sourceHandle")]
    pub source_handle: Slot,
    #[serde(rename = "targetHandle")]
    pub target_handle: Slot,
}

impl DiagramEdge {
    /// The slot this edge occupies on `node_id`, if the node is an endpoint.
    pub fn slot_on(&self, node_id: &str) -> Option<Slot> {
        if self.source == node_id {
            Some(self.source_handle)
        } else if self.target == node_id {
            Some(self.target_handle)
        } else {
            None
        }
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// The aggregate of all nodes and edges, the unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}
