use crate::model::ShapeType;
use crate::store::DiagramStore;

/// Advisory per-shape instance limits. Palette UI policy, not an engine
/// invariant: the store itself never refuses a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeLimits {
    pub rectangle: usize,
    pub triangle: usize,
    pub circle: usize,
}

impl Default for ShapeLimits {
    fn default() -> Self {
        Self {
            rectangle: 5,
            triangle: 5,
            circle: 5,
        }
    }
}

impl ShapeLimits {
    pub fn limit(&self, shape_type: ShapeType) -> usize {
        match shape_type {
            ShapeType::Rectangle => self.rectangle,
            ShapeType::Triangle => self.triangle,
            ShapeType::Circle => self.circle,
        }
    }

    pub fn can_add(&self, store: &DiagramStore, shape_type: ShapeType) -> bool {
        store.shape_count(shape_type) < self.limit(shape_type)
    }
}
