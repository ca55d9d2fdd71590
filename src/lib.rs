//! In-memory graph state engine for a shape-diagram editor.
//! Nodes carry two capacity-one connection slots; edges occupy one slot on
//! each endpoint. Persistence is a single validated JSON snapshot.

pub mod client;
pub mod codec;
pub mod errors;
pub mod ident;
pub mod integrity;
pub mod model;
pub mod palette;
pub mod shared;
pub mod store;

pub use crate::codec::{deserialize_diagram, read_diagram_file, serialize_diagram, write_diagram_file};
pub use crate::errors::DiagramError;
pub use crate::ident::generate_id;
pub use crate::integrity::{IntegrityReport, check_diagram};
pub use crate::model::{Diagram, DiagramEdge, DiagramNode, Position, ShapeType, Slot};
pub use crate::palette::ShapeLimits;
pub use crate::shared::SharedStore;
pub use crate::store::DiagramStore;
