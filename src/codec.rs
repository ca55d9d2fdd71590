use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::DiagramError;
use crate::ident::unix_millis;
use crate::model::{Diagram, DiagramEdge, DiagramNode};

/// Pretty-prints the diagram as JSON with two-space indentation. Identity
/// projection: field order and nesting round-trip exactly.
pub fn serialize_diagram(diagram: &Diagram) -> Result<String, DiagramError> {
    serde_json::to_string_pretty(diagram).map_err(|e| DiagramError::encode(e.to_string()))
}

/// Parses and validates a diagram document.
///
/// Validation order: JSON well-formedness, then presence of the top-level
/// `nodes`/`edges` lists, then per-element field checks. Node errors carry the
/// element's 0-based index; edge errors carry a one-based index. The edge
/// off-by-one reproduces the legacy validator's observable messages and is
/// deliberate; callers and tests rely on it.
///
/// Succeeds with the document unchanged: no normalization, no defaulting.
pub fn deserialize_diagram(input: &str) -> Result<Diagram, DiagramError> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| DiagramError::parse(e.to_string()))?;

    let raw_nodes = value
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or_else(|| DiagramError::missing_field("nodes"))?;
    let raw_edges = value
        .get("edges")
        .and_then(Value::as_array)
        .ok_or_else(|| DiagramError::missing_field("edges"))?;

    let mut nodes = Vec::with_capacity(raw_nodes.len());
    for (i, raw) in raw_nodes.iter().enumerate() {
        if !text_field(raw, "id")
            || !text_field(raw, "shapeType")
            || !field_present(raw, "position")
            || !field_present(raw, "data")
        {
            return Err(DiagramError::InvalidNode(i));
        }
        let node: DiagramNode =
            serde_json::from_value(raw.clone()).map_err(|_| DiagramError::InvalidNode(i))?;
        nodes.push(node);
    }

    let mut edges = Vec::with_capacity(raw_edges.len());
    for (i, raw) in raw_edges.iter().enumerate() {
        if !text_field(raw, "id") || !text_field(raw, "source") || !text_field(raw, "target") {
            return Err(DiagramError::InvalidEdge(i + 1));
        }
        let edge: DiagramEdge =
            serde_json::from_value(raw.clone()).map_err(|_| DiagramError::InvalidEdge(i + 1))?;
        edges.push(edge);
    }

    Ok(Diagram { nodes, edges })
}

pub fn export_file_name(millis: u64) -> String {
    format!("diagram-{millis}.json")
}

/// Writes the diagram to `dir` under a timestamped name
/// (`diagram-<unix-millis>.json`) and returns the full path.
pub fn write_diagram_file<P: AsRef<Path>>(
    diagram: &Diagram,
    dir: P,
) -> Result<PathBuf, DiagramError> {
    let text = serialize_diagram(diagram)?;
    let path = dir.as_ref().join(export_file_name(unix_millis()));
    fs::write(&path, text).map_err(|e| DiagramError::file_write(e.to_string()))?;
    Ok(path)
}

/// Reads and validates a diagram file. All-or-nothing: a failure leaves no
/// partial result to apply.
pub fn read_diagram_file<P: AsRef<Path>>(path: P) -> Result<Diagram, DiagramError> {
    let text = fs::read_to_string(path).map_err(|e| DiagramError::file_read(e.to_string()))?;
    deserialize_diagram(&text)
}

fn text_field(value: &Value, key: &str) -> bool {
    matches!(value.get(key), Some(Value::String(s)) if !s.is_empty())
}

fn field_present(value: &Value, key: &str) -> bool {
    value.get(key).is_some_and(|field| !field.is_null())
}
