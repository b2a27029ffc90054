//! Saved-diagram JSON format and export file naming.
//!
//! The wire shape mirrors the established flow-diagram interchange form:
//! `{ nodes: [{id, position, data}], edges: [{source, target}], viewport }`,
//! so documents written by the original editor load unchanged.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::graph::{FlowEdge, FlowGraph, FlowNode, VisualState};
use crate::icons::IconDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeData {
    label: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: IconDescriptor,
    #[serde(default)]
    active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeRecord {
    id: String,
    position: Position,
    data: NodeData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    #[serde(default)]
    animated: bool,
}

/// The full serialized document: nodes, edges, and the viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramFile {
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
    #[serde(default)]
    viewport: Viewport,
}

impl DiagramFile {
    pub fn from_graph(graph: &FlowGraph, viewport: Viewport) -> Self {
        Self {
            nodes: graph
                .nodes
                .iter()
                .map(|n| NodeRecord {
                    id: n.id.clone(),
                    position: Position { x: n.x, y: n.y },
                    data: NodeData {
                        label: n.label.clone(),
                        description: n.description.clone(),
                        icon: n.icon.clone(),
                        active: n.active,
                    },
                })
                .collect(),
            edges: graph
                .edges
                .iter()
                .map(|e| EdgeRecord {
                    source: e.source.clone(),
                    target: e.target.clone(),
                    animated: e.animated,
                })
                .collect(),
            viewport,
        }
    }

    pub fn into_graph(self) -> (FlowGraph, Viewport) {
        let nodes = self
            .nodes
            .into_iter()
            .map(|n| FlowNode {
                id: n.id,
                x: n.position.x,
                y: n.position.y,
                label: n.data.label,
                description: n.data.description,
                icon: n.data.icon,
                active: n.data.active,
                visual: VisualState::Neutral,
            })
            .collect();
        let edges = self
            .edges
            .into_iter()
            .map(|e| FlowEdge {
                source: e.source,
                target: e.target,
                animated: e.animated,
                visual: VisualState::Neutral,
            })
            .collect();
        (FlowGraph::from_parts(nodes, edges), self.viewport)
    }
}

/// Write the document as pretty-printed JSON.
pub fn save(path: &Path, graph: &FlowGraph, viewport: Viewport) -> Result<()> {
    let file = DiagramFile::from_graph(graph, viewport);
    let json = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Load a saved diagram.
pub fn load(path: &Path) -> Result<(FlowGraph, Viewport)> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file: DiagramFile = serde_json::from_str(&json)
        .with_context(|| format!("Not a flow diagram file: {}", path.display()))?;
    Ok(file.into_graph())
}

/// Export file name `flow-diagram-<ISO-8601 UTC>.<ext>`, matching the
/// original editor's download naming.
pub fn export_file_name(now: OffsetDateTime, extension: &str) -> String {
    let stamp = now
        .format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string());
    format!("flow-diagram-{stamp}.{extension}")
}

/// Export path in `dir` for the current moment.
pub fn export_path(dir: &Path, extension: &str) -> PathBuf {
    dir.join(export_file_name(OffsetDateTime::now_utc(), extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_graph() -> FlowGraph {
        let mut graph = FlowGraph::new();
        let a = graph.add_node(10.0, 20.0, "API Gateway", IconDescriptor::default());
        let b = graph.add_node(30.0, 40.0, "Server", IconDescriptor::Glyph {
            name: "Server".to_string(),
        });
        graph.connect(&a, &b);
        graph
    }

    #[test]
    fn graph_round_trips_through_file() {
        let graph = sample_graph();
        let viewport = Viewport {
            x: 5.0,
            y: -3.0,
            zoom: 1.5,
        };
        let file = DiagramFile::from_graph(&graph, viewport);
        let json = serde_json::to_string(&file).unwrap();
        let parsed: DiagramFile = serde_json::from_str(&json).unwrap();
        let (loaded, loaded_viewport) = parsed.into_graph();

        assert_eq!(loaded.nodes, graph.nodes);
        assert_eq!(loaded.edges, graph.edges);
        assert_eq!(loaded_viewport, viewport);
    }

    #[test]
    fn id_generation_continues_after_load() {
        let graph = sample_graph();
        let file = DiagramFile::from_graph(&graph, Viewport::default());
        let (mut loaded, _) = file.into_graph();
        let id = loaded.add_node(0.0, 0.0, "New", IconDescriptor::default());
        assert_eq!(id, "node_3");
    }

    #[test]
    fn original_format_document_loads() {
        // A document written by the original editor, including an iconify
        // descriptor and extra fields serde must tolerate is kept minimal.
        let json = r#"{
            "nodes": [
                {
                    "id": "node_1",
                    "position": {"x": 100.0, "y": 50.0},
                    "data": {
                        "label": "docker",
                        "icon": {"type": "iconify", "name": "docker", "collection": "simple-icons"}
                    }
                }
            ],
            "edges": [],
            "viewport": {"x": 0.0, "y": 0.0, "zoom": 2.0}
        }"#;
        let file: DiagramFile = serde_json::from_str(json).unwrap();
        let (graph, viewport) = file.into_graph();
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(
            graph.nodes[0].icon,
            IconDescriptor::Collection {
                collection: "simple-icons".to_string(),
                name: "docker".to_string(),
            }
        );
        assert_eq!(viewport.zoom, 2.0);
    }

    #[test]
    fn export_name_uses_iso_8601() {
        let now = datetime!(2026-08-06 12:30:45 UTC);
        assert_eq!(
            export_file_name(now, "json"),
            "flow-diagram-2026-08-06T12:30:45Z.json"
        );
        assert_eq!(
            export_file_name(now, "png"),
            "flow-diagram-2026-08-06T12:30:45Z.png"
        );
    }
}
