pub mod layering;
pub mod playback;

use crate::icons::IconDescriptor;

/// Node identifier. Generated as `node_1`, `node_2`, ... by [`FlowGraph::add_node`].
pub type NodeId = String;

/// Visual presentation of a node or edge during and outside playback.
///
/// Pre-start reset dims everything, playback ticks activate reached elements,
/// and stop restores everything to neutral full opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    /// Faded out while playback runs, waiting to be reached.
    Dimmed,
    /// Reached by the playback cursor; full opacity plus accent highlight.
    Active,
    /// Normal editing appearance; full opacity, no highlight.
    #[default]
    Neutral,
}

/// A node on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: NodeId,
    pub x: f32,
    pub y: f32,
    pub label: String,
    pub description: String,
    pub icon: IconDescriptor,
    pub active: bool,
    pub visual: VisualState,
}

/// A directed edge between two nodes, identified by their ids.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub animated: bool,
    pub visual: VisualState,
}

/// The mutable diagram document: nodes plus directed edges.
///
/// The layering sequencer reads an immutable snapshot of this; playback
/// mutates only the `active`/`animated` flags and the visual state.
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    next_id: u64,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a graph from loaded parts, continuing id generation past the
    /// highest `node_N` id present.
    pub fn from_parts(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        let next_id = nodes
            .iter()
            .filter_map(|n| n.id.strip_prefix("node_"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            nodes,
            edges,
            next_id,
        }
    }

    /// Create a node at the given canvas position and return its id.
    pub fn add_node(
        &mut self,
        x: f32,
        y: f32,
        label: impl Into<String>,
        icon: IconDescriptor,
    ) -> NodeId {
        self.next_id += 1;
        let id = format!("node_{}", self.next_id);
        let label = label.into();
        self.nodes.push(FlowNode {
            id: id.clone(),
            x,
            y,
            description: format!("Description for {label}"),
            label,
            icon,
            active: false,
            visual: VisualState::Neutral,
        });
        id
    }

    /// Connect `source` to `target`. Duplicate pairs are ignored so a repeat
    /// connect gesture cannot stack edges.
    pub fn connect(&mut self, source: &str, target: &str) -> bool {
        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return false;
        }
        self.edges.push(FlowEdge {
            source: source.to_string(),
            target: target.to_string(),
            animated: false,
            visual: VisualState::Neutral,
        });
        true
    }

    /// Remove a node and every edge attached to it.
    pub fn remove_node(&mut self, id: &str) {
        self.nodes.retain(|n| n.id != id);
        self.edges.retain(|e| e.source != id && e.target != id);
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut FlowNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Pre-playback reset: everything inactive and dimmed.
    pub fn reset_dimmed(&mut self) {
        for node in &mut self.nodes {
            node.active = false;
            node.visual = VisualState::Dimmed;
        }
        for edge in &mut self.edges {
            edge.animated = false;
            edge.visual = VisualState::Dimmed;
        }
    }

    /// Post-playback reset: everything inactive at full opacity.
    pub fn reset_neutral(&mut self) {
        for node in &mut self.nodes {
            node.active = false;
            node.visual = VisualState::Neutral;
        }
        for edge in &mut self.edges {
            edge.animated = false;
            edge.visual = VisualState::Neutral;
        }
    }

    /// Activate one playback step: the step's nodes, and every edge whose
    /// target lies in the step.
    pub fn apply_step(&mut self, step: &[NodeId]) {
        for node in &mut self.nodes {
            if step.contains(&node.id) {
                node.active = true;
                node.visual = VisualState::Active;
            }
        }
        for edge in &mut self.edges {
            if step.contains(&edge.target) {
                edge.animated = true;
                edge.visual = VisualState::Active;
            }
        }
    }
}
