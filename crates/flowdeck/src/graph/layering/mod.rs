#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet, VecDeque};

use super::{FlowEdge, FlowNode, NodeId};

/// One layer of node ids reached at the same breadth-first distance from the
/// source set. Membership is a set; the stored order follows traversal order
/// for determinism.
pub type Step = Vec<NodeId>;

/// The ordered list of steps driving playback, first to last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    pub steps: Vec<Step>,
}

impl Sequence {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
}

/// Compute the breadth-first layering of the diagram.
///
/// Sources are the nodes with no incoming edge. A graph with nodes but no
/// such entry point (a cycle) falls back to seeding from the first node in
/// input order; this is a deliberate simplification, not cycle breaking.
///
/// Traversal runs in rounds, one [`Step`] per round. The visited check
/// happens at dequeue time: an id can sit in the frontier more than once but
/// contributes to exactly one step, and its outgoing edges are walked the
/// first time it is dequeued. Nodes the traversal never reaches are appended
/// as one final catch-all step, so every node id appears in exactly one step.
///
/// Pure function of its inputs; always returns, possibly empty.
pub fn compute_layers(nodes: &[FlowNode], edges: &[FlowEdge]) -> Sequence {
    if nodes.is_empty() {
        return Sequence::default();
    }

    let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let with_incoming: HashSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();
    let mut sources: Vec<&str> = nodes
        .iter()
        .map(|n| n.id.as_str())
        .filter(|id| !with_incoming.contains(id))
        .collect();
    if sources.is_empty() {
        sources.push(nodes[0].id.as_str());
    }

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut steps: Vec<Step> = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut frontier: VecDeque<&str> = sources.into_iter().collect();

    while !frontier.is_empty() {
        let round = frontier.len();
        let mut step: Step = Vec::new();

        for _ in 0..round {
            let id = frontier.pop_front().expect("frontier length checked");
            // Edges may briefly dangle while a node is being deleted; ids
            // without a node are skipped entirely.
            if !known.contains(id) || !visited.insert(id) {
                continue;
            }
            step.push(id.to_string());
            if let Some(targets) = adjacency.get(id) {
                frontier.extend(targets.iter().copied());
            }
        }

        if !step.is_empty() {
            steps.push(step);
        }
    }

    let unreached: Step = nodes
        .iter()
        .map(|n| n.id.as_str())
        .filter(|id| !visited.contains(id))
        .map(str::to_string)
        .collect();
    if !unreached.is_empty() {
        steps.push(unreached);
    }

    Sequence { steps }
}
