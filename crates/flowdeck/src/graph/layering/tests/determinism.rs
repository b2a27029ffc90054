use super::*;

/// Run a layering scenario multiple times and assert identical output.
fn assert_idempotent(nodes: &[crate::graph::FlowNode], edges: &[crate::graph::FlowEdge]) {
    let reference = compute_layers(nodes, edges);
    for i in 1..50 {
        let sequence = compute_layers(nodes, edges);
        assert_eq!(
            reference, sequence,
            "non-identical sequence on iteration {i}"
        );
    }
}

#[test]
fn chain_idempotent() {
    let nodes = vec![node("A"), node("B"), node("C")];
    let edges = vec![edge("A", "B"), edge("B", "C")];
    assert_idempotent(&nodes, &edges);
}

#[test]
fn diamond_idempotent() {
    let nodes = vec![node("A"), node("B"), node("C"), node("D")];
    let edges = vec![
        edge("A", "B"),
        edge("A", "C"),
        edge("B", "D"),
        edge("C", "D"),
    ];
    assert_idempotent(&nodes, &edges);
}

#[test]
fn cycle_idempotent() {
    let nodes = vec![node("A"), node("B"), node("C")];
    let edges = vec![edge("A", "B"), edge("B", "C"), edge("C", "A")];
    assert_idempotent(&nodes, &edges);
}

#[test]
fn disconnected_components_idempotent() {
    let nodes = vec![node("A"), node("B"), node("X"), node("Y")];
    let edges = vec![edge("A", "B"), edge("X", "Y")];
    assert_idempotent(&nodes, &edges);
}

#[test]
fn wide_graph_idempotent() {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    for i in 0..20 {
        nodes.push(node(&format!("n{i}")));
        if i > 0 {
            edges.push(edge(&format!("n{}", i / 2), &format!("n{i}")));
        }
    }
    assert_idempotent(&nodes, &edges);
}

#[test]
fn input_unchanged_by_computation() {
    // compute_layers is read-only over its inputs.
    let nodes = vec![node("A"), node("B")];
    let edges = vec![edge("A", "B")];
    let nodes_before = nodes.clone();
    let edges_before = edges.clone();
    let _ = compute_layers(&nodes, &edges);
    assert_eq!(nodes, nodes_before);
    assert_eq!(edges, edges_before);
}
