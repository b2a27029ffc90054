mod determinism;
mod simple;

use crate::graph::{FlowEdge, FlowNode, VisualState};
use crate::icons::IconDescriptor;

use super::{Sequence, compute_layers};

/// Helper to create a FlowNode at an arbitrary position.
fn node(id: &str) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        x: 0.0,
        y: 0.0,
        label: id.to_string(),
        description: String::new(),
        icon: IconDescriptor::default(),
        active: false,
        visual: VisualState::Neutral,
    }
}

/// Helper to create a FlowEdge.
fn edge(source: &str, target: &str) -> FlowEdge {
    FlowEdge {
        source: source.to_string(),
        target: target.to_string(),
        animated: false,
        visual: VisualState::Neutral,
    }
}

/// Assert that a step holds exactly the given ids, ignoring order within the
/// step.
fn assert_step(sequence: &Sequence, index: usize, expected: &[&str]) {
    let step = sequence
        .step(index)
        .unwrap_or_else(|| panic!("sequence has no step {index}: {sequence:?}"));
    let mut got: Vec<&str> = step.iter().map(String::as_str).collect();
    let mut want: Vec<&str> = expected.to_vec();
    got.sort_unstable();
    want.sort_unstable();
    assert_eq!(got, want, "step {index} mismatch in {sequence:?}");
}

/// Assert that every node id appears in exactly one step.
fn assert_each_id_once(sequence: &Sequence, ids: &[&str]) {
    for id in ids {
        let occurrences: usize = sequence
            .steps
            .iter()
            .map(|step| step.iter().filter(|n| n == id).count())
            .sum();
        assert_eq!(occurrences, 1, "id {id} appears {occurrences} times");
    }
}
