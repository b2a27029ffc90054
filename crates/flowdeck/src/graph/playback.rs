use std::time::{Duration, Instant};

use super::FlowGraph;
use super::layering::Sequence;

/// Bounds for the playback speed slider, in milliseconds per step.
pub const MIN_SPEED_MS: u64 = 200;
pub const MAX_SPEED_MS: u64 = 2000;
pub const DEFAULT_SPEED_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Running { cursor: usize, due: Instant },
}

/// Discrete-time playback over a layering [`Sequence`].
///
/// Cooperative and single-threaded: the owner calls [`Playback::poll`] every
/// frame with the current instant, and a tick fires when its due time has
/// passed. Stopping drops the Running state, so a pending tick can never
/// mutate the graph afterwards.
#[derive(Debug)]
pub struct Playback {
    sequence: Sequence,
    interval: Duration,
    state: State,
}

impl Playback {
    pub fn new(interval: Duration) -> Self {
        Self {
            sequence: Sequence::default(),
            interval,
            state: State::Idle,
        }
    }

    /// Change the per-step interval. Applies from the next scheduled tick.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    /// Zero-based index of the last applied step, while running.
    pub fn current_step(&self) -> Option<usize> {
        match self.state {
            State::Running { cursor, .. } if cursor > 0 => Some(cursor - 1),
            _ => None,
        }
    }

    pub fn total_steps(&self) -> usize {
        self.sequence.len()
    }

    /// When the next tick is due, for frame-loop repaint scheduling.
    pub fn next_due(&self) -> Option<Instant> {
        match self.state {
            State::Running { due, .. } => Some(due),
            State::Idle => None,
        }
    }

    /// Begin playback over `sequence`, a snapshot of the graph taken by the
    /// caller. Any run already in progress is stopped first, so at most one
    /// run is ever outstanding. The cursor resets to 0, the whole graph is
    /// dimmed, and the first step is due immediately.
    pub fn start(&mut self, graph: &mut FlowGraph, sequence: Sequence, now: Instant) {
        if self.is_running() {
            self.stop(graph);
        }
        self.sequence = sequence;
        graph.reset_dimmed();
        self.state = State::Running { cursor: 0, due: now };
    }

    /// Stop playback and restore every node and edge to neutral full
    /// opacity. Idempotent; a no-op when already idle apart from the reset.
    pub fn stop(&mut self, graph: &mut FlowGraph) {
        self.state = State::Idle;
        graph.reset_neutral();
    }

    /// Advance playback if a tick is due. Returns true when the graph was
    /// mutated, so the caller knows to repaint.
    ///
    /// Each tick activates the current step's nodes and the edges targeting
    /// them, then schedules the next tick one interval later. The tick after
    /// the final step ends the run through [`Playback::stop`].
    pub fn poll(&mut self, graph: &mut FlowGraph, now: Instant) -> bool {
        let State::Running { cursor, due } = self.state else {
            return false;
        };
        if now < due {
            return false;
        }

        if cursor >= self.sequence.len() {
            self.stop(graph);
            return true;
        }

        if let Some(step) = self.sequence.step(cursor) {
            graph.apply_step(step);
        }
        self.state = State::Running {
            cursor: cursor + 1,
            due: now + self.interval,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::layering::compute_layers;
    use crate::graph::{FlowGraph, VisualState};
    use crate::icons::IconDescriptor;

    const INTERVAL: Duration = Duration::from_millis(500);

    /// A -> B -> C chain with its computed sequence.
    fn chain() -> (FlowGraph, Sequence) {
        let mut graph = FlowGraph::new();
        let a = graph.add_node(0.0, 0.0, "A", IconDescriptor::default());
        let b = graph.add_node(0.0, 0.0, "B", IconDescriptor::default());
        let c = graph.add_node(0.0, 0.0, "C", IconDescriptor::default());
        graph.connect(&a, &b);
        graph.connect(&b, &c);
        let sequence = compute_layers(&graph.nodes, &graph.edges);
        (graph, sequence)
    }

    fn all_visual(graph: &FlowGraph, visual: VisualState) -> bool {
        graph.nodes.iter().all(|n| n.visual == visual)
            && graph.edges.iter().all(|e| e.visual == visual)
    }

    #[test]
    fn start_dims_everything_and_fires_first_step_immediately() {
        let (mut graph, sequence) = chain();
        let mut playback = Playback::new(INTERVAL);
        let t0 = Instant::now();

        playback.start(&mut graph, sequence, t0);
        assert!(all_visual(&graph, VisualState::Dimmed));

        assert!(playback.poll(&mut graph, t0));
        let a = graph.node("node_1").unwrap();
        assert!(a.active);
        assert_eq!(a.visual, VisualState::Active);
        assert!(!graph.node("node_2").unwrap().active);
        assert_eq!(playback.current_step(), Some(0));
    }

    #[test]
    fn ticks_activate_layers_and_target_edges_in_order() {
        let (mut graph, sequence) = chain();
        let mut playback = Playback::new(INTERVAL);
        let t0 = Instant::now();
        playback.start(&mut graph, sequence, t0);

        playback.poll(&mut graph, t0);
        playback.poll(&mut graph, t0 + INTERVAL);
        // Step 2 activated B and the edge into it.
        assert!(graph.node("node_2").unwrap().active);
        let into_b = &graph.edges[0];
        assert!(into_b.animated);
        assert_eq!(into_b.visual, VisualState::Active);
        // Edge into C not yet.
        assert!(!graph.edges[1].animated);

        playback.poll(&mut graph, t0 + 2 * INTERVAL);
        assert!(graph.node("node_3").unwrap().active);
        assert!(playback.is_running());

        // One interval after the final step the run completes naturally.
        assert!(playback.poll(&mut graph, t0 + 3 * INTERVAL));
        assert!(!playback.is_running());
        assert!(all_visual(&graph, VisualState::Neutral));
    }

    #[test]
    fn poll_before_due_does_nothing() {
        let (mut graph, sequence) = chain();
        let mut playback = Playback::new(INTERVAL);
        let t0 = Instant::now();
        playback.start(&mut graph, sequence, t0);
        playback.poll(&mut graph, t0);

        assert!(!playback.poll(&mut graph, t0 + INTERVAL / 2));
        assert_eq!(playback.current_step(), Some(0));
    }

    #[test]
    fn stop_cancels_pending_tick() {
        // Start then immediately stop: waiting past a full interval must not
        // change any active flag.
        let (mut graph, sequence) = chain();
        let mut playback = Playback::new(INTERVAL);
        let t0 = Instant::now();
        playback.start(&mut graph, sequence, t0);
        playback.stop(&mut graph);

        assert!(all_visual(&graph, VisualState::Neutral));
        let before = graph.clone();
        assert!(!playback.poll(&mut graph, t0 + 2 * INTERVAL));
        assert_eq!(graph.nodes, before.nodes);
        assert_eq!(graph.edges, before.edges);
        assert!(graph.nodes.iter().all(|n| !n.active));
    }

    #[test]
    fn restart_resets_cursor() {
        let (mut graph, sequence) = chain();
        let mut playback = Playback::new(INTERVAL);
        let t0 = Instant::now();
        playback.start(&mut graph, sequence.clone(), t0);
        playback.poll(&mut graph, t0);
        playback.poll(&mut graph, t0 + INTERVAL);
        assert_eq!(playback.current_step(), Some(1));

        // Starting while running stops the old run first and restarts at 0.
        let t1 = t0 + INTERVAL + INTERVAL / 2;
        playback.start(&mut graph, sequence, t1);
        assert!(all_visual(&graph, VisualState::Dimmed));
        playback.poll(&mut graph, t1);
        assert_eq!(playback.current_step(), Some(0));
        assert!(graph.node("node_1").unwrap().active);
        assert!(!graph.node("node_2").unwrap().active);
    }

    #[test]
    fn empty_sequence_completes_on_first_tick() {
        let mut graph = FlowGraph::new();
        let mut playback = Playback::new(INTERVAL);
        let t0 = Instant::now();
        playback.start(&mut graph, Sequence::default(), t0);
        assert!(playback.poll(&mut graph, t0));
        assert!(!playback.is_running());
    }

    #[test]
    fn interval_change_applies_to_next_tick() {
        let (mut graph, sequence) = chain();
        let mut playback = Playback::new(INTERVAL);
        let t0 = Instant::now();
        playback.start(&mut graph, sequence, t0);
        playback.poll(&mut graph, t0);

        playback.set_interval(Duration::from_millis(200));
        // The already-scheduled tick keeps its old due time.
        assert!(!playback.poll(&mut graph, t0 + Duration::from_millis(200)));
        assert!(playback.poll(&mut graph, t0 + INTERVAL));
        // From here on the shorter interval applies.
        assert!(playback.poll(&mut graph, t0 + INTERVAL + Duration::from_millis(200)));
    }
}
