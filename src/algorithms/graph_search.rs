//! Path search between two graph nodes
//!
//! Both searches explore neighbors in edge insertion order. On success the
//! `Found` step highlights the path from `start` to `end`; breadth-first
//! reconstructs it from parent links, depth-first reads it off the recursion
//! stack.

use super::Algorithm;
use crate::errors::VizResult;
use crate::snapshot::{Run, RunRecorder, Snapshot, Step, StepKind};
use crate::structures::{ElementId, Graph, Value};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

struct GraphTracer<'g> {
    graph: &'g Graph,
    snapshot: Snapshot,
    rec: RunRecorder,
    visited: FxHashSet<ElementId>,
    order: Vec<ElementId>,
}

impl<'g> GraphTracer<'g> {
    fn start(
        graph: &'g Graph,
        algorithm: Algorithm,
        start: Value,
        end: Value,
        max_steps: usize,
    ) -> VizResult<(Self, ElementId, ElementId)> {
        graph.require_non_empty()?;
        let from = graph.require(start)?;
        let to = graph.require(end)?;
        let snapshot = graph.snapshot();
        let mut rec = RunRecorder::new(algorithm, max_steps);
        rec.record(
            Step::new(
                StepKind::Start,
                snapshot.clone(),
                format!("Start {}", algorithm),
                "visited = {start}",
            )
            .highlight([from])
            .mark([to]),
        )?;
        let tracer = Self {
            graph,
            snapshot,
            rec,
            visited: FxHashSet::default(),
            order: Vec::new(),
        };
        Ok((tracer, from, to))
    }

    fn label(&self, id: ElementId) -> Value {
        self.graph.label_of(id).unwrap_or_default()
    }

    fn step(
        &mut self,
        kind: StepKind,
        description: String,
        annotation: &str,
        highlighted: Vec<ElementId>,
    ) -> VizResult<()> {
        let step = Step::new(kind, self.snapshot.clone(), description, annotation)
            .highlight(highlighted)
            .mark(self.order.iter().copied());
        self.rec.record(step)
    }

    fn found(mut self, path: Vec<ElementId>, end: Value) -> VizResult<Run> {
        let labels: Vec<Value> = path.iter().map(|id| self.label(*id)).collect();
        let route = labels
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        self.rec.record(
            Step::new(
                StepKind::Found,
                self.snapshot.clone(),
                format!("Reached {} via {}", end, route),
                "return path",
            )
            .highlight(path.clone()),
        )?;
        self.rec.record(
            Step::new(
                StepKind::Complete,
                self.snapshot.clone(),
                format!("Search finished: path of {} edges", path.len() - 1),
                "return path",
            )
            .highlight(path),
        )?;
        Ok(self.rec.finish())
    }

    fn not_found(mut self, start: Value, end: Value) -> VizResult<Run> {
        let order = self.order.clone();
        self.rec.record(
            Step::new(
                StepKind::NotFound,
                self.snapshot.clone(),
                format!("{} is not reachable from {}", end, start),
                "return null",
            )
            .mark(order.iter().copied()),
        )?;
        self.rec.record(
            Step::new(
                StepKind::Complete,
                self.snapshot.clone(),
                format!("Search finished: no path from {} to {}", start, end),
                "return null",
            )
            .mark(order),
        )?;
        Ok(self.rec.finish())
    }
}

pub fn breadth_first(graph: &Graph, start: Value, end: Value, max_steps: usize) -> VizResult<Run> {
    let algorithm = Algorithm::BreadthFirst { start, end };
    let (mut t, from, to) = GraphTracer::start(graph, algorithm, start, end, max_steps)?;

    let mut parent: FxHashMap<ElementId, ElementId> = FxHashMap::default();
    let mut queue = VecDeque::from([from]);
    t.visited.insert(from);

    while let Some(current) = queue.pop_front() {
        t.order.push(current);
        t.step(
            StepKind::Visit,
            format!("Dequeue {}", t.label(current)),
            "node = queue.popleft()",
            vec![current],
        )?;
        if current == to {
            let mut path = vec![current];
            let mut cursor = current;
            while let Some(&prev) = parent.get(&cursor) {
                path.push(prev);
                cursor = prev;
            }
            path.reverse();
            return t.found(path, end);
        }
        for &next in graph.neighbors(current) {
            if !t.visited.insert(next) {
                continue;
            }
            parent.insert(next, current);
            queue.push_back(next);
            t.step(
                StepKind::Discover,
                format!("Discover {} from {}", t.label(next), t.label(current)),
                "queue.append(neighbor)",
                vec![current, next],
            )?;
        }
    }

    t.not_found(start, end)
}

pub fn depth_first(graph: &Graph, start: Value, end: Value, max_steps: usize) -> VizResult<Run> {
    let algorithm = Algorithm::DepthFirst { start, end };
    let (mut t, from, to) = GraphTracer::start(graph, algorithm, start, end, max_steps)?;

    let mut stack = Vec::new();
    if dfs(&mut t, from, to, &mut stack)? {
        return t.found(stack, end);
    }
    t.not_found(start, end)
}

/// Returns true once `target` is reached; `stack` then holds the path
fn dfs(
    t: &mut GraphTracer<'_>,
    node: ElementId,
    target: ElementId,
    stack: &mut Vec<ElementId>,
) -> VizResult<bool> {
    t.visited.insert(node);
    t.order.push(node);
    stack.push(node);
    t.step(
        StepKind::Visit,
        format!("Visit {}", t.label(node)),
        "visited.add(node)",
        stack.clone(),
    )?;
    if node == target {
        return Ok(true);
    }

    let graph = t.graph;
    for &next in graph.neighbors(node) {
        if t.visited.contains(&next) {
            continue;
        }
        t.step(
            StepKind::Discover,
            format!("Follow edge {} - {}", t.label(node), t.label(next)),
            "dfs(neighbor)",
            vec![node, next],
        )?;
        if dfs(t, next, target, stack)? {
            return Ok(true);
        }
        t.step(
            StepKind::Backtrack,
            format!("Back at {} after exhausting {}", t.label(node), t.label(next)),
            "return",
            stack.clone(),
        )?;
    }

    stack.pop();
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VizError;
    use crate::snapshot::SearchOutcome;

    fn path_labels(run: &Run) -> Vec<Value> {
        let found = run
            .steps()
            .iter()
            .find(|s| s.kind == StepKind::Found)
            .expect("found step");
        found.snapshot.values_of(&found.highlighted)
    }

    #[test]
    fn test_bfs_sample_path() {
        let graph = Graph::sample();
        let run = breadth_first(&graph, 1, 3, 1000).unwrap();
        assert_eq!(path_labels(&run), vec![1, 2, 3]);
        assert_eq!(run.outcome(), Some(SearchOutcome::Found));
        assert_eq!(run.last().unwrap().kind, StepKind::Complete);
    }

    #[test]
    fn test_bfs_finds_shortest_path() {
        let graph = Graph::sample();
        let run = breadth_first(&graph, 4, 3, 1000).unwrap();
        assert_eq!(path_labels(&run).len(), 3);
    }

    #[test]
    fn test_dfs_sample_path() {
        let graph = Graph::sample();
        let run = depth_first(&graph, 1, 5, 1000).unwrap();
        assert_eq!(path_labels(&run), vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_dfs_backtracks() {
        let mut graph = Graph::new();
        for label in 1..=4 {
            graph.add_node(label).unwrap();
        }
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(3, 4).unwrap();
        let run = depth_first(&graph, 1, 4, 1000).unwrap();
        assert_eq!(run.count(StepKind::Backtrack), 1);
        assert_eq!(path_labels(&run), vec![1, 3, 4]);
    }

    #[test]
    fn test_unreachable() {
        let mut graph = Graph::sample();
        graph.add_node(9).unwrap();
        for run in [
            breadth_first(&graph, 1, 9, 1000).unwrap(),
            depth_first(&graph, 1, 9, 1000).unwrap(),
        ] {
            assert_eq!(run.outcome(), Some(SearchOutcome::NotFound));
            assert_eq!(run.last().unwrap().marked.len(), 5);
        }
    }

    #[test]
    fn test_same_start_and_end() {
        let graph = Graph::sample();
        let run = breadth_first(&graph, 2, 2, 1000).unwrap();
        assert_eq!(path_labels(&run), vec![2]);
    }

    #[test]
    fn test_missing_nodes() {
        let graph = Graph::sample();
        assert_eq!(
            breadth_first(&graph, 1, 42, 100).unwrap_err(),
            VizError::NodeNotFound { label: 42 }
        );
        assert!(matches!(
            depth_first(&Graph::new(), 1, 2, 100),
            Err(VizError::EmptyStructure { .. })
        ));
    }
}
