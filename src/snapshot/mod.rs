// Recorded steps and runs for replayable visualization

use crate::algorithms::Algorithm;
use crate::errors::{VizError, VizResult};
use crate::structures::{ElementId, Item, StructureKind, Value};
use std::fmt;

/// One node of a tree snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNodeView {
    pub id: ElementId,
    pub value: Value,
    pub left: Option<ElementId>,
    pub right: Option<ElementId>,
}

/// Frozen state of a structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    /// Array, stack (bottom to top), queue (front to back), list (head to tail)
    Sequence {
        kind: StructureKind,
        items: Vec<Item>,
    },
    /// Binary search tree, nodes in pre-order
    Tree {
        root: Option<ElementId>,
        nodes: Vec<TreeNodeView>,
    },
    /// Undirected graph, nodes in insertion order
    Graph {
        nodes: Vec<Item>,
        edges: Vec<(ElementId, ElementId)>,
    },
}

impl Snapshot {
    pub fn kind(&self) -> StructureKind {
        match self {
            Snapshot::Sequence { kind, .. } => *kind,
            Snapshot::Tree { .. } => StructureKind::Tree,
            Snapshot::Graph { .. } => StructureKind::Graph,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Snapshot::Sequence { items, .. } => items.len(),
            Snapshot::Tree { nodes, .. } => nodes.len(),
            Snapshot::Graph { nodes, .. } => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether an element exists in this snapshot
    pub fn contains(&self, id: ElementId) -> bool {
        self.value_of(id).is_some()
    }

    /// Look up the value of an element
    pub fn value_of(&self, id: ElementId) -> Option<Value> {
        match self {
            Snapshot::Sequence { items, .. } | Snapshot::Graph { nodes: items, .. } => {
                items.iter().find(|item| item.id == id).map(|item| item.value)
            }
            Snapshot::Tree { nodes, .. } => {
                nodes.iter().find(|node| node.id == id).map(|node| node.value)
            }
        }
    }

    /// Values in display order (trees: in-order)
    pub fn values(&self) -> Vec<Value> {
        match self {
            Snapshot::Sequence { items, .. } | Snapshot::Graph { nodes: items, .. } => {
                items.iter().map(|item| item.value).collect()
            }
            Snapshot::Tree { root, nodes } => {
                let mut out = Vec::with_capacity(nodes.len());
                collect_in_order(*root, nodes, &mut out);
                out
            }
        }
    }

    /// Values of a list of ids, skipping unknown ones
    pub fn values_of(&self, ids: &[ElementId]) -> Vec<Value> {
        ids.iter().filter_map(|id| self.value_of(*id)).collect()
    }
}

fn collect_in_order(id: Option<ElementId>, nodes: &[TreeNodeView], out: &mut Vec<Value>) {
    let Some(node) = id.and_then(|id| nodes.iter().find(|n| n.id == id)) else {
        return;
    };
    collect_in_order(node.left, nodes, out);
    out.push(node.value);
    collect_in_order(node.right, nodes, out);
}

/// What a step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Start,
    Compare,
    Swap,
    /// Merge sort placing an element
    Write,
    Pivot,
    /// Merge sort dividing a range
    Split,
    Visit,
    /// Graph search reaching an unvisited neighbor
    Discover,
    Backtrack,
    Found,
    NotFound,
    Complete,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Start => "START",
            StepKind::Compare => "COMPARE",
            StepKind::Swap => "SWAP",
            StepKind::Write => "WRITE",
            StepKind::Pivot => "PIVOT",
            StepKind::Split => "SPLIT",
            StepKind::Visit => "VISIT",
            StepKind::Discover => "DISCOVER",
            StepKind::Backtrack => "BACKTRACK",
            StepKind::Found => "FOUND",
            StepKind::NotFound => "NOT FOUND",
            StepKind::Complete => "COMPLETE",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single recorded moment of an algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub snapshot: Snapshot,
    /// Active elements, in meaningful order (search paths read root first)
    pub highlighted: Vec<ElementId>,
    /// Secondary highlight
    pub marked: Vec<ElementId>,
    pub description: String,
    /// Code-like label of the operation performed
    pub annotation: String,
}

impl Step {
    pub fn new(
        kind: StepKind,
        snapshot: Snapshot,
        description: impl Into<String>,
        annotation: impl Into<String>,
    ) -> Self {
        Step {
            kind,
            snapshot,
            highlighted: Vec::new(),
            marked: Vec::new(),
            description: description.into(),
            annotation: annotation.into(),
        }
    }

    pub fn highlight(mut self, ids: impl IntoIterator<Item = ElementId>) -> Self {
        self.highlighted = ids.into_iter().collect();
        self
    }

    pub fn mark(mut self, ids: impl IntoIterator<Item = ElementId>) -> Self {
        self.marked = ids.into_iter().collect();
        self
    }

    /// Every highlighted and marked id exists in this step's snapshot
    pub fn is_self_consistent(&self) -> bool {
        self.highlighted
            .iter()
            .chain(self.marked.iter())
            .all(|id| self.snapshot.contains(*id))
    }
}

/// Result of a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found,
    NotFound,
}

/// Immutable, ordered steps of one algorithm invocation
#[derive(Debug, Clone)]
pub struct Run {
    algorithm: Algorithm,
    steps: Vec<Step>,
}

impl Run {
    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Number of steps of the given kind
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// One line per step: `[i/n] KIND description | annotation`
    pub fn transcript(&self) -> impl Iterator<Item = String> + '_ {
        let total = self.steps.len();
        self.steps.iter().enumerate().map(move |(i, step)| {
            format!(
                "[{}/{}] {} {} | {}",
                i + 1,
                total,
                step.kind,
                step.description,
                step.annotation
            )
        })
    }

    /// Found/not-found verdict of a search run, `None` for sorts and traversals
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.steps.iter().rev().find_map(|s| match s.kind {
            StepKind::Found => Some(SearchOutcome::Found),
            StepKind::NotFound => Some(SearchOutcome::NotFound),
            _ => None,
        })
    }
}

/// Accumulates steps during generation, enforcing the step limit
#[derive(Debug)]
pub struct RunRecorder {
    algorithm: Algorithm,
    steps: Vec<Step>,
    max_steps: usize,
}

impl RunRecorder {
    pub fn new(algorithm: Algorithm, max_steps: usize) -> Self {
        RunRecorder {
            algorithm,
            steps: Vec::new(),
            max_steps,
        }
    }

    /// Append a step to the run
    pub fn record(&mut self, step: Step) -> VizResult<()> {
        if self.steps.len() >= self.max_steps {
            return Err(VizError::StepLimitExceeded {
                limit: self.max_steps,
            });
        }
        debug_assert!(
            step.is_self_consistent(),
            "step references elements outside its snapshot: {:?}",
            step
        );
        self.steps.push(step);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn finish(self) -> Run {
        Run {
            algorithm: self.algorithm,
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::IdAllocator;

    fn sequence(values: &[Value]) -> Snapshot {
        let mut ids = IdAllocator::default();
        Snapshot::Sequence {
            kind: StructureKind::Array,
            items: values.iter().map(|v| ids.item(*v)).collect(),
        }
    }

    #[test]
    fn test_recorder_enforces_limit() {
        let mut rec = RunRecorder::new(Algorithm::BubbleSort, 2);
        let snap = sequence(&[1, 2]);
        rec.record(Step::new(StepKind::Start, snap.clone(), "a", "a"))
            .unwrap();
        rec.record(Step::new(StepKind::Compare, snap.clone(), "b", "b"))
            .unwrap();
        let err = rec
            .record(Step::new(StepKind::Complete, snap, "c", "c"))
            .unwrap_err();
        assert_eq!(err, VizError::StepLimitExceeded { limit: 2 });
    }

    #[test]
    fn test_transcript_format() {
        let mut rec = RunRecorder::new(Algorithm::BubbleSort, 10);
        let snap = sequence(&[1]);
        rec.record(Step::new(StepKind::Start, snap.clone(), "Start", "bubble_sort(arr)"))
            .unwrap();
        rec.record(Step::new(StepKind::NotFound, snap, "Gone", "return -1"))
            .unwrap();
        let lines: Vec<String> = rec.finish().transcript().collect();
        assert_eq!(lines[0], "[1/2] START Start | bubble_sort(arr)");
        assert_eq!(lines[1], "[2/2] NOT FOUND Gone | return -1");
    }

    #[test]
    fn test_self_consistency() {
        let snap = sequence(&[4, 6]);
        let ok = Step::new(StepKind::Compare, snap.clone(), "", "")
            .highlight([ElementId(0), ElementId(1)]);
        assert!(ok.is_self_consistent());
        let bad = Step::new(StepKind::Compare, snap, "", "").mark([ElementId(7)]);
        assert!(!bad.is_self_consistent());
    }

    #[test]
    fn test_tree_values_in_order() {
        let snap = Snapshot::Tree {
            root: Some(ElementId(0)),
            nodes: vec![
                TreeNodeView {
                    id: ElementId(0),
                    value: 5,
                    left: Some(ElementId(1)),
                    right: Some(ElementId(2)),
                },
                TreeNodeView {
                    id: ElementId(1),
                    value: 3,
                    left: None,
                    right: None,
                },
                TreeNodeView {
                    id: ElementId(2),
                    value: 8,
                    left: None,
                    right: None,
                },
            ],
        };
        assert_eq!(snap.values(), vec![3, 5, 8]);
        assert_eq!(snap.value_of(ElementId(2)), Some(8));
    }
}
