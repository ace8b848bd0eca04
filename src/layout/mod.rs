//! Abstract node/edge layout of a snapshot
//!
//! [`project`] turns a [`Step`] into a [`Scene`]: positioned nodes, the edges
//! between them, and the emphasis each element carries. Coordinates are in
//! abstract units with `y` growing downward; the renderer scales them.
//!
//! - Array and queue: one row, left to right
//! - Stack: one column, top of the stack on row 0
//! - Linked list: one row with `next` edges between neighbours
//! - Tree: `x` is the in-order rank, `y` the depth
//! - Graph: nodes evenly spaced on a circle in insertion order

use crate::snapshot::{Snapshot, Step, TreeNodeView};
use crate::structures::{ElementId, StructureKind, Value};
use rustc_hash::FxHashMap;
use std::f64::consts::PI;

/// How an element should stand out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Marked,
    Highlighted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub id: ElementId,
    pub value: Value,
    pub x: f64,
    pub y: f64,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEdge {
    pub from: ElementId,
    pub to: ElementId,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub kind: StructureKind,
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<PlacedEdge>,
    /// Inclusive `[min, max]` extent of node positions along x
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl Scene {
    pub fn node(&self, id: ElementId) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Endpoints of an edge, if both nodes are placed
    pub fn segment(&self, edge: &PlacedEdge) -> Option<((f64, f64), (f64, f64))> {
        let a = self.node(edge.from)?;
        let b = self.node(edge.to)?;
        Some(((a.x, a.y), (b.x, b.y)))
    }
}

/// Lay out a step's snapshot with its highlights
pub fn project(step: &Step) -> Scene {
    project_snapshot(&step.snapshot, &step.highlighted, &step.marked)
}

/// Lay out any snapshot; ids not present in it are ignored
pub fn project_snapshot(
    snapshot: &Snapshot,
    highlighted: &[ElementId],
    marked: &[ElementId],
) -> Scene {
    let emphasis = |id: ElementId| {
        if highlighted.contains(&id) {
            Emphasis::Highlighted
        } else if marked.contains(&id) {
            Emphasis::Marked
        } else {
            Emphasis::Normal
        }
    };

    let (nodes, edges) = match snapshot {
        Snapshot::Sequence { kind, items } => {
            let len = items.len();
            let nodes: Vec<PlacedNode> = items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let (x, y) = match kind {
                        StructureKind::Stack => (0.0, (len - 1 - i) as f64),
                        _ => (i as f64, 0.0),
                    };
                    PlacedNode {
                        id: item.id,
                        value: item.value,
                        x,
                        y,
                        emphasis: emphasis(item.id),
                    }
                })
                .collect();
            let edges = if *kind == StructureKind::LinkedList {
                items
                    .windows(2)
                    .map(|pair| (pair[0].id, pair[1].id))
                    .collect()
            } else {
                Vec::new()
            };
            (nodes, edges)
        }
        Snapshot::Tree { root, nodes } => {
            let mut placer = TreePlacer {
                nodes: nodes.iter().map(|n| (n.id, n)).collect(),
                rank: 0,
                placed: Vec::with_capacity(nodes.len()),
                edges: Vec::new(),
            };
            placer.place(*root, 0);
            let placed = placer
                .placed
                .into_iter()
                .map(|(view, x, y)| PlacedNode {
                    id: view.id,
                    value: view.value,
                    x,
                    y,
                    emphasis: emphasis(view.id),
                })
                .collect();
            (placed, placer.edges)
        }
        Snapshot::Graph { nodes, edges } => {
            let count = nodes.len().max(1) as f64;
            let placed = nodes
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let angle = 2.0 * PI * i as f64 / count - PI / 2.0;
                    PlacedNode {
                        id: item.id,
                        value: item.value,
                        x: angle.cos(),
                        y: angle.sin(),
                        emphasis: emphasis(item.id),
                    }
                })
                .collect();
            (placed, edges.clone())
        }
    };

    let edges = edges
        .into_iter()
        .map(|(from, to)| PlacedEdge {
            from,
            to,
            emphasis: edge_emphasis(from, to, highlighted, marked),
        })
        .collect();

    Scene {
        kind: snapshot.kind(),
        x_bounds: bounds(nodes.iter().map(|n| n.x)),
        y_bounds: bounds(nodes.iter().map(|n| n.y)),
        nodes,
        edges,
    }
}

struct TreePlacer<'a> {
    nodes: FxHashMap<ElementId, &'a TreeNodeView>,
    rank: usize,
    placed: Vec<(&'a TreeNodeView, f64, f64)>,
    edges: Vec<(ElementId, ElementId)>,
}

impl TreePlacer<'_> {
    fn place(&mut self, id: Option<ElementId>, depth: usize) {
        let Some(view) = id.and_then(|id| self.nodes.get(&id).copied()) else {
            return;
        };
        for child in [view.left, view.right].into_iter().flatten() {
            self.edges.push((view.id, child));
        }
        self.place(view.left, depth + 1);
        self.placed.push((view, self.rank as f64, depth as f64));
        self.rank += 1;
        self.place(view.right, depth + 1);
    }
}

/// An edge stands out when its endpoints are consecutive in a highlighted
/// path, or both marked
fn edge_emphasis(
    from: ElementId,
    to: ElementId,
    highlighted: &[ElementId],
    marked: &[ElementId],
) -> Emphasis {
    let on_path = highlighted
        .windows(2)
        .any(|w| (w[0] == from && w[1] == to) || (w[0] == to && w[1] == from));
    if on_path {
        Emphasis::Highlighted
    } else if marked.contains(&from) && marked.contains(&to) {
        Emphasis::Marked
    } else {
        Emphasis::Normal
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        [0.0, 0.0]
    } else {
        [min, max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{Array, BinarySearchTree, Graph, Stack};

    #[test]
    fn test_array_row() {
        let array = Array::from_values(&[4, 2, 7]);
        let ids: Vec<_> = array.items().iter().map(|i| i.id).collect();
        let scene = project_snapshot(&array.snapshot(), &[ids[1]], &[ids[0], ids[1]]);
        let xs: Vec<f64> = scene.nodes.iter().map(|n| n.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(scene.nodes[0].emphasis, Emphasis::Marked);
        assert_eq!(scene.nodes[1].emphasis, Emphasis::Highlighted);
        assert_eq!(scene.nodes[2].emphasis, Emphasis::Normal);
        assert_eq!(scene.x_bounds, [0.0, 2.0]);
    }

    #[test]
    fn test_stack_top_first() {
        let stack = Stack::from_values(&[10, 20, 30]);
        let scene = project_snapshot(&stack.snapshot(), &[], &[]);
        let top = scene.nodes.iter().find(|n| n.y == 0.0).unwrap();
        assert_eq!(top.value, 30);
    }

    #[test]
    fn test_tree_rank_and_depth() {
        let tree = BinarySearchTree::from_values(&[5, 3, 8, 1, 4]);
        let scene = project_snapshot(&tree.snapshot(), &[], &[]);
        let at = |v: i64| scene.nodes.iter().find(|n| n.value == v).unwrap();
        assert_eq!((at(5).x, at(5).y), (3.0, 0.0));
        assert_eq!((at(1).x, at(1).y), (0.0, 2.0));
        assert_eq!((at(8).x, at(8).y), (4.0, 1.0));
        assert_eq!(scene.edges.len(), 4);
    }

    #[test]
    fn test_graph_circle_and_path_edges() {
        let graph = Graph::sample();
        let path: Vec<_> = [1, 2, 3].iter().filter_map(|l| graph.node_id(*l)).collect();
        let scene = project_snapshot(&graph.snapshot(), &path, &[]);
        for node in &scene.nodes {
            let r = (node.x * node.x + node.y * node.y).sqrt();
            assert!((r - 1.0).abs() < 1e-9);
        }
        let lit = scene
            .edges
            .iter()
            .filter(|e| e.emphasis == Emphasis::Highlighted)
            .count();
        assert_eq!(lit, 2);
    }

    #[test]
    fn test_empty_snapshot() {
        let scene = project_snapshot(&Array::new().snapshot(), &[], &[]);
        assert!(scene.nodes.is_empty());
        assert_eq!(scene.x_bounds, [0.0, 0.0]);
    }
}
