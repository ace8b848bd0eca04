//! Undirected graph with integer node labels
//!
//! Labels are unique and double as the node values shown to the user.
//! Adjacency lists keep edge insertion order, which fixes the order searches
//! explore neighbors in.

use super::{ElementId, IdAllocator, Item, OperationReport, StructureKind, Value};
use crate::errors::{VizError, VizResult};
use crate::snapshot::Snapshot;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Item>,
    edges: Vec<(ElementId, ElementId)>,
    adjacency: FxHashMap<ElementId, Vec<ElementId>>,
    ids: IdAllocator,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes 1..=5 with edges 1-2, 1-4, 2-3, 2-5, 3-5, 4-5
    pub fn sample() -> Self {
        let mut graph = Self::new();
        for label in 1..=5 {
            let _ = graph.add_node(label);
        }
        for (a, b) in [(1, 2), (1, 4), (2, 3), (2, 5), (3, 5), (4, 5)] {
            let _ = graph.add_edge(a, b);
        }
        graph
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Item] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(ElementId, ElementId)] {
        &self.edges
    }

    pub fn node_id(&self, label: Value) -> Option<ElementId> {
        self.nodes.iter().find(|n| n.value == label).map(|n| n.id)
    }

    pub fn label_of(&self, id: ElementId) -> Option<Value> {
        self.nodes.iter().find(|n| n.id == id).map(|n| n.value)
    }

    /// Neighbors in edge insertion order
    pub fn neighbors(&self, id: ElementId) -> &[ElementId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, a: ElementId, b: ElementId) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::Graph {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Id of a labelled node, or `NodeNotFound`
    pub fn require(&self, label: Value) -> VizResult<ElementId> {
        self.node_id(label).ok_or(VizError::NodeNotFound { label })
    }

    pub fn require_non_empty(&self) -> VizResult<()> {
        if self.nodes.is_empty() {
            return Err(VizError::EmptyStructure {
                kind: StructureKind::Graph,
            });
        }
        Ok(())
    }

    pub fn add_node(&mut self, label: Value) -> VizResult<OperationReport> {
        if self.node_id(label).is_some() {
            return Err(VizError::DuplicateKey { value: label });
        }
        let item = self.ids.item(label);
        self.nodes.push(item);
        self.adjacency.insert(item.id, Vec::new());
        Ok(OperationReport::new(format!("Added node {}", label)))
    }

    pub fn remove_node(&mut self, label: Value) -> VizResult<OperationReport> {
        let id = self.require(label)?;
        self.nodes.retain(|n| n.id != id);
        self.edges.retain(|(a, b)| *a != id && *b != id);
        self.adjacency.remove(&id);
        for list in self.adjacency.values_mut() {
            list.retain(|n| *n != id);
        }
        Ok(OperationReport::with_value(
            format!("Removed node {} and its edges", label),
            label,
        ))
    }

    pub fn add_edge(&mut self, from: Value, to: Value) -> VizResult<OperationReport> {
        let a = self.require(from)?;
        let b = self.require(to)?;
        if a == b || self.has_edge(a, b) {
            return Err(VizError::InvalidEdge { from, to });
        }
        self.edges.push((a, b));
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        Ok(OperationReport::new(format!("Connected {} and {}", from, to)))
    }

    pub fn remove_edge(&mut self, from: Value, to: Value) -> VizResult<OperationReport> {
        let a = self.require(from)?;
        let b = self.require(to)?;
        if !self.has_edge(a, b) {
            return Err(VizError::EdgeNotFound { from, to });
        }
        self.edges
            .retain(|&(x, y)| !((x == a && y == b) || (x == b && y == a)));
        if let Some(list) = self.adjacency.get_mut(&a) {
            list.retain(|n| *n != b);
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            list.retain(|n| *n != a);
        }
        Ok(OperationReport::new(format!(
            "Disconnected {} and {}",
            from, to
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let g = Graph::sample();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 6);
        let one = g.node_id(1).unwrap();
        let labels: Vec<_> = g
            .neighbors(one)
            .iter()
            .filter_map(|id| g.label_of(*id))
            .collect();
        assert_eq!(labels, vec![2, 4]);
    }

    #[test]
    fn test_edge_validation() {
        let mut g = Graph::sample();
        assert_eq!(
            g.add_edge(1, 1).unwrap_err(),
            VizError::InvalidEdge { from: 1, to: 1 }
        );
        assert_eq!(
            g.add_edge(2, 1).unwrap_err(),
            VizError::InvalidEdge { from: 2, to: 1 }
        );
        assert_eq!(
            g.add_edge(1, 9).unwrap_err(),
            VizError::NodeNotFound { label: 9 }
        );
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn test_remove_node_drops_edges() {
        let mut g = Graph::sample();
        g.remove_node(2).unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        let one = g.node_id(1).unwrap();
        assert_eq!(g.neighbors(one).len(), 1);
    }

    #[test]
    fn test_remove_edge() {
        let mut g = Graph::sample();
        g.remove_edge(5, 3).unwrap();
        assert_eq!(g.edge_count(), 5);
        assert_eq!(
            g.remove_edge(3, 5).unwrap_err(),
            VizError::EdgeNotFound { from: 3, to: 5 }
        );
    }

    #[test]
    fn test_duplicate_label() {
        let mut g = Graph::new();
        g.add_node(3).unwrap();
        assert!(matches!(g.add_node(3), Err(VizError::DuplicateKey { value: 3 })));
    }
}
