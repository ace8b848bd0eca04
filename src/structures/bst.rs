//! Binary search tree
//!
//! Keys are unique: every node's left subtree holds strictly smaller values
//! and its right subtree strictly larger ones. Deleting a node with two
//! children moves its in-order successor (value and identity) into its place.

use super::{ElementId, IdAllocator, OperationReport, StructureKind, Value};
use crate::errors::{VizError, VizResult};
use crate::snapshot::{Snapshot, TreeNodeView};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: ElementId,
    pub value: Value,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(id: ElementId, value: Value) -> Box<Self> {
        Box::new(TreeNode {
            id,
            value,
            left: None,
            right: None,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BinarySearchTree {
    root: Option<Box<TreeNode>>,
    len: usize,
    ids: IdAllocator,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build by inserting in order, skipping duplicates
    pub fn from_values(values: &[Value]) -> Self {
        let mut tree = Self::new();
        for value in values {
            let _ = tree.insert(*value);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn contains(&self, value: Value) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match value.cmp(&n.value) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Values in ascending order
    pub fn in_order(&self) -> Vec<Value> {
        fn walk(node: Option<&TreeNode>, out: &mut Vec<Value>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                out.push(n.value);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root.as_deref(), &mut out);
        out
    }

    /// Number of levels, 0 for an empty tree
    pub fn height(&self) -> usize {
        fn depth(node: Option<&TreeNode>) -> usize {
            node.map_or(0, |n| {
                1 + depth(n.left.as_deref()).max(depth(n.right.as_deref()))
            })
        }
        depth(self.root.as_deref())
    }

    pub fn snapshot(&self) -> Snapshot {
        fn collect(node: Option<&TreeNode>, out: &mut Vec<TreeNodeView>) {
            if let Some(n) = node {
                out.push(TreeNodeView {
                    id: n.id,
                    value: n.value,
                    left: n.left.as_ref().map(|c| c.id),
                    right: n.right.as_ref().map(|c| c.id),
                });
                collect(n.left.as_deref(), out);
                collect(n.right.as_deref(), out);
            }
        }
        let mut nodes = Vec::with_capacity(self.len);
        collect(self.root.as_deref(), &mut nodes);
        Snapshot::Tree {
            root: self.root.as_ref().map(|n| n.id),
            nodes,
        }
    }

    pub fn insert(&mut self, value: Value) -> VizResult<OperationReport> {
        if self.contains(value) {
            return Err(VizError::DuplicateKey { value });
        }
        let id = self.ids.next_id();
        let mut link = &mut self.root;
        let mut depth = 0;
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *link = Some(TreeNode::leaf(id, value));
        self.len += 1;
        Ok(OperationReport::new(format!(
            "Inserted {} at depth {}",
            value, depth
        )))
    }

    pub fn delete(&mut self, value: Value) -> VizResult<OperationReport> {
        if self.root.is_none() {
            return Err(VizError::EmptyStructure {
                kind: StructureKind::Tree,
            });
        }
        if !Self::delete_node(&mut self.root, value) {
            return Err(VizError::KeyNotFound { value });
        }
        self.len -= 1;
        Ok(OperationReport::with_value(
            format!("Deleted {}", value),
            value,
        ))
    }

    // Recursion depth is the tree height, which the session's capacity bounds
    fn delete_node(link: &mut Option<Box<TreeNode>>, value: Value) -> bool {
        let Some(node) = link else {
            return false;
        };
        match value.cmp(&node.value) {
            Ordering::Less => Self::delete_node(&mut node.left, value),
            Ordering::Greater => Self::delete_node(&mut node.right, value),
            Ordering::Equal => {
                match (node.left.take(), node.right.take()) {
                    (None, None) => *link = None,
                    (Some(child), None) | (None, Some(child)) => *link = Some(child),
                    (Some(left), Some(right)) => {
                        node.left = Some(left);
                        node.right = Some(right);
                        let (succ_id, succ_value) = Self::min_of(&node.right);
                        node.id = succ_id;
                        node.value = succ_value;
                        Self::delete_node(&mut node.right, succ_value);
                    }
                }
                true
            }
        }
    }

    /// Leftmost node of a non-empty subtree
    fn min_of(link: &Option<Box<TreeNode>>) -> (ElementId, Value) {
        let mut current = link.as_deref();
        let mut best = (ElementId(0), 0);
        while let Some(n) = current {
            best = (n.id, n.value);
            current = n.left.as_deref();
        }
        best
    }
}

impl Drop for BinarySearchTree {
    // Detach children before each node drops so degenerate trees don't recurse
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_strictly_increasing(values: &[Value]) -> bool {
        values.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_insert_keeps_order() {
        let tree = BinarySearchTree::from_values(&[5, 3, 8, 1, 4, 9, 7]);
        assert_eq!(tree.in_order(), vec![1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_sorted_inserts_build_a_chain() {
        let mut tree = BinarySearchTree::new();
        for value in 0..2_000 {
            tree.insert(value).unwrap();
        }
        assert_eq!(tree.len(), 2_000);
        assert_eq!(
            tree.insert(2_000).unwrap().message,
            "Inserted 2000 at depth 2000"
        );
        assert!(tree.contains(1_999));
    }

    #[test]
    fn test_deep_tree_drops_iteratively() {
        let mut tree = BinarySearchTree::new();
        let mut link = &mut tree.root;
        for value in 0..500_000 {
            let node = link.insert(TreeNode::leaf(ElementId(value as u32), value));
            link = &mut node.right;
        }
        drop(tree);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut tree = BinarySearchTree::from_values(&[5, 3]);
        assert_eq!(
            tree.insert(3).unwrap_err(),
            VizError::DuplicateKey { value: 3 }
        );
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_delete_leaf_single_and_two_children() {
        let mut tree = BinarySearchTree::from_values(&[5, 3, 8, 1, 4, 7, 9, 6]);
        tree.delete(1).unwrap();
        assert_eq!(tree.in_order(), vec![3, 4, 5, 6, 7, 8, 9]);
        tree.delete(7).unwrap();
        assert_eq!(tree.in_order(), vec![3, 4, 5, 6, 8, 9]);
        tree.delete(5).unwrap();
        assert_eq!(tree.in_order(), vec![3, 4, 6, 8, 9]);
        assert_eq!(tree.root().map(|n| n.value), Some(6));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_two_child_delete_moves_successor_identity() {
        let mut tree = BinarySearchTree::from_values(&[5, 3, 8, 7]);
        let id_of_7 = match tree.snapshot() {
            Snapshot::Tree { nodes, .. } => nodes.iter().find(|n| n.value == 7).map(|n| n.id),
            _ => None,
        };
        tree.delete(5).unwrap();
        assert_eq!(tree.root().map(|n| n.id), id_of_7);
    }

    #[test]
    fn test_missing_key_and_empty_tree() {
        let mut tree = BinarySearchTree::new();
        assert!(matches!(
            tree.delete(1),
            Err(VizError::EmptyStructure { .. })
        ));
        tree.insert(2).unwrap();
        assert_eq!(tree.delete(9).unwrap_err(), VizError::KeyNotFound { value: 9 });
    }

    #[test]
    fn test_invariant_holds_after_mixed_sequence() {
        let mut tree = BinarySearchTree::new();
        let script: [(bool, Value); 16] = [
            (true, 50),
            (true, 30),
            (true, 70),
            (true, 20),
            (true, 40),
            (true, 60),
            (true, 80),
            (false, 30),
            (true, 35),
            (false, 50),
            (true, 65),
            (false, 20),
            (false, 70),
            (true, 10),
            (false, 60),
            (true, 55),
        ];
        for (insert, value) in script {
            let result = if insert {
                tree.insert(value)
            } else {
                tree.delete(value)
            };
            assert!(result.is_ok(), "{:?} {}", result, value);
            let values = tree.in_order();
            assert!(is_strictly_increasing(&values));
            assert_eq!(values.len(), tree.len());
        }
    }
}
