//! Binary search tree drivers

use super::Algorithm;
use crate::errors::{VizError, VizResult};
use crate::snapshot::{Run, RunRecorder, Step, StepKind};
use crate::structures::bst::TreeNode;
use crate::structures::{BinarySearchTree, ElementId, StructureKind, Value};
use std::cmp::Ordering;

/// Search from the root, recording the path taken
pub fn bst_search(tree: &BinarySearchTree, target: Value, max_steps: usize) -> VizResult<Run> {
    if tree.is_empty() {
        return Err(VizError::EmptyStructure {
            kind: StructureKind::Tree,
        });
    }
    let snapshot = tree.snapshot();
    let mut rec = RunRecorder::new(Algorithm::BstSearch { target }, max_steps);
    rec.record(Step::new(
        StepKind::Start,
        snapshot.clone(),
        format!("Search for {} starting at the root", target),
        "node = root",
    ))?;

    let mut path: Vec<ElementId> = Vec::new();
    let mut node = tree.root();
    while let Some(current) = node {
        path.push(current.id);
        let (description, annotation, next) = match target.cmp(&current.value) {
            Ordering::Equal => (
                format!("{} equals {}", target, current.value),
                "if target == node.value",
                None,
            ),
            Ordering::Less => (
                format!("{} < {}, go left", target, current.value),
                "node = node.left",
                current.left.as_deref(),
            ),
            Ordering::Greater => (
                format!("{} > {}, go right", target, current.value),
                "node = node.right",
                current.right.as_deref(),
            ),
        };
        rec.record(
            Step::new(StepKind::Compare, snapshot.clone(), description, annotation)
                .highlight(path.clone())
                .mark([current.id]),
        )?;

        if current.value == target {
            rec.record(
                Step::new(
                    StepKind::Found,
                    snapshot.clone(),
                    format!("Found {} at depth {}", target, path.len() - 1),
                    "return node",
                )
                .highlight(path.clone()),
            )?;
            rec.record(
                Step::new(
                    StepKind::Complete,
                    snapshot,
                    format!("Search finished: {} found", target),
                    "return node",
                )
                .highlight(path),
            )?;
            return Ok(rec.finish());
        }
        node = next;
    }

    rec.record(
        Step::new(
            StepKind::NotFound,
            snapshot.clone(),
            format!("Reached an empty subtree; {} is not in the tree", target),
            "return null",
        )
        .highlight(path.clone()),
    )?;
    rec.record(
        Step::new(
            StepKind::Complete,
            snapshot,
            format!("Search finished: {} not found", target),
            "return null",
        )
        .highlight(path),
    )?;
    Ok(rec.finish())
}

/// In-, pre- or post-order traversal
pub fn traverse(tree: &BinarySearchTree, order: Algorithm, max_steps: usize) -> VizResult<Run> {
    let snapshot = tree.snapshot();
    let mut rec = RunRecorder::new(order, max_steps);
    let signature = match order {
        Algorithm::PreOrder => "pre_order(root)",
        Algorithm::PostOrder => "post_order(root)",
        _ => "in_order(root)",
    };
    rec.record(Step::new(
        StepKind::Start,
        snapshot.clone(),
        format!("Start {}", order),
        signature,
    ))?;

    let mut visited: Vec<ElementId> = Vec::with_capacity(tree.len());
    let mut walker = Walker {
        order,
        snapshot: &snapshot,
        rec: &mut rec,
        visited: &mut visited,
    };
    walker.walk(tree.root())?;

    let values = snapshot.values_of(&visited);
    rec.record(
        Step::new(
            StepKind::Complete,
            snapshot.clone(),
            format!("{} order: {:?}", order.name(), values),
            "return",
        )
        .mark(visited),
    )?;
    Ok(rec.finish())
}

struct Walker<'a> {
    order: Algorithm,
    snapshot: &'a crate::snapshot::Snapshot,
    rec: &'a mut RunRecorder,
    visited: &'a mut Vec<ElementId>,
}

impl Walker<'_> {
    fn walk(&mut self, node: Option<&TreeNode>) -> VizResult<()> {
        let Some(node) = node else {
            return Ok(());
        };
        match self.order {
            Algorithm::PreOrder => {
                self.visit(node)?;
                self.walk(node.left.as_deref())?;
                self.walk(node.right.as_deref())
            }
            Algorithm::PostOrder => {
                self.walk(node.left.as_deref())?;
                self.walk(node.right.as_deref())?;
                self.visit(node)
            }
            _ => {
                self.walk(node.left.as_deref())?;
                self.visit(node)?;
                self.walk(node.right.as_deref())
            }
        }
    }

    fn visit(&mut self, node: &TreeNode) -> VizResult<()> {
        self.visited.push(node.id);
        self.rec.record(
            Step::new(
                StepKind::Visit,
                self.snapshot.clone(),
                format!("Visit {}", node.value),
                "visit(node)",
            )
            .highlight([node.id])
            .mark(self.visited.iter().copied()),
        )
    }
}
