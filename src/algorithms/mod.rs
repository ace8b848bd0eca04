//! Step-recording algorithm drivers
//!
//! This module turns a structure into a complete [`Run`]:
//! - [`sorting`]: bubble, quick (Lomuto) and merge sort over arrays
//! - [`searching`]: linear and binary search over arrays, sequential list search
//! - [`tree`]: BST search and depth-first traversals
//! - [`graph_search`]: breadth- and depth-first path search
//!
//! # Execution Model
//!
//! Generation is eager and pure. Each driver clones what it needs from the
//! live structure into a private working copy, mutates only that copy, and
//! records a [`Step`](crate::snapshot::Step) after every comparison or move.
//! Every run opens with a `Start` step whose snapshot equals the input and
//! closes with a `Complete` step.

pub mod graph_search;
pub mod searching;
pub mod sorting;
pub mod tree;

use crate::errors::{VizError, VizResult};
use crate::snapshot::Run;
use crate::structures::{Structure, StructureKind, Value};
use std::fmt;

/// An algorithm selection together with its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BubbleSort,
    QuickSort,
    MergeSort,
    LinearSearch { target: Value },
    BinarySearch { target: Value },
    ListSearch { target: Value },
    BstSearch { target: Value },
    InOrder,
    PreOrder,
    PostOrder,
    BreadthFirst { start: Value, end: Value },
    DepthFirst { start: Value, end: Value },
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble sort",
            Algorithm::QuickSort => "quick sort",
            Algorithm::MergeSort => "merge sort",
            Algorithm::LinearSearch { .. } => "linear search",
            Algorithm::BinarySearch { .. } => "binary search",
            Algorithm::ListSearch { .. } => "list search",
            Algorithm::BstSearch { .. } => "BST search",
            Algorithm::InOrder => "in-order traversal",
            Algorithm::PreOrder => "pre-order traversal",
            Algorithm::PostOrder => "post-order traversal",
            Algorithm::BreadthFirst { .. } => "breadth-first search",
            Algorithm::DepthFirst { .. } => "depth-first search",
        }
    }

    /// Structure kind the algorithm runs on
    pub fn target_kind(&self) -> StructureKind {
        match self {
            Algorithm::BubbleSort
            | Algorithm::QuickSort
            | Algorithm::MergeSort
            | Algorithm::LinearSearch { .. }
            | Algorithm::BinarySearch { .. } => StructureKind::Array,
            Algorithm::ListSearch { .. } => StructureKind::LinkedList,
            Algorithm::BstSearch { .. }
            | Algorithm::InOrder
            | Algorithm::PreOrder
            | Algorithm::PostOrder => StructureKind::Tree,
            Algorithm::BreadthFirst { .. } | Algorithm::DepthFirst { .. } => StructureKind::Graph,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::LinearSearch { target }
            | Algorithm::BinarySearch { target }
            | Algorithm::ListSearch { target }
            | Algorithm::BstSearch { target } => write!(f, "{} for {}", self.name(), target),
            Algorithm::BreadthFirst { start, end } | Algorithm::DepthFirst { start, end } => {
                write!(f, "{} from {} to {}", self.name(), start, end)
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// Produce the full run of `algorithm` over `structure`
///
/// The structure is only read; drivers work on private copies.
pub fn generate_run(
    algorithm: Algorithm,
    structure: &Structure,
    max_steps: usize,
) -> VizResult<Run> {
    let run = match (algorithm, structure) {
        (Algorithm::BubbleSort, Structure::Array(array)) => {
            sorting::bubble_sort(array.items(), max_steps)
        }
        (Algorithm::QuickSort, Structure::Array(array)) => {
            sorting::quick_sort(array.items(), max_steps)
        }
        (Algorithm::MergeSort, Structure::Array(array)) => {
            sorting::merge_sort(array.items(), max_steps)
        }
        (Algorithm::LinearSearch { target }, Structure::Array(array)) => {
            searching::linear_search(array.items(), target, max_steps)
        }
        (Algorithm::BinarySearch { target }, Structure::Array(array)) => {
            searching::binary_search(array.items(), target, max_steps)
        }
        (Algorithm::ListSearch { target }, Structure::LinkedList(list)) => {
            searching::list_search(list, target, max_steps)
        }
        (Algorithm::BstSearch { target }, Structure::Tree(bst)) => {
            tree::bst_search(bst, target, max_steps)
        }
        (Algorithm::InOrder | Algorithm::PreOrder | Algorithm::PostOrder, Structure::Tree(bst)) => {
            tree::traverse(bst, algorithm, max_steps)
        }
        (Algorithm::BreadthFirst { start, end }, Structure::Graph(graph)) => {
            graph_search::breadth_first(graph, start, end, max_steps)
        }
        (Algorithm::DepthFirst { start, end }, Structure::Graph(graph)) => {
            graph_search::depth_first(graph, start, end, max_steps)
        }
        _ => Err(VizError::UnsupportedAlgorithm {
            algorithm: algorithm.name(),
            kind: structure.kind(),
        }),
    }?;

    tracing::info!(
        algorithm = %algorithm,
        steps = run.len(),
        "generated run"
    );
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_structure_is_rejected() {
        let stack = Structure::sample(StructureKind::Stack);
        let err = generate_run(Algorithm::BubbleSort, &stack, 1000).unwrap_err();
        assert_eq!(
            err,
            VizError::UnsupportedAlgorithm {
                algorithm: "bubble sort",
                kind: StructureKind::Stack
            }
        );
    }

    #[test]
    fn test_target_kind_matches_dispatch() {
        let algorithms = [
            Algorithm::BubbleSort,
            Algorithm::QuickSort,
            Algorithm::MergeSort,
            Algorithm::LinearSearch { target: 8 },
            Algorithm::BinarySearch { target: 8 },
            Algorithm::ListSearch { target: 7 },
            Algorithm::BstSearch { target: 4 },
            Algorithm::InOrder,
            Algorithm::PreOrder,
            Algorithm::PostOrder,
            Algorithm::BreadthFirst { start: 1, end: 3 },
            Algorithm::DepthFirst { start: 1, end: 3 },
        ];
        for algorithm in algorithms {
            let mut structure = Structure::sample(algorithm.target_kind());
            if let Algorithm::BinarySearch { .. } = algorithm {
                structure = Structure::Array(crate::structures::Array::from_values(&[1, 2, 5, 8, 9]));
            }
            let run = generate_run(algorithm, &structure, 10_000);
            assert!(run.is_ok(), "{} failed: {:?}", algorithm, run);
        }
    }
}
