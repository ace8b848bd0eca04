// Integration tests for structures, run generation and sessions

use algotty::algorithms::{generate_run, Algorithm};
use algotty::config::Settings;
use algotty::errors::{Severity, VizError};
use algotty::session::Session;
use algotty::snapshot::{Run, SearchOutcome, StepKind};
use algotty::structures::{
    Array, BinarySearchTree, Graph, Operation, Structure, StructureKind,
};

const LIMIT: usize = 100_000;

/// Every step only references elements of its own snapshot
fn assert_well_formed(run: &Run, input: &Structure) {
    let first = run.first().expect("run has steps");
    let last = run.last().expect("run has steps");
    assert_eq!(first.kind, StepKind::Start);
    assert_eq!(first.snapshot, input.snapshot());
    assert_eq!(last.kind, StepKind::Complete);
    for (i, step) in run.steps().iter().enumerate() {
        for id in step.highlighted.iter().chain(step.marked.iter()) {
            assert!(
                step.snapshot.contains(*id),
                "step {} ({}) references missing {}",
                i,
                step.kind,
                id
            );
        }
    }
}

#[test]
fn test_bubble_sort_sample() {
    let structure = Structure::Array(Array::from_values(&[5, 2, 8, 1, 9]));
    let run = generate_run(Algorithm::BubbleSort, &structure, LIMIT).expect("bubble sort failed");

    assert_well_formed(&run, &structure);
    assert_eq!(run.last().unwrap().snapshot.values(), vec![1, 2, 5, 8, 9]);
    assert_eq!(run.count(StepKind::Compare), 10);
    // The live structure is untouched
    assert_eq!(structure.snapshot().values(), vec![5, 2, 8, 1, 9]);
}

#[test]
fn test_every_sort_ends_sorted() {
    let inputs: [&[i64]; 5] = [
        &[5, 2, 8, 1, 9],
        &[3, 3, 1, 3, 2],
        &[9, 8, 7, 6, 5, 4, 3, 2, 1],
        &[1, 2, 3, 4],
        &[-4, 10, 0, -4, 7, 2],
    ];
    for values in inputs {
        let structure = Structure::Array(Array::from_values(values));
        let mut expected = values.to_vec();
        expected.sort();
        for algorithm in [Algorithm::BubbleSort, Algorithm::QuickSort, Algorithm::MergeSort] {
            let run = generate_run(algorithm, &structure, LIMIT).expect("sort failed");
            assert_well_formed(&run, &structure);
            assert_eq!(
                run.last().unwrap().snapshot.values(),
                expected,
                "{} on {:?}",
                algorithm,
                values
            );
        }
    }
}

#[test]
fn test_trivial_inputs_are_start_and_complete() {
    for values in [&[][..], &[7][..]] {
        let structure = Structure::Array(Array::from_values(values));
        for algorithm in [Algorithm::BubbleSort, Algorithm::QuickSort, Algorithm::MergeSort] {
            let run = generate_run(algorithm, &structure, LIMIT).expect("sort failed");
            assert_eq!(run.len(), 2, "{} on {:?}", algorithm, values);
        }
    }
    let empty_tree = Structure::Tree(BinarySearchTree::new());
    for algorithm in [Algorithm::InOrder, Algorithm::PreOrder, Algorithm::PostOrder] {
        let run = generate_run(algorithm, &empty_tree, LIMIT).expect("traversal failed");
        assert_eq!(run.len(), 2);
    }
}

#[test]
fn test_bst_search_path() {
    let tree = BinarySearchTree::from_values(&[5, 3, 8, 1, 4]);
    let structure = Structure::Tree(tree);
    let run = generate_run(Algorithm::BstSearch { target: 4 }, &structure, LIMIT)
        .expect("search failed");

    assert_well_formed(&run, &structure);
    let found = &run.steps()[run.len() - 2];
    assert_eq!(found.kind, StepKind::Found);
    assert_eq!(found.snapshot.values_of(&found.highlighted), vec![5, 3, 4]);
    // The final step keeps the path lit
    assert_eq!(run.last().unwrap().highlighted, found.highlighted);
}

#[test]
fn test_bst_invariant_survives_mutations() {
    let mut tree = BinarySearchTree::new();
    let script: &[(bool, i64)] = &[
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
        (false, 20),
        (true, 65),
        (false, 70),
    ];
    for &(insert, value) in script {
        if insert {
            tree.insert(value).expect("insert failed");
        } else {
            tree.delete(value).expect("delete failed");
        }
        let in_order = tree.in_order();
        assert!(
            in_order.windows(2).all(|w| w[0] < w[1]),
            "in-order broken after {} {}: {:?}",
            if insert { "insert" } else { "delete" },
            value,
            in_order
        );
    }
    assert_eq!(tree.in_order(), vec![35, 40, 60, 65, 80]);
}

#[test]
fn test_queue_scenario() {
    let mut session = Session::new(Structure::new(StructureKind::Queue), Settings::default());
    session.apply_operation(Operation::Enqueue(1)).expect("enqueue failed");
    session.apply_operation(Operation::Enqueue(2)).expect("enqueue failed");
    session.apply_operation(Operation::Dequeue).expect("dequeue failed");
    assert_eq!(session.structure().snapshot().values(), vec![2]);
    session.apply_operation(Operation::Dequeue).expect("dequeue failed");
    assert!(session.structure().snapshot().values().is_empty());

    let err = session.apply_operation(Operation::Dequeue).unwrap_err();
    assert_eq!(err.to_string(), "queue is empty");
    assert_eq!(err.severity(), Severity::Info);
    assert!(session.structure().is_empty());
}

#[test]
fn test_graph_bfs_sample() {
    let structure = Structure::Graph(Graph::sample());
    let run = generate_run(Algorithm::BreadthFirst { start: 1, end: 3 }, &structure, LIMIT)
        .expect("bfs failed");

    assert_well_formed(&run, &structure);
    assert_eq!(run.outcome(), Some(SearchOutcome::Found));
    let found = run
        .steps()
        .iter()
        .find(|s| s.kind == StepKind::Found)
        .expect("found step");
    assert_eq!(found.snapshot.values_of(&found.highlighted), vec![1, 2, 3]);
}

#[test]
fn test_searches_on_empty_are_rejected() {
    let cases = [
        (Algorithm::LinearSearch { target: 1 }, StructureKind::Array),
        (Algorithm::BinarySearch { target: 1 }, StructureKind::Array),
        (Algorithm::ListSearch { target: 1 }, StructureKind::LinkedList),
        (Algorithm::BstSearch { target: 1 }, StructureKind::Tree),
        (Algorithm::BreadthFirst { start: 1, end: 2 }, StructureKind::Graph),
        (Algorithm::DepthFirst { start: 1, end: 2 }, StructureKind::Graph),
    ];
    for (algorithm, kind) in cases {
        let err = generate_run(algorithm, &Structure::new(kind), LIMIT).unwrap_err();
        assert_eq!(err, VizError::EmptyStructure { kind }, "{}", algorithm);
    }
}

#[test]
fn test_every_algorithm_well_formed_on_samples() {
    let algorithms = [
        Algorithm::BubbleSort,
        Algorithm::QuickSort,
        Algorithm::MergeSort,
        Algorithm::LinearSearch { target: 1 },
        Algorithm::LinearSearch { target: 42 },
        Algorithm::ListSearch { target: 9 },
        Algorithm::ListSearch { target: 42 },
        Algorithm::BstSearch { target: 8 },
        Algorithm::BstSearch { target: 2 },
        Algorithm::InOrder,
        Algorithm::PreOrder,
        Algorithm::PostOrder,
        Algorithm::BreadthFirst { start: 4, end: 3 },
        Algorithm::DepthFirst { start: 1, end: 4 },
    ];
    for algorithm in algorithms {
        let structure = Structure::sample(algorithm.target_kind());
        let run = generate_run(algorithm, &structure, LIMIT).expect("generation failed");
        assert_well_formed(&run, &structure);
        assert_eq!(run.algorithm(), &algorithm);
    }
}

#[test]
fn test_step_limit_aborts_generation() {
    let structure = Structure::Array(Array::from_values(&[9, 8, 7, 6, 5, 4, 3, 2, 1]));
    let err = generate_run(Algorithm::BubbleSort, &structure, 10).unwrap_err();
    assert_eq!(err, VizError::StepLimitExceeded { limit: 10 });
    assert_eq!(err.severity(), Severity::Error);
}

#[test]
fn test_headless_transcript() {
    let mut session = Session::new(Structure::sample(StructureKind::Array), Settings::default());
    session.execute("bubble").expect("command failed");
    let lines: Vec<String> = session.run().expect("run loaded").transcript().collect();
    assert!(lines[0].starts_with("[1/"));
    assert!(lines[0].contains("START"));
    assert!(lines.last().unwrap().contains("COMPLETE"));
}
